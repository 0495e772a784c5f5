//! A tree-walking Brainfuck interpreter.
//!
//! Source text is parsed once into a tree of instruction nodes, with runs
//! of identical `+`/`-` or `>`/`<` symbols collapsed into a single node
//! carrying a signed count. The tree is then executed by structural
//! recursion against a byte tape that grows on demand in both directions.
//!
//! Features and behaviors:
//! - Memory tape of 200 zeroed cells to start, cursor centered at 100;
//!   the tape grows by 200-cell chunks whenever the cursor would leave it,
//!   so pointer moves never go out of bounds.
//! - Cell arithmetic wraps modulo 256 in both directions.
//! - Input `,` reads a single byte from the input stream; on end of input
//!   the current cell is set to 255.
//! - Output `.` writes the byte at the current cell (no newline).
//! - Loops `[]` nest; a `[` left open at end of stream is a parse error
//!   and nothing is executed.
//! - Any non-instruction character is a comment and is skipped.
//!
//! Quick start:
//!
//! ```
//! use bft::{Interpreter, parse};
//!
//! let program = parse("++>+++[<+>-].").expect("balanced brackets");
//! let mut output = Vec::new();
//! let mut interp = Interpreter::new(&b""[..], &mut output);
//! interp.run(&program).expect("program should run");
//! assert_eq!(output, vec![0]);
//! ```

pub mod ast;
pub mod diagnostics;
pub mod interpreter;
pub mod parser;
pub mod tape;

pub use ast::Node;
pub use interpreter::Interpreter;
pub use parser::parse;
pub use tape::Tape;

/// Errors that can occur while parsing or executing a program.
///
/// All of them are fatal: the CLI reports the error on stderr and exits
/// non-zero; nothing is retried.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A `[` was still open when the source stream ended. `offset` is the
    /// char index of the innermost unclosed bracket.
    #[error("a loop is opened but never closed (offset {offset})")]
    UnterminatedLoop { offset: usize },

    /// An underlying I/O error from the program's input or output stream.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A broken invariant inside the interpreter itself.
    #[error("internal error: {0}")]
    Internal(&'static str),
}

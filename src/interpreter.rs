//! Tree-walking evaluator.
//!
//! Executes a parsed [`Node`] tree by structural recursion, mutating a
//! fresh [`Tape`] and performing the program's byte I/O. The evaluator is
//! generic over its input and output streams so programs can run against
//! stdin/stdout in the binary and against in-memory buffers in tests.

use std::io::{Read, Write};

use crate::Error;
use crate::ast::Node;
use crate::tape::Tape;

/// Executes a program against a fresh [`Tape`].
///
/// Behaviors:
/// - `,` blocks for exactly one byte of input; on end of input the current
///   cell is set to 255 (the EOF sentinel truncated to a byte).
/// - `.` writes the current cell as one byte, unbuffered by this type;
///   callers own flushing.
/// - `[` tests the current cell before every iteration, including the
///   first, so a loop over a zero cell runs zero times.
pub struct Interpreter<R, W> {
    tape: Tape,
    input: R,
    output: W,
}

impl<R: Read, W: Write> Interpreter<R, W> {
    /// Build an evaluator over the given streams with a fresh tape.
    pub fn new(input: R, output: W) -> Self {
        Self {
            tape: Tape::new(),
            input,
            output,
        }
    }

    /// Run a program to completion.
    pub fn run(&mut self, program: &Node) -> Result<(), Error> {
        self.step(program)
    }

    fn step(&mut self, node: &Node) -> Result<(), Error> {
        match node {
            Node::Root(children) => {
                for child in children {
                    self.step(child)?;
                }
            }
            Node::Loop(children) => {
                while self.tape.get() != 0 {
                    for child in children {
                        self.step(child)?;
                    }
                }
            }
            Node::Increment(count) => self.tape.increment(*count),
            Node::Move(count) => self.tape.move_by(*count),
            Node::Input => {
                let mut buf = [0u8; 1];
                match self.input.read(&mut buf) {
                    Ok(0) => self.tape.set(255), // end of input
                    Ok(_) => self.tape.set(buf[0]),
                    Err(e) => return Err(Error::Io(e)),
                }
            }
            Node::Output => self.output.write_all(&[self.tape.get()])?,
            Node::Noop => {}
        }
        Ok(())
    }

    /// The tape after (or during) a run; used by tests and tooling.
    pub fn tape(&self) -> &Tape {
        &self.tape
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse;
    use std::io;

    fn run(source: &str, input: &[u8]) -> (Vec<u8>, Tape) {
        let program = parse(source).unwrap();
        let mut interp = Interpreter::new(input, Vec::new());
        interp.run(&program).unwrap();
        let Interpreter { tape, output, .. } = interp;
        (output, tape)
    }

    #[test]
    fn increments_then_outputs_the_cell() {
        let (output, _) = run("++.", b"");
        assert_eq!(output, vec![2]);
    }

    #[test]
    fn echoes_one_input_byte() {
        let (output, _) = run(",.", b"A");
        assert_eq!(output, b"A");
    }

    #[test]
    fn eof_on_input_stores_255() {
        let (output, _) = run(",.", b"");
        assert_eq!(output, vec![255]);
    }

    #[test]
    fn loop_over_zero_cell_runs_zero_times() {
        let (output, tape) = run("[.+]", b"");
        assert!(output.is_empty());
        assert_eq!(tape.get(), 0);
    }

    #[test]
    fn countdown_loop_runs_exactly_n_times() {
        // Five iterations, one '.' each, cell ends at zero.
        let (output, tape) = run("+++++[.-]", b"");
        assert_eq!(output, vec![5, 4, 3, 2, 1]);
        assert_eq!(tape.get(), 0);
    }

    #[test]
    fn single_pass_zeroing_loop() {
        let (output, tape) = run("+[-]", b"");
        assert!(output.is_empty());
        assert_eq!(tape.get(), 0);
    }

    #[test]
    fn moves_operate_on_distinct_cells() {
        let (output, _) = run("++>+++.<.", b"");
        assert_eq!(output, vec![3, 2]);
    }

    #[test]
    fn wrapping_decrement_below_zero() {
        let (output, _) = run("-.", b"");
        assert_eq!(output, vec![255]);
    }

    #[test]
    fn hello_world() {
        let source = "++++++++++[>+++++++>++++++++++>+++>+<<<<-]\
                      >++.>+.+++++++..+++.>++.<<+++++++++++++++.>.+++.\
                      ------.--------.>+.>.";
        let (output, _) = run(source, b"");
        assert_eq!(output, b"Hello World!\n");
    }

    #[test]
    fn write_error_propagates() {
        struct Broken;
        impl io::Write for Broken {
            fn write(&mut self, _: &[u8]) -> io::Result<usize> {
                Err(io::Error::other("sink is closed"))
            }
            fn flush(&mut self) -> io::Result<()> {
                Ok(())
            }
        }
        let program = parse("+.").unwrap();
        let mut interp = Interpreter::new(&b""[..], Broken);
        assert!(matches!(interp.run(&program), Err(Error::Io(_))));
    }
}

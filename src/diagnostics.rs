//! Stderr error reporting for the CLI.

use std::io::{self, Write};

use crate::Error;

/// Print an [`Error`] to stderr, prefixed with the program name.
///
/// Syntax errors get a caret context window pointing at the offending
/// bracket in the source; other errors print as a single line.
pub fn report(program: &str, source: &str, err: &Error) {
    match err {
        Error::UnterminatedLoop { offset } => {
            let msg = format!("{program}: syntax error: a loop is opened but never closed");
            print_error_with_context(&msg, source, *offset);
        }
        Error::Io(source_err) => {
            eprintln!("{program}: I/O error: {source_err}");
        }
        Error::Internal(detail) => {
            eprintln!("{program}: internal error: {detail}");
        }
    }
    let _ = io::stderr().flush();
}

/// Print a concise error with a char offset and a caret context window,
/// working with UTF-8 by slicing using char indices.
fn print_error_with_context(prefix: &str, source: &str, pos: usize) {
    eprintln!("{prefix} at offset {pos}");

    // Show a short window around the position for context
    const WINDOW_CHARS: usize = 32;

    let total_chars = source.chars().count();
    let start_char = pos.saturating_sub(WINDOW_CHARS);
    let end_char = (pos + WINDOW_CHARS + 1).min(total_chars);

    let start_byte = char_to_byte_index(source, start_char);
    let end_byte = char_to_byte_index(source, end_char);
    let slice = &source[start_byte..end_byte];

    // Newlines in the window would misplace the caret.
    let flat: String = slice
        .chars()
        .map(|c| if c == '\n' || c == '\r' { ' ' } else { c })
        .collect();
    eprintln!("  {flat}");

    // Caret under the exact position
    let caret_offset_chars = pos.saturating_sub(start_char);
    let underline = " ".repeat(caret_offset_chars);
    eprintln!("  {underline}^");
}

/// Convert a char index into a byte index in the given UTF-8 string.
fn char_to_byte_index(s: &str, char_idx: usize) -> usize {
    s.char_indices()
        .nth(char_idx)
        .map(|(byte_idx, _)| byte_idx)
        .unwrap_or(s.len())
}

//! The read-eval-print loop.
//!
//! Blocking, single-threaded, line-oriented. Every command failure is
//! converted to its user-facing message here; nothing a user types can
//! crash the process. The loop ends on a farewell command or on end of
//! input, and the caller is responsible for flushing the book to
//! storage afterwards.

use crate::book::AddressBook;
use crate::commands::Command;
use std::io::{self, BufRead, Write};
use tracing::debug;

const PROMPT: &str = "Enter command: ";

/// Run the interpreter over arbitrary input/output streams until a
/// farewell command or end of input.
///
/// # Errors
///
/// Only I/O errors on the streams themselves are propagated.
pub fn run<R, W>(
    mut input: R,
    mut output: W,
    book: &mut AddressBook,
    page_size: usize,
) -> io::Result<()>
where
    R: BufRead,
    W: Write,
{
    loop {
        write!(output, "{}", PROMPT)?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            debug!("end of input, leaving the loop");
            writeln!(output, "Good bye!")?;
            return Ok(());
        }

        match Command::parse(&line) {
            Ok(command) => {
                match command.execute(book, page_size) {
                    Ok(reply) => writeln!(output, "{}", reply)?,
                    Err(error) => writeln!(output, "{}", error)?,
                }
                if command.is_farewell() {
                    return Ok(());
                }
            }
            Err(error) => writeln!(output, "{}", error)?,
        }
    }
}

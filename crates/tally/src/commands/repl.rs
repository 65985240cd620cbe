//! The `repl` command: evaluate stdin line by line.

use std::io::{BufRead, Write};

use tally_diagnostic::emitter::DiagnosticEmitter;

use super::{trim_record_separator, Session};
use crate::CliError;

/// Read lines from `input` until end of input, printing the accumulator
/// after each one.
///
/// A final line without a record separator is still evaluated. Bytes that
/// are not UTF-8 are replaced rather than ending the session, so such a line
/// is rejected like any other unrecognized input.
pub fn run_repl<R, W, E>(mut input: R, output: &mut W, session: &mut Session<E>) -> Result<(), CliError>
where
    R: BufRead,
    W: Write,
    E: DiagnosticEmitter,
{
    let mut buffer = Vec::new();
    loop {
        buffer.clear();
        if input.read_until(b'\n', &mut buffer)? == 0 {
            break;
        }
        let line = String::from_utf8_lossy(&buffer);
        let value = session.feed(trim_record_separator(&line));
        writeln!(output, "{value}")?;
        output.flush()?;
    }
    session.finish();
    Ok(())
}

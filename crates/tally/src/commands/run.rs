//! The `run` command: evaluate every line of a file.

use std::io::Write;
use std::path::Path;

use tally_diagnostic::emitter::DiagnosticEmitter;

use super::{trim_record_separator, Session};
use crate::CliError;

/// Evaluate the file at `path`.
///
/// Prints the accumulator after every line, or only once at the end when
/// `final_only` is set. An empty file with `final_only` prints the initial
/// value. Invalid UTF-8 is replaced per line, as in the REPL.
pub fn run_file<W, E>(
    path: &Path,
    output: &mut W,
    session: &mut Session<E>,
    final_only: bool,
) -> Result<(), CliError>
where
    W: Write,
    E: DiagnosticEmitter,
{
    let source = std::fs::read(path).map_err(|source| CliError::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;

    for record in source.split_inclusive(|&b| b == b'\n') {
        let line = String::from_utf8_lossy(record);
        let value = session.feed(trim_record_separator(&line));
        if !final_only {
            writeln!(output, "{value}")?;
        }
    }
    if final_only {
        writeln!(output, "{}", session.value())?;
    }
    output.flush()?;
    session.finish();
    Ok(())
}

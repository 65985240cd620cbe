//! The `explain` command: display documentation for diagnostic codes.

use std::io::Write;

use tally_diagnostic::{ErrorCode, ErrorDocs};

use crate::CliError;

/// Write the documentation for `code_str` (e.g. `E1001`, case-insensitive).
pub fn explain_error<W: Write>(code_str: &str, output: &mut W) -> Result<(), CliError> {
    let code = code_str.parse::<ErrorCode>()?;
    let doc = ErrorDocs::get(code).ok_or(CliError::Undocumented(code))?;
    writeln!(output, "{doc}")?;
    Ok(())
}

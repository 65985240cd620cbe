//! Command handlers for the `tally` CLI.
//!
//! `main` parses the command name; each handler here takes its writers as
//! parameters so the commands can be driven from tests.

mod explain;
mod repl;
mod run;
mod session;

pub use explain::explain_error;
pub use repl::run_repl;
pub use run::run_file;
pub use session::{trim_record_separator, Session};

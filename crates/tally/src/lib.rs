//! The `tally` command-line calculator.
//!
//! Reads lines, applies each one to a running accumulator with
//! [`tally_eval::evaluate_line_with`], and prints the accumulator after every
//! line. Diagnostics for rejected lines are rendered on stderr.

pub mod commands;
mod config;
mod error;
mod tracing_setup;

pub use config::{ConfigError, ReplConfig};
pub use error::CliError;
pub use tracing_setup::init_tracing;

//! Diagnostic Emitters
//!
//! Renders diagnostics for output. Every diagnostic belongs to a single
//! input line, so emitters receive that line alongside the diagnostic and
//! can underline the offending bytes.

mod terminal;

pub use terminal::{ColorMode, TerminalEmitter};

use crate::Diagnostic;

/// Trait for emitting diagnostics in various formats.
pub trait DiagnosticEmitter {
    /// Emit a single diagnostic raised while evaluating `line`.
    fn emit(&mut self, diagnostic: &Diagnostic, line: &str);

    /// Flush any buffered output.
    fn flush(&mut self);

    /// Emit a summary of errors/warnings.
    fn emit_summary(&mut self, error_count: usize, warning_count: usize);
}

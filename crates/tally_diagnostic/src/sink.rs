//! Destinations for diagnostics.
//!
//! The evaluator reports every diagnostic through a [`DiagnosticSink`] and
//! never through its return value, so a caller can inspect the accumulator
//! and the diagnostics independently.

use crate::{Diagnostic, ErrorCode, Severity};

/// Receives diagnostics as they are produced.
pub trait DiagnosticSink {
    fn report(&mut self, diagnostic: Diagnostic);
}

/// Collects diagnostics in the order they were reported.
///
/// # Example
///
/// ```text
/// let mut queue = DiagnosticQueue::new();
/// let value = evaluate_line_with(10.0, "/0", &mut queue);
/// assert_eq!(queue.codes(), [ErrorCode::E1001]);
/// ```
#[derive(Clone, Debug, Default)]
pub struct DiagnosticQueue {
    diagnostics: Vec<Diagnostic>,
    error_count: usize,
    warning_count: usize,
}

impl DiagnosticQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    pub fn error_count(&self) -> usize {
        self.error_count
    }

    pub fn warning_count(&self) -> usize {
        self.warning_count
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Codes of all queued diagnostics, in report order.
    pub fn codes(&self) -> Vec<ErrorCode> {
        self.diagnostics.iter().map(|d| d.code).collect()
    }

    /// Remove and return all queued diagnostics, resetting the counters.
    pub fn take(&mut self) -> Vec<Diagnostic> {
        self.error_count = 0;
        self.warning_count = 0;
        std::mem::take(&mut self.diagnostics)
    }
}

impl DiagnosticSink for DiagnosticQueue {
    fn report(&mut self, diagnostic: Diagnostic) {
        match diagnostic.severity {
            Severity::Error => self.error_count += 1,
            Severity::Warning => self.warning_count += 1,
        }
        self.diagnostics.push(diagnostic);
    }
}

/// Emits each diagnostic as a structured `tracing` event.
///
/// Errors are logged at `ERROR`, warnings at `WARN`. Fields: `code`,
/// `kind` (the code's name), `span`, and the message.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn report(&mut self, diagnostic: Diagnostic) {
        let code = diagnostic.code.as_str();
        let kind = diagnostic.code.name();
        let span = diagnostic.culprit_span().unwrap_or_default();
        match diagnostic.severity {
            Severity::Error => {
                tracing::error!(code, kind, ?span, "{}", diagnostic.message);
            }
            Severity::Warning => {
                tracing::warn!(code, kind, ?span, "{}", diagnostic.message);
            }
        }
    }
}

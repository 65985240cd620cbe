//! One accumulator, many lines.

use tally_diagnostic::emitter::DiagnosticEmitter;
use tally_diagnostic::{DiagnosticQueue, DiagnosticSink, TracingSink};
use tally_eval::evaluate_line_with;
use tracing::debug;

/// Strip one trailing record separator (`\n` or `\r\n`).
pub fn trim_record_separator(line: &str) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}

/// Evaluates lines against a single accumulator.
///
/// Every diagnostic is logged through [`TracingSink`] and, unless the
/// session is quiet (`emitter` is `None`), rendered by the emitter together
/// with the line it belongs to.
pub struct Session<E: DiagnosticEmitter> {
    value: f64,
    emitter: Option<E>,
    queue: DiagnosticQueue,
    lines: usize,
    errors: usize,
    warnings: usize,
}

impl<E: DiagnosticEmitter> Session<E> {
    pub fn new(initial: f64, emitter: Option<E>) -> Self {
        Session {
            value: initial,
            emitter,
            queue: DiagnosticQueue::new(),
            lines: 0,
            errors: 0,
            warnings: 0,
        }
    }

    /// Current accumulator.
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Number of error diagnostics reported so far.
    pub fn error_count(&self) -> usize {
        self.errors
    }

    /// Number of warning diagnostics reported so far.
    pub fn warning_count(&self) -> usize {
        self.warnings
    }

    /// Apply one line (record separator already removed) and return the new
    /// accumulator.
    pub fn feed(&mut self, line: &str) -> f64 {
        self.lines += 1;
        self.value = evaluate_line_with(self.value, line, &mut self.queue);

        self.errors += self.queue.error_count();
        self.warnings += self.queue.warning_count();
        for diagnostic in self.queue.take() {
            if let Some(emitter) = self.emitter.as_mut() {
                emitter.emit(&diagnostic, line);
            }
            TracingSink.report(diagnostic);
        }
        if let Some(emitter) = self.emitter.as_mut() {
            emitter.flush();
        }

        self.value
    }

    /// Emit the error/warning summary, if anything was reported.
    pub fn finish(&mut self) {
        debug!(
            lines = self.lines,
            errors = self.errors,
            warnings = self.warnings,
            value = self.value,
            "session finished"
        );
        if let Some(emitter) = self.emitter.as_mut() {
            emitter.emit_summary(self.errors, self.warnings);
            emitter.flush();
        }
    }

    /// Consume the session, returning its emitter.
    pub fn into_emitter(self) -> Option<E> {
        self.emitter
    }
}

#[cfg(test)]
mod tests;

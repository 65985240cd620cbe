//! Line processor: applies one input line to the accumulator.
//!
//! A line is an operator followed by its arguments:
//!
//! - unary (`_`, `SQRT`): nothing may follow the operator
//! - binary (`+5`, `7`): exactly one literal
//! - fold (`(+) 1 2 3`): the operator is applied once per space-separated
//!   literal, left to right
//!
//! Line errors (E0xxx) discard the whole line, including fold steps already
//! computed. Guarded arithmetic (E1xxx) only skips the failing step, except
//! remainder by zero, which discards the line.

use tally_diagnostic::{Diagnostic, DiagnosticSink, Span, TracingSink};
use tally_scan::{
    is_fold_line, scan_decimal, scan_op, Arity, Cursor, LineBuffer, Op, ScanMode,
};
use tracing::{debug, trace};

use crate::errors::{
    malformed_literal, missing_argument, remainder_by_zero, unexpected_suffix,
    unrecognized_operator, EvalResult,
};
use crate::{evaluate_binary, evaluate_unary};

/// Apply `line` to `current` and return the new accumulator.
///
/// Diagnostics are emitted as `tracing` events.
pub fn evaluate_line(current: f64, line: &str) -> f64 {
    evaluate_line_with(current, line, &mut TracingSink)
}

/// Apply `line` to `current`, reporting diagnostics to `sink`.
///
/// The result is always `current` or a finite value derived from it.
pub fn evaluate_line_with(current: f64, line: &str, sink: &mut dyn DiagnosticSink) -> f64 {
    let buffer = LineBuffer::new(line);
    let mode = if is_fold_line(&buffer) {
        ScanMode::Fold
    } else {
        ScanMode::Single
    };
    let mut processor = LineProcessor {
        buffer: &buffer,
        mode,
        sink,
    };
    processor.run(current)
}

struct LineProcessor<'buf, 'sink> {
    buffer: &'buf LineBuffer,
    mode: ScanMode,
    sink: &'sink mut dyn DiagnosticSink,
}

impl<'buf> LineProcessor<'buf, '_> {
    fn run(&mut self, current: f64) -> f64 {
        let buffer = self.buffer;
        let mut cursor = buffer.cursor();
        let token = scan_op(&mut cursor);
        trace!(op = %token.op, form = ?token.form, len = token.len, mode = ?self.mode, "operator");

        let outcome = match token.op.arity() {
            Arity::None => Err(unrecognized_operator(buffer.as_str(), Span::new(0, 1))),
            Arity::Unary => self.apply_unary(token.op, cursor, current),
            Arity::Binary => self.apply_binary(token.op, cursor, current),
        };

        match outcome {
            Ok(value) => {
                debug!(line = buffer.as_str(), value, "line applied");
                value
            }
            Err(diagnostic) => {
                debug!(line = buffer.as_str(), code = %diagnostic.code, "line discarded");
                self.sink.report(diagnostic);
                current
            }
        }
    }

    /// A refused unary step keeps `current`; only a suffix rejects the line.
    fn apply_unary(&mut self, op: Op, cursor: Cursor<'buf>, current: f64) -> EvalResult {
        if !cursor.is_eol() {
            let suffix = Span::new(cursor.pos(), cursor.line_len());
            return Err(unexpected_suffix(op, suffix));
        }
        match evaluate_unary(op, current) {
            Ok(value) => Ok(value),
            Err(diagnostic) => {
                let op_span = Span::new(0, cursor.pos());
                self.report_skipped(diagnostic.at(op_span, ""), current);
                Ok(current)
            }
        }
    }

    fn apply_binary(&mut self, op: Op, mut cursor: Cursor<'buf>, current: f64) -> EvalResult {
        let op_span = Span::new(0, cursor.pos());
        if cursor.is_eol() {
            return Err(missing_argument(op, Span::point(cursor.pos())));
        }

        let mut value = current;
        let mut applied = 0usize;
        loop {
            cursor.eat_whitespace();
            if applied > 0 && cursor.is_eol() {
                break;
            }

            let start = cursor;
            let argument = match scan_decimal(&mut cursor, self.mode) {
                Ok(_) if cursor.pos() == start.pos() => {
                    return Err(missing_argument(op, Span::point(start.pos())));
                }
                Ok(argument) => argument,
                Err(error) => return Err(malformed_literal(self.literal_text(start), error)),
            };
            applied += 1;
            let arg_span = Span::new(start.pos(), cursor.pos());
            trace!(argument, index = applied, "argument");

            if op == Op::Rem && argument == 0.0 {
                return Err(remainder_by_zero().at(arg_span, "this argument is zero"));
            }

            match evaluate_binary(op, value, argument) {
                Ok(result) => value = result,
                Err(diagnostic) => {
                    let mut diagnostic = diagnostic.at(arg_span, "");
                    if !op_span.is_empty() {
                        diagnostic = diagnostic.with_context(op_span, op.name());
                    }
                    self.report_skipped(diagnostic, value);
                }
            }

            if self.mode == ScanMode::Single {
                break;
            }
        }
        Ok(value)
    }

    /// The token a literal error belongs to: the rest of the line, or in
    /// fold mode only up to the next space.
    fn literal_text(&self, start: Cursor<'buf>) -> &'buf str {
        match self.mode {
            ScanMode::Single => start.rest(),
            ScanMode::Fold => start.slice(start.pos(), start.token_end()),
        }
    }

    fn report_skipped(&mut self, diagnostic: Diagnostic, kept: f64) {
        trace!(code = %diagnostic.code, kept, "step skipped");
        self.sink.report(diagnostic);
    }
}

//! Centralized diagnostic constructors for the evaluator.
//!
//! Every message the evaluator can produce is built here, so wording stays
//! consistent between the line processor and the operator functions.

use tally_diagnostic::{Diagnostic, ErrorCode, Span};
use tally_scan::{LiteralError, Op, MAX_DECIMAL_DIGITS};

/// Result of applying one operator: the new value, or why it was refused.
pub type EvalResult = Result<f64, Diagnostic>;

// Line Errors

/// The line does not start with a known operator.
#[cold]
pub fn unrecognized_operator(line: &str, span: Span) -> Diagnostic {
    let diag = Diagnostic::new(ErrorCode::E0001);
    if line.is_empty() {
        return diag.with_message("empty line");
    }
    diag.with_message("unrecognized operator")
        .at(span, "expected a digit, `+ - * / % ^ _`, `SQRT` or `(op)`")
}

/// A binary operator with nothing to apply it to.
#[cold]
pub fn missing_argument(op: Op, span: Span) -> Diagnostic {
    Diagnostic::new(ErrorCode::E0002)
        .with_message(format!("missing argument for {op}"))
        .at(span, "expected a number")
}

/// An argument that is not a valid decimal literal.
///
/// `text` is the whole offending token; the label points at the byte where
/// scanning stopped.
#[cold]
pub fn malformed_literal(text: &str, error: LiteralError) -> Diagnostic {
    Diagnostic::new(ErrorCode::E0003)
        .with_message(format!("malformed literal `{text}`"))
        .at(Span::new(error.pos, error.pos + 1), error.kind.to_string())
        .with_note(format!(
            "a literal is at most {MAX_DECIMAL_DIGITS} digits with at most one `.`"
        ))
}

/// Trailing text after `_` or `SQRT`.
#[cold]
pub fn unexpected_suffix(op: Op, span: Span) -> Diagnostic {
    Diagnostic::new(ErrorCode::E0004)
        .with_message(format!("unexpected text after {op}"))
        .at(span, format!("`{}` takes no argument", op.symbol()))
}

// Arithmetic Errors

#[cold]
pub fn division_by_zero() -> Diagnostic {
    Diagnostic::new(ErrorCode::E1001)
        .with_message("division by zero")
        .with_note("the division is skipped")
}

#[cold]
pub fn remainder_by_zero() -> Diagnostic {
    Diagnostic::new(ErrorCode::E1002).with_message("remainder by zero")
}

#[cold]
pub fn invalid_sqrt_domain(value: f64) -> Diagnostic {
    Diagnostic::new(ErrorCode::E1003)
        .with_message(format!("square root of {value}"))
        .with_note("only positive values have a square root here")
}

#[cold]
pub fn non_finite_result(op: Op) -> Diagnostic {
    Diagnostic::new(ErrorCode::E1004)
        .with_message(format!("{op} produced a non-finite result"))
        .with_note("the accumulator keeps its previous value")
}

#[cfg(test)]
mod tests;

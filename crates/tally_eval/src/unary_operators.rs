//! Unary operator implementations for the evaluator.

use tally_scan::Op;

use crate::errors::{invalid_sqrt_domain, EvalResult};

/// Apply a unary operator to `value`.
///
/// `SQRT` is only defined for positive values; zero, negatives and NaN are
/// refused. Operators that are not unary leave `value` unchanged.
pub fn evaluate_unary(op: Op, value: f64) -> EvalResult {
    match op {
        Op::Neg => Ok(-value),
        Op::Sqrt if value > 0.0 => Ok(value.sqrt()),
        Op::Sqrt => Err(invalid_sqrt_domain(value)),
        _ => Ok(value),
    }
}

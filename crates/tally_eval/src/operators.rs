//! Binary operator implementations for the evaluator.
//!
//! Each binary operator combines the accumulator (`left`) with one argument
//! (`right`). Division and remainder refuse a zero divisor, and no operator
//! is allowed to produce a non-finite value: in both cases the caller keeps
//! `left`.

use tally_scan::Op;

use crate::errors::{division_by_zero, non_finite_result, remainder_by_zero, EvalResult};

/// Accept `result` only if it is finite.
#[inline]
fn checked_float(result: f64, op: Op) -> EvalResult {
    if result.is_finite() {
        Ok(result)
    } else {
        Err(non_finite_result(op))
    }
}

/// Apply a binary operator to `left` and `right`.
///
/// Remainder follows C `fmod`: the result takes the sign of `left`.
/// Operators that take no argument leave `left` unchanged.
pub fn evaluate_binary(op: Op, left: f64, right: f64) -> EvalResult {
    let result = match op {
        Op::Set => right,
        Op::Add => left + right,
        Op::Sub => left - right,
        Op::Mul => left * right,
        Op::Div if right == 0.0 => return Err(division_by_zero()),
        Op::Div => left / right,
        Op::Rem if right == 0.0 => return Err(remainder_by_zero()),
        Op::Rem => left % right,
        Op::Pow => left.powf(right),
        Op::Neg | Op::Sqrt | Op::Invalid => left,
    };
    checked_float(result, op)
}

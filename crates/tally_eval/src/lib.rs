//! Evaluator for the tally calculator.
//!
//! [`evaluate_line`] applies one input line to the accumulator and returns
//! the new value. It never fails: a line that cannot be applied leaves the
//! accumulator unchanged and reports a diagnostic instead.
//!
//! ```text
//! 10        -> 10
//! +5        -> 15
//! (*) 2 3   -> 90
//! SQRT      -> 9.486832980505138
//! /0        -> 9.486832980505138, warning[E1001]
//! ```
//!
//! The accumulator is owned by the caller and threaded through each call;
//! nothing is retained between lines.

pub mod errors;
mod line;
mod operators;
mod unary_operators;

pub use errors::EvalResult;
pub use line::{evaluate_line, evaluate_line_with};
pub use operators::evaluate_binary;
pub use unary_operators::evaluate_unary;

//! Operator identities and their arity.

use std::fmt;

/// A line operator.
///
/// The set is closed: binary operators consume the accumulator and one
/// argument, unary operators consume only the accumulator, and `Invalid`
/// marks a line whose operator could not be recognized.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Op {
    /// Replace the accumulator with the argument.
    Set,
    Add,
    Sub,
    Mul,
    Div,
    /// Floating-point remainder (`fmod`).
    Rem,
    Pow,
    /// Negate the accumulator.
    Neg,
    /// Square root of the accumulator.
    Sqrt,
    /// Unrecognized operator.
    Invalid,
}

/// How many operands an operator consumes.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Arity {
    /// The `Invalid` sentinel.
    None,
    /// Accumulator only.
    Unary,
    /// Accumulator plus one argument per application.
    Binary,
}

impl Op {
    pub fn arity(self) -> Arity {
        match self {
            Op::Set | Op::Add | Op::Sub | Op::Mul | Op::Div | Op::Rem | Op::Pow => Arity::Binary,
            Op::Neg | Op::Sqrt => Arity::Unary,
            Op::Invalid => Arity::None,
        }
    }

    /// Source spelling of the operator. `Set` has none (it is implied by a
    /// leading digit).
    pub fn symbol(self) -> &'static str {
        match self {
            Op::Set | Op::Invalid => "",
            Op::Add => "+",
            Op::Sub => "-",
            Op::Mul => "*",
            Op::Div => "/",
            Op::Rem => "%",
            Op::Pow => "^",
            Op::Neg => "_",
            Op::Sqrt => "SQRT",
        }
    }

    /// Human-readable operation name for diagnostics.
    pub fn name(self) -> &'static str {
        match self {
            Op::Set => "set",
            Op::Add => "addition",
            Op::Sub => "subtraction",
            Op::Mul => "multiplication",
            Op::Div => "division",
            Op::Rem => "remainder",
            Op::Pow => "exponentiation",
            Op::Neg => "negation",
            Op::Sqrt => "square root",
            Op::Invalid => "invalid operation",
        }
    }
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// How an operator was written on the line.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum OpForm {
    /// A leading digit, which implies `Set`.
    Digit,
    /// A single symbol: `+ - * / % ^ _`.
    Symbol,
    /// The `SQRT` keyword.
    Keyword,
    /// A symbol in parentheses, e.g. `(+)`.
    Parenthesized,
    /// Nothing recognizable.
    Unknown,
}

/// Result of scanning the operator at the start of a line.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct OpToken {
    pub op: Op,
    pub form: OpForm,
    /// Bytes consumed; the argument text starts at this offset.
    pub len: u32,
}

impl OpToken {
    /// Token for an unrecognized operator. Consumes nothing.
    pub const INVALID: OpToken = OpToken {
        op: Op::Invalid,
        form: OpForm::Unknown,
        len: 0,
    };
}

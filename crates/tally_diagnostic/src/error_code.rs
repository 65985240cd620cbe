//! Error codes for all calculator diagnostics.
//!
//! The first digit indicates the phase:
//! - E0xxx: line errors (the whole line is rejected)
//! - E1xxx: guarded arithmetic (the step is skipped, the operand kept)

use std::fmt;

use thiserror::Error;

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    // Line Errors (E0xxx)
    /// Unrecognized operator at the start of the line
    E0001,
    /// Binary operator without an argument
    E0002,
    /// Malformed decimal literal
    E0003,
    /// Unexpected text after a unary operator
    E0004,

    // Arithmetic Errors (E1xxx)
    /// Division by zero
    E1001,
    /// Remainder by zero
    E1002,
    /// Square root of a non-positive value
    E1003,
    /// Result is not a finite number
    E1004,
}

impl ErrorCode {
    /// All error code variants, for exhaustive testing.
    ///
    /// Kept in sync with `as_str()`; the `all_codes_round_trip` test catches
    /// any omission.
    pub const ALL: &[ErrorCode] = &[
        ErrorCode::E0001,
        ErrorCode::E0002,
        ErrorCode::E0003,
        ErrorCode::E0004,
        ErrorCode::E1001,
        ErrorCode::E1002,
        ErrorCode::E1003,
        ErrorCode::E1004,
    ];

    /// Get the code as a string (e.g., "E0003").
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E0001 => "E0001",
            ErrorCode::E0002 => "E0002",
            ErrorCode::E0003 => "E0003",
            ErrorCode::E0004 => "E0004",
            ErrorCode::E1001 => "E1001",
            ErrorCode::E1002 => "E1002",
            ErrorCode::E1003 => "E1003",
            ErrorCode::E1004 => "E1004",
        }
    }

    /// Short descriptive name, used in structured log events.
    pub fn name(&self) -> &'static str {
        match self {
            ErrorCode::E0001 => "UnrecognizedOperator",
            ErrorCode::E0002 => "MissingArgument",
            ErrorCode::E0003 => "MalformedLiteral",
            ErrorCode::E0004 => "UnexpectedSuffix",
            ErrorCode::E1001 => "DivisionByZero",
            ErrorCode::E1002 => "RemainderByZero",
            ErrorCode::E1003 => "InvalidSqrtDomain",
            ErrorCode::E1004 => "NonFiniteResult",
        }
    }

    /// Check if this code rejects the whole line (E0xxx range).
    pub fn is_line_error(&self) -> bool {
        matches!(
            self,
            ErrorCode::E0001 | ErrorCode::E0002 | ErrorCode::E0003 | ErrorCode::E0004
        )
    }

    /// Check if this code is a guarded arithmetic failure (E1xxx range).
    pub fn is_arithmetic_error(&self) -> bool {
        matches!(
            self,
            ErrorCode::E1001 | ErrorCode::E1002 | ErrorCode::E1003 | ErrorCode::E1004
        )
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Returned when parsing a string that is not a known error code.
#[derive(Clone, Eq, PartialEq, Debug, Error)]
#[error("unknown error code `{0}`")]
pub struct UnknownErrorCode(pub String);

/// Parse an error code string like `"E0003"`. Case-insensitive.
impl std::str::FromStr for ErrorCode {
    type Err = UnknownErrorCode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.trim().to_uppercase();
        Self::ALL
            .iter()
            .find(|code| code.as_str() == upper)
            .copied()
            .ok_or_else(|| UnknownErrorCode(s.to_string()))
    }
}

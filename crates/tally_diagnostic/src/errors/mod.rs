//! Embedded error documentation for `tally explain`.
//!
//! Each error code has a markdown file in this directory describing when it
//! is raised, what happens to the accumulator, and how to fix the input.
//! The files are embedded at compile time.
//!
//! # Adding New Documentation
//!
//! 1. Create `EXXXX.md` in this directory
//! 2. Add an entry to the `DOCS` array below

use crate::ErrorCode;

/// Registry of embedded error documentation.
pub struct ErrorDocs;

impl ErrorDocs {
    /// Get the markdown documentation for an error code.
    ///
    /// # Example
    ///
    /// ```text
    /// if let Some(doc) = ErrorDocs::get(ErrorCode::E1001) {
    ///     println!("{doc}");
    /// }
    /// ```
    pub fn get(code: ErrorCode) -> Option<&'static str> {
        DOCS.iter().find(|(c, _)| *c == code).map(|(_, doc)| *doc)
    }
}

static DOCS: &[(ErrorCode, &str)] = &[
    // Line errors (E0xxx)
    (ErrorCode::E0001, include_str!("E0001.md")),
    (ErrorCode::E0002, include_str!("E0002.md")),
    (ErrorCode::E0003, include_str!("E0003.md")),
    (ErrorCode::E0004, include_str!("E0004.md")),
    // Arithmetic errors (E1xxx)
    (ErrorCode::E1001, include_str!("E1001.md")),
    (ErrorCode::E1002, include_str!("E1002.md")),
    (ErrorCode::E1003, include_str!("E1003.md")),
    (ErrorCode::E1004, include_str!("E1004.md")),
];

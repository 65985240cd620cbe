//! Low-level line scanner for the tally calculator.
//!
//! Every input line has the shape `<operator> [argument ...]`. This crate
//! recognizes the operator at the start of the line and scans the decimal
//! literals that follow it. It does not evaluate anything and does not
//! report diagnostics: scan failures are returned as values
//! ([`OpToken::INVALID`], [`LiteralError`]) and turned into diagnostics by
//! `tally_eval`.
//!
//! # Layers
//!
//! - [`LineBuffer`]: the line copied into a sentinel-terminated buffer.
//! - [`Cursor`]: a `Copy` byte cursor over that buffer. Copying a cursor is
//!   how callers snapshot and roll back.
//! - [`scan_op`]: the operator tokenizer.
//! - [`scan_decimal`]: the fixed-width decimal literal scanner.

mod cursor;
mod decimal;
mod line_buffer;
mod op;
mod tokenizer;

pub use cursor::Cursor;
pub use decimal::{scan_decimal, LiteralError, LiteralErrorKind, ScanMode, MAX_DECIMAL_DIGITS};
pub use line_buffer::LineBuffer;
pub use op::{Arity, Op, OpForm, OpToken};
pub use tokenizer::{is_fold_line, scan_op};

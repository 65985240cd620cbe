//! Fixed-width decimal literal scanner.
//!
//! Literals are ASCII digits with at most one `.`, and at most
//! [`MAX_DECIMAL_DIGITS`] digits in total. There is no sign, no exponent and
//! no digit separator. The value is accumulated while scanning:
//! integer digits as `value * 10 + d`, fractional digits as `value + d * f`
//! where `f` is divided by 10 before each fractional digit.

use thiserror::Error;

use crate::Cursor;

/// Maximum number of digits (integer plus fractional) in one literal.
pub const MAX_DECIMAL_DIGITS: u32 = 10;

/// Whether a space ends the literal or is an error.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ScanMode {
    /// The literal must run to the end of the line.
    Single,
    /// A space separates this literal from the next one.
    Fold,
}

/// What went wrong while scanning a literal.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Error)]
pub enum LiteralErrorKind {
    #[error("unexpected character `{}`", .0.escape_ascii())]
    UnexpectedByte(u8),
    #[error("second decimal point")]
    SecondDecimalPoint,
    #[error("more than {} digits", MAX_DECIMAL_DIGITS)]
    TooManyDigits,
}

/// A literal scan failure at byte offset `pos`.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Error)]
#[error("{kind} at byte {pos}")]
pub struct LiteralError {
    pub kind: LiteralErrorKind,
    pub pos: u32,
}

/// Scan a decimal literal starting at the cursor.
///
/// On success the cursor is at end of line, or (in [`ScanMode::Fold`]) on
/// the space that ended the literal. On failure the cursor is on the
/// offending byte; callers compare its position with where the scan started
/// to tell a malformed literal from a missing one.
///
/// An empty scan (cursor already at end of line) yields `0.0`.
pub fn scan_decimal(cursor: &mut Cursor<'_>, mode: ScanMode) -> Result<f64, LiteralError> {
    let mut value = 0.0_f64;
    let mut digits = 0u32;
    // Weight of the previous fractional digit, once a `.` has been seen.
    let mut scale: Option<f64> = None;

    loop {
        let byte = cursor.current();
        match byte {
            b'0'..=b'9' => {
                if digits == MAX_DECIMAL_DIGITS {
                    return Err(error(cursor, LiteralErrorKind::TooManyDigits));
                }
                let digit = f64::from(byte - b'0');
                match scale.as_mut() {
                    None => value = value * 10.0 + digit,
                    Some(weight) => {
                        *weight /= 10.0;
                        value += digit * *weight;
                    }
                }
                digits += 1;
                cursor.advance();
            }
            b'.' => {
                if scale.is_some() {
                    return Err(error(cursor, LiteralErrorKind::SecondDecimalPoint));
                }
                scale = Some(1.0);
                cursor.advance();
            }
            b' ' if mode == ScanMode::Fold => break,
            _ if cursor.is_eol() => break,
            _ => return Err(error(cursor, LiteralErrorKind::UnexpectedByte(byte))),
        }
    }

    Ok(value)
}

#[cold]
fn error(cursor: &Cursor<'_>, kind: LiteralErrorKind) -> LiteralError {
    LiteralError {
        kind,
        pos: cursor.pos(),
    }
}

//! Operator tokenizer.
//!
//! Operators are matched against a static table of byte patterns. The
//! cursor only moves when a whole pattern matches, so a partial match such
//! as `SQR` or `(+` leaves it exactly where it started.
//!
//! A leading digit is not in the table: it means `Set`, and the digit is the
//! first byte of the argument, so nothing is consumed.

use crate::{Cursor, LineBuffer, Op, OpForm, OpToken};

/// One row of the operator table.
struct Pattern {
    text: &'static [u8],
    op: Op,
    form: OpForm,
}

const fn pattern(text: &'static [u8], op: Op, form: OpForm) -> Pattern {
    Pattern { text, op, form }
}

static PATTERNS: &[Pattern] = &[
    pattern(b"+", Op::Add, OpForm::Symbol),
    pattern(b"-", Op::Sub, OpForm::Symbol),
    pattern(b"*", Op::Mul, OpForm::Symbol),
    pattern(b"/", Op::Div, OpForm::Symbol),
    pattern(b"%", Op::Rem, OpForm::Symbol),
    pattern(b"^", Op::Pow, OpForm::Symbol),
    pattern(b"_", Op::Neg, OpForm::Symbol),
    pattern(b"SQRT", Op::Sqrt, OpForm::Keyword),
    pattern(b"(+)", Op::Add, OpForm::Parenthesized),
    pattern(b"(-)", Op::Sub, OpForm::Parenthesized),
    pattern(b"(*)", Op::Mul, OpForm::Parenthesized),
    pattern(b"(/)", Op::Div, OpForm::Parenthesized),
    pattern(b"(%)", Op::Rem, OpForm::Parenthesized),
    pattern(b"(^)", Op::Pow, OpForm::Parenthesized),
];

/// Recognize the operator at the cursor.
///
/// On success the cursor is left immediately after the operator. On failure
/// the result is [`OpToken::INVALID`] and the cursor is unchanged.
pub fn scan_op(cursor: &mut Cursor<'_>) -> OpToken {
    if cursor.current().is_ascii_digit() {
        return OpToken {
            op: Op::Set,
            form: OpForm::Digit,
            len: 0,
        };
    }

    let Some(pattern) = PATTERNS.iter().find(|p| cursor.starts_with(p.text)) else {
        return OpToken::INVALID;
    };
    #[allow(
        clippy::cast_possible_truncation,
        reason = "patterns are at most 4 bytes"
    )]
    let len = pattern.text.len() as u32;
    cursor.advance_n(len);
    OpToken {
        op: pattern.op,
        form: pattern.form,
        len,
    }
}

/// Whether the line is written in fold form: byte 0 is `(` and byte 2 is `)`.
///
/// This looks only at the shape of the line, not at what [`scan_op`]
/// decided. The sentinel padding makes the lookahead safe on short lines.
pub fn is_fold_line(line: &LineBuffer) -> bool {
    let cursor = line.cursor();
    cursor.current() == b'(' && cursor.peek2() == b')'
}

#[cfg(test)]
mod tests;

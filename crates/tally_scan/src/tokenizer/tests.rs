use pretty_assertions::assert_eq;

use super::*;

fn scan(line: &str) -> (OpToken, u32) {
    let buf = LineBuffer::new(line);
    let mut cursor = buf.cursor();
    let token = scan_op(&mut cursor);
    (token, cursor.pos())
}

// === Digits ===

#[test]
fn leading_digit_is_set_without_consuming() {
    for line in ["5", "0.5", "12 3", "9x"] {
        let (token, pos) = scan(line);
        assert_eq!(token.op, Op::Set, "{line}");
        assert_eq!(token.form, OpForm::Digit);
        assert_eq!(token.len, 0);
        assert_eq!(pos, 0);
    }
}

#[test]
fn leading_dot_is_not_set() {
    let (token, _) = scan(".5");
    assert_eq!(token, OpToken::INVALID);
}

// === Symbols ===

#[test]
fn single_symbols() {
    let cases = [
        ("+1", Op::Add),
        ("-1", Op::Sub),
        ("*1", Op::Mul),
        ("/1", Op::Div),
        ("%1", Op::Rem),
        ("^1", Op::Pow),
        ("_", Op::Neg),
    ];
    for (line, op) in cases {
        let (token, pos) = scan(line);
        assert_eq!(token.op, op, "{line}");
        assert_eq!(token.form, OpForm::Symbol);
        assert_eq!(token.len, 1);
        assert_eq!(pos, 1);
    }
}

#[test]
fn bare_symbol_at_end_of_line() {
    let (token, pos) = scan("+");
    assert_eq!(token.op, Op::Add);
    assert_eq!(pos, 1);
}

// === Keyword ===

#[test]
fn sqrt_keyword() {
    let (token, pos) = scan("SQRT");
    assert_eq!(token.op, Op::Sqrt);
    assert_eq!(token.form, OpForm::Keyword);
    assert_eq!(token.len, 4);
    assert_eq!(pos, 4);
}

#[test]
fn sqrt_keyword_with_suffix_still_matches() {
    let (token, pos) = scan("SQRTX");
    assert_eq!(token.op, Op::Sqrt);
    assert_eq!(pos, 4);
}

#[test]
fn partial_sqrt_rolls_back() {
    for line in ["S", "SQ", "SQR", "SQRt", "Sqrt", "SX", "SQX"] {
        let (token, pos) = scan(line);
        assert_eq!(token, OpToken::INVALID, "{line}");
        assert_eq!(pos, 0, "{line} moved the cursor");
    }
}

// === Parenthesized ===

#[test]
fn parenthesized_symbols() {
    let cases = [
        ("(+) 1", Op::Add),
        ("(-) 1", Op::Sub),
        ("(*) 1", Op::Mul),
        ("(/) 1", Op::Div),
        ("(%) 1", Op::Rem),
        ("(^) 1", Op::Pow),
    ];
    for (line, op) in cases {
        let (token, pos) = scan(line);
        assert_eq!(token.op, op, "{line}");
        assert_eq!(token.form, OpForm::Parenthesized);
        assert_eq!(token.len, 3);
        assert_eq!(pos, 3);
    }
}

#[test]
fn malformed_parentheses_roll_back() {
    for line in ["(", "(+", "(+x", "(a)", "(_)", "()", "((+))", "(S)"] {
        let (token, pos) = scan(line);
        assert_eq!(token, OpToken::INVALID, "{line}");
        assert_eq!(pos, 0, "{line} moved the cursor");
    }
}

// === Unknown ===

#[test]
fn unknown_first_byte() {
    for line in ["", " ", " +1", "x", "a5", "\t5", "&", "\u{00e9}"] {
        let (token, pos) = scan(line);
        assert_eq!(token, OpToken::INVALID, "{line:?}");
        assert_eq!(pos, 0);
    }
}

// === Fold Shape ===

#[test]
fn fold_shape_detection() {
    assert!(is_fold_line(&LineBuffer::new("(+) 1 2")));
    assert!(is_fold_line(&LineBuffer::new("(^)")));
    // Shape only: the tokenizer would reject this line.
    assert!(is_fold_line(&LineBuffer::new("(a)")));
    assert!(!is_fold_line(&LineBuffer::new("+ 1 2")));
    assert!(!is_fold_line(&LineBuffer::new("(+")));
    assert!(!is_fold_line(&LineBuffer::new("(")));
    assert!(!is_fold_line(&LineBuffer::new("")));
}

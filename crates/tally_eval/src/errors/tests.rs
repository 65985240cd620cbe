use pretty_assertions::assert_eq;
use tally_diagnostic::Severity;
use tally_scan::LiteralErrorKind;

use super::*;

#[test]
fn line_errors_are_errors() {
    let diags = [
        unrecognized_operator("?", Span::new(0, 1)),
        missing_argument(Op::Add, Span::point(1)),
        malformed_literal(
            "5a",
            LiteralError {
                kind: LiteralErrorKind::UnexpectedByte(b'a'),
                pos: 2,
            },
        ),
        unexpected_suffix(Op::Sqrt, Span::new(4, 6)),
    ];
    for diag in &diags {
        assert_eq!(diag.severity, Severity::Error, "{diag}");
        assert!(diag.code.is_line_error());
    }
}

#[test]
fn arithmetic_errors_are_warnings() {
    let diags = [
        division_by_zero(),
        remainder_by_zero(),
        invalid_sqrt_domain(-4.0),
        non_finite_result(Op::Pow),
    ];
    for diag in &diags {
        assert_eq!(diag.severity, Severity::Warning, "{diag}");
        assert!(diag.code.is_arithmetic_error());
    }
}

#[test]
fn empty_line_has_no_label() {
    let diag = unrecognized_operator("", Span::new(0, 1));
    assert_eq!(diag.message, "empty line");
    assert!(diag.labels.is_empty());
}

#[test]
fn malformed_literal_points_at_offending_byte() {
    let diag = malformed_literal(
        "1.2.3",
        LiteralError {
            kind: LiteralErrorKind::SecondDecimalPoint,
            pos: 4,
        },
    );
    assert_eq!(diag.message, "malformed literal `1.2.3`");
    assert_eq!(diag.culprit_span(), Some(Span::new(4, 5)));
    assert_eq!(diag.labels[0].message, "second decimal point");
}

#[test]
fn messages_name_the_operation() {
    assert_eq!(
        missing_argument(Op::Div, Span::point(1)).message,
        "missing argument for division"
    );
    assert_eq!(
        unexpected_suffix(Op::Neg, Span::new(1, 2)).message,
        "unexpected text after negation"
    );
    assert_eq!(invalid_sqrt_domain(-4.0).message, "square root of -4");
    assert_eq!(
        non_finite_result(Op::Pow).message,
        "exponentiation produced a non-finite result"
    );
}

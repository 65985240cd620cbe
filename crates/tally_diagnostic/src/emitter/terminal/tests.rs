use pretty_assertions::assert_eq;

use super::*;
use crate::ErrorCode;

fn render(diagnostic: &Diagnostic, line: &str) -> String {
    let mut emitter = TerminalEmitter::with_color_mode(Vec::new(), ColorMode::Never, false);
    emitter.emit(diagnostic, line);
    String::from_utf8(emitter.into_inner()).unwrap_or_default()
}

#[test]
fn header_only() {
    let diag = Diagnostic::new(ErrorCode::E0001).with_message("unrecognized operator");
    assert_eq!(render(&diag, "?"), "error[E0001]: unrecognized operator\n");
}

#[test]
fn label_underlines_offending_bytes() {
    let diag = Diagnostic::new(ErrorCode::E0003)
        .with_message("malformed literal `5a`")
        .at(Span::new(2, 3), "unexpected character `a`");
    assert_eq!(
        render(&diag, "+5a"),
        "error[E0003]: malformed literal `5a`\n\
         \x20 | +5a\n\
         \x20 |   ^ unexpected character `a`\n"
    );
}

#[test]
fn zero_width_label_gets_one_caret() {
    let diag = Diagnostic::new(ErrorCode::E0002)
        .with_message("missing argument")
        .at(Span::point(1), "");
    assert_eq!(
        render(&diag, "+"),
        "error[E0002]: missing argument\n\
         \x20 | +\n\
         \x20 |  ^\n"
    );
}

#[test]
fn secondary_label_uses_dashes() {
    let diag = Diagnostic::new(ErrorCode::E1001)
        .with_message("division by zero")
        .with_context(Span::new(0, 1), "division")
        .at(Span::new(1, 2), "zero");
    assert_eq!(
        render(&diag, "/0"),
        "warning[E1001]: division by zero\n\
         \x20 | /0\n\
         \x20 | - division\n\
         \x20 |  ^ zero\n"
    );
}

#[test]
fn notes_follow_labels() {
    let diag = Diagnostic::new(ErrorCode::E1003)
        .with_message("square root of -4")
        .with_note("the accumulator is unchanged");
    assert_eq!(
        render(&diag, "SQRT"),
        "warning[E1003]: square root of -4\n  = note: the accumulator is unchanged\n"
    );
}

#[test]
fn multibyte_prefix_counts_characters() {
    assert_eq!(columns("+\u{00e9}x", Span::new(3, 4)), (2, 1));
    assert_eq!(columns("+\u{00e9}", Span::new(1, 3)), (1, 1));
}

#[test]
fn colors_wrap_severity() {
    let diag = Diagnostic::new(ErrorCode::E0001).with_message("bad");
    let mut emitter = TerminalEmitter::with_color_mode(Vec::new(), ColorMode::Always, false);
    emitter.emit(&diag, "");
    let out = String::from_utf8(emitter.into_inner()).unwrap_or_default();
    assert!(out.starts_with("\x1b[1;31merror\x1b[0m"), "{out:?}");
}

#[test]
fn summary_pluralizes() {
    let mut emitter = TerminalEmitter::with_color_mode(Vec::new(), ColorMode::Never, false);
    emitter.emit_summary(1, 2);
    emitter.emit_summary(0, 0);
    emitter.emit_summary(3, 0);
    let out = String::from_utf8(emitter.into_inner()).unwrap_or_default();
    assert_eq!(out, "1 error, 2 warnings\n3 errors\n");
}

#[test]
fn color_mode_resolution() {
    assert!(ColorMode::Auto.should_use_colors(true));
    assert!(!ColorMode::Auto.should_use_colors(false));
    assert!(ColorMode::Always.should_use_colors(false));
    assert!(!ColorMode::Never.should_use_colors(true));
    assert_eq!(ColorMode::parse("never"), Some(ColorMode::Never));
    assert_eq!(ColorMode::parse("sometimes"), None);
}

use pretty_assertions::assert_eq;
use tally_diagnostic::emitter::{ColorMode, TerminalEmitter};

use super::*;

type TestSession = Session<TerminalEmitter<Vec<u8>>>;

fn session(initial: f64) -> TestSession {
    let emitter = TerminalEmitter::with_color_mode(Vec::new(), ColorMode::Never, false);
    Session::new(initial, Some(emitter))
}

fn rendered(session: TestSession) -> String {
    let bytes = session
        .into_emitter()
        .map(TerminalEmitter::into_inner)
        .unwrap_or_default();
    String::from_utf8(bytes).unwrap_or_default()
}

#[test]
fn trims_one_record_separator() {
    assert_eq!(trim_record_separator("+5\n"), "+5");
    assert_eq!(trim_record_separator("+5\r\n"), "+5");
    assert_eq!(trim_record_separator("+5"), "+5");
    assert_eq!(trim_record_separator("+5\n\n"), "+5\n");
    assert_eq!(trim_record_separator("\n"), "");
}

#[test]
fn threads_accumulator_through_lines() {
    let mut session = session(0.0);
    assert_eq!(session.feed("5"), 5.0);
    assert_eq!(session.feed("(*) 2 3"), 30.0);
    assert_eq!(session.feed("/0"), 30.0);
    assert_eq!(session.feed("?"), 30.0);
    assert_eq!(session.value(), 30.0);
    assert_eq!(session.error_count(), 1);
    assert_eq!(session.warning_count(), 1);
}

#[test]
fn renders_diagnostics_with_their_line() {
    let mut session = session(1.0);
    session.feed("+5a");
    session.finish();
    assert_eq!(
        rendered(session),
        "error[E0003]: malformed literal `5a`\n\
         \x20 | +5a\n\
         \x20 |   ^ unexpected character `a`\n\
         \x20 = note: a literal is at most 10 digits with at most one `.`\n\
         1 error\n"
    );
}

#[test]
fn clean_session_has_no_summary() {
    let mut session = session(1.0);
    session.feed("+1");
    session.finish();
    assert_eq!(rendered(session), "");
}

#[test]
fn quiet_session_still_counts() {
    let mut session: TestSession = Session::new(2.0, None);
    session.feed("SQRT 4");
    session.finish();
    assert_eq!(session.value(), 2.0);
    assert_eq!(session.error_count(), 1);
    assert!(session.into_emitter().is_none());
}

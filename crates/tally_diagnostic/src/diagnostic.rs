//! What a refused line or skipped step looks like once reported.
//!
//! A [`Diagnostic`] is tied to one input line: its [`Span`]s are byte
//! offsets into that line, and its [`Severity`] follows from its code.

use std::fmt;

use crate::ErrorCode;

/// Byte range within one input line.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Default)]
pub struct Span {
    pub start: u32,
    pub end: u32,
}

impl Span {
    pub fn new(start: u32, end: u32) -> Self {
        debug_assert!(start <= end, "span start {start} exceeds end {end}");
        Span { start, end }
    }

    /// Zero-width span at `pos`, e.g. where a missing argument should be.
    pub fn point(pos: u32) -> Self {
        Span::new(pos, pos)
    }

    pub fn len(&self) -> u32 {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

impl fmt::Debug for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

/// Errors reject the line; warnings report a guarded operation that left
/// the accumulator or an operand unchanged.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Severity {
    Error,
    Warning,
}

impl Severity {
    /// Line errors (E0xxx) are errors; guarded arithmetic (E1xxx) warns.
    pub fn of(code: ErrorCode) -> Self {
        if code.is_line_error() {
            Severity::Error
        } else {
            Severity::Warning
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Severity::Error => "error",
            Severity::Warning => "warning",
        })
    }
}

/// What a label's span points at.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum LabelKind {
    /// The bytes that caused the diagnostic.
    Culprit,
    /// Surrounding text worth showing, such as the operator a bad argument
    /// belongs to.
    Context,
}

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Label {
    pub span: Span,
    pub message: String,
    pub kind: LabelKind,
}

/// One reported problem with one line.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[must_use = "diagnostics should be reported or returned, not silently dropped"]
pub struct Diagnostic {
    pub code: ErrorCode,
    pub severity: Severity,
    pub message: String,
    pub labels: Vec<Label>,
    pub notes: Vec<String>,
}

impl Diagnostic {
    /// Start a diagnostic for `code`; its severity comes from the code.
    #[cold]
    pub fn new(code: ErrorCode) -> Self {
        Diagnostic {
            code,
            severity: Severity::of(code),
            message: String::new(),
            labels: Vec::new(),
            notes: Vec::new(),
        }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Point at the offending bytes.
    pub fn at(self, span: Span, message: impl Into<String>) -> Self {
        self.labeled(span, message, LabelKind::Culprit)
    }

    /// Point at text that explains the culprit.
    pub fn with_context(self, span: Span, message: impl Into<String>) -> Self {
        self.labeled(span, message, LabelKind::Context)
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    fn labeled(mut self, span: Span, message: impl Into<String>, kind: LabelKind) -> Self {
        self.labels.push(Label {
            span,
            message: message.into(),
            kind,
        });
        self
    }

    /// Span of the first culprit label, if any.
    pub fn culprit_span(&self) -> Option<Span> {
        self.labels
            .iter()
            .find(|label| label.kind == LabelKind::Culprit)
            .map(|label| label.span)
    }
}

/// One-line form for logs: `error E0002 at 1: missing argument (expected a
/// number)`. Label messages and notes are joined inside the parentheses.
impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.severity, self.code)?;
        match self.culprit_span() {
            Some(span) if span.is_empty() => write!(f, " at {}", span.start)?,
            Some(span) => write!(f, " at {span:?}")?,
            None => {}
        }
        write!(f, ": {}", self.message)?;

        let details = self
            .labels
            .iter()
            .map(|label| label.message.as_str())
            .chain(self.notes.iter().map(String::as_str))
            .filter(|detail| !detail.is_empty());
        let mut open = false;
        for detail in details {
            f.write_str(if open { "; " } else { " (" })?;
            f.write_str(detail)?;
            open = true;
        }
        if open {
            f.write_str(")")?;
        }
        Ok(())
    }
}

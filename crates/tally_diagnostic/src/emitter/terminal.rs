//! Terminal Emitter
//!
//! Human-readable diagnostic output with optional ANSI color support.
//!
//! ```text
//! error[E0003]: malformed literal `5a`
//!   | +5a
//!   |   ^ unexpected character `a`
//!   = note: a literal is at most 10 digits with at most one `.`
//! ```

use std::io::{self, Write};

use crate::{Diagnostic, Label, LabelKind, Severity, Span};

use super::DiagnosticEmitter;

/// ANSI color codes for terminal output.
mod colors {
    pub const ERROR: &str = "\x1b[1;31m"; // Bold red
    pub const WARNING: &str = "\x1b[1;33m"; // Bold yellow
    pub const NOTE: &str = "\x1b[1;36m"; // Bold cyan
    pub const BOLD: &str = "\x1b[1m";
    pub const SECONDARY: &str = "\x1b[1;34m"; // Bold blue
    pub const RESET: &str = "\x1b[0m";
}

/// Returns "s" for plural counts, "" for singular.
#[inline]
fn plural_s(count: usize) -> &'static str {
    if count == 1 {
        ""
    } else {
        "s"
    }
}

/// Color output mode for terminal emitter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorMode {
    /// Automatically detect based on terminal capabilities.
    #[default]
    Auto,
    /// Always use colors.
    Always,
    /// Never use colors.
    Never,
}

impl ColorMode {
    /// Resolve to a boolean. `is_tty` only matters for `Auto`.
    pub fn should_use_colors(self, is_tty: bool) -> bool {
        match self {
            ColorMode::Auto => is_tty,
            ColorMode::Always => true,
            ColorMode::Never => false,
        }
    }

    /// Parse a `--color=` value: `auto`, `always` or `never`.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "auto" => Some(ColorMode::Auto),
            "always" => Some(ColorMode::Always),
            "never" => Some(ColorMode::Never),
            _ => None,
        }
    }
}

/// Terminal emitter with optional color support.
pub struct TerminalEmitter<W: Write> {
    writer: W,
    colors: bool,
}

impl<W: Write> TerminalEmitter<W> {
    /// Create a new terminal emitter with explicit color mode.
    ///
    /// `is_tty` is whether `writer` is a terminal; it is only consulted for
    /// [`ColorMode::Auto`].
    pub fn with_color_mode(writer: W, mode: ColorMode, is_tty: bool) -> Self {
        TerminalEmitter {
            writer,
            colors: mode.should_use_colors(is_tty),
        }
    }

    /// Consume the emitter and return the underlying writer.
    pub fn into_inner(self) -> W {
        self.writer
    }

    fn write_colored(&mut self, text: &str, color: &str) {
        if self.colors {
            let _ = write!(self.writer, "{color}{text}{}", colors::RESET);
        } else {
            let _ = write!(self.writer, "{text}");
        }
    }

    fn write_severity(&mut self, severity: Severity) {
        let color = match severity {
            Severity::Error => colors::ERROR,
            Severity::Warning => colors::WARNING,
        };
        self.write_colored(&severity.to_string(), color);
    }

    fn write_code(&mut self, code: &str) {
        if self.colors {
            let _ = write!(self.writer, "{}[{code}]{}", colors::BOLD, colors::RESET);
        } else {
            let _ = write!(self.writer, "[{code}]");
        }
    }

    /// Underline `label.span` beneath the line.
    fn write_label(&mut self, label: &Label, line: &str, severity: Severity) {
        let (indent, width) = columns(line, label.span);
        let marker = match label.kind {
            LabelKind::Culprit => "^",
            LabelKind::Context => "-",
        };
        let underline = marker.repeat(width);

        let _ = write!(self.writer, "  | {}", " ".repeat(indent));
        let color = match (label.kind, severity) {
            (LabelKind::Context, _) => colors::SECONDARY,
            (LabelKind::Culprit, Severity::Error) => colors::ERROR,
            (LabelKind::Culprit, Severity::Warning) => colors::WARNING,
        };
        self.write_colored(&underline, color);
        if !label.message.is_empty() {
            let _ = write!(self.writer, " ");
            self.write_colored(&label.message, color);
        }
        let _ = writeln!(self.writer);
    }
}

impl TerminalEmitter<io::Stderr> {
    /// Create a terminal emitter for stderr.
    pub fn stderr(mode: ColorMode, is_tty: bool) -> Self {
        TerminalEmitter::with_color_mode(io::stderr(), mode, is_tty)
    }
}

/// Character column and underline width for `span` within `line`.
///
/// Spans are byte offsets; the line may contain multibyte characters, so
/// both values are converted to character counts. The underline is at
/// least one column wide so zero-width spans still point somewhere.
fn columns(line: &str, span: Span) -> (usize, usize) {
    let start = span.start as usize;
    let end = span.end as usize;
    let indent = line
        .get(..start)
        .map_or(start, |prefix| prefix.chars().count());
    let width = line
        .get(start..end)
        .map_or(0, |text| text.chars().count());
    (indent, width.max(1))
}

impl<W: Write> DiagnosticEmitter for TerminalEmitter<W> {
    fn emit(&mut self, diagnostic: &Diagnostic, line: &str) {
        // Header: severity[CODE]: message
        self.write_severity(diagnostic.severity);
        self.write_code(diagnostic.code.as_str());
        let _ = writeln!(self.writer, ": {}", diagnostic.message);

        if !diagnostic.labels.is_empty() {
            let _ = writeln!(self.writer, "  | {line}");
            for label in &diagnostic.labels {
                self.write_label(label, line, diagnostic.severity);
            }
        }

        for note in &diagnostic.notes {
            let _ = write!(self.writer, "  = ");
            self.write_colored("note", colors::NOTE);
            let _ = writeln!(self.writer, ": {note}");
        }
    }

    fn flush(&mut self) {
        let _ = self.writer.flush();
    }

    fn emit_summary(&mut self, error_count: usize, warning_count: usize) {
        if error_count == 0 && warning_count == 0 {
            return;
        }

        let mut parts = Vec::with_capacity(2);
        if error_count > 0 {
            parts.push(format!(
                "{error_count} error{}",
                plural_s(error_count)
            ));
        }
        if warning_count > 0 {
            parts.push(format!(
                "{warning_count} warning{}",
                plural_s(warning_count)
            ));
        }
        let summary = parts.join(", ");

        let color = if error_count > 0 {
            colors::ERROR
        } else {
            colors::WARNING
        };
        self.write_colored(&summary, color);
        let _ = writeln!(self.writer);
    }
}

#[cfg(test)]
mod tests;

//! Diagnostic system for the tally calculator.
//!
//! A line that cannot be applied never fails its caller: it leaves the
//! accumulator alone and reports a [`Diagnostic`] through a
//! [`DiagnosticSink`]. Each diagnostic carries:
//! - an error code for searchability (`tally explain E0003`)
//! - a message (what went wrong)
//! - a culprit label (where on the line it went wrong)
//! - optional notes
//!
//! Sinks decide where diagnostics go: [`DiagnosticQueue`] collects them
//! (tests, batch runs) and [`TracingSink`] turns them into `tracing` events.
//! [`emitter::TerminalEmitter`] renders them for humans.

mod diagnostic;
pub mod emitter;
mod error_code;
pub mod errors;
mod sink;

pub use diagnostic::{Diagnostic, Label, LabelKind, Severity, Span};
pub use error_code::{ErrorCode, UnknownErrorCode};
pub use errors::ErrorDocs;
pub use sink::{DiagnosticQueue, DiagnosticSink, TracingSink};

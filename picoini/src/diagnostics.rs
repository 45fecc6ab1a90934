// SPDX-License-Identifier: Apache-2.0

//! Human-readable diagnostics about the configuration being read.
//!
//! Diagnostics are best effort and never affect parsing. They go to a
//! [`DiagnosticSink`] handed to [`ConfigReader::new`](crate::ConfigReader::new);
//! the default [`LogSink`] forwards them to the `log` facade.

/// Which buffer an allocation was for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BufferKind {
    Line,
    Section,
}

/// A message about the configuration stream, tagged with the 1-based line
/// number where that makes sense.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Diagnostic {
    /// A buffer could not be allocated
    OutOfMemory { buffer: BufferKind },
    /// The configuration stream could not be opened
    StreamUnavailable,
    /// A token did not fit in its buffer
    LineTooLong { line: u32 },
    /// Something other than whitespace follows a section header's `]`
    UnexpectedAfterSection { line: u32 },
    /// The line is not a comment, section header or setting
    BadlyFormatted { line: u32 },
}

impl core::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Diagnostic::OutOfMemory {
                buffer: BufferKind::Line,
            } => write!(f, "Line: out of memory."),
            Diagnostic::OutOfMemory {
                buffer: BufferKind::Section,
            } => write!(f, "Section: out of memory."),
            Diagnostic::StreamUnavailable => write!(f, "Could not open configuration stream."),
            Diagnostic::LineTooLong { line } => write!(f, "Line {line} too long."),
            Diagnostic::UnexpectedAfterSection { line } => {
                write!(f, "Line {line} has an unexpected character after section.")
            }
            Diagnostic::BadlyFormatted { line } => write!(f, "Line {line} is badly formatted."),
        }
    }
}

/// Receiver for [`Diagnostic`] messages.
pub trait DiagnosticSink {
    fn report(&mut self, diagnostic: Diagnostic);
}

impl<S: DiagnosticSink + ?Sized> DiagnosticSink for &mut S {
    fn report(&mut self, diagnostic: Diagnostic) {
        (**self).report(diagnostic)
    }
}

/// Forwards diagnostics to the `log` crate under the `picoini` target.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSink;

impl DiagnosticSink for LogSink {
    fn report(&mut self, diagnostic: Diagnostic) {
        match diagnostic {
            Diagnostic::OutOfMemory { .. } | Diagnostic::StreamUnavailable => {
                log::error!(target: "picoini", "{diagnostic}")
            }
            _ => log::warn!(target: "picoini", "{diagnostic}"),
        }
    }
}

/// Discards every diagnostic.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl DiagnosticSink for NullSink {
    fn report(&mut self, _diagnostic: Diagnostic) {}
}

/// Collects diagnostics, mostly useful in tests.
impl DiagnosticSink for alloc::vec::Vec<Diagnostic> {
    fn report(&mut self, diagnostic: Diagnostic) {
        self.push(diagnostic);
    }
}

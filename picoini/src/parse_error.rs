// SPDX-License-Identifier: Apache-2.0

/// Errors that can occur while reading a configuration stream.
///
/// End of input is not an error: [`ConfigReader::next_setting`] reports it
/// as `Ok(None)`.
///
/// [`ConfigReader::next_setting`]: crate::ConfigReader::next_setting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseError {
    /// A line or section buffer could not be allocated.
    OutOfMemory,
    /// The configuration stream could not be opened.
    StreamUnavailable,
    /// A key, value or section name did not fit in its buffer.
    BufferOverflow {
        /// 1-based line number of the offending line
        line: u32,
    },
    /// A line is neither blank, a comment, a section header nor a setting.
    MalformedLine {
        /// 1-based line number of the offending line
        line: u32,
    },
    /// Error from the underlying reader (I/O error, not end-of-stream)
    ReaderError,
}

impl ParseError {
    /// Returns true for errors that are skipped in tolerant mode.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, ParseError::MalformedLine { .. })
    }

    /// Line number the error was detected on, if it is tied to a line.
    pub fn line(&self) -> Option<u32> {
        match self {
            ParseError::BufferOverflow { line } | ParseError::MalformedLine { line } => Some(*line),
            _ => None,
        }
    }
}

impl core::fmt::Display for ParseError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ParseError::OutOfMemory => write!(f, "out of memory"),
            ParseError::StreamUnavailable => write!(f, "configuration stream unavailable"),
            ParseError::BufferOverflow { line } => write!(f, "line {line} too long"),
            ParseError::MalformedLine { line } => write!(f, "line {line} is badly formatted"),
            ParseError::ReaderError => write!(f, "reader error"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ParseError {}

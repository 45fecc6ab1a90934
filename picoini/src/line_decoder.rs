// SPDX-License-Identifier: Apache-2.0

//! Byte-at-a-time decoder turning a configuration stream into settings.
//!
//! Each line is framed by `\r`, `\n` or end of stream and run through the
//! [`ReadStep`] state machine. Bytes are written straight into the line
//! buffer, which holds `name NUL value` for a setting. The name of a
//! `[section]` header is staged there too and only copied to the section
//! buffer once its `]` is seen, so a broken header leaves the current
//! section alone.

use crate::compare::Comparison;
use crate::diagnostics::{BufferKind, Diagnostic, DiagnosticSink};
use crate::line_buffer::LineBuffer;
use crate::options::ParserOptions;
use crate::value::{trim_end, trim_start};
use crate::{ParseError, Reader};

/// Separator written between a setting's name and its value
const NAME_TERMINATOR: u8 = b'\0';

/// What the bytes being accumulated will become, selecting their size limit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Target {
    Line,
    Section,
}

/// State of the per-line state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ReadStep {
    /// Skipping leading blanks; `is_section` once a `[` was seen
    SeekFirstToken { is_section: bool },
    /// The rest of the line is a comment
    Comment,
    /// Reading the key
    KeyName,
    /// Key ended on a blank, looking for `=`
    Equal,
    /// Reading the raw value up to the end of line
    Value,
    /// Reading a section name up to `]`
    SectionName,
    /// After `]`, only blanks may follow
    SectionEnd,
    /// Badly formatted line, the rest is ignored
    BadFormat,
}

impl ReadStep {
    /// What is being accumulated in this state, if anything
    fn target(self) -> Option<Target> {
        match self {
            ReadStep::KeyName | ReadStep::Equal | ReadStep::Value => Some(Target::Line),
            ReadStep::SectionName => Some(Target::Section),
            _ => None,
        }
    }
}

/// What a fully framed line turned out to be
#[derive(Debug, PartialEq)]
enum LineOutcome {
    /// A `key=value` setting is ready
    Setting,
    /// Blank, comment, section header or a tolerated bad line
    Skipped,
}

fn is_blank(byte: u8) -> bool {
    byte == b' ' || byte == b'\t'
}

/// Decoder state owned by one configuration session.
#[derive(Debug)]
pub(crate) struct LineDecoder {
    /// Current line: name, NUL, value. Holds a header's name until it is committed.
    line: LineBuffer,
    /// Name of the most recent section, empty before the first header
    section: LineBuffer,
    max_line_length: usize,
    max_section_length: usize,
    /// Offset in `line` where the value starts, None when there is none
    value_start: Option<usize>,
    /// 1-based number of the line about to be read
    line_counter: u32,
    /// No more settings will be produced (end of stream or fatal error)
    at_end: bool,
    /// A section header was crossed by the last decode call
    section_changed: bool,
    tolerate_errors: bool,
    comparison: Comparison,
}

impl LineDecoder {
    /// Allocates both buffers. Reports which one failed on allocation failure.
    ///
    /// The line buffer is large enough to stage a section name as well.
    pub fn new(options: &ParserOptions) -> Result<Self, BufferKind> {
        let line_capacity = options.max_line_length.max(options.max_section_length);
        let line = LineBuffer::new(line_capacity).map_err(|_| BufferKind::Line)?;
        let section =
            LineBuffer::new(options.max_section_length).map_err(|_| BufferKind::Section)?;
        Ok(Self {
            line,
            section,
            max_line_length: options.max_line_length,
            max_section_length: options.max_section_length,
            value_start: None,
            line_counter: 1,
            at_end: false,
            section_changed: false,
            tolerate_errors: options.tolerate_errors,
            comparison: options.comparison(),
        })
    }

    /// Reads lines until a setting is found.
    ///
    /// Returns `Ok(true)` when a setting is available, `Ok(false)` at end of
    /// input. Any error latches the decoder so later calls return
    /// `Ok(false)` without reading.
    pub fn decode_next<R: Reader, D: DiagnosticSink>(
        &mut self,
        reader: &mut R,
        sink: &mut D,
    ) -> Result<bool, ParseError> {
        if self.at_end {
            return Ok(false); // already at end of input (or error)
        }

        self.section_changed = false;
        while !self.at_end {
            self.value_start = None;
            self.line.clear();
            let line = self.line_counter;

            let mut step = ReadStep::SeekFirstToken { is_section: false };
            loop {
                let Some(byte) = self.read_byte(reader)? else {
                    self.at_end = true;
                    break;
                };
                match byte {
                    b'\r' => break,
                    b'\n' => {
                        self.line_counter = self.line_counter.saturating_add(1);
                        break;
                    }
                    _ => step = self.step(step, byte, line, sink)?,
                }
            }

            if self.finish_line(step, line, sink)? == LineOutcome::Setting {
                return Ok(true);
            }
        }
        Ok(false)
    }

    /// Pull one byte from the reader, None at end of stream
    fn read_byte<R: Reader>(&mut self, reader: &mut R) -> Result<Option<u8>, ParseError> {
        let mut byte = [0u8; 1];
        match reader.read(&mut byte) {
            Ok(0) => Ok(None),
            Ok(_) => Ok(Some(byte[0])),
            Err(_) => {
                log::debug!(target: "picoini", "reader failed on line {}", self.line_counter);
                self.latch();
                Err(ParseError::ReaderError)
            }
        }
    }

    /// Advance the state machine by one byte of the current line.
    fn step<D: DiagnosticSink>(
        &mut self,
        step: ReadStep,
        byte: u8,
        line: u32,
        sink: &mut D,
    ) -> Result<ReadStep, ParseError> {
        if let Some(target) = step.target() {
            if self.is_full(target) {
                return Err(self.overflow(line, sink));
            }
        }

        let next = match step {
            ReadStep::SeekFirstToken { is_section } => match byte {
                b'#' => ReadStep::Comment,
                b'[' => ReadStep::SeekFirstToken { is_section: true },
                _ if is_blank(byte) => step,
                _ if is_section => {
                    self.push(Target::Section, byte, line, sink)?;
                    ReadStep::SectionName
                }
                _ => {
                    self.push(Target::Line, byte, line, sink)?;
                    ReadStep::KeyName
                }
            },
            ReadStep::Comment => step,
            ReadStep::KeyName => match byte {
                b'=' => {
                    self.push(Target::Line, NAME_TERMINATOR, line, sink)?;
                    self.value_start = Some(self.line.len());
                    ReadStep::Value
                }
                _ if is_blank(byte) => {
                    self.push(Target::Line, NAME_TERMINATOR, line, sink)?;
                    ReadStep::Equal
                }
                _ => {
                    self.push(Target::Line, byte, line, sink)?;
                    step
                }
            },
            ReadStep::Equal => match byte {
                b'=' => {
                    self.value_start = Some(self.line.len());
                    ReadStep::Value
                }
                _ if is_blank(byte) => step,
                _ => ReadStep::BadFormat,
            },
            ReadStep::Value => {
                self.push(Target::Line, byte, line, sink)?;
                step
            }
            ReadStep::SectionName => match byte {
                b']' => ReadStep::SectionEnd,
                _ => {
                    self.push(Target::Section, byte, line, sink)?;
                    step
                }
            },
            ReadStep::SectionEnd => {
                if is_blank(byte) {
                    step
                } else {
                    sink.report(Diagnostic::UnexpectedAfterSection { line });
                    ReadStep::BadFormat
                }
            }
            ReadStep::BadFormat => step,
        };
        Ok(next)
    }

    /// Decide what the framed line was once its terminator has been read.
    fn finish_line<D: DiagnosticSink>(
        &mut self,
        step: ReadStep,
        line: u32,
        sink: &mut D,
    ) -> Result<LineOutcome, ParseError> {
        match step {
            ReadStep::Value => {
                log::trace!(target: "picoini", "line {line}: setting");
                Ok(LineOutcome::Setting)
            }
            ReadStep::KeyName | ReadStep::Equal | ReadStep::SectionName | ReadStep::BadFormat => {
                self.value_start = None;
                sink.report(Diagnostic::BadlyFormatted { line });
                self.reject_line(ParseError::MalformedLine { line })
            }
            ReadStep::SectionEnd => {
                // The staged name is within the section limit
                if self.section.replace_with(self.line.as_bytes()).is_err() {
                    return Err(self.overflow(line, sink));
                }
                self.line.clear();
                log::trace!(target: "picoini", "line {line}: section changed");
                self.section_changed = true;
                Ok(LineOutcome::Skipped)
            }
            ReadStep::SeekFirstToken { .. } | ReadStep::Comment => Ok(LineOutcome::Skipped),
        }
    }

    /// Skip the line in tolerant mode, otherwise stop for good.
    fn reject_line(&mut self, error: ParseError) -> Result<LineOutcome, ParseError> {
        if self.tolerate_errors {
            log::trace!(target: "picoini", "skipping: {error}");
            Ok(LineOutcome::Skipped)
        } else {
            self.latch();
            Err(error)
        }
    }

    /// True when no further byte fits for `target`.
    fn is_full(&self, target: Target) -> bool {
        let limit = match target {
            Target::Line => self.max_line_length,
            Target::Section => self.max_section_length,
        };
        self.line.len() >= limit
    }

    fn push<D: DiagnosticSink>(
        &mut self,
        target: Target,
        byte: u8,
        line: u32,
        sink: &mut D,
    ) -> Result<(), ParseError> {
        if self.is_full(target) || self.line.push(byte).is_err() {
            return Err(self.overflow(line, sink));
        }
        Ok(())
    }

    /// A token outgrew its buffer. Always fatal: the partial data can't be trusted.
    fn overflow<D: DiagnosticSink>(&mut self, line: u32, sink: &mut D) -> ParseError {
        sink.report(Diagnostic::LineTooLong { line });
        self.latch();
        ParseError::BufferOverflow { line }
    }

    fn latch(&mut self) {
        self.at_end = true;
        self.value_start = None;
    }

    pub fn is_at_end(&self) -> bool {
        self.at_end
    }

    /// Number of the line the decoder is about to read.
    pub fn line_number(&self) -> u32 {
        self.line_counter
    }

    pub fn comparison(&self) -> Comparison {
        self.comparison
    }

    pub fn section_bytes(&self) -> &[u8] {
        self.section.as_bytes()
    }

    /// The section name, empty if it is not valid UTF-8.
    pub fn section(&self) -> &str {
        core::str::from_utf8(self.section_bytes()).unwrap_or("")
    }

    pub fn section_changed(&self) -> bool {
        self.section_changed
    }

    /// Value offset of the current setting, if one was decoded.
    fn value_start(&self) -> Option<usize> {
        // A name is at least one byte plus its terminator
        self.value_start
            .filter(|&start| start > 1 && !self.line.is_empty())
    }

    pub fn name_bytes(&self) -> Option<&[u8]> {
        let start = self.value_start()?;
        self.line.slice(0, start - 1)
    }

    pub fn name(&self) -> Option<&str> {
        core::str::from_utf8(self.name_bytes()?).ok()
    }

    /// The value as read, with any trimming already applied to its end.
    pub fn raw_value_bytes(&self) -> Option<&[u8]> {
        let start = self.value_start()?;
        self.line.slice(start, self.line.len())
    }

    pub fn raw_value(&self) -> Option<&str> {
        core::str::from_utf8(self.raw_value_bytes()?).ok()
    }

    /// The value without surrounding whitespace.
    ///
    /// Trailing whitespace is dropped from the buffer itself, so later calls
    /// to [`raw_value_bytes`](Self::raw_value_bytes) no longer see it.
    pub fn trimmed_value_bytes(&mut self) -> Option<&[u8]> {
        let start = self.value_start()?;
        let value = self.line.slice(start, self.line.len())?;
        let kept = trim_end(value).len();
        self.line.truncate(start + kept);
        let bytes = self.line.slice(start, self.line.len())?;
        Some(trim_start(bytes))
    }

    pub fn trimmed_value(&mut self) -> Option<&str> {
        core::str::from_utf8(self.trimmed_value_bytes()?).ok()
    }
}

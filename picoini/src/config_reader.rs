// SPDX-License-Identifier: Apache-2.0

use alloc::string::String;
use core::net::Ipv4Addr;

use crate::diagnostics::{Diagnostic, DiagnosticSink, LogSink};
use crate::line_decoder::LineDecoder;
use crate::value::Int;
use crate::{ParseError, ParserOptions, Reader, Setting};

/// An open configuration stream and the decoder state reading it
#[derive(Debug)]
struct Session<R> {
    reader: R,
    decoder: LineDecoder,
}

/// A streaming reader for INI-style configuration text.
///
/// A session is started with [`begin`](Self::begin) and released with
/// [`end`](Self::end) (or on drop). Settings are pulled one at a time,
/// either as borrowed [`Setting`] records with
/// [`next_setting`](Self::next_setting), or with the flag-style
/// [`read_next_setting`](Self::read_next_setting) followed by the accessors
/// on the reader itself.
///
/// # Example
/// ```
/// use picoini::{ConfigReader, ParserOptions, SliceReader};
///
/// let ini = b"[net]\nport = 8080\ndhcp=true\n";
/// let mut config = ConfigReader::default();
/// config.begin(SliceReader::full_slice(ini), ParserOptions::default())?;
///
/// while config.read_next_setting() {
///     if config.section_is("net") && config.name_is("port") {
///         assert_eq!(config.int_value(), 8080);
///     }
/// }
/// config.end();
/// # Ok::<(), picoini::ParseError>(())
/// ```
pub struct ConfigReader<R: Reader, D: DiagnosticSink = LogSink> {
    session: Option<Session<R>>,
    diagnostics: D,
}

impl<R: Reader> Default for ConfigReader<R, LogSink> {
    fn default() -> Self {
        Self::new(LogSink)
    }
}

impl<R: Reader, D: DiagnosticSink> ConfigReader<R, D> {
    /// Creates a reader with no open session that reports to `diagnostics`.
    pub fn new(diagnostics: D) -> Self {
        Self {
            session: None,
            diagnostics,
        }
    }

    /// Starts a session over `reader`, allocating the line and section
    /// buffers sized by `options`.
    ///
    /// Any previous session is ended first. On failure no session is open
    /// and every read reports end of input.
    pub fn begin(&mut self, reader: R, options: ParserOptions) -> Result<(), ParseError> {
        self.end();
        match LineDecoder::new(&options) {
            Ok(decoder) => {
                log::debug!(
                    target: "picoini",
                    "session started: line buffer {}, section buffer {}",
                    options.max_line_length,
                    options.max_section_length
                );
                self.session = Some(Session { reader, decoder });
                Ok(())
            }
            Err(buffer) => {
                self.diagnostics.report(Diagnostic::OutOfMemory { buffer });
                Err(ParseError::OutOfMemory)
            }
        }
    }

    /// Releases both buffers and drops the reader. Safe to call repeatedly.
    pub fn end(&mut self) {
        if let Some(session) = self.session.take() {
            log::debug!(
                target: "picoini",
                "session ended at line {}",
                session.decoder.line_number()
            );
        }
    }

    /// True while a session is open.
    pub fn is_open(&self) -> bool {
        self.session.is_some()
    }

    /// Reads up to the next setting.
    ///
    /// Returns `Ok(None)` at end of input, and also on every call after an
    /// error has been returned once.
    pub fn next_setting(&mut self) -> Result<Option<Setting<'_>>, ParseError> {
        let Some(session) = self.session.as_mut() else {
            return Ok(None);
        };
        if session
            .decoder
            .decode_next(&mut session.reader, &mut self.diagnostics)?
        {
            Ok(Some(Setting::new(&mut session.decoder)))
        } else {
            Ok(None)
        }
    }

    /// Reads up to the next setting, returning true if one is available.
    ///
    /// False means end of input or an error; query the setting through the
    /// accessors on this reader.
    pub fn read_next_setting(&mut self) -> bool {
        matches!(self.next_setting(), Ok(Some(_)))
    }

    /// True once no more settings will be produced.
    pub fn is_at_end(&self) -> bool {
        self.decoder().map_or(true, LineDecoder::is_at_end)
    }

    /// 1-based number of the next line to be read.
    pub fn line_number(&self) -> u32 {
        self.decoder().map_or(0, LineDecoder::line_number)
    }

    /// Name of the current section, empty before the first header.
    pub fn section(&self) -> &str {
        self.decoder().map_or("", LineDecoder::section)
    }

    /// See [`Setting::section_bytes`].
    pub fn section_bytes(&self) -> &[u8] {
        self.decoder()
            .map(LineDecoder::section_bytes)
            .unwrap_or_default()
    }

    /// True when the last read crossed a section header.
    pub fn section_changed(&self) -> bool {
        self.decoder().is_some_and(LineDecoder::section_changed)
    }

    pub fn section_is(&self, section: &str) -> bool {
        self.decoder().is_some_and(|decoder| {
            decoder
                .comparison()
                .equals(section.as_bytes(), decoder.section_bytes())
        })
    }

    /// Name of the current setting, None if the last read produced none.
    pub fn name(&self) -> Option<&str> {
        self.decoder()?.name()
    }

    /// See [`Setting::name_bytes`].
    pub fn name_bytes(&self) -> Option<&[u8]> {
        self.decoder()?.name_bytes()
    }

    pub fn name_is(&self, name: &str) -> bool {
        self.decoder().is_some_and(|decoder| {
            let comparison = decoder.comparison();
            decoder
                .name_bytes()
                .is_some_and(|own| comparison.equals(name.as_bytes(), own))
        })
    }

    /// See [`Setting::raw_value`].
    pub fn raw_value(&self) -> Option<&str> {
        self.decoder()?.raw_value()
    }

    /// See [`Setting::raw_value_bytes`].
    pub fn raw_value_bytes(&self) -> Option<&[u8]> {
        self.decoder()?.raw_value_bytes()
    }

    /// See [`Setting::value`].
    pub fn value(&mut self) -> Option<&str> {
        self.session.as_mut()?.decoder.trimmed_value()
    }

    /// See [`Setting::value_bytes`].
    pub fn value_bytes(&mut self) -> Option<&[u8]> {
        self.session.as_mut()?.decoder.trimmed_value_bytes()
    }

    /// See [`Setting::copy_value`].
    pub fn copy_value(&mut self, trim: bool) -> Option<String> {
        self.setting()?.copy_value(trim)
    }

    /// See [`Setting::int_value`].
    pub fn int_value(&mut self) -> Int {
        self.setting().map_or(0, |mut setting| setting.int_value())
    }

    /// See [`Setting::bool_value`].
    pub fn bool_value(&mut self) -> bool {
        self.setting().is_some_and(|mut setting| setting.bool_value())
    }

    /// See [`Setting::ip_address`].
    pub fn ip_address(&mut self) -> Ipv4Addr {
        self.setting()
            .map_or(Ipv4Addr::UNSPECIFIED, |mut setting| setting.ip_address())
    }

    fn decoder(&self) -> Option<&LineDecoder> {
        self.session.as_ref().map(|session| &session.decoder)
    }

    /// View of the current setting, if the last read produced one
    fn setting(&mut self) -> Option<Setting<'_>> {
        let session = self.session.as_mut()?;
        session.decoder.name_bytes()?;
        Some(Setting::new(&mut session.decoder))
    }

    #[cfg(feature = "std")]
    pub(crate) fn report(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.report(diagnostic);
    }
}

impl<R: Reader, D: DiagnosticSink> core::fmt::Debug for ConfigReader<R, D> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ConfigReader")
            .field("open", &self.is_open())
            .field("section", &self.section())
            .field("line_number", &self.line_number())
            .finish()
    }
}

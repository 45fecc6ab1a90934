// SPDX-License-Identifier: Apache-2.0

use alloc::string::String;
use core::net::Ipv4Addr;

use crate::line_decoder::LineDecoder;
use crate::value::{self, Int};

/// A decoded `key=value` setting.
///
/// The setting borrows its [`ConfigReader`](crate::ConfigReader), so it is
/// only valid until the next call to
/// [`next_setting`](crate::ConfigReader::next_setting). Use
/// [`copy_value`](Self::copy_value) to keep a value for longer.
#[derive(Debug)]
pub struct Setting<'a> {
    decoder: &'a mut LineDecoder,
}

impl<'a> Setting<'a> {
    pub(crate) fn new(decoder: &'a mut LineDecoder) -> Self {
        Self { decoder }
    }

    /// Section the setting belongs to, empty before the first header.
    ///
    /// Also empty if the name is not valid UTF-8; see
    /// [`section_bytes`](Self::section_bytes).
    pub fn section(&self) -> &str {
        self.decoder.section()
    }

    pub fn section_bytes(&self) -> &[u8] {
        self.decoder.section_bytes()
    }

    /// True when a section header was crossed while reading this setting.
    pub fn section_changed(&self) -> bool {
        self.decoder.section_changed()
    }

    /// Compare the section name using the session's case sensitivity.
    pub fn section_is(&self, section: &str) -> bool {
        self.decoder
            .comparison()
            .equals(section.as_bytes(), self.section_bytes())
    }

    /// The setting's name, None if it is not valid UTF-8.
    pub fn name(&self) -> Option<&str> {
        self.decoder.name()
    }

    pub fn name_bytes(&self) -> Option<&[u8]> {
        self.decoder.name_bytes()
    }

    /// Compare the name using the session's case sensitivity.
    pub fn name_is(&self, name: &str) -> bool {
        let comparison = self.decoder.comparison();
        self.name_bytes()
            .is_some_and(|own| comparison.equals(name.as_bytes(), own))
    }

    /// The value exactly as read, including surrounding whitespace.
    /// None if it is not valid UTF-8.
    ///
    /// Once [`value`](Self::value) has trimmed the setting, the trailing
    /// whitespace is gone from this view too.
    pub fn raw_value(&self) -> Option<&str> {
        self.decoder.raw_value()
    }

    /// The value exactly as read, as bytes.
    pub fn raw_value_bytes(&self) -> Option<&[u8]> {
        self.decoder.raw_value_bytes()
    }

    /// The value with surrounding whitespace removed, None if it is not
    /// valid UTF-8.
    pub fn value(&mut self) -> Option<&str> {
        self.decoder.trimmed_value()
    }

    /// The value with surrounding whitespace removed, as bytes.
    pub fn value_bytes(&mut self) -> Option<&[u8]> {
        self.decoder.trimmed_value_bytes()
    }

    /// An owned copy of the value that outlives the session.
    ///
    /// None if there is no value or it is not valid UTF-8.
    pub fn copy_value(&mut self, trim: bool) -> Option<String> {
        let value = if trim {
            self.decoder.trimmed_value()
        } else {
            self.decoder.raw_value()
        };
        value.map(String::from)
    }

    /// The value as an integer, `0` if it does not start with one.
    pub fn int_value(&mut self) -> Int {
        self.value_bytes().map_or(0, value::parse_int)
    }

    /// True only when the value is `true` (ignoring case if configured).
    pub fn bool_value(&mut self) -> bool {
        let comparison = self.decoder.comparison();
        self.value_bytes()
            .is_some_and(|text| value::parse_bool(text, comparison))
    }

    /// The value as a dotted-quad address, `0.0.0.0` if malformed.
    pub fn ip_address(&mut self) -> Ipv4Addr {
        self.value_bytes()
            .map_or(Ipv4Addr::UNSPECIFIED, value::parse_ipv4)
    }
}

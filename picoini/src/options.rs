// SPDX-License-Identifier: Apache-2.0

use crate::compare::Comparison;

/// Default longest `key=value` line, in bytes
pub const DEFAULT_MAX_LINE_LENGTH: usize = 127;
/// Default longest section name, in bytes
pub const DEFAULT_MAX_SECTION_LENGTH: usize = 31;

/// Options for a [`ConfigReader`](crate::ConfigReader) session.
///
/// # Example
/// ```
/// use picoini::ParserOptions;
///
/// let options = ParserOptions::new()
///     .with_max_line_length(80)
///     .with_ignore_case(true)
///     .with_tolerate_errors(true);
/// assert_eq!(options.max_line_length, 80);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParserOptions {
    /// Longest `key=value` line that fits, separator included
    pub max_line_length: usize,
    /// Longest section name that fits
    pub max_section_length: usize,
    /// Compare sections, names and booleans ignoring ASCII case
    pub ignore_case: bool,
    /// Skip badly formatted lines instead of stopping
    pub tolerate_errors: bool,
}

impl ParserOptions {
    pub const fn new() -> Self {
        Self {
            max_line_length: DEFAULT_MAX_LINE_LENGTH,
            max_section_length: DEFAULT_MAX_SECTION_LENGTH,
            ignore_case: false,
            tolerate_errors: false,
        }
    }

    pub const fn with_max_line_length(mut self, max_line_length: usize) -> Self {
        self.max_line_length = max_line_length;
        self
    }

    pub const fn with_max_section_length(mut self, max_section_length: usize) -> Self {
        self.max_section_length = max_section_length;
        self
    }

    pub const fn with_ignore_case(mut self, ignore_case: bool) -> Self {
        self.ignore_case = ignore_case;
        self
    }

    pub const fn with_tolerate_errors(mut self, tolerate_errors: bool) -> Self {
        self.tolerate_errors = tolerate_errors;
        self
    }

    pub(crate) fn comparison(&self) -> Comparison {
        Comparison::from_ignore_case(self.ignore_case)
    }
}

impl Default for ParserOptions {
    fn default() -> Self {
        Self::new()
    }
}

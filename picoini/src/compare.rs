// SPDX-License-Identifier: Apache-2.0

/// String equality used for section, name and boolean comparisons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Comparison {
    /// Byte-for-byte equality
    #[default]
    CaseSensitive,
    /// Equality ignoring ASCII case, like `strcasecmp`
    IgnoreAsciiCase,
}

impl Comparison {
    /// Selects the comparison from an `ignore_case` flag.
    pub fn from_ignore_case(ignore_case: bool) -> Self {
        if ignore_case {
            Comparison::IgnoreAsciiCase
        } else {
            Comparison::CaseSensitive
        }
    }

    /// Compare two byte strings.
    pub fn equals(self, a: &[u8], b: &[u8]) -> bool {
        match self {
            Comparison::CaseSensitive => a == b,
            Comparison::IgnoreAsciiCase => a.eq_ignore_ascii_case(b),
        }
    }
}

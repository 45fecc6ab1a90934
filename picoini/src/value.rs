// SPDX-License-Identifier: Apache-2.0

//! Conversions of a setting's value text into typed values.
//!
//! All conversions are silent: text that does not convert yields a zero
//! value rather than an error.

use core::net::Ipv4Addr;

use crate::compare::Comparison;
#[cfg(feature = "int32")]
use crate::int_parser::from_ascii_i32;
#[cfg(feature = "int64")]
use crate::int_parser::from_ascii_i64;
use crate::int_parser::{from_ascii_u8, leading_integer};

/// Integer type produced by [`parse_int`], selected by the `int32` / `int64`
/// features.
#[cfg(feature = "int32")]
pub type Int = i32;
#[cfg(feature = "int64")]
pub type Int = i64;

/// Whitespace as C's `isspace` sees it.
pub const fn is_space(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\n' | 0x0b | 0x0c | b'\r')
}

pub fn trim_start(bytes: &[u8]) -> &[u8] {
    let start = bytes
        .iter()
        .position(|&b| !is_space(b))
        .unwrap_or(bytes.len());
    bytes.get(start..).unwrap_or(&[])
}

pub fn trim_end(bytes: &[u8]) -> &[u8] {
    let end = bytes
        .iter()
        .rposition(|&b| !is_space(b))
        .map_or(0, |last| last + 1);
    bytes.get(..end).unwrap_or(&[])
}

/// Parses the leading integer of `text` the way `atoi` does: leading
/// whitespace is skipped and parsing stops at the first non-digit.
/// No digits at all, or a value out of range for [`Int`], gives `0`.
pub fn parse_int(text: impl AsRef<[u8]>) -> Int {
    let digits = leading_integer(trim_start(text.as_ref()));
    #[cfg(feature = "int32")]
    let parsed = from_ascii_i32(digits);
    #[cfg(feature = "int64")]
    let parsed = from_ascii_i64(digits);
    parsed.unwrap_or(0)
}

/// True only when `text` equals `"true"` under `comparison`.
pub fn parse_bool(text: impl AsRef<[u8]>, comparison: Comparison) -> bool {
    comparison.equals(b"true", text.as_ref())
}

/// Parses a dotted-quad IPv4 address.
///
/// Exactly four `.`-separated decimal octets in `0..=255` are required;
/// anything else yields the unspecified address `0.0.0.0`.
pub fn parse_ipv4(text: impl AsRef<[u8]>) -> Ipv4Addr {
    let mut octets = [0u8; 4];
    let mut count = 0usize;
    for token in text.as_ref().split(|&b| b == b'.') {
        let Some(slot) = octets.get_mut(count) else {
            // More than four octets
            return Ipv4Addr::UNSPECIFIED;
        };
        match from_ascii_u8(token) {
            Ok(octet) => *slot = octet,
            Err(_) => return Ipv4Addr::UNSPECIFIED,
        }
        count += 1;
    }
    if count != octets.len() {
        return Ipv4Addr::UNSPECIFIED;
    }
    Ipv4Addr::from(octets)
}

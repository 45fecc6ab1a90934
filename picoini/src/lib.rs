// SPDX-License-Identifier: Apache-2.0

//! A resource-constrained streaming reader for INI-style configuration files.
//!
//! Settings are decoded one byte at a time from a [`Reader`] into two
//! bounded buffers, so the file is never held in memory as a whole:
//!
//! ```text
//! # comment
//! [network]
//! ip = 192.168.1.10
//! dhcp=true
//! ```
//!
//! ```
//! use picoini::{ConfigReader, ParserOptions, SliceReader};
//! use std::net::Ipv4Addr;
//!
//! let ini = b"# comment\n[network]\nip = 192.168.1.10\ndhcp=true\n";
//! let mut config = ConfigReader::default();
//! config.begin(SliceReader::full_slice(ini), ParserOptions::default())?;
//!
//! let mut setting = config.next_setting()?.expect("a setting");
//! assert!(setting.section_changed());
//! assert_eq!(setting.section(), "network");
//! assert_eq!(setting.name(), Some("ip"));
//! assert_eq!(setting.ip_address(), Ipv4Addr::new(192, 168, 1, 10));
//!
//! let mut setting = config.next_setting()?.expect("a setting");
//! assert!(!setting.section_changed());
//! assert!(setting.bool_value());
//!
//! assert!(config.next_setting()?.is_none());
//! # Ok::<(), picoini::ParseError>(())
//! ```

#![cfg_attr(not(test), no_std)]

extern crate alloc;
#[cfg(all(feature = "std", not(test)))]
extern crate std;

// Compile-time configuration validation
mod config_check;

mod compare;
pub use compare::Comparison;

mod config_reader;
pub use config_reader::ConfigReader;

mod diagnostics;
pub use diagnostics::{BufferKind, Diagnostic, DiagnosticSink, LogSink, NullSink};

mod int_parser;

#[cfg(feature = "std")]
mod io_reader;
#[cfg(feature = "std")]
pub use io_reader::{FileReader, IoReader};

mod line_buffer;

mod line_decoder;

mod options;
pub use options::{ParserOptions, DEFAULT_MAX_LINE_LENGTH, DEFAULT_MAX_SECTION_LENGTH};

mod parse_error;
pub use parse_error::ParseError;

mod reader;
pub use reader::{Reader, SliceReader};

mod setting;
pub use setting::Setting;

mod value;
pub use value::{parse_bool, parse_int, parse_ipv4, Int};

// SPDX-License-Identifier: Apache-2.0

//! Input sources for the configuration reader.
//!
//! The decoder pulls bytes through the [`Reader`] trait. This module also
//! provides [`SliceReader`], a [`Reader`] over an in-memory byte slice that
//! can optionally hand out data in fixed-size chunks.
//!
//! For production use cases you'll typically implement [`Reader`] for your
//! own input source:
//!
//! - **Files**: [`IoReader`](crate::IoReader) wraps any `std::io::Read`
//!   (requires the `std` feature)
//! - **Flash / SD storage**: a file handle from your filesystem driver
//! - **UART/Serial**: a provisioning channel in embedded systems
//!
//! # Examples
//!
//! ```rust
//! use picoini::{ConfigReader, ParserOptions, SliceReader};
//!
//! let ini = b"[wifi]\nssid = home\n";
//! let mut config = ConfigReader::default();
//! config.begin(SliceReader::full_slice(ini), ParserOptions::default())?;
//!
//! while let Some(mut setting) = config.next_setting()? {
//!     let section = setting.section().to_owned();
//!     let name = setting.name().map(str::to_owned);
//!     println!("[{}] {:?} = {:?}", section, name, setting.value());
//! }
//! # Ok::<(), picoini::ParseError>(())
//! ```

/// Trait for input sources that can provide data to the decoder.
pub trait Reader {
    /// The error type returned by read operations
    type Error;

    /// Read data into the provided buffer.
    /// Returns the number of bytes read, or an error.
    ///
    /// # Contract
    /// - A return value of 0 **MUST** indicate true end of stream
    /// - Implementations **MUST NOT** return 0 unless no more data will ever be available
    /// - Returning 0 followed by non-zero reads in subsequent calls violates this contract
    fn read(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error>;
}

impl<R: Reader + ?Sized> Reader for &mut R {
    type Error = R::Error;

    fn read(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error> {
        (**self).read(buf)
    }
}

/// A [`Reader`] that reads from a byte slice, optionally in fixed-size chunks.
///
/// 1.  **Full Slice Reading**: [`SliceReader::full_slice()`] reads as much
///     as the caller's buffer allows.
///
/// 2.  **Chunked Reading**: [`SliceReader::new()`] limits each `read()` call
///     to a maximum chunk size, which is handy for simulating slow links.
#[derive(Debug)]
pub struct SliceReader<'a> {
    data: &'a [u8],
    pos: usize,
    chunk_size: usize,
}

impl<'a> SliceReader<'a> {
    /// Create a new chunked reader from a byte slice.
    ///
    /// Each call to `read()` will return at most `chunk_size` bytes
    /// (minimum 1).
    pub fn new(data: &'a [u8], chunk_size: usize) -> Self {
        Self {
            data,
            pos: 0,
            chunk_size: chunk_size.max(1), // Ensure at least 1 byte per read
        }
    }

    /// Create a new reader that consumes the entire byte slice at once.
    pub fn full_slice(data: &'a [u8]) -> Self {
        Self {
            data,
            pos: 0,
            chunk_size: usize::MAX,
        }
    }

    /// Bytes not yet handed out.
    pub fn remaining(&self) -> &'a [u8] {
        self.data.get(self.pos..).unwrap_or(&[])
    }
}

impl Reader for SliceReader<'_> {
    type Error = ();

    fn read(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error> {
        let remaining = self.remaining();
        let to_copy = remaining.len().min(buf.len()).min(self.chunk_size);

        if let (Some(dest), Some(src)) = (buf.get_mut(..to_copy), remaining.get(..to_copy)) {
            dest.copy_from_slice(src);
            self.pos = self.pos.saturating_add(to_copy);
            return Ok(to_copy);
        }
        Ok(0)
    }
}

// SPDX-License-Identifier: Apache-2.0

//! [`Reader`] adapter for `std::io::Read` sources, and opening configuration
//! files by path.

use std::fs::File;
use std::io::{self, BufReader, ErrorKind, Read};
use std::path::Path;

use crate::diagnostics::{Diagnostic, DiagnosticSink};
use crate::{ConfigReader, ParseError, ParserOptions, Reader};

/// A [`Reader`] over any `std::io::Read`.
///
/// Interrupted reads are retried, every other I/O error is passed on.
#[derive(Debug)]
pub struct IoReader<R> {
    inner: R,
}

impl<R: Read> IoReader<R> {
    pub fn new(inner: R) -> Self {
        Self { inner }
    }

    pub fn get_ref(&self) -> &R {
        &self.inner
    }

    pub fn into_inner(self) -> R {
        self.inner
    }
}

impl<R: Read> Reader for IoReader<R> {
    type Error = io::Error;

    fn read(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error> {
        loop {
            match self.inner.read(buf) {
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                other => return other,
            }
        }
    }
}

/// Buffered reader over a configuration file
pub type FileReader = IoReader<BufReader<File>>;

impl<D: DiagnosticSink> ConfigReader<FileReader, D> {
    /// Opens the configuration file at `path` and starts a session over it.
    ///
    /// Fails with [`ParseError::StreamUnavailable`] if the file cannot be
    /// opened; no session is open afterwards.
    pub fn open<P: AsRef<Path>>(
        &mut self,
        path: P,
        options: ParserOptions,
    ) -> Result<(), ParseError> {
        let path = path.as_ref();
        match File::open(path) {
            Ok(file) => self.begin(IoReader::new(BufReader::new(file)), options),
            Err(e) => {
                log::debug!(target: "picoini", "could not open {}: {e}", path.display());
                self.end();
                self.report(Diagnostic::StreamUnavailable);
                Err(ParseError::StreamUnavailable)
            }
        }
    }
}

// SPDX-License-Identifier: Apache-2.0

use alloc::vec::Vec;

/// Error types for LineBuffer operations
#[derive(Debug, PartialEq)]
pub enum LineBufferError {
    /// The backing storage could not be allocated
    AllocationFailed,
    /// Buffer is full and cannot accommodate more data
    BufferFull,
}

/// A byte buffer with a capacity fixed at construction.
///
/// Key design principles:
/// - Storage is reserved once, up front; writes never reallocate
/// - One slot of the capacity is kept for the terminator a C string would
///   need, so at most `capacity - 1` bytes are ever stored
/// - A write that would overflow is refused, never truncated
pub struct LineBuffer {
    /// Stored bytes, `data.len() < capacity` always holds
    data: Vec<u8>,
    /// Total size including the terminator slot
    capacity: usize,
}

impl LineBuffer {
    /// Allocate a buffer able to hold `max_len` bytes.
    pub fn new(max_len: usize) -> Result<Self, LineBufferError> {
        let capacity = max_len
            .checked_add(1)
            .ok_or(LineBufferError::AllocationFailed)?;
        let mut data = Vec::new();
        data.try_reserve_exact(capacity)
            .map_err(|_| LineBufferError::AllocationFailed)?;
        Ok(Self { data, capacity })
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// True when no further byte can be written.
    pub fn is_full(&self) -> bool {
        // -1 for a terminating null.
        self.data.len() >= self.capacity.saturating_sub(1)
    }

    /// Append a byte, refusing the write if it would fill the terminator slot.
    pub fn push(&mut self, byte: u8) -> Result<(), LineBufferError> {
        if self.is_full() {
            return Err(LineBufferError::BufferFull);
        }
        self.data.push(byte);
        Ok(())
    }

    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// Replace the content with `bytes`, or leave it untouched if they don't fit.
    pub fn replace_with(&mut self, bytes: &[u8]) -> Result<(), LineBufferError> {
        if bytes.len() >= self.capacity {
            return Err(LineBufferError::BufferFull);
        }
        self.data.clear();
        self.data.extend_from_slice(bytes);
        Ok(())
    }

    /// Drop everything from `len` onwards.
    pub fn truncate(&mut self, len: usize) {
        self.data.truncate(len);
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Bytes in `start..end`, or None if the range is out of bounds
    pub fn slice(&self, start: usize, end: usize) -> Option<&[u8]> {
        self.data.get(start..end)
    }
}

impl core::fmt::Debug for LineBuffer {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("LineBuffer")
            .field("data", &self.data.as_slice())
            .field("capacity", &self.capacity)
            .finish()
    }
}

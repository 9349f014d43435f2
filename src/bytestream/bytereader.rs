//! ByteReader: fixed-width big-endian reads over any I/O source.
//!
//! Multi-byte values are always assembled most significant byte first, whatever the
//! byte order of the host.
//!
//! NOTE: This module can read from any I/O source that supports the read() call.
//!
use std::io::{ErrorKind, Read};

use crate::error::{BpeError, Result};

const BUFFER_SIZE: usize = 64 * 1024;

/// Reads bytes and big-endian words from a buffered source.
#[derive(Debug)]
pub struct ByteReader<R> {
    buffer: Vec<u8>,
    cursor: usize,
    filled: usize,
    consumed: u64,
    source: R,
}

impl<R: Read> ByteReader<R> {
    /// Creates a new ByteReader (with a 64k buffer).
    pub fn new(source: R) -> Self {
        Self {
            buffer: vec![0; BUFFER_SIZE],
            cursor: 0,
            filled: 0,
            consumed: 0,
            source,
        }
    }

    /// Check (and refill) buffer. Returns true if we have data, false if there is no more
    fn have_data(&mut self) -> Result<bool> {
        if self.cursor < self.filled {
            return Ok(true);
        }
        loop {
            match self.source.read(&mut self.buffer) {
                Ok(0) => return Ok(false),
                Ok(size) => {
                    self.cursor = 0;
                    self.filled = size;
                    return Ok(true);
                }
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(e.into()),
            }
        }
    }

    /// Copy up to buf.len() bytes. Fewer bytes are only returned at the end of the input.
    pub fn fill(&mut self, buf: &mut [u8]) -> Result<usize> {
        let mut done = 0;
        while done < buf.len() {
            if !self.have_data()? {
                break;
            }
            let n = (self.filled - self.cursor).min(buf.len() - done);
            buf[done..done + n].copy_from_slice(&self.buffer[self.cursor..self.cursor + n]);
            self.cursor += n;
            done += n;
        }
        self.consumed += done as u64;
        Ok(done)
    }

    /// Read exactly N bytes, or fail with ShortRead reporting how many were found.
    fn array<const N: usize>(&mut self) -> Result<[u8; N]> {
        let mut out = [0_u8; N];
        let found = self.fill(&mut out)?;
        if found < N {
            return Err(BpeError::ShortRead { expected: N, found });
        }
        Ok(out)
    }

    /// Returns one byte verbatim.
    pub fn in8(&mut self) -> Result<u8> {
        self.array::<1>().map(|b| b[0])
    }

    /// Returns a big-endian u16.
    pub fn in16(&mut self) -> Result<u16> {
        let b = self.array::<2>()?;
        Ok((b[0] as u16) << 8 | b[1] as u16)
    }

    /// Returns a big-endian u32.
    pub fn in32(&mut self) -> Result<u32> {
        let b = self.array::<4>()?;
        Ok((b[0] as u32) << 24 | (b[1] as u32) << 16 | (b[2] as u32) << 8 | b[3] as u32)
    }

    /// Returns a Vec of exactly n bytes.
    pub fn in_bytes(&mut self, n: usize) -> Result<Vec<u8>> {
        let mut out = vec![0_u8; n];
        let found = self.fill(&mut out)?;
        if found < n {
            return Err(BpeError::ShortRead { expected: n, found });
        }
        Ok(out)
    }

    /// Total bytes handed out so far.
    pub fn consumed(&self) -> u64 {
        self.consumed
    }
}

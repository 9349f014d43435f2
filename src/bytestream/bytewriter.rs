use std::io::Write;

use crate::error::Result;

/// Writes bytes and big-endian words to any sink. Block records are normally
/// assembled in a `ByteWriter<Vec<u8>>` and then handed to the real output in one piece.
pub struct ByteWriter<W> {
    /// Handle to the output stream
    writer: W,
    /// Count of bytes written so far
    written: u64,
}

impl<W: Write> ByteWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, written: 0 }
    }

    /// Put one byte on the stream.
    pub fn out8(&mut self, data: u8) -> Result<()> {
        self.out_bytes(&[data])
    }

    /// Put a 16 bit word on the stream, high byte first.
    pub fn out16(&mut self, data: u16) -> Result<()> {
        self.out_bytes(&[(data >> 8) as u8, data as u8])
    }

    /// Put a 32 bit word on the stream, high byte first.
    pub fn out32(&mut self, data: u32) -> Result<()> {
        self.out_bytes(&[
            (data >> 24) as u8,
            (data >> 16) as u8,
            (data >> 8) as u8,
            data as u8,
        ])
    }

    pub fn out_bytes(&mut self, data: &[u8]) -> Result<()> {
        self.writer.write_all(data)?;
        self.written += data.len() as u64;
        Ok(())
    }

    pub fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }

    pub fn written(&self) -> u64 {
        self.written
    }

    pub fn get_ref(&self) -> &W {
        &self.writer
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

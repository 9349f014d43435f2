/// Byte counts for one compression or decompression run. The fields keep their
/// meaning in both directions: when decompressing, `original` is the bytes written
/// and `serialized` is the bytes of stream read.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CodecStats {
    pub blocks: usize,
    /// Uncompressed bytes
    pub original: u64,
    /// Bytes of the block records in the stream
    pub serialized: u64,
}

impl CodecStats {
    pub fn record(&mut self, original: usize, serialized: usize) {
        self.blocks += 1;
        self.original += original as u64;
        self.serialized += serialized as u64;
    }

    /// Percentage saved by compression. Negative when the output grew, 0 for empty input.
    pub fn reduction(&self) -> f64 {
        if self.original == 0 {
            return 0.0;
        }
        (self.original as f64 - self.serialized as f64) / self.original as f64 * 100.0
    }
}

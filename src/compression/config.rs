use crate::error::{BpeError, Result};

pub const MIN_BLOCK_SIZE: usize = 100;
/// Also the most a decoded block may hold: the length field is 16 bits.
pub const MAX_BLOCK_SIZE: usize = 65535;
pub const DEFAULT_BLOCK_SIZE: usize = 8000;

/// Settings handed to the block encoder when it is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BpeConfig {
    /// Maximum input bytes per block
    pub block_size: usize,
    /// Compress batches of blocks on the rayon pool. Output is byte-for-byte the same.
    pub parallel: bool,
}

impl BpeConfig {
    /// A sequential configuration, rejecting block sizes outside [100, 65535].
    pub fn new(block_size: usize) -> Result<Self> {
        if !(MIN_BLOCK_SIZE..=MAX_BLOCK_SIZE).contains(&block_size) {
            return Err(BpeError::BlockSizeOutOfRange {
                size: block_size,
                min: MIN_BLOCK_SIZE,
                max: MAX_BLOCK_SIZE,
            });
        }
        Ok(Self {
            block_size,
            parallel: false,
        })
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }
}

impl Default for BpeConfig {
    fn default() -> Self {
        Self {
            block_size: DEFAULT_BLOCK_SIZE,
            parallel: false,
        }
    }
}

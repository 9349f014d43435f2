//! Error types for the BPE compressor.
//!
//! Every failure is terminal: nothing is retried, and the binary reports the
//! error and exits.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum BpeError {
    /// The input could not be opened before any output was produced
    #[error("{name}: {source}")]
    InputUnavailable {
        name: String,
        #[source]
        source: std::io::Error,
    },

    /// The output could not be created
    #[error("{name}: {source}")]
    OutputUnavailable {
        name: String,
        #[source]
        source: std::io::Error,
    },

    /// End of input in the middle of a block record
    #[error("{name}: Bad format")]
    TruncatedStream { name: String },

    /// A block whose dictionary expands past the largest possible block
    #[error("{name}: Bad format (block {block} expands beyond {limit} bytes)")]
    CorruptBlock {
        name: String,
        block: usize,
        limit: usize,
    },

    #[error("Incorrect block size. It must be in the range [{min}, {max}]")]
    BlockSizeOutOfRange { size: usize, min: usize, max: usize },

    #[error("{0}")]
    InvalidArguments(String),

    /// Fewer bytes were available than a fixed-width read needed
    #[error("short read: expected {expected} bytes, found {found}")]
    ShortRead { expected: usize, found: usize },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl BpeError {
    /// True for a read that found no bytes at all, i.e. a clean end of stream.
    pub fn is_clean_eof(&self) -> bool {
        matches!(self, BpeError::ShortRead { found: 0, .. })
    }
}

pub type Result<T> = std::result::Result<T, BpeError>;

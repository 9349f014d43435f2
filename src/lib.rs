//! Byte Pair Encoding file compressor.
//!
//! Input is cut into blocks (8000 bytes by default, 100 to 65535). In each block the
//! most frequent adjacent byte pair is repeatedly replaced by a byte value the block
//! does not use, and the substitutions are stored in front of the block.
//!
//! Basic usage to compress a file is as follows:
//!
//! `$> bpe -c -v test.txt`
//!
//! This will compress the file and create the file test.txt.bpe.
//! The original file will be deleted unless -k or -o is given.
//!
//! The codec itself works on any `Read`/`Write` pair:
//!
//! ```
//! let packed = bpe::compress_bytes(b"abababababab", 100).unwrap();
//! assert_eq!(bpe::decompress_bytes(&packed).unwrap(), b"abababababab".to_vec());
//! ```
//!
pub mod bytestream;
pub mod compression;
pub mod error;
pub mod tools;

pub use compression::compress::{compress_bytes, BlockEncoder};
pub use compression::config::{BpeConfig, DEFAULT_BLOCK_SIZE, MAX_BLOCK_SIZE, MIN_BLOCK_SIZE};
pub use compression::decompress::{decompress_bytes, BlockDecoder};
pub use compression::stats::CodecStats;
pub use error::{BpeError, Result};

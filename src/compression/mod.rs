//! The compression module holds the block codec of the BPE compressor.
//!
//! Compression happens block by block, each block on its own:
//! - Scan: count every adjacent byte pair and note which byte values never occur.
//! - Substitute: replace the most frequent pair with an unused byte value, record
//!   the (code, pair) entry, and repeat while some pair occurs at least 4 times and
//!   unused values remain.
//! - Serialize: dictionary size, the entries newest first, payload length, payload.
//!
//! Decompression reads the entries in stream order and expands each code back into
//! its pair. Newest first is exactly the order that undoes nested substitutions.
//!
//! All multi-byte fields are big-endian.
//!

pub mod compress;
pub mod compress_block;
pub mod config;
pub mod decompress;
pub mod dictionary;
pub mod expand_block;
pub mod stats;

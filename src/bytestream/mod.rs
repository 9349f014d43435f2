//! The bytestream module forms the I/O subsystem for the BPE compressor.
//!
//! Every multi-byte field of the block format goes through these two types, so the
//! stream is big-endian no matter which machine wrote it.
//!
pub mod bytereader;
pub mod bytewriter;

//! The tools module provides the helper structures used by the BPE block codec.
//!
//! The tools are:
//! - byte_list: Linked byte sequence with O(1) splicing, the live block while building.
//! - cli: Command line interface, output naming and argument validation.
//! - code_set: The byte values still free to stand in for a pair.
//! - pair_freq: 256 x 256 table of adjacent pair counts.
//!
pub mod byte_list;
pub mod cli;
pub mod code_set;
pub mod pair_freq;

use crate::tools::pair_freq::BytePair;

/// One substitution: `code` stands for `pair` within a single block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DictEntry {
    pub code: u8,
    pub pair: BytePair,
}

impl DictEntry {
    pub fn new(code: u8, pair: BytePair) -> Self {
        Self { code, pair }
    }

    /// The pair packed as it sits on the stream: first byte high, second byte low.
    pub fn packed_pair(&self) -> u16 {
        (self.pair.0 as u16) << 8 | self.pair.1 as u16
    }

    pub fn from_packed(code: u8, packed: u16) -> Self {
        Self::new(code, ((packed >> 8) as u8, packed as u8))
    }
}

/// Entries of one block. Built in creation order; the stream stores and the
/// expander consumes them newest first.
pub type Dictionary = Vec<DictEntry>;

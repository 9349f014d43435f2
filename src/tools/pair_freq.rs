/// A byte pair, first byte then second byte.
pub type BytePair = (u8, u8);

const TABLE_SIZE: usize = 256 * 256;

#[inline(always)]
fn slot(pair: BytePair) -> usize {
    (pair.0 as usize) << 8 | pair.1 as usize
}

/// Counts of every adjacent ordered byte pair in a block's live sequence.
#[derive(Debug, Clone)]
pub struct PairTable {
    counts: Vec<u32>,
}

impl PairTable {
    pub fn new() -> Self {
        Self {
            counts: vec![0_u32; TABLE_SIZE],
        }
    }

    /// Returns a table holding the pair counts of data.
    pub fn from_slice(data: &[u8]) -> Self {
        let mut table = Self::new();
        data.windows(2)
            .for_each(|w| table.counts[slot((w[0], w[1]))] += 1);
        table
    }

    /// Add one occurrence and return the new count.
    #[inline]
    pub fn increment(&mut self, pair: BytePair) -> u32 {
        let c = &mut self.counts[slot(pair)];
        *c += 1;
        *c
    }

    /// Remove one occurrence and return the new count.
    #[inline]
    pub fn decrement(&mut self, pair: BytePair) -> u32 {
        let c = &mut self.counts[slot(pair)];
        debug_assert!(*c > 0, "pair count underflow for {:?}", pair);
        *c = c.saturating_sub(1);
        *c
    }

    #[inline]
    pub fn get(&self, pair: BytePair) -> u32 {
        self.counts[slot(pair)]
    }

    /// Iterate over every pair with a non-zero count.
    pub fn nonzero(&self) -> impl Iterator<Item = (BytePair, u32)> + '_ {
        self.counts
            .iter()
            .enumerate()
            .filter(|&(_, &c)| c > 0)
            .map(|(i, &c)| (((i >> 8) as u8, i as u8), c))
    }
}

impl Default for PairTable {
    fn default() -> Self {
        Self::new()
    }
}

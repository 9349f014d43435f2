/// Set of byte values that are free to stand in for a pair within one block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeSet {
    bits: [u64; 4],
}

impl CodeSet {
    /// All 256 byte values.
    pub fn full() -> Self {
        Self { bits: [u64::MAX; 4] }
    }

    /// Every byte value that does not occur in data.
    pub fn unused_in(data: &[u8]) -> Self {
        let mut set = Self::full();
        data.iter().for_each(|&b| set.remove(b));
        set
    }

    pub fn contains(&self, code: u8) -> bool {
        self.bits[(code >> 6) as usize] & (1 << (code & 63)) != 0
    }

    pub fn remove(&mut self, code: u8) {
        self.bits[(code >> 6) as usize] &= !(1 << (code & 63));
    }

    pub fn len(&self) -> usize {
        self.bits.iter().map(|w| w.count_ones() as usize).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.bits.iter().all(|&w| w == 0)
    }

    /// Remove and return the smallest code left.
    pub fn take_lowest(&mut self) -> Option<u8> {
        let (word, bits) = self.bits.iter().enumerate().find(|&(_, &w)| w != 0)?;
        let code = (word * 64 + bits.trailing_zeros() as usize) as u8;
        self.remove(code);
        Some(code)
    }
}

#[cfg(test)]
mod test {
    use super::CodeSet;

    #[test]
    fn unused_excludes_seen_bytes() {
        let set = CodeSet::unused_in(b"\x00\x01abc\xff");
        assert_eq!(set.len(), 250);
        assert!(!set.contains(0));
        assert!(!set.contains(b'b'));
        assert!(!set.contains(255));
        assert!(set.contains(2));
    }

    #[test]
    fn take_lowest_ascends() {
        let mut set = CodeSet::unused_in(&[0, 1, 3]);
        assert_eq!(set.take_lowest(), Some(2));
        assert_eq!(set.take_lowest(), Some(4));
        assert!(!set.contains(4));
    }

    #[test]
    fn exhausted_set() {
        let all: Vec<u8> = (0..=255).collect();
        let mut set = CodeSet::unused_in(&all);
        assert!(set.is_empty());
        assert_eq!(set.take_lowest(), None);

        let mut set = CodeSet::unused_in(&all[..255]);
        assert_eq!(set.take_lowest(), Some(255));
        assert!(set.is_empty());
    }
}

use log::trace;

use super::dictionary::{DictEntry, Dictionary};
use crate::tools::byte_list::ByteList;
use crate::tools::code_set::CodeSet;
use crate::tools::pair_freq::{BytePair, PairTable};

/// A pair is only replaced when it occurs at least this often.
pub const MIN_PAIR_COUNT: u32 = 4;

/// Greedy dictionary construction for one block.
///
/// Holds the live sequence, its pair counts and the codes still free. Each `step`
/// replaces the current best pair everywhere in one pass and keeps the counts exact
/// by adjusting only the pairs around each replacement.
pub struct BlockBuilder {
    list: ByteList,
    table: PairTable,
    unused: CodeSet,
    best: (BytePair, u32),
    dictionary: Dictionary,
}

impl BlockBuilder {
    /// Scan the block once: sequence, pair counts, unused codes and the first most
    /// frequent pair.
    pub fn new(data: &[u8]) -> Self {
        let mut table = PairTable::new();
        let mut best = ((0, 0), 0);
        for w in data.windows(2) {
            let count = table.increment((w[0], w[1]));
            if count > best.1 {
                best = ((w[0], w[1]), count);
            }
        }
        Self {
            list: ByteList::from_slice(data),
            table,
            unused: CodeSet::unused_in(data),
            best,
            dictionary: Vec::new(),
        }
    }

    /// Make one substitution. Returns None once nothing worthwhile is left or every
    /// code has been assigned.
    pub fn step(&mut self) -> Option<DictEntry> {
        if self.best.1 < MIN_PAIR_COUNT {
            return None;
        }
        let code = self.unused.take_lowest()?;
        let entry = DictEntry::new(code, self.best.0);
        trace!(
            "Replacing {:02x}{:02x} ({} times) with {:02x}",
            entry.pair.0,
            entry.pair.1,
            self.best.1,
            code
        );
        self.dictionary.push(entry);
        self.replace(entry);
        Some(entry)
    }

    /// Rewrite every occurrence of entry.pair as entry.code, left to right. The next
    /// candidate is the pair whose count rose highest during the pass, taken with the
    /// count it had at that moment.
    fn replace(&mut self, entry: DictEntry) {
        let DictEntry { code, pair } = entry;
        let (first, second) = pair;
        let mut best = ((0, 0), 0);

        let mut cur = self.list.first();
        while let Some(a) = cur {
            let b = match self.list.next(a) {
                Some(b) => b,
                None => break,
            };
            if self.list.get(a) != first || self.list.get(b) != second {
                cur = Some(b);
                continue;
            }
            let before = self.list.prev(a);
            let after = self.list.next(b);

            self.table.decrement(pair);
            if let Some(p) = before {
                let left = self.list.get(p);
                self.table.decrement((left, first));
                let count = self.table.increment((left, code));
                if count > best.1 {
                    best = ((left, code), count);
                }
            }
            if let Some(n) = after {
                let right = self.list.get(n);
                self.table.decrement((second, right));
                let count = self.table.increment((code, right));
                if count > best.1 {
                    best = ((code, right), count);
                }
            }

            self.list.remove_range(a, after);
            self.list.insert_before(after, code);
            // The new code never starts the pair, so resume behind it.
            cur = after;
        }
        self.best = best;
    }

    pub fn table(&self) -> &PairTable {
        &self.table
    }

    pub fn sequence(&self) -> Vec<u8> {
        self.list.to_vec()
    }

    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    /// Dictionary in creation order plus the substituted sequence.
    pub fn finish(self) -> (Dictionary, Vec<u8>) {
        let data = self.list.to_vec();
        (self.dictionary, data)
    }
}

/// Run BPE on one block until no substitution pays off.
pub fn compress_block(data: &[u8]) -> (Dictionary, Vec<u8>) {
    let mut builder = BlockBuilder::new(data);
    while builder.step().is_some() {}
    builder.finish()
}

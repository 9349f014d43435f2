//! A doubly linked list of bytes stored in an index arena.
//!
//! Substitution rewrites every occurrence of a pair in one left-to-right pass. Each
//! rewrite removes two elements and inserts one, so the live sequence has to splice
//! in O(1) without shifting its tail. Cursors are slot indices; a cursor stays valid
//! until its own element is removed. Removed slots are recycled through a free list.

const NIL: usize = usize::MAX;

#[derive(Debug, Clone, Copy)]
struct Node {
    value: u8,
    prev: usize,
    next: usize,
}

#[derive(Debug, Clone)]
pub struct ByteList {
    nodes: Vec<Node>,
    free: Vec<usize>,
    head: usize,
    tail: usize,
    len: usize,
}

impl ByteList {
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            free: Vec::new(),
            head: NIL,
            tail: NIL,
            len: 0,
        }
    }

    pub fn from_slice(data: &[u8]) -> Self {
        let mut list = Self::new();
        list.nodes.reserve_exact(data.len());
        for &b in data {
            list.insert_before(None, b);
        }
        list
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    fn link(idx: usize) -> Option<usize> {
        if idx == NIL {
            None
        } else {
            Some(idx)
        }
    }

    /// Cursor of the first element.
    pub fn first(&self) -> Option<usize> {
        Self::link(self.head)
    }

    pub fn last(&self) -> Option<usize> {
        Self::link(self.tail)
    }

    pub fn next(&self, at: usize) -> Option<usize> {
        Self::link(self.nodes[at].next)
    }

    pub fn prev(&self, at: usize) -> Option<usize> {
        Self::link(self.nodes[at].prev)
    }

    pub fn get(&self, at: usize) -> u8 {
        self.nodes[at].value
    }

    /// Insert `value` in front of the element at `at`, or at the end when `at` is None.
    /// Returns the cursor of the new element.
    pub fn insert_before(&mut self, at: Option<usize>, value: u8) -> usize {
        let next = at.unwrap_or(NIL);
        let prev = match at {
            Some(i) => self.nodes[i].prev,
            None => self.tail,
        };
        let node = Node { value, prev, next };
        let idx = match self.free.pop() {
            Some(slot) => {
                self.nodes[slot] = node;
                slot
            }
            None => {
                self.nodes.push(node);
                self.nodes.len() - 1
            }
        };
        if prev == NIL {
            self.head = idx;
        } else {
            self.nodes[prev].next = idx;
        }
        if next == NIL {
            self.tail = idx;
        } else {
            self.nodes[next].prev = idx;
        }
        self.len += 1;
        idx
    }

    /// Remove the run [from, to). `to` of None removes through the end of the list.
    /// Returns `to`, which remains a valid cursor.
    pub fn remove_range(&mut self, from: usize, to: Option<usize>) -> Option<usize> {
        let stop = to.unwrap_or(NIL);
        let before = self.nodes[from].prev;
        let mut cur = from;
        while cur != stop {
            debug_assert!(cur != NIL, "range end is not after range start");
            let next = self.nodes[cur].next;
            self.free.push(cur);
            self.len -= 1;
            cur = next;
        }
        if before == NIL {
            self.head = stop;
        } else {
            self.nodes[before].next = stop;
        }
        if stop == NIL {
            self.tail = before;
        } else {
            self.nodes[stop].prev = before;
        }
        to
    }

    pub fn iter(&self) -> Iter<'_> {
        Iter {
            list: self,
            cur: self.head,
        }
    }

    pub fn to_vec(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.len);
        out.extend(self.iter());
        out
    }
}

impl Default for ByteList {
    fn default() -> Self {
        Self::new()
    }
}

pub struct Iter<'a> {
    list: &'a ByteList,
    cur: usize,
}

impl Iterator for Iter<'_> {
    type Item = u8;
    fn next(&mut self) -> Option<u8> {
        if self.cur == NIL {
            return None;
        }
        let node = self.list.nodes[self.cur];
        self.cur = node.next;
        Some(node.value)
    }
}

#[cfg(test)]
mod test {
    use super::ByteList;

    #[test]
    fn from_slice_round_trips() {
        let list = ByteList::from_slice(b"hello");
        assert_eq!(list.len(), 5);
        assert_eq!(list.to_vec(), b"hello".to_vec());
        assert!(ByteList::from_slice(&[]).is_empty());
    }

    #[test]
    fn splice_pair_into_one() {
        // "abcd" -> "aXd"
        let mut list = ByteList::from_slice(b"abcd");
        let a = list.first().unwrap();
        let b = list.next(a).unwrap();
        let d = list.next(list.next(b).unwrap());
        let after = list.remove_range(b, d);
        let x = list.insert_before(after, b'X');
        assert_eq!(list.to_vec(), b"aXd".to_vec());
        assert_eq!(list.prev(x), Some(a));
        assert_eq!(list.next(x), d);
        assert_eq!(list.len(), 3);
    }

    #[test]
    fn remove_at_both_ends() {
        let mut list = ByteList::from_slice(b"abcde");
        let a = list.first().unwrap();
        let c = list.next(list.next(a).unwrap()).unwrap();
        list.remove_range(a, Some(c));
        assert_eq!(list.to_vec(), b"cde".to_vec());
        let d = list.next(c).unwrap();
        list.remove_range(d, None);
        assert_eq!(list.to_vec(), b"c".to_vec());
        assert_eq!(list.last(), Some(c));
        list.insert_before(None, b'z');
        list.insert_before(Some(c), b'y');
        assert_eq!(list.to_vec(), b"ycz".to_vec());
    }

    #[test]
    fn slots_are_recycled() {
        let mut list = ByteList::from_slice(b"aaaa");
        let a = list.first().unwrap();
        let b = list.next(a).unwrap();
        list.remove_range(a, list.next(b));
        let slot = list.insert_before(list.first(), b'Q');
        assert!(slot == a || slot == b);
        assert_eq!(list.to_vec(), b"Qaa".to_vec());
        assert_eq!(list.first(), Some(slot));
    }

    #[test]
    fn default_is_empty() {
        let mut list = ByteList::default();
        assert!(list.is_empty());
        assert_eq!(list.first(), None);
        assert_eq!(list.last(), None);
        let x = list.insert_before(None, 1);
        list.insert_before(None, 2);
        assert_eq!(list.first(), Some(x));
        assert_eq!(list.to_vec(), vec![1, 2]);
    }

    #[test]
    fn remove_everything() {
        let mut list = ByteList::from_slice(b"xyz");
        let first = list.first().unwrap();
        list.remove_range(first, None);
        assert!(list.is_empty());
        assert_eq!(list.first(), None);
        assert_eq!(list.last(), None);
        list.insert_before(None, 7);
        assert_eq!(list.to_vec(), vec![7]);
    }
}

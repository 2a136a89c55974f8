/// A set of the integers in `0..capacity`, backed by a vector of flags.
/// Keeps a running count so `len` does not scan.
#[derive(Clone, Debug, PartialEq)]
pub struct RangeSet {
    len: usize,
    flags: Vec<bool>,
}

impl RangeSet {
    /// Creates an empty set
    pub fn new(capacity: usize) -> Self {
        Self {
            len: 0,
            flags: vec![false; capacity],
        }
    }

    /// Creates a set containing every integer in `0..capacity`
    pub fn with_all(capacity: usize) -> Self {
        Self {
            len: capacity,
            flags: vec![true; capacity],
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn contains(&self, n: usize) -> bool {
        self.flags.get(n).copied().unwrap_or(false)
    }

    /// Returns `false` if `n` was already present
    pub fn insert(&mut self, n: usize) -> bool {
        if self.flags[n] {
            return false;
        }
        self.flags[n] = true;
        self.len += 1;
        true
    }

    /// Returns `false` if `n` was not present
    pub fn remove(&mut self, n: usize) -> bool {
        if !self.contains(n) {
            return false;
        }
        self.flags[n] = false;
        self.len -= 1;
        true
    }

    pub fn iter(&self) -> Iter<'_> {
        Iter {
            flags: &self.flags,
            index: 0,
        }
    }
}

pub struct Iter<'a> {
    flags: &'a [bool],
    index: usize,
}

impl Iterator for Iter<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        while self.index < self.flags.len() {
            let i = self.index;
            self.index += 1;
            if self.flags[i] {
                return Some(i);
            }
        }
        None
    }
}

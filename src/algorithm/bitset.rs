use crate::puzzle::vocabulary::WordId;
use bitvec::prelude::*;
use std::fmt;

/// Fixed-size bitset over the word list, one bit per `WordId`
///
/// Backs every slot domain. Iteration yields ids in ascending order, which is
/// the lexical order of the word list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WordBitset {
    bits: BitVec,
}

impl WordBitset {
    /// Create a bitset with no words present
    pub fn new(word_count: usize) -> Self {
        Self {
            bits: bitvec![0; word_count],
        }
    }

    /// Create a bitset holding exactly the given ids
    pub fn from_ids(ids: impl IntoIterator<Item = WordId>, word_count: usize) -> Self {
        let mut bitset = Self::new(word_count);
        for id in ids {
            bitset.insert(id);
        }
        bitset
    }

    /// Capacity in words
    pub fn capacity(&self) -> usize {
        self.bits.len()
    }

    /// Insert a word; ids beyond capacity are ignored
    pub fn insert(&mut self, word: WordId) {
        if word < self.bits.len() {
            self.bits.set(word, true);
        }
    }

    /// Remove a word, returning whether it was present
    pub fn remove(&mut self, word: WordId) -> bool {
        let present = self.contains(word);
        if present {
            self.bits.set(word, false);
        }
        present
    }

    /// Test word membership
    pub fn contains(&self, word: WordId) -> bool {
        self.bits.get(word).as_deref() == Some(&true)
    }

    /// Drop every word except `word`, which is inserted if it was absent
    pub fn retain_only(&mut self, word: WordId) {
        self.bits.fill(false);
        self.insert(word);
    }

    /// Test if no words are present
    pub fn is_empty(&self) -> bool {
        self.bits.not_any()
    }

    /// Count words in the set
    pub fn count(&self) -> usize {
        self.bits.count_ones()
    }

    /// Iterate over present ids in ascending order
    pub fn iter(&self) -> impl Iterator<Item = WordId> + '_ {
        self.bits.iter_ones()
    }

    /// Extract all present ids as a vector
    pub fn to_vec(&self) -> Vec<WordId> {
        self.iter().collect()
    }
}

impl fmt::Display for WordBitset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "WordBitset({} words: {:?})", self.count(), self.to_vec())
    }
}

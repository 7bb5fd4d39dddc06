//! Partial mapping from slots to chosen words

use crate::puzzle::model::SlotId;
use crate::puzzle::vocabulary::WordId;
use std::collections::BTreeMap;

/// Words committed so far, keyed by slot
///
/// Grows by one entry per successful search step and shrinks by one on
/// backtrack.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Assignment {
    entries: BTreeMap<SlotId, WordId>,
}

impl Assignment {
    /// Create an empty assignment
    pub fn new() -> Self {
        Self::default()
    }

    /// Commit `word` to `slot`, returning the word it replaces
    pub fn insert(&mut self, slot: SlotId, word: WordId) -> Option<WordId> {
        self.entries.insert(slot, word)
    }

    /// Uncommit `slot`
    pub fn remove(&mut self, slot: SlotId) -> Option<WordId> {
        self.entries.remove(&slot)
    }

    /// Word committed to `slot`
    pub fn get(&self, slot: SlotId) -> Option<WordId> {
        self.entries.get(&slot).copied()
    }

    /// Whether `slot` has a word
    pub fn contains(&self, slot: SlotId) -> bool {
        self.entries.contains_key(&slot)
    }

    /// Number of committed slots
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when nothing is committed
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over `(slot, word)` pairs in slot order
    pub fn iter(&self) -> impl Iterator<Item = (SlotId, WordId)> + '_ {
        self.entries.iter().map(|(&slot, &word)| (slot, word))
    }
}

impl FromIterator<(SlotId, WordId)> for Assignment {
    fn from_iter<T: IntoIterator<Item = (SlotId, WordId)>>(iter: T) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

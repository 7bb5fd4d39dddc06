//! Public result of a successful fill

use crate::algorithm::assignment::Assignment;
use crate::io::error::{Result, invariant_violation};
use crate::puzzle::model::Puzzle;
use crate::puzzle::slot::Slot;
use crate::puzzle::vocabulary::WordList;
use std::collections::BTreeMap;

/// Complete, consistent mapping from every slot to its word
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Solution {
    entries: BTreeMap<Slot, String>,
}

impl Solution {
    /// Resolve an assignment of ids into slot values and word text
    ///
    /// # Errors
    ///
    /// Returns `InvariantViolation` if the assignment references a slot or word
    /// that does not exist
    pub fn from_assignment(
        puzzle: &Puzzle,
        words: &WordList,
        assignment: &Assignment,
    ) -> Result<Self> {
        let mut entries = BTreeMap::new();
        for (slot_id, word_id) in assignment.iter() {
            let slot = puzzle
                .slot(slot_id)
                .ok_or_else(|| invariant_violation(&format!("unknown slot {slot_id}")))?;
            let word = words
                .get(word_id)
                .ok_or_else(|| invariant_violation(&format!("unknown word {word_id}")))?;
            entries.insert(*slot, word.as_str().to_string());
        }
        Ok(Self { entries })
    }

    /// Word filled into `slot`
    pub fn get(&self, slot: &Slot) -> Option<&str> {
        self.entries.get(slot).map(String::as_str)
    }

    /// Iterate over `(slot, word)` pairs ordered by slot position
    pub fn iter(&self) -> impl Iterator<Item = (&Slot, &str)> + '_ {
        self.entries.iter().map(|(slot, word)| (slot, word.as_str()))
    }

    /// Number of filled slots
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True for puzzles without slots
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(Slot, String)> for Solution {
    fn from_iter<T: IntoIterator<Item = (Slot, String)>>(iter: T) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

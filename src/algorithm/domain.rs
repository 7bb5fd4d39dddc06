//! Per-slot candidate sets with snapshot and restore for backtracking

use crate::algorithm::bitset::WordBitset;
use crate::io::error::{Result, invariant_violation};
use crate::puzzle::model::{Puzzle, SlotId};
use crate::puzzle::vocabulary::{WordId, WordList};

/// Opaque deep copy of every slot's domain
///
/// Owned by the choice point that took it. A failed value can be dropped from
/// the copy so that the next restore does not reintroduce it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DomainSnapshot {
    domains: Vec<WordBitset>,
}

impl DomainSnapshot {
    /// Remove `word` from the saved domain of `slot`
    ///
    /// # Errors
    ///
    /// Returns `InvariantViolation` if `slot` is not part of the snapshot
    pub fn remove(&mut self, slot: SlotId, word: WordId) -> Result<bool> {
        self.domains
            .get_mut(slot)
            .map(|domain| domain.remove(word))
            .ok_or_else(|| invariant_violation(&format!("slot {slot} missing from snapshot")))
    }

    /// Saved domain of `slot`
    pub fn domain(&self, slot: SlotId) -> Option<&WordBitset> {
        self.domains.get(slot)
    }
}

/// Mutable mapping from each slot to its remaining candidate words
///
/// Domains only shrink during propagation; the search forks and rewinds them
/// through [`DomainStore::snapshot`] and [`DomainStore::restore`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DomainStore {
    domains: Vec<WordBitset>,
}

impl DomainStore {
    /// Apply node consistency: each slot starts with every word of its exact length
    ///
    /// Must run once, before any arc consistency.
    pub fn initialize(puzzle: &Puzzle, words: &WordList) -> Self {
        let domains = puzzle
            .slots()
            .iter()
            .map(|slot| WordBitset::from_ids(words.ids_with_length(slot.length), words.len()))
            .collect();

        Self { domains }
    }

    /// Deep copy of the current domains
    pub fn snapshot(&self) -> DomainSnapshot {
        DomainSnapshot {
            domains: self.domains.clone(),
        }
    }

    /// Replace every domain with the snapshot's contents
    pub fn restore(&mut self, snapshot: DomainSnapshot) {
        self.domains = snapshot.domains;
    }

    /// Remove `word` from the domain of `slot`, returning whether it was present
    ///
    /// # Errors
    ///
    /// Returns `InvariantViolation` if `slot` has no domain
    pub fn remove(&mut self, slot: SlotId, word: WordId) -> Result<bool> {
        Ok(self.domain_mut(slot)?.remove(word))
    }

    /// Collapse the domain of `slot` to exactly `{word}`
    ///
    /// # Errors
    ///
    /// Returns `InvariantViolation` if `slot` has no domain
    pub fn set_singleton(&mut self, slot: SlotId, word: WordId) -> Result<()> {
        self.domain_mut(slot)?.retain_only(word);
        Ok(())
    }

    /// Current domain of `slot`
    pub fn domain(&self, slot: SlotId) -> Option<&WordBitset> {
        self.domains.get(slot)
    }

    /// Mutable access for propagation
    ///
    /// # Errors
    ///
    /// Returns `InvariantViolation` if `slot` has no domain
    pub fn domain_mut(&mut self, slot: SlotId) -> Result<&mut WordBitset> {
        self.domains
            .get_mut(slot)
            .ok_or_else(|| invariant_violation(&format!("slot {slot} missing from domain store")))
    }

    /// Number of remaining candidates for `slot` (0 for unknown slots)
    pub fn len(&self, slot: SlotId) -> usize {
        self.domain(slot).map_or(0, WordBitset::count)
    }

    /// Remaining candidate ids for `slot` in ascending order
    pub fn words(&self, slot: SlotId) -> Vec<WordId> {
        self.domain(slot).map(WordBitset::to_vec).unwrap_or_default()
    }

    /// Number of slots tracked
    pub const fn slot_count(&self) -> usize {
        self.domains.len()
    }

    /// True if any slot has no candidates left
    ///
    /// This is the authoritative failure test after propagation.
    pub fn has_empty(&self) -> bool {
        self.domains.iter().any(WordBitset::is_empty)
    }
}

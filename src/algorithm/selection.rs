use crate::{
    algorithm::assignment::Assignment,
    algorithm::domain::DomainStore,
    puzzle::model::{Puzzle, SlotId},
    puzzle::vocabulary::{WordId, WordList},
};
use std::cmp::Reverse;
use std::collections::HashMap;

/// Pick the next slot to fill
///
/// Minimum remaining values first, then the highest degree, then the lowest
/// slot id so the choice is reproducible. Returns `None` when every slot is
/// assigned.
pub fn select_unassigned_slot(
    puzzle: &Puzzle,
    domains: &DomainStore,
    assignment: &Assignment,
) -> Option<SlotId> {
    (0..puzzle.slot_count())
        .filter(|&slot| !assignment.contains(slot))
        .min_by_key(|&slot| (domains.len(slot), Reverse(puzzle.degree(slot)), slot))
}

/// Letter frequencies at the shared cell of one unassigned neighbor
struct NeighborProfile {
    offset_in_slot: usize,
    domain_size: usize,
    letter_counts: HashMap<char, usize>,
}

impl NeighborProfile {
    fn ruled_out(&self, letter: Option<char>) -> usize {
        let compatible = letter
            .and_then(|letter| self.letter_counts.get(&letter))
            .copied()
            .unwrap_or(0);
        self.domain_size.saturating_sub(compatible)
    }
}

/// Order the candidates of `slot` by least-constraining value
///
/// Each word is scored by how many words it would rule out across the
/// domains of unassigned neighbors; the lowest score comes first and ties
/// keep ascending word id order.
pub fn order_domain_values(
    puzzle: &Puzzle,
    words: &WordList,
    domains: &DomainStore,
    assignment: &Assignment,
    slot: SlotId,
) -> Vec<WordId> {
    let profiles: Vec<NeighborProfile> = puzzle
        .neighbors(slot)
        .iter()
        .filter(|&&neighbor| !assignment.contains(neighbor))
        .filter_map(|&neighbor| {
            let (i, j) = puzzle.overlap(slot, neighbor)?;
            let mut letter_counts = HashMap::new();
            for word in domains.words(neighbor) {
                if let Some(letter) = words.get(word).and_then(|w| w.letter(j)) {
                    *letter_counts.entry(letter).or_insert(0) += 1;
                }
            }
            Some(NeighborProfile {
                offset_in_slot: i,
                domain_size: domains.len(neighbor),
                letter_counts,
            })
        })
        .collect();

    let mut candidates = domains.words(slot);
    candidates.sort_by_cached_key(|&word| {
        let ruled_out: usize = profiles
            .iter()
            .map(|profile| {
                profile.ruled_out(
                    words
                        .get(word)
                        .and_then(|w| w.letter(profile.offset_in_slot)),
                )
            })
            .sum();
        (ruled_out, word)
    });
    candidates
}

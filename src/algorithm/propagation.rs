use crate::{
    algorithm::domain::DomainStore,
    io::error::{Result, invariant_violation},
    puzzle::model::{Arc, Puzzle, SlotId},
    puzzle::vocabulary::WordList,
};
use std::collections::{HashSet, VecDeque};

/// FIFO work list of arcs awaiting revision
///
/// An arc that is already pending is not queued twice; processing it once
/// covers both requests.
#[derive(Debug, Default)]
pub struct ArcQueue {
    queue: VecDeque<Arc>,
    pending: HashSet<Arc>,
}

impl ArcQueue {
    /// Create an empty queue
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a queue holding `arcs` in order
    pub fn from_arcs(arcs: impl IntoIterator<Item = Arc>) -> Self {
        let mut queue = Self::new();
        for arc in arcs {
            queue.push(arc);
        }
        queue
    }

    /// Add an arc at the back unless it is already pending
    pub fn push(&mut self, arc: Arc) -> bool {
        let inserted = self.pending.insert(arc);
        if inserted {
            self.queue.push_back(arc);
        }
        inserted
    }

    /// Remove and return the next arc
    pub fn pop(&mut self) -> Option<Arc> {
        let arc = self.queue.pop_front()?;
        self.pending.remove(&arc);
        Some(arc)
    }

    /// Check if the queue is empty
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Get the number of pending arcs
    pub fn len(&self) -> usize {
        self.queue.len()
    }
}

/// Make `x` arc consistent with `y`
///
/// Removes every word of `x` whose letter at the shared cell matches no
/// remaining word of `y`. Returns whether anything was removed.
///
/// # Errors
///
/// Returns `InvariantViolation` if `(x, y)` has no overlap or either slot has
/// no domain
pub fn revise(
    puzzle: &Puzzle,
    words: &WordList,
    domains: &mut DomainStore,
    x: SlotId,
    y: SlotId,
) -> Result<bool> {
    let (i, j) = puzzle
        .overlap(x, y)
        .ok_or_else(|| invariant_violation(&format!("arc ({x}, {y}) has no overlap")))?;

    let supported: HashSet<char> = domains
        .domain(y)
        .ok_or_else(|| invariant_violation(&format!("slot {y} missing from domain store")))?
        .iter()
        .filter_map(|word| words.get(word).and_then(|w| w.letter(j)))
        .collect();

    let domain_x = domains.domain_mut(x)?;
    let unsupported: Vec<_> = domain_x
        .iter()
        .filter(|&word| {
            words
                .get(word)
                .and_then(|w| w.letter(i))
                .is_none_or(|letter| !supported.contains(&letter))
        })
        .collect();

    for &word in &unsupported {
        domain_x.remove(word);
    }

    Ok(!unsupported.is_empty())
}

/// Run AC-3 over `arcs` until the queue drains or a domain empties
///
/// Each time revising `(x, y)` shrinks `x`, every arc `(k, x)` for the other
/// neighbors `k` of `x` is queued again. Emptiness is reported through
/// [`DomainStore::has_empty`], not the return value, which is the number of
/// revisions performed.
///
/// # Errors
///
/// Returns `InvariantViolation` if an arc has no overlap
pub fn ac3(
    puzzle: &Puzzle,
    words: &WordList,
    domains: &mut DomainStore,
    arcs: impl IntoIterator<Item = Arc>,
) -> Result<usize> {
    let mut queue = ArcQueue::from_arcs(arcs);
    let mut revisions = 0;

    while let Some((x, y)) = queue.pop() {
        revisions += 1;
        if !revise(puzzle, words, domains, x, y)? {
            continue;
        }

        if domains.len(x) == 0 {
            break;
        }

        for &k in puzzle.neighbors(x) {
            if k != y {
                queue.push((k, x));
            }
        }
    }

    Ok(revisions)
}

/// Arcs `(neighbor, slot)` for every neighbor of `slot`
///
/// After only `slot` has changed, these are the arcs that can prune anything.
pub fn incoming_arcs(puzzle: &Puzzle, slot: SlotId) -> Vec<Arc> {
    puzzle
        .neighbors(slot)
        .iter()
        .map(|&neighbor| (neighbor, slot))
        .collect()
}

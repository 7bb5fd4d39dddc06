//! Backtracking search over partial assignments
//!
//! Recursion is replaced by an explicit stack of choice points. Each choice
//! point owns the domain snapshot taken before its slot was committed, the
//! ordered candidates for that slot, and the value currently being tried.
//! Failed values are dropped from the snapshot itself, so restoring it never
//! brings a refuted word back.

use crate::{
    algorithm::assignment::Assignment,
    algorithm::domain::{DomainSnapshot, DomainStore},
    algorithm::propagation::{ac3, incoming_arcs},
    algorithm::selection::{order_domain_values, select_unassigned_slot},
    algorithm::solution::Solution,
    algorithm::validation::{is_complete, is_consistent},
    io::error::{Result, invariant_violation},
    puzzle::model::{Puzzle, SlotId},
    puzzle::vocabulary::{WordId, WordList},
};

/// Counters describing one search run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStatistics {
    /// Values committed and found consistent
    pub states: usize,
    /// Choice points abandoned after exhausting every candidate
    pub backtracks: usize,
    /// Arc revisions performed, including the initial pass
    pub revisions: usize,
    /// Deepest choice-point stack reached
    pub max_depth: usize,
}

/// Receives progress notifications while the search runs
pub trait SearchObserver {
    /// Called after a value is committed and propagated successfully
    fn on_commit(&mut self, _statistics: &SearchStatistics) {}

    /// Called after a choice point runs out of candidates
    fn on_backtrack(&mut self, _statistics: &SearchStatistics) {}
}

impl SearchObserver for () {}

/// A slot being branched on
#[derive(Debug)]
struct ChoicePoint {
    slot: SlotId,
    candidates: Vec<WordId>,
    next: usize,
    current: Option<WordId>,
    snapshot: DomainSnapshot,
}

impl ChoicePoint {
    fn take_next(&mut self) -> Option<WordId> {
        let word = self.candidates.get(self.next).copied();
        self.next += 1;
        self.current = word;
        word
    }
}

enum Progress {
    Committed,
    Exhausted,
}

/// Fills a puzzle with arc consistency and backtracking
///
/// Owns the domain store for the duration of the search. The puzzle and word
/// list are shared read-only.
pub struct Solver<'a> {
    puzzle: &'a Puzzle,
    words: &'a WordList,
    domains: DomainStore,
    assignment: Assignment,
    stack: Vec<ChoicePoint>,
    statistics: SearchStatistics,
}

impl<'a> Solver<'a> {
    /// Create a solver with node-consistent domains
    pub fn new(puzzle: &'a Puzzle, words: &'a WordList) -> Self {
        Self {
            puzzle,
            words,
            domains: DomainStore::initialize(puzzle, words),
            assignment: Assignment::new(),
            stack: Vec::new(),
            statistics: SearchStatistics::default(),
        }
    }

    /// Current domains (the final ones after a run)
    pub const fn domains(&self) -> &DomainStore {
        &self.domains
    }

    /// Counters from the last run
    pub const fn statistics(&self) -> SearchStatistics {
        self.statistics
    }

    /// Search for a complete, consistent assignment
    ///
    /// Returns `Ok(None)` when the search space is exhausted. Each run starts
    /// again from node consistency.
    ///
    /// # Errors
    ///
    /// Returns `InvariantViolation` if the puzzle model is inconsistent with
    /// the domain store (missing overlaps or slots)
    pub fn run(&mut self, observer: &mut impl SearchObserver) -> Result<Option<Solution>> {
        self.domains = DomainStore::initialize(self.puzzle, self.words);
        self.assignment = Assignment::new();
        self.stack.clear();
        self.statistics = SearchStatistics::default();

        self.statistics.revisions += ac3(
            self.puzzle,
            self.words,
            &mut self.domains,
            self.puzzle.arcs(),
        )?;
        if self.domains.has_empty() {
            return Ok(None);
        }

        loop {
            if is_complete(self.puzzle, &self.assignment) {
                return Solution::from_assignment(self.puzzle, self.words, &self.assignment)
                    .map(Some);
            }

            self.push_choice_point()?;

            match self.advance(observer)? {
                Progress::Committed => {}
                Progress::Exhausted => return Ok(None),
            }
        }
    }

    fn push_choice_point(&mut self) -> Result<()> {
        let slot = select_unassigned_slot(self.puzzle, &self.domains, &self.assignment)
            .ok_or_else(|| invariant_violation(&"incomplete assignment with no free slot"))?;

        let candidates = order_domain_values(
            self.puzzle,
            self.words,
            &self.domains,
            &self.assignment,
            slot,
        );

        self.stack.push(ChoicePoint {
            slot,
            candidates,
            next: 0,
            current: None,
            snapshot: self.domains.snapshot(),
        });
        self.statistics.max_depth = self.statistics.max_depth.max(self.stack.len());
        Ok(())
    }

    /// Try candidates from the top choice point down until one commits
    fn advance(&mut self, observer: &mut impl SearchObserver) -> Result<Progress> {
        loop {
            let Some(point) = self.stack.last_mut() else {
                return Ok(Progress::Exhausted);
            };
            let slot = point.slot;

            let Some(word) = point.take_next() else {
                if let Some(exhausted) = self.stack.pop() {
                    self.domains.restore(exhausted.snapshot);
                }
                self.assignment.remove(slot);
                self.statistics.backtracks += 1;
                observer.on_backtrack(&self.statistics);
                self.refute_current()?;
                continue;
            };

            self.domains.restore(point.snapshot.clone());
            if self.commit(slot, word)? {
                self.statistics.states += 1;
                observer.on_commit(&self.statistics);
                return Ok(Progress::Committed);
            }
            self.refute_current()?;
        }
    }

    /// Commit `word` to `slot` and propagate; returns whether the result is consistent
    fn commit(&mut self, slot: SlotId, word: WordId) -> Result<bool> {
        self.domains.set_singleton(slot, word)?;
        self.assignment.insert(slot, word);

        let mut changed = vec![slot];
        for other in 0..self.puzzle.slot_count() {
            if other != slot
                && !self.assignment.contains(other)
                && self.domains.remove(other, word)?
            {
                changed.push(other);
            }
        }

        let arcs: Vec<_> = changed
            .iter()
            .flat_map(|&changed_slot| incoming_arcs(self.puzzle, changed_slot))
            .collect();
        self.statistics.revisions += ac3(self.puzzle, self.words, &mut self.domains, arcs)?;

        Ok(!self.domains.has_empty()
            && is_consistent(self.puzzle, self.words, &self.assignment))
    }

    /// Undo the value being tried at the top choice point and rule it out there
    fn refute_current(&mut self) -> Result<()> {
        if let Some(point) = self.stack.last_mut()
            && let Some(word) = point.current.take()
        {
            point.snapshot.remove(point.slot, word)?;
            self.assignment.remove(point.slot);
        }
        Ok(())
    }
}

/// Fill `puzzle` from `words`
///
/// `Ok(None)` means no assignment exists.
///
/// # Errors
///
/// Returns `InvariantViolation` for a defective puzzle model
pub fn solve(puzzle: &Puzzle, words: &WordList) -> Result<Option<Solution>> {
    Solver::new(puzzle, words).run(&mut ())
}

//! Length, overlap and uniqueness checks for assignments and solutions

use crate::algorithm::assignment::Assignment;
use crate::algorithm::solution::Solution;
use crate::puzzle::model::Puzzle;
use crate::puzzle::vocabulary::WordList;
use std::collections::HashSet;

/// True if every assigned word fits its slot, every assigned overlapping pair
/// agrees on the shared letter, and no word is used twice
///
/// Works on partial assignments; unassigned slots are ignored.
pub fn is_consistent(puzzle: &Puzzle, words: &WordList, assignment: &Assignment) -> bool {
    let mut used = HashSet::with_capacity(assignment.len());

    for (slot_id, word_id) in assignment.iter() {
        let (Some(slot), Some(word)) = (puzzle.slot(slot_id), words.get(word_id)) else {
            return false;
        };
        if word.len() != slot.length || !used.insert(word_id) {
            return false;
        }

        for &neighbor in puzzle.neighbors(slot_id) {
            let Some(other) = assignment.get(neighbor).and_then(|id| words.get(id)) else {
                continue;
            };
            let Some((i, j)) = puzzle.overlap(slot_id, neighbor) else {
                return false;
            };
            if word.letter(i).is_none() || word.letter(i) != other.letter(j) {
                return false;
            }
        }
    }

    true
}

/// True if every slot of the puzzle has a word
pub fn is_complete(puzzle: &Puzzle, assignment: &Assignment) -> bool {
    assignment.len() == puzzle.slot_count()
        && (0..puzzle.slot_count()).all(|slot| assignment.contains(slot))
}

/// Postcondition check on a public result: complete, letter-consistent and
/// word-unique for `puzzle`
pub fn is_valid_solution(puzzle: &Puzzle, solution: &Solution) -> bool {
    if solution.len() != puzzle.slot_count() {
        return false;
    }

    let mut used = HashSet::with_capacity(solution.len());
    for (slot_id, slot) in puzzle.slots().iter().enumerate() {
        let Some(word) = solution.get(slot) else {
            return false;
        };
        if word.chars().count() != slot.length || !used.insert(word) {
            return false;
        }

        for &neighbor in puzzle.neighbors(slot_id) {
            let (Some(other_slot), Some((i, j))) =
                (puzzle.slot(neighbor), puzzle.overlap(slot_id, neighbor))
            else {
                return false;
            };
            let Some(other) = solution.get(other_slot) else {
                return false;
            };
            if word.chars().nth(i).is_none() || word.chars().nth(i) != other.chars().nth(j) {
                return false;
            }
        }
    }

    true
}

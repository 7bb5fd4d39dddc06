//! Crossword grid filling as a constraint satisfaction problem
//!
//! A structure of fillable cells is turned into word slots linked by shared
//! cells. Slot domains start node consistent, are pruned with AC-3, and a
//! backtracking search guided by minimum-remaining-values, degree and
//! least-constraining-value ordering finds one complete fill in which every
//! crossing agrees and no word repeats.

#![forbid(unsafe_code)]

/// Domains, propagation, search and validation
pub mod algorithm;
/// Loading, rendering, progress and error handling
pub mod io;
/// Structure, slots, overlaps and the word list
pub mod puzzle;

pub use algorithm::search::{Solver, solve};
pub use algorithm::solution::Solution;
pub use io::error::{CrosswordError, Result};
pub use puzzle::{Direction, Puzzle, Slot, Structure, WordList};

//! Puzzle description: grid structure, slots, overlaps and the word list
//!
//! Everything in this module is immutable once built and shared read-only by
//! the solver.

/// Slot derivation and the overlap relation
pub mod model;
/// Word slots and directions
pub mod slot;
/// Fillable-cell grid layout
pub mod structure;
/// Candidate words
pub mod vocabulary;

pub use model::{Puzzle, SlotId};
pub use slot::{Direction, Slot};
pub use structure::Structure;
pub use vocabulary::{WordId, WordList};

/// Partial slot-to-word assignments
pub mod assignment;
/// Word membership bitsets backing slot domains
pub mod bitset;
/// Domain store with snapshot and restore
pub mod domain;
/// Arc consistency (AC-3)
pub mod propagation;
/// Backtracking search and the solve entry point
pub mod search;
/// Slot and value ordering heuristics
pub mod selection;
/// Public fill result
pub mod solution;
/// Consistency and completeness checks
pub mod validation;

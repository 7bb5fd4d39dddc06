//! Immutable constraint graph derived from a structure
//!
//! Slots are discovered once by scanning the grid, then every pair of slots
//! sharing a cell is recorded as a symmetric overlap. Neighbor lists are
//! cached since propagation and ordering query them constantly.

use crate::io::configuration::MIN_SLOT_LENGTH;
use crate::io::error::{CrosswordError, Result};
use crate::puzzle::slot::{Direction, Slot};
use crate::puzzle::structure::Structure;
use std::collections::HashMap;

/// Index of a slot in discovery order
pub type SlotId = usize;

/// An ordered pair of overlapping slots
pub type Arc = (SlotId, SlotId);

/// Slots of a structure and the overlap relation between them
#[derive(Debug, Clone)]
pub struct Puzzle {
    structure: Structure,
    slots: Vec<Slot>,
    index: HashMap<Slot, SlotId>,
    overlaps: HashMap<Arc, (usize, usize)>,
    neighbors: Vec<Vec<SlotId>>,
}

impl Puzzle {
    /// Derive slots and overlaps from a structure
    ///
    /// Rows and columns are scanned for maximal runs of fillable cells of at
    /// least [`MIN_SLOT_LENGTH`]. Discovery is row-major, and a down slot is
    /// recorded before an across slot starting at the same cell.
    ///
    /// # Errors
    ///
    /// Returns `InvariantViolation` if two slots share more than one cell
    pub fn from_structure(structure: Structure) -> Result<Self> {
        let slots = discover_slots(&structure);

        let index = slots
            .iter()
            .enumerate()
            .map(|(id, slot)| (*slot, id))
            .collect();

        let mut slots_by_cell: HashMap<(usize, usize), Vec<(SlotId, usize)>> = HashMap::new();
        for (id, slot) in slots.iter().enumerate() {
            for (offset, cell) in slot.cells().enumerate() {
                slots_by_cell.entry(cell).or_default().push((id, offset));
            }
        }

        let mut overlaps: HashMap<Arc, (usize, usize)> = HashMap::new();
        let mut neighbors: Vec<Vec<SlotId>> = vec![Vec::new(); slots.len()];

        let mut shared_cells: Vec<_> = slots_by_cell.into_iter().collect();
        shared_cells.sort_unstable_by_key(|(cell, _)| *cell);

        for (cell, occupants) in shared_cells {
            for &(x, offset_x) in &occupants {
                for &(y, offset_y) in &occupants {
                    if x == y {
                        continue;
                    }
                    if overlaps.insert((x, y), (offset_x, offset_y)).is_some() {
                        return Err(CrosswordError::InvariantViolation {
                            reason: format!(
                                "slots {x} and {y} share more than one cell (again at {cell:?})"
                            ),
                        });
                    }
                    if let Some(list) = neighbors.get_mut(x) {
                        list.push(y);
                    }
                }
            }
        }

        for list in &mut neighbors {
            list.sort_unstable();
        }

        Ok(Self {
            structure,
            slots,
            index,
            overlaps,
            neighbors,
        })
    }

    /// The structure this puzzle was derived from
    pub const fn structure(&self) -> &Structure {
        &self.structure
    }

    /// All slots in discovery order
    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    /// Number of slots
    pub const fn slot_count(&self) -> usize {
        self.slots.len()
    }

    /// Slot for an id
    pub fn slot(&self, id: SlotId) -> Option<&Slot> {
        self.slots.get(id)
    }

    /// Id of a slot value, if it belongs to this puzzle
    pub fn slot_id(&self, slot: &Slot) -> Option<SlotId> {
        self.index.get(slot).copied()
    }

    /// Slots overlapping `slot`, in ascending id order
    pub fn neighbors(&self, slot: SlotId) -> &[SlotId] {
        self.neighbors.get(slot).map_or(&[], Vec::as_slice)
    }

    /// Number of overlapping slots
    pub fn degree(&self, slot: SlotId) -> usize {
        self.neighbors(slot).len()
    }

    /// Offsets `(i, j)` such that letter `i` of `x` must equal letter `j` of `y`
    ///
    /// `None` for identical or non-overlapping slots.
    pub fn overlap(&self, x: SlotId, y: SlotId) -> Option<(usize, usize)> {
        self.overlaps.get(&(x, y)).copied()
    }

    /// Every ordered overlapping pair, sorted by `(x, y)`
    pub fn arcs(&self) -> Vec<Arc> {
        self.neighbors
            .iter()
            .enumerate()
            .flat_map(|(x, list)| list.iter().map(move |&y| (x, y)))
            .collect()
    }
}

fn discover_slots(structure: &Structure) -> Vec<Slot> {
    let mut slots = Vec::new();

    for row in 0..structure.height() {
        for col in 0..structure.width() {
            if !structure.is_fillable(row, col) {
                continue;
            }

            let starts_down = row == 0 || !structure.is_fillable(row - 1, col);
            if starts_down {
                let length = (row..structure.height())
                    .take_while(|&r| structure.is_fillable(r, col))
                    .count();
                if length >= MIN_SLOT_LENGTH {
                    slots.push(Slot::new(row, col, Direction::Down, length));
                }
            }

            let starts_across = col == 0 || !structure.is_fillable(row, col - 1);
            if starts_across {
                let length = (col..structure.width())
                    .take_while(|&c| structure.is_fillable(row, c))
                    .count();
                if length >= MIN_SLOT_LENGTH {
                    slots.push(Slot::new(row, col, Direction::Across, length));
                }
            }
        }
    }

    slots
}

//! Word slots and their placement on the grid

use std::fmt;

/// Orientation of a slot on the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Direction {
    /// Left to right along a row
    Across,
    /// Top to bottom along a column
    Down,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Across => write!(f, "across"),
            Self::Down => write!(f, "down"),
        }
    }
}

/// A linear run of fillable cells that holds exactly one word
///
/// Identity is the full value `(row, col, direction, length)`, so two slots
/// covering the same start cell in different directions are distinct keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Slot {
    /// Row of the first cell
    pub row: usize,
    /// Column of the first cell
    pub col: usize,
    /// Orientation of the run
    pub direction: Direction,
    /// Number of cells in the run
    pub length: usize,
}

impl Slot {
    /// Create a slot starting at `(row, col)`
    pub const fn new(row: usize, col: usize, direction: Direction, length: usize) -> Self {
        Self {
            row,
            col,
            direction,
            length,
        }
    }

    /// Grid cell at `offset` along the slot, if the offset is inside it
    pub const fn cell(&self, offset: usize) -> Option<(usize, usize)> {
        if offset >= self.length {
            return None;
        }
        Some(match self.direction {
            Direction::Across => (self.row, self.col + offset),
            Direction::Down => (self.row + offset, self.col),
        })
    }

    /// All cells of the slot in reading order
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        (0..self.length).filter_map(|offset| self.cell(offset))
    }

    /// Offset of `cell` along the slot, or `None` when the slot does not cover it
    pub const fn offset_of(&self, cell: (usize, usize)) -> Option<usize> {
        let (row, col) = cell;
        match self.direction {
            Direction::Across => {
                if row == self.row && col >= self.col && col < self.col + self.length {
                    Some(col - self.col)
                } else {
                    None
                }
            }
            Direction::Down => {
                if col == self.col && row >= self.row && row < self.row + self.length {
                    Some(row - self.row)
                } else {
                    None
                }
            }
        }
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({}, {}) {} {}",
            self.row, self.col, self.direction, self.length
        )
    }
}

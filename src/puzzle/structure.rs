//! Fillable-cell layout of a crossword grid

use crate::io::configuration::FILLABLE_CELL;
use crate::io::error::{CrosswordError, Result};
use ndarray::Array2;

/// Rectangular grid of cells, each either fillable or blocked
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Structure {
    cells: Array2<bool>,
}

impl Structure {
    /// Wrap an existing fillable-flag grid
    pub const fn new(cells: Array2<bool>) -> Self {
        Self { cells }
    }

    /// Parse a structure where `_` marks a fillable cell and anything else is a block
    ///
    /// Trailing blank lines are ignored. Every remaining row must have the same width.
    ///
    /// # Errors
    ///
    /// Returns `InvalidStructure` if the text has no rows or the rows differ in width
    pub fn from_text(text: &str) -> Result<Self> {
        let mut rows: Vec<Vec<bool>> = text
            .lines()
            .map(|line| {
                line.trim_end_matches('\r')
                    .chars()
                    .map(|c| c == FILLABLE_CELL)
                    .collect()
            })
            .collect();

        while rows.last().is_some_and(Vec::is_empty) {
            rows.pop();
        }

        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        if height == 0 || width == 0 {
            return Err(CrosswordError::InvalidStructure {
                reason: "structure has no cells".to_string(),
            });
        }

        if let Some((index, row)) = rows.iter().enumerate().find(|(_, row)| row.len() != width) {
            return Err(CrosswordError::InvalidStructure {
                reason: format!(
                    "row {index} has width {} but the first row has width {width}",
                    row.len()
                ),
            });
        }

        let flat: Vec<bool> = rows.into_iter().flatten().collect();
        let cells = Array2::from_shape_vec((height, width), flat).map_err(|e| {
            CrosswordError::InvalidStructure {
                reason: e.to_string(),
            }
        })?;

        Ok(Self { cells })
    }

    /// Number of rows
    pub fn height(&self) -> usize {
        self.cells.nrows()
    }

    /// Number of columns
    pub fn width(&self) -> usize {
        self.cells.ncols()
    }

    /// Whether `(row, col)` can hold a letter; cells outside the grid are blocked
    pub fn is_fillable(&self, row: usize, col: usize) -> bool {
        self.cells.get([row, col]).copied().unwrap_or(false)
    }
}

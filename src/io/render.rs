//! Text rendering of a filled grid

use crate::algorithm::solution::Solution;
use crate::io::configuration::{BLOCK_GLYPH, EMPTY_GLYPH};
use crate::puzzle::model::Puzzle;
use ndarray::Array2;

/// Letters placed on the grid by `solution`, `None` where nothing is written
pub fn letter_grid(puzzle: &Puzzle, solution: &Solution) -> Array2<Option<char>> {
    let structure = puzzle.structure();
    let mut letters = Array2::from_elem((structure.height(), structure.width()), None);

    for (slot, word) in solution.iter() {
        for (cell, letter) in slot.cells().zip(word.chars()) {
            if let Some(entry) = letters.get_mut(cell) {
                *entry = Some(letter);
            }
        }
    }

    letters
}

/// Render the grid as text, one line per row
///
/// Fillable cells show their letter or a blank; blocked cells show a block.
pub fn render_text(puzzle: &Puzzle, solution: &Solution) -> String {
    let structure = puzzle.structure();
    let letters = letter_grid(puzzle, solution);
    let mut output = String::with_capacity(structure.height() * (structure.width() + 1));

    for row in 0..structure.height() {
        for col in 0..structure.width() {
            let glyph = if structure.is_fillable(row, col) {
                letters.get([row, col]).copied().flatten().unwrap_or(EMPTY_GLYPH)
            } else {
                BLOCK_GLYPH
            };
            output.push(glyph);
        }
        output.push('\n');
    }

    output
}

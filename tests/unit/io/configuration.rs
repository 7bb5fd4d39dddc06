//! Tests for configuration constant relationships

#[cfg(test)]
mod tests {
    use crossfill::io::configuration::{
        BLOCK_GLYPH, CELL_BORDER, CELL_SIZE, EMPTY_GLYPH, FILLABLE_CELL, GLYPH_SCALE,
        MIN_SLOT_LENGTH, NO_SOLUTION_MESSAGE, PROGRESS_REFRESH_STATES,
    };

    // Tests a glyph fits inside a cell with its border
    // Verified by raising the glyph scale past the cell interior
    #[test]
    fn test_glyph_fits_cell() {
        assert!(5 * GLYPH_SCALE <= CELL_SIZE - 2 * CELL_BORDER);
        assert!(7 * GLYPH_SCALE <= CELL_SIZE - 2 * CELL_BORDER);
    }

    // Tests text rendering glyphs are distinguishable
    // Verified by rendering empty cells with the block glyph
    #[test]
    fn test_text_glyphs() {
        assert_ne!(BLOCK_GLYPH, EMPTY_GLYPH);
        assert_ne!(FILLABLE_CELL, BLOCK_GLYPH);
        assert_eq!(NO_SOLUTION_MESSAGE, "No solution.");
    }

    // Tests slot and progress thresholds
    // Verified by setting the refresh interval to zero
    #[test]
    fn test_thresholds() {
        assert_eq!(MIN_SLOT_LENGTH, 2);
        assert!(PROGRESS_REFRESH_STATES > 0);
    }
}

//! Tests for PNG rendering and export

#[cfg(test)]
mod tests {
    use crossfill::algorithm::solution::Solution;
    use crossfill::io::configuration::{BLOCK_COLOR, CELL_COLOR, CELL_SIZE};
    use crossfill::io::image::{export_solution_as_png, render_image};
    use crossfill::puzzle::model::Puzzle;
    use crossfill::puzzle::slot::{Direction, Slot};
    use crossfill::puzzle::structure::Structure;
    use image::{Rgba, RgbaImage};
    use tempfile::TempDir;

    fn cross() -> (Puzzle, Solution) {
        let puzzle = Puzzle::from_structure(Structure::from_text("___\n_##\n_##").unwrap()).unwrap();
        let solution = [
            (Slot::new(0, 0, Direction::Down, 3), "CAR".to_string()),
            (Slot::new(0, 0, Direction::Across, 3), "CAT".to_string()),
        ]
        .into_iter()
        .collect();
        (puzzle, solution)
    }

    fn cell_pixels(img: &RgbaImage, row: u32, col: u32, color: [u8; 4]) -> usize {
        let mut count = 0;
        for y in row * CELL_SIZE..(row + 1) * CELL_SIZE {
            for x in col * CELL_SIZE..(col + 1) * CELL_SIZE {
                if *img.get_pixel(x, y) == Rgba(color) {
                    count += 1;
                }
            }
        }
        count
    }

    // Tests image dimensions scale with the grid
    // Verified by sizing the canvas in cells instead of pixels
    #[test]
    fn test_dimensions() {
        let (puzzle, solution) = cross();
        let img = render_image(&puzzle, &solution).unwrap();
        assert_eq!(img.dimensions(), (3 * CELL_SIZE, 3 * CELL_SIZE));
    }

    // Tests blocked cells are solid and fillable cells have a light interior
    // Verified by painting blocked cells with the cell color
    #[test]
    fn test_cell_colors() {
        let (puzzle, solution) = cross();
        let img = render_image(&puzzle, &solution).unwrap();
        let area = (CELL_SIZE * CELL_SIZE) as usize;

        assert_eq!(cell_pixels(&img, 1, 1, BLOCK_COLOR), area);
        assert_eq!(*img.get_pixel(CELL_SIZE + 5, 5), Rgba(CELL_COLOR));
        assert_eq!(*img.get_pixel(0, 0), Rgba(BLOCK_COLOR));
    }

    // Tests letters put dark pixels inside their cells
    // Verified by returning early from draw_letter
    #[test]
    fn test_letters_are_drawn() {
        let (puzzle, solution) = cross();
        let filled = render_image(&puzzle, &solution).unwrap();
        let blank = render_image(&puzzle, &Solution::default()).unwrap();

        let with_letter = cell_pixels(&filled, 0, 1, BLOCK_COLOR);
        let without_letter = cell_pixels(&blank, 0, 1, BLOCK_COLOR);
        assert!(with_letter > without_letter);
        assert_ne!(filled, blank);
    }

    // Tests letters without a glyph leave the cell blank
    // Verified by falling back to a filled box for unknown letters
    #[test]
    fn test_unsupported_letters_left_blank() {
        let (puzzle, _) = cross();
        let accented: Solution = [
            (Slot::new(0, 0, Direction::Down, 3), "ÉAU".to_string()),
            (Slot::new(0, 0, Direction::Across, 3), "ÉTÉ".to_string()),
        ]
        .into_iter()
        .collect();
        let filled = render_image(&puzzle, &accented).unwrap();
        let blank = render_image(&puzzle, &Solution::default()).unwrap();

        assert_eq!(
            cell_pixels(&filled, 0, 0, BLOCK_COLOR),
            cell_pixels(&blank, 0, 0, BLOCK_COLOR)
        );
        assert_eq!(
            cell_pixels(&filled, 0, 2, BLOCK_COLOR),
            cell_pixels(&blank, 0, 2, BLOCK_COLOR)
        );
        assert!(cell_pixels(&filled, 0, 1, BLOCK_COLOR) > cell_pixels(&blank, 0, 1, BLOCK_COLOR));
    }

    // Tests export creates missing directories and writes a readable PNG
    // Verified by skipping parent directory creation
    #[test]
    fn test_export_writes_png() {
        let (puzzle, solution) = cross();
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("grid.png");

        export_solution_as_png(&puzzle, &solution, &path).unwrap();

        let saved = image::open(&path).unwrap().to_rgba8();
        assert_eq!(saved, render_image(&puzzle, &solution).unwrap());
    }
}

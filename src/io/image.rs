//! PNG export of a filled grid

use crate::algorithm::solution::Solution;
use crate::io::configuration::{
    BLOCK_COLOR, CELL_BORDER, CELL_COLOR, CELL_SIZE, GLYPH_SCALE, LETTER_COLOR,
};
use crate::io::error::{CrosswordError, Result, WithPath, invalid_parameter};
use crate::io::render::letter_grid;
use crate::puzzle::model::Puzzle;
use image::{ImageBuffer, Rgba, RgbaImage};
use std::path::Path;

const GLYPH_WIDTH: u32 = 5;
const GLYPH_HEIGHT: u32 = 7;

/// Dot rows of a 5x7 glyph, most significant of the low five bits on the left
const fn glyph(letter: char) -> Option<[u8; 7]> {
    let rows = match letter.to_ascii_uppercase() {
        'A' => [0b01110, 0b10001, 0b10001, 0b11111, 0b10001, 0b10001, 0b10001],
        'B' => [0b11110, 0b10001, 0b10001, 0b11110, 0b10001, 0b10001, 0b11110],
        'C' => [0b01110, 0b10001, 0b10000, 0b10000, 0b10000, 0b10001, 0b01110],
        'D' => [0b11110, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b11110],
        'E' => [0b11111, 0b10000, 0b10000, 0b11110, 0b10000, 0b10000, 0b11111],
        'F' => [0b11111, 0b10000, 0b10000, 0b11110, 0b10000, 0b10000, 0b10000],
        'G' => [0b01110, 0b10001, 0b10000, 0b10111, 0b10001, 0b10001, 0b01111],
        'H' => [0b10001, 0b10001, 0b10001, 0b11111, 0b10001, 0b10001, 0b10001],
        'I' => [0b01110, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110],
        'J' => [0b00111, 0b00010, 0b00010, 0b00010, 0b00010, 0b10010, 0b01100],
        'K' => [0b10001, 0b10010, 0b10100, 0b11000, 0b10100, 0b10010, 0b10001],
        'L' => [0b10000, 0b10000, 0b10000, 0b10000, 0b10000, 0b10000, 0b11111],
        'M' => [0b10001, 0b11011, 0b10101, 0b10101, 0b10001, 0b10001, 0b10001],
        'N' => [0b10001, 0b10001, 0b11001, 0b10101, 0b10011, 0b10001, 0b10001],
        'O' => [0b01110, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01110],
        'P' => [0b11110, 0b10001, 0b10001, 0b11110, 0b10000, 0b10000, 0b10000],
        'Q' => [0b01110, 0b10001, 0b10001, 0b10001, 0b10101, 0b10010, 0b01101],
        'R' => [0b11110, 0b10001, 0b10001, 0b11110, 0b10100, 0b10010, 0b10001],
        'S' => [0b01111, 0b10000, 0b10000, 0b01110, 0b00001, 0b00001, 0b11110],
        'T' => [0b11111, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100],
        'U' => [0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01110],
        'V' => [0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01010, 0b00100],
        'W' => [0b10001, 0b10001, 0b10001, 0b10101, 0b10101, 0b10101, 0b01010],
        'X' => [0b10001, 0b10001, 0b01010, 0b00100, 0b01010, 0b10001, 0b10001],
        'Y' => [0b10001, 0b10001, 0b01010, 0b00100, 0b00100, 0b00100, 0b00100],
        'Z' => [0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b10000, 0b11111],
        '0' => [0b01110, 0b10001, 0b10011, 0b10101, 0b11001, 0b10001, 0b01110],
        '1' => [0b00100, 0b01100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110],
        '2' => [0b01110, 0b10001, 0b00001, 0b00010, 0b00100, 0b01000, 0b11111],
        '3' => [0b11111, 0b00010, 0b00100, 0b00010, 0b00001, 0b10001, 0b01110],
        '4' => [0b00010, 0b00110, 0b01010, 0b10010, 0b11111, 0b00010, 0b00010],
        '5' => [0b11111, 0b10000, 0b11110, 0b00001, 0b00001, 0b10001, 0b01110],
        '6' => [0b00110, 0b01000, 0b10000, 0b11110, 0b10001, 0b10001, 0b01110],
        '7' => [0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b01000, 0b01000],
        '8' => [0b01110, 0b10001, 0b10001, 0b01110, 0b10001, 0b10001, 0b01110],
        '9' => [0b01110, 0b10001, 0b10001, 0b01111, 0b00001, 0b00010, 0b01100],
        _ => return None,
    };
    Some(rows)
}

fn fill_rect(img: &mut RgbaImage, x: u32, y: u32, width: u32, height: u32, color: Rgba<u8>) {
    for py in y..y + height {
        for px in x..x + width {
            if let Some(pixel) = img.get_pixel_mut_checked(px, py) {
                *pixel = color;
            }
        }
    }
}

fn draw_letter(img: &mut RgbaImage, cell_x: u32, cell_y: u32, letter: char) {
    let Some(rows) = glyph(letter) else {
        return;
    };

    let origin_x = cell_x + (CELL_SIZE - GLYPH_WIDTH * GLYPH_SCALE) / 2;
    let origin_y = cell_y + (CELL_SIZE - GLYPH_HEIGHT * GLYPH_SCALE) / 2;

    for (dy, bits) in (0..GLYPH_HEIGHT).zip(rows) {
        for dx in 0..GLYPH_WIDTH {
            if bits & (1 << (GLYPH_WIDTH - 1 - dx)) != 0 {
                fill_rect(
                    img,
                    origin_x + dx * GLYPH_SCALE,
                    origin_y + dy * GLYPH_SCALE,
                    GLYPH_SCALE,
                    GLYPH_SCALE,
                    Rgba(LETTER_COLOR),
                );
            }
        }
    }
}

/// Draw the filled grid into an image buffer
///
/// Blocked cells stay black, fillable cells are white with their letter in
/// black. The built-in font only covers ASCII A-Z (either case) and 0-9, so
/// any other letter, including accented and non-Latin ones, leaves its cell
/// blank. The text rendering from `render_text` shows every letter.
///
/// # Errors
///
/// Returns `InvalidParameter` if the grid is empty or too large to rasterize
pub fn render_image(puzzle: &Puzzle, solution: &Solution) -> Result<RgbaImage> {
    let structure = puzzle.structure();
    let to_pixels = |cells: usize, parameter: &'static str| -> Result<u32> {
        u32::try_from(cells)
            .ok()
            .and_then(|count| count.checked_mul(CELL_SIZE))
            .filter(|&pixels| pixels > 0)
            .ok_or_else(|| invalid_parameter(parameter, &cells, &"grid cannot be rasterized"))
    };
    let width = to_pixels(structure.width(), "width")?;
    let height = to_pixels(structure.height(), "height")?;

    let letters = letter_grid(puzzle, solution);
    let mut img: RgbaImage = ImageBuffer::from_pixel(width, height, Rgba(BLOCK_COLOR));
    let interior = CELL_SIZE - 2 * CELL_BORDER;

    for (row, cell_y) in (0..structure.height()).zip((0..height).step_by(CELL_SIZE as usize)) {
        for (col, cell_x) in (0..structure.width()).zip((0..width).step_by(CELL_SIZE as usize)) {
            if !structure.is_fillable(row, col) {
                continue;
            }

            fill_rect(
                &mut img,
                cell_x + CELL_BORDER,
                cell_y + CELL_BORDER,
                interior,
                interior,
                Rgba(CELL_COLOR),
            );

            if let Some(letter) = letters.get([row, col]).copied().flatten() {
                draw_letter(&mut img, cell_x, cell_y, letter);
            }
        }
    }

    Ok(img)
}

/// Render the filled grid and save it as a PNG
///
/// Letters outside ASCII A-Z and 0-9 have no glyph in the built-in 5x7 font
/// and are drawn as empty white cells; see [`render_image`].
///
/// # Errors
///
/// Returns an error if:
/// - The grid is empty (`InvalidParameter`)
/// - The parent directory cannot be created (`FileSystem`)
/// - The image cannot be encoded or written (`ImageExport`)
pub fn export_solution_as_png(
    puzzle: &Puzzle,
    solution: &Solution,
    output_path: &Path,
) -> Result<()> {
    let img = render_image(puzzle, solution)?;

    if let Some(parent) = output_path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent).with_path(parent, "create directory")?;
    }

    img.save(output_path)
        .map_err(|source| CrosswordError::ImageExport {
            path: output_path.to_path_buf(),
            source,
        })
}

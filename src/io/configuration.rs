//! Solver constants and runtime configuration defaults

// Structure parsing
/// Character marking a fillable cell in structure files
pub const FILLABLE_CELL: char = '_';

/// Shortest run of fillable cells that forms a slot
pub const MIN_SLOT_LENGTH: usize = 2;

// Text rendering
/// Glyph printed for blocked cells
pub const BLOCK_GLYPH: char = '█';
/// Glyph printed for fillable cells without a letter
pub const EMPTY_GLYPH: char = ' ';
/// Message printed when the search space is exhausted
pub const NO_SOLUTION_MESSAGE: &str = "No solution.";

// Image rendering
/// Side length of one grid cell in pixels
pub const CELL_SIZE: u32 = 100;
/// Width of the dark border around each cell in pixels
pub const CELL_BORDER: u32 = 2;
/// Pixel size of one font dot (glyphs are 5x7 dots)
pub const GLYPH_SCALE: u32 = 8;
/// Canvas and block color
pub const BLOCK_COLOR: [u8; 4] = [0, 0, 0, 255];
/// Fillable cell background color
pub const CELL_COLOR: [u8; 4] = [255, 255, 255, 255];
/// Letter color
pub const LETTER_COLOR: [u8; 4] = [0, 0, 0, 255];

// Progress display settings
/// Number of search states between spinner refreshes
pub const PROGRESS_REFRESH_STATES: usize = 64;
/// Spinner redraw interval in milliseconds
pub const PROGRESS_TICK_MS: u64 = 120;

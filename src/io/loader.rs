//! Structure and word list files

use crate::io::error::{Result, WithPath};
use crate::puzzle::structure::Structure;
use crate::puzzle::vocabulary::WordList;
use std::path::Path;

/// Read a structure file (`_` fillable, anything else blocked)
///
/// # Errors
///
/// Returns `FileSystem` if the file cannot be read, or `InvalidStructure` if
/// its rows do not form a non-empty rectangle
pub fn load_structure(path: &Path) -> Result<Structure> {
    let text = std::fs::read_to_string(path).with_path(path, "read structure")?;
    Structure::from_text(&text)
}

/// Read a word list file with one word per line
///
/// # Errors
///
/// Returns `FileSystem` if the file cannot be read
pub fn load_words(path: &Path) -> Result<WordList> {
    let text = std::fs::read_to_string(path).with_path(path, "read word list")?;
    Ok(parse_words(&text))
}

/// Parse one word per line; lines are trimmed, blank lines skipped and words upper-cased
pub fn parse_words(text: &str) -> WordList {
    WordList::new(
        text.lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_uppercase),
    )
}

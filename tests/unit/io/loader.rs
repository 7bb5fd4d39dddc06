//! Tests for reading structure and word list files

#[cfg(test)]
mod tests {
    use crossfill::CrosswordError;
    use crossfill::io::loader::{load_structure, load_words, parse_words};
    use std::fs;
    use tempfile::TempDir;

    // Tests a structure file round-trips into fillable cells
    // Verified by treating block characters as fillable when loading
    #[test]
    fn test_load_structure() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("structure.txt");
        fs::write(&path, "#___#\n#_##_\n").unwrap();

        let structure = load_structure(&path).unwrap();
        assert_eq!(structure.height(), 2);
        assert_eq!(structure.width(), 5);
        assert!(!structure.is_fillable(0, 0));
        assert!(structure.is_fillable(0, 3));
        assert!(structure.is_fillable(1, 4));
    }

    // Tests a missing file reports the path and operation
    // Verified by using the bare From conversion for read errors
    #[test]
    fn test_missing_structure_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("absent.txt");

        match load_structure(&path) {
            Err(CrosswordError::FileSystem {
                path: reported,
                operation,
                ..
            }) => {
                assert_eq!(reported, path);
                assert_eq!(operation, "read structure");
            }
            other => unreachable!("Expected FileSystem error, got {other:?}"),
        }
    }

    // Tests a ragged structure file is rejected
    // Verified by truncating rows to the shortest width
    #[test]
    fn test_ragged_structure_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("ragged.txt");
        fs::write(&path, "___\n_\n").unwrap();

        assert!(matches!(
            load_structure(&path),
            Err(CrosswordError::InvalidStructure { .. })
        ));
    }

    // Tests word files are trimmed, upper-cased and deduplicated
    // Verified by skipping the upper-casing step
    #[test]
    fn test_load_words() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("words.txt");
        fs::write(&path, "cat\n  Dog \n\nCAT\r\nbird\n").unwrap();

        let words = load_words(&path).unwrap();
        let texts: Vec<_> = words.iter().map(|(_, word)| word.as_str()).collect();
        assert_eq!(texts, vec!["BIRD", "CAT", "DOG"]);
    }

    // Tests a missing word file names the word list operation
    // Verified by labelling word list reads as structure reads
    #[test]
    fn test_missing_word_file() {
        let dir = TempDir::new().unwrap();
        let result = load_words(&dir.path().join("nowhere.txt"));
        assert!(matches!(
            result,
            Err(CrosswordError::FileSystem {
                operation: "read word list",
                ..
            })
        ));
    }

    // Tests blank input gives an empty list
    // Verified by keeping whitespace-only lines
    #[test]
    fn test_parse_blank() {
        assert!(parse_words("\n  \n\t\n").is_empty());
    }
}

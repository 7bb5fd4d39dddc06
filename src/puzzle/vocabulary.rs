//! Candidate words with stable, lexically ordered identifiers

use std::collections::BTreeSet;

/// Index of a word in its [`WordList`]
pub type WordId = usize;

/// A candidate word and its letters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word {
    text: String,
    letters: Vec<char>,
}

impl Word {
    fn new(text: String) -> Self {
        let letters = text.chars().collect();
        Self { text, letters }
    }

    /// The word as given
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Letter at `offset`, counting `char`s
    pub fn letter(&self, offset: usize) -> Option<char> {
        self.letters.get(offset).copied()
    }

    /// Length in `char`s
    pub const fn len(&self) -> usize {
        self.letters.len()
    }

    /// True for the empty string
    pub const fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }
}

/// Deduplicated word list
///
/// Words are kept in lexical order so a `WordId` doubles as the deterministic
/// tie-break key for value ordering.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordList {
    words: Vec<Word>,
}

impl WordList {
    /// Build a list from any collection of strings, dropping duplicates
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let unique: BTreeSet<String> = words.into_iter().map(Into::into).collect();
        Self {
            words: unique.into_iter().map(Word::new).collect(),
        }
    }

    /// Number of distinct words
    pub const fn len(&self) -> usize {
        self.words.len()
    }

    /// True when the list holds no words
    pub const fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Look up a word by id
    pub fn get(&self, id: WordId) -> Option<&Word> {
        self.words.get(id)
    }

    /// Id of `text`, if it is in the list
    pub fn id_of(&self, text: &str) -> Option<WordId> {
        self.words
            .binary_search_by(|word| word.as_str().cmp(text))
            .ok()
    }

    /// Ids of every word whose length is exactly `length`
    pub fn ids_with_length(&self, length: usize) -> impl Iterator<Item = WordId> + '_ {
        self.words
            .iter()
            .enumerate()
            .filter(move |(_, word)| word.len() == length)
            .map(|(id, _)| id)
    }

    /// Iterate over `(id, word)` pairs in lexical order
    pub fn iter(&self) -> impl Iterator<Item = (WordId, &Word)> + '_ {
        self.words.iter().enumerate()
    }
}

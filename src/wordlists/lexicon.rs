//! The set of valid words
//!
//! Supplies random solutions and membership tests.

use crate::core::Word;
use crate::error::LexiconError;
use rand::Rng;
use rustc_hash::FxHashSet;

use super::WORDS;

/// A fixed, non-empty set of valid words
#[derive(Debug, Clone)]
pub struct Lexicon {
    words: Vec<Word>,
    index: FxHashSet<Word>,
}

impl Lexicon {
    /// Build a lexicon from raw entries
    ///
    /// Entries are trimmed and upper-cased; blank entries are skipped and
    /// repeated entries are kept once.
    ///
    /// # Errors
    ///
    /// Returns `LexiconError::InvalidEntry` for the first entry that is not a
    /// valid word and `LexiconError::Empty` if nothing is left.
    ///
    /// # Examples
    /// ```
    /// use four::wordlists::Lexicon;
    ///
    /// let lexicon = Lexicon::new(["tree", "FIRE"]).unwrap();
    /// assert!(lexicon.contains("Tree"));
    /// assert!(!lexicon.contains("BIRD"));
    ///
    /// assert!(Lexicon::new(["trees"]).is_err());
    /// ```
    pub fn new<'a>(entries: impl IntoIterator<Item = &'a str>) -> Result<Self, LexiconError> {
        let mut words = Vec::new();
        let mut index = FxHashSet::default();

        for (i, entry) in entries.into_iter().enumerate() {
            let trimmed = entry.trim();
            if trimmed.is_empty() {
                continue;
            }

            let word = Word::new(trimmed).map_err(|source| LexiconError::InvalidEntry {
                line: i + 1,
                entry: trimmed.to_string(),
                source,
            })?;

            if index.insert(word.clone()) {
                words.push(word);
            }
        }

        if words.is_empty() {
            return Err(LexiconError::Empty);
        }

        Ok(Self { words, index })
    }

    /// The built-in word list
    ///
    /// # Errors
    ///
    /// Fails only if the compiled-in list is malformed, which the build script
    /// already rules out.
    pub fn embedded() -> Result<Self, LexiconError> {
        Self::new(WORDS.iter().copied())
    }

    /// Pick a solution uniformly at random
    pub fn random_word<R: Rng + ?Sized>(&self, rng: &mut R) -> &Word {
        &self.words[rng.random_range(0..self.words.len())]
    }

    /// Case-insensitive membership test
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        Word::new(word.trim()).is_ok_and(|w| self.index.contains(&w))
    }

    /// Check an already validated word
    #[must_use]
    pub fn contains_word(&self, word: &Word) -> bool {
        self.index.contains(word)
    }

    /// Number of distinct words
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Always false: construction rejects empty lists
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Words in list order
    pub fn iter(&self) -> impl Iterator<Item = &Word> {
        self.words.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn embedded_lexicon_loads() {
        let lexicon = Lexicon::embedded().unwrap();
        assert_eq!(lexicon.len(), 104);
        assert!(lexicon.contains("CODE"));
        assert!(lexicon.contains("dirt"));
    }

    #[test]
    fn contains_normalizes_case() {
        let lexicon = Lexicon::new(["NOTE", "data"]).unwrap();
        assert!(lexicon.contains("note"));
        assert!(lexicon.contains("NoTe"));
        assert!(lexicon.contains("DATA"));
        assert!(!lexicon.contains("TONE"));
        assert!(!lexicon.contains("NOTES"));
        assert!(!lexicon.contains(""));
    }

    #[test]
    fn invalid_entry_is_configuration_error() {
        let result = Lexicon::new(["NOTE", "", "HELLO"]);
        match result {
            Err(LexiconError::InvalidEntry { line, entry, .. }) => {
                assert_eq!(line, 3);
                assert_eq!(entry, "HELLO");
            }
            other => panic!("expected InvalidEntry, got {other:?}"),
        }
    }

    #[test]
    fn empty_list_rejected() {
        assert!(matches!(
            Lexicon::new(Vec::<&str>::new()),
            Err(LexiconError::Empty)
        ));
        assert!(matches!(Lexicon::new(["", "  "]), Err(LexiconError::Empty)));
    }

    #[test]
    fn duplicates_collapse() {
        let lexicon = Lexicon::new(["NOTE", "note", "DATA"]).unwrap();
        assert_eq!(lexicon.len(), 2);
        let words: Vec<&str> = lexicon.iter().map(Word::text).collect();
        assert_eq!(words, ["NOTE", "DATA"]);
    }

    #[test]
    fn random_word_comes_from_list() {
        let lexicon = Lexicon::new(["NOTE", "DATA", "TREE"]).unwrap();
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..50 {
            assert!(lexicon.contains_word(lexicon.random_word(&mut rng)));
        }
    }

    #[test]
    fn random_word_reaches_every_entry() {
        let lexicon = Lexicon::new(["NOTE", "DATA", "TREE"]).unwrap();
        let mut rng = StdRng::seed_from_u64(42);
        let seen: FxHashSet<&Word> = (0..200).map(|_| lexicon.random_word(&mut rng)).collect();
        assert_eq!(seen.len(), 3);
    }

    #[test]
    fn seeded_selection_is_reproducible() {
        let lexicon = Lexicon::embedded().unwrap();
        let mut a = StdRng::seed_from_u64(1);
        let mut b = StdRng::seed_from_u64(1);
        for _ in 0..10 {
            assert_eq!(lexicon.random_word(&mut a), lexicon.random_word(&mut b));
        }
    }
}

//! Keyboard status aggregation
//!
//! Reduces every evaluated guess into the best status known for each letter.

use super::evaluation::{Evaluation, LetterStatus};
use super::word::Word;
use rustc_hash::FxHashMap;

/// Best known status per letter, keyed by upper-case ASCII byte
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyboardStatus(FxHashMap<u8, LetterStatus>);

impl KeyboardStatus {
    /// Build the map from the full guess history
    ///
    /// Each guess is re-evaluated; a letter keeps the highest-precedence
    /// status it has ever received.
    ///
    /// # Examples
    /// ```
    /// use four::core::{KeyboardStatus, LetterStatus, Word};
    ///
    /// let solution = Word::new("note").unwrap();
    /// let guesses = [Word::new("jump").unwrap(), Word::new("tone").unwrap()];
    ///
    /// let keyboard = KeyboardStatus::aggregate(&guesses, &solution);
    /// assert_eq!(keyboard.get('j'), Some(LetterStatus::Absent));
    /// assert_eq!(keyboard.get('E'), Some(LetterStatus::Correct));
    /// assert_eq!(keyboard.get('z'), None);
    /// ```
    #[must_use]
    pub fn aggregate(guesses: &[Word], solution: &Word) -> Self {
        let mut statuses: FxHashMap<u8, LetterStatus> = FxHashMap::default();

        for guess in guesses {
            let evaluation = Evaluation::calculate(guess, solution);
            for (&letter, &status) in guess.chars().iter().zip(evaluation.statuses()) {
                statuses
                    .entry(letter)
                    .and_modify(|best| *best = (*best).max(status))
                    .or_insert(status);
            }
        }

        Self(statuses)
    }

    /// Status for a letter, if it has been guessed
    #[must_use]
    pub fn get(&self, letter: char) -> Option<LetterStatus> {
        if !letter.is_ascii_alphabetic() {
            return None;
        }
        self.0.get(&(letter.to_ascii_uppercase() as u8)).copied()
    }

    /// Number of letters with a known status
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

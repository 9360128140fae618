//! Score command
//!
//! Evaluates one guess against a given solution, outside of any game.

use crate::core::{Evaluation, Word};
use crate::game::Row;
use anyhow::{Context, Result};

/// Result of scoring a guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreResult {
    pub guess: Word,
    pub solution: Word,
    pub evaluation: Evaluation,
}

impl ScoreResult {
    /// The scored guess as a board row
    #[must_use]
    pub fn row(&self) -> Row {
        Row::completed(&self.guess, self.evaluation)
    }
}

/// Score `guess` against `solution`
///
/// Neither word has to be in the word list.
///
/// # Errors
///
/// Returns an error if either input is not a valid four-letter word.
pub fn score_words(guess: &str, solution: &str) -> Result<ScoreResult> {
    let guess = Word::new(guess).with_context(|| format!("invalid guess '{guess}'"))?;
    let solution =
        Word::new(solution).with_context(|| format!("invalid solution '{solution}'"))?;
    let evaluation = Evaluation::calculate(&guess, &solution);

    Ok(ScoreResult {
        guess,
        solution,
        evaluation,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn score_valid_words() {
        let result = score_words("adad", "data").unwrap();
        assert_eq!(result.guess.text(), "ADAD");
        assert_eq!(result.evaluation.to_string(), "PPC-");
        assert!(!result.evaluation.is_solved());
    }

    #[test]
    fn score_exact_match() {
        let result = score_words("Jazz", "JAZZ").unwrap();
        assert!(result.evaluation.is_solved());
    }

    #[test]
    fn score_rejects_invalid_words() {
        let err = score_words("hello", "data").unwrap_err();
        assert!(err.to_string().contains("invalid guess 'hello'"));
        assert!(score_words("data", "d4ta").is_err());
    }

    #[test]
    fn row_carries_letters_and_evaluation() {
        let result = score_words("tone", "note").unwrap();
        let row = result.row();
        assert_eq!(row.letters, [Some('T'), Some('O'), Some('N'), Some('E')]);
        assert_eq!(row.evaluation, Some(result.evaluation));
    }
}

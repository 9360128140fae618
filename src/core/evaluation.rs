//! Guess evaluation
//!
//! Scores a guess against the solution letter by letter:
//! - `Correct`: letter matches the solution at this position
//! - `Present`: letter occurs elsewhere in the solution, subject to multiplicity
//! - `Absent`: letter does not occur, or all occurrences are already accounted for

use super::word::{WORD_LENGTH, Word};
use std::fmt;
use std::str::FromStr;

/// Per-letter feedback
///
/// Variants are ordered by display precedence: `Correct > Present > Absent`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LetterStatus {
    Absent,
    Present,
    Correct,
}

impl LetterStatus {
    /// Square used in the shareable emoji grid
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬛',
        }
    }

    const fn symbol(self) -> char {
        match self {
            Self::Correct => 'C',
            Self::Present => 'P',
            Self::Absent => '-',
        }
    }
}

/// One evaluated row: a status for every position of a guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Evaluation([LetterStatus; WORD_LENGTH]);

impl Evaluation {
    /// Every position correct
    pub const SOLVED: Self = Self([LetterStatus::Correct; WORD_LENGTH]);

    /// Score `guess` against `solution`
    ///
    /// Duplicate letters are handled in two passes so that no letter is
    /// credited more often than it occurs in the solution.
    ///
    /// # Algorithm
    /// 1. Count the solution's letters
    /// 2. First pass: mark exact matches `Correct` and use up their counts
    /// 3. Second pass, left to right over the rest: `Present` while the letter
    ///    still has count left, otherwise `Absent`
    ///
    /// # Examples
    /// ```
    /// use four::core::{Evaluation, LetterStatus::*, Word};
    ///
    /// let guess = Word::new("adad").unwrap();
    /// let solution = Word::new("data").unwrap();
    ///
    /// let evaluation = Evaluation::calculate(&guess, &solution);
    /// assert_eq!(evaluation.statuses(), &[Present, Present, Correct, Absent]);
    /// ```
    #[must_use]
    pub fn calculate(guess: &Word, solution: &Word) -> Self {
        let mut result = [LetterStatus::Absent; WORD_LENGTH];
        let mut remaining = solution.char_counts();

        for (i, (&g, &s)) in guess.chars().iter().zip(solution.chars()).enumerate() {
            if g == s {
                result[i] = LetterStatus::Correct;
                if let Some(count) = remaining.get_mut(&g) {
                    *count -= 1;
                }
            }
        }

        for (status, letter) in result.iter_mut().zip(guess.chars()) {
            if *status == LetterStatus::Correct {
                continue;
            }
            if let Some(count) = remaining.get_mut(letter)
                && *count > 0
            {
                *status = LetterStatus::Present;
                *count -= 1;
            }
        }

        Self(result)
    }

    /// Statuses in position order
    #[inline]
    #[must_use]
    pub const fn statuses(&self) -> &[LetterStatus; WORD_LENGTH] {
        &self.0
    }

    /// Check if every position is correct
    #[inline]
    #[must_use]
    pub fn is_solved(&self) -> bool {
        *self == Self::SOLVED
    }

    /// Convert to an emoji string like "🟩🟨⬛🟩"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|s| s.emoji()).collect()
    }
}

impl fmt::Display for Evaluation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for status in &self.0 {
            write!(f, "{}", status.symbol())?;
        }
        Ok(())
    }
}

impl FromStr for Evaluation {
    type Err = String;

    /// Parse a row like "CP-C"
    ///
    /// Accepts 'C'/'c'/🟩 for correct, 'P'/'p'/🟨 for present and
    /// '-'/'_'/⬛ for absent.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let chars: Vec<char> = s.chars().collect();
        if chars.len() != WORD_LENGTH {
            return Err(format!("Invalid evaluation string: {s}"));
        }

        let mut result = [LetterStatus::Absent; WORD_LENGTH];
        for (status, ch) in result.iter_mut().zip(chars) {
            *status = match ch {
                'C' | 'c' | '🟩' => LetterStatus::Correct,
                'P' | 'p' | '🟨' => LetterStatus::Present,
                '-' | '_' | '⬛' => LetterStatus::Absent,
                _ => return Err(format!("Invalid evaluation string: {s}")),
            };
        }

        Ok(Self(result))
    }
}

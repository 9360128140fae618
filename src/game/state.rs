//! Single game instance
//!
//! A `Game` owns one solution, the accepted guesses, the input buffer and the
//! status. It never looks at a clock: an accepted winning or final guess only
//! records a pending verdict, and [`Game::finalize`] applies it later.

use crate::core::{Evaluation, KeyboardStatus, WORD_LENGTH, Word};
use crate::wordlists::Lexicon;
use std::fmt;
use thiserror::Error;

/// Identity of one game instance
///
/// A generation counter: every new game takes the next value, so anything
/// tagged with an older id can be recognized as stale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GameId(u64);

impl GameId {
    pub const FIRST: Self = Self(0);

    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0 + 1)
    }

    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for GameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Playing,
    Won,
    Lost,
}

/// Terminal result of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Won,
    Lost,
}

impl From<Outcome> for GameStatus {
    fn from(outcome: Outcome) -> Self {
        match outcome {
            Outcome::Won => Self::Won,
            Outcome::Lost => Self::Lost,
        }
    }
}

/// Why a submitted guess was turned away
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GuessRejection {
    #[error("Not enough letters")]
    Incomplete,
    #[error("Not in word list")]
    NotAWord,
    #[error("Already tried that word")]
    Duplicate,
}

/// A guess that made it into the history
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Accepted {
    /// Row index of the guess (0-based)
    pub row: usize,
    pub guess: Word,
    pub evaluation: Evaluation,
    /// Outcome to apply once the row has been revealed
    pub verdict: Option<Outcome>,
}

/// One row of the board as the presentation layer draws it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Row {
    pub letters: [Option<char>; WORD_LENGTH],
    /// Set for completed guesses only
    pub evaluation: Option<Evaluation>,
}

impl Row {
    /// Row for a scored guess
    #[must_use]
    pub fn completed(guess: &Word, evaluation: Evaluation) -> Self {
        let mut letters = [None; WORD_LENGTH];
        for (slot, &b) in letters.iter_mut().zip(guess.chars()) {
            *slot = Some(char::from(b));
        }
        Self {
            letters,
            evaluation: Some(evaluation),
        }
    }

    fn in_progress(input: &str) -> Self {
        let mut letters = [None; WORD_LENGTH];
        for (slot, ch) in letters.iter_mut().zip(input.chars()) {
            *slot = Some(ch);
        }
        Self {
            letters,
            evaluation: None,
        }
    }

    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.letters.iter().all(Option::is_none)
    }
}

/// State of one game
#[derive(Debug, Clone)]
pub struct Game {
    id: GameId,
    solution: Word,
    guesses: Vec<Word>,
    input: String,
    status: GameStatus,
    verdict: Option<Outcome>,
    max_attempts: usize,
}

impl Game {
    #[must_use]
    pub fn new(id: GameId, solution: Word, max_attempts: usize) -> Self {
        Self {
            id,
            solution,
            guesses: Vec::with_capacity(max_attempts),
            input: String::with_capacity(WORD_LENGTH),
            status: GameStatus::Playing,
            verdict: None,
            max_attempts,
        }
    }

    #[must_use]
    pub const fn id(&self) -> GameId {
        self.id
    }

    #[must_use]
    pub const fn solution(&self) -> &Word {
        &self.solution
    }

    /// Accepted guesses in submission order
    #[must_use]
    pub fn guesses(&self) -> &[Word] {
        &self.guesses
    }

    /// Letters typed for the next guess
    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }

    #[must_use]
    pub const fn status(&self) -> GameStatus {
        self.status
    }

    /// Outcome decided by the last guess but not applied yet
    #[must_use]
    pub const fn pending_verdict(&self) -> Option<Outcome> {
        self.verdict
    }

    #[must_use]
    pub const fn max_attempts(&self) -> usize {
        self.max_attempts
    }

    #[must_use]
    pub fn attempts(&self) -> usize {
        self.guesses.len()
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.status != GameStatus::Playing
    }

    /// Playing, and no verdict waiting to be applied
    #[must_use]
    pub fn accepts_input(&self) -> bool {
        self.status == GameStatus::Playing && self.verdict.is_none()
    }

    /// Append a letter to the input buffer
    ///
    /// Returns false (and changes nothing) if input is closed, the buffer is
    /// full or `letter` is not an ASCII letter.
    pub fn append_letter(&mut self, letter: char) -> bool {
        if !self.accepts_input() || self.input.len() >= WORD_LENGTH {
            return false;
        }
        if !letter.is_ascii_alphabetic() {
            return false;
        }
        self.input.push(letter.to_ascii_uppercase());
        true
    }

    /// Remove the last typed letter
    pub fn backspace(&mut self) -> bool {
        if !self.accepts_input() {
            return false;
        }
        self.input.pop().is_some()
    }

    /// Validate the input buffer and, if it passes, add it to the history
    ///
    /// Returns `Ok(None)` when input is closed (game over or verdict pending).
    /// Checks run in order and the first failure is reported; a rejected
    /// guess leaves the game untouched.
    ///
    /// # Errors
    ///
    /// - `GuessRejection::Incomplete` if fewer than `WORD_LENGTH` letters are typed
    /// - `GuessRejection::NotAWord` if the word is not in `lexicon`
    /// - `GuessRejection::Duplicate` if the word was already guessed
    pub fn submit(&mut self, lexicon: &Lexicon) -> Result<Option<Accepted>, GuessRejection> {
        if !self.accepts_input() {
            return Ok(None);
        }

        if self.input.len() < WORD_LENGTH {
            return Err(GuessRejection::Incomplete);
        }
        let guess = Word::new(self.input.as_str()).map_err(|_| GuessRejection::Incomplete)?;

        if !lexicon.contains_word(&guess) {
            return Err(GuessRejection::NotAWord);
        }

        if self.guesses.contains(&guess) {
            return Err(GuessRejection::Duplicate);
        }

        let evaluation = Evaluation::calculate(&guess, &self.solution);
        let row = self.guesses.len();
        self.guesses.push(guess.clone());
        self.input.clear();

        let verdict = if guess == self.solution {
            Some(Outcome::Won)
        } else if self.guesses.len() >= self.max_attempts {
            Some(Outcome::Lost)
        } else {
            None
        };
        self.verdict = verdict;

        Ok(Some(Accepted {
            row,
            guess,
            evaluation,
            verdict,
        }))
    }

    /// Apply the pending verdict on behalf of `owner`
    ///
    /// Does nothing and returns `None` if `owner` is not this game, the game
    /// is already over, or no verdict is pending.
    pub fn finalize(&mut self, owner: GameId) -> Option<Outcome> {
        if owner != self.id || self.is_over() {
            return None;
        }
        let outcome = self.verdict.take()?;
        self.status = outcome.into();
        Some(outcome)
    }

    /// Evaluation of every accepted guess
    #[must_use]
    pub fn evaluations(&self) -> Vec<Evaluation> {
        self.guesses
            .iter()
            .map(|g| Evaluation::calculate(g, &self.solution))
            .collect()
    }

    /// Board rows, exactly `max_attempts` of them
    ///
    /// Completed guesses carry their evaluation. While the game is playing the
    /// next row shows the input buffer; the rest are blank.
    #[must_use]
    pub fn rows(&self) -> Vec<Row> {
        let mut rows: Vec<Row> = self
            .guesses
            .iter()
            .zip(self.evaluations())
            .map(|(guess, evaluation)| Row::completed(guess, evaluation))
            .collect();

        if self.status == GameStatus::Playing && rows.len() < self.max_attempts {
            rows.push(Row::in_progress(&self.input));
        }

        rows.resize(self.max_attempts, Row::default());
        rows
    }

    #[must_use]
    pub fn keyboard_status(&self) -> KeyboardStatus {
        KeyboardStatus::aggregate(&self.guesses, &self.solution)
    }

    /// Message for a finished game
    #[must_use]
    pub fn outcome_message(&self) -> Option<String> {
        match self.status {
            GameStatus::Playing => None,
            GameStatus::Won => Some(format!(
                "Nice! You found the word in {}.",
                tries(self.guesses.len())
            )),
            GameStatus::Lost => Some(format!("The word was {}.", self.solution)),
        }
    }
}

/// "1 try", "3 tries"
pub(crate) fn tries(count: usize) -> String {
    if count == 1 {
        "1 try".to_string()
    } else {
        format!("{count} tries")
    }
}

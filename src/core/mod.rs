//! Core domain types
//!
//! Words, guess evaluation and keyboard aggregation. Everything here is pure:
//! no clocks, no randomness, no I/O.

mod evaluation;
mod keyboard;
mod word;

pub use evaluation::{Evaluation, LetterStatus};
pub use keyboard::KeyboardStatus;
pub use word::{WORD_LENGTH, Word, WordError};

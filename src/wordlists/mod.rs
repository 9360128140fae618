//! Word lists
//!
//! Provides the embedded word list compiled into the binary and the
//! [`Lexicon`] built from it (or from a custom file).

mod embedded;
mod lexicon;
pub mod loader;

pub use embedded::{WORDS, WORDS_COUNT};
pub use lexicon::Lexicon;

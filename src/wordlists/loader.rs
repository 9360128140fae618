//! Word list loading utilities
//!
//! Reads custom word lists from disk. Validation happens when the entries are
//! turned into a [`Lexicon`](super::Lexicon).

use crate::error::LexiconError;
use std::fs;
use std::path::Path;

/// Load raw entries from a file, one word per line
///
/// # Errors
///
/// Returns `LexiconError::Read` if the file cannot be read.
///
/// # Examples
/// ```no_run
/// use four::wordlists::{Lexicon, loader::load_from_file};
///
/// let entries = load_from_file("data/words.txt").unwrap();
/// let lexicon = Lexicon::new(entries.iter().map(String::as_str)).unwrap();
/// println!("Loaded {} words", lexicon.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<String>, LexiconError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| LexiconError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(content.lines().map(str::to_string).collect())
}

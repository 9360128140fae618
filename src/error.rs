use std::path::PathBuf;

use crate::core::WordError;

/// Errors raised while building a lexicon.
///
/// These are configuration faults: a word list must only hold valid
/// fixed-length words.
#[derive(Debug, thiserror::Error)]
pub enum LexiconError {
    #[error("word list is empty")]
    Empty,

    #[error("invalid entry '{entry}' on line {line}: {source}")]
    InvalidEntry {
        line: usize,
        entry: String,
        source: WordError,
    },

    #[error("failed to read word list {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}

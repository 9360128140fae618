//! Four
//!
//! A four-letter word guessing game: six tries to find a hidden word, with
//! letter-by-letter feedback after every guess.
//!
//! # Quick Start
//!
//! ```rust
//! use four::core::{Evaluation, Word};
//!
//! let guess = Word::new("tone").unwrap();
//! let solution = Word::new("note").unwrap();
//!
//! let evaluation = Evaluation::calculate(&guess, &solution);
//! assert_eq!(evaluation.to_emoji(), "🟨🟩🟨🟩");
//! ```

// Core domain types
pub mod core;

// Game state machine and session clock
pub mod game;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;

// Configuration and errors
pub mod config;
pub mod error;

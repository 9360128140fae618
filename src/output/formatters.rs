//! Formatting utilities for terminal output

use crate::core::{Evaluation, KeyboardStatus, LetterStatus};
use crate::game::Row;
use colored::{ColoredString, Colorize};

/// Keyboard layout, one string per row
pub const KEYBOARD_ROWS: [&str; 3] = ["QWERTYUIOP", "ASDFGHJKL", "ZXCVBNM"];

/// A letter tile colored by its status
#[must_use]
pub fn tile(letter: char, status: Option<LetterStatus>) -> ColoredString {
    let text = format!(" {letter} ");
    match status {
        Some(LetterStatus::Correct) => text.black().on_green().bold(),
        Some(LetterStatus::Present) => text.black().on_yellow().bold(),
        Some(LetterStatus::Absent) => text.white().on_bright_black(),
        None => text.bold(),
    }
}

/// Render a board row as colored tiles; blanks show as underscores
#[must_use]
pub fn row_tiles(row: &Row) -> String {
    row.letters
        .iter()
        .enumerate()
        .map(|(i, letter)| {
            let status = row.evaluation.map(|e| e.statuses()[i]);
            tile(letter.unwrap_or('_'), status).to_string()
        })
        .collect()
}

/// Render the keyboard with each key colored by its best known status
#[must_use]
pub fn keyboard_lines(keyboard: &KeyboardStatus) -> Vec<String> {
    KEYBOARD_ROWS
        .iter()
        .enumerate()
        .map(|(indent, keys)| {
            let keys: String = keys
                .chars()
                .map(|k| tile(k, keyboard.get(k)).to_string())
                .collect();
            format!("{}{keys}", " ".repeat(indent * 2))
        })
        .collect()
}

/// Emoji share grid, one line per evaluation
#[must_use]
pub fn share_grid(evaluations: &[Evaluation]) -> String {
    evaluations
        .iter()
        .map(Evaluation::to_emoji)
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;

    #[test]
    fn share_grid_one_line_per_guess() {
        let solution = Word::new("NOTE").unwrap();
        let evaluations: Vec<Evaluation> = ["TONE", "NOTE"]
            .iter()
            .map(|g| Evaluation::calculate(&Word::new(*g).unwrap(), &solution))
            .collect();
        assert_eq!(share_grid(&evaluations), "🟨🟩🟨🟩\n🟩🟩🟩🟩");
    }

    #[test]
    fn share_grid_empty() {
        assert_eq!(share_grid(&[]), "");
    }

    #[test]
    fn keyboard_has_three_rows() {
        let lines = keyboard_lines(&KeyboardStatus::default());
        assert_eq!(lines.len(), 3);
        assert!(lines[2].starts_with("    "));
    }

    #[test]
    fn row_tiles_contains_letters() {
        colored::control::set_override(false);
        let row = Row {
            letters: [Some('N'), Some('O'), None, None],
            evaluation: None,
        };
        assert_eq!(row_tiles(&row), " N  O  _  _ ");
    }
}

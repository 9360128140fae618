//! Display functions for command results

use super::formatters::{keyboard_lines, row_tiles, share_grid};
use crate::commands::ScoreResult;
use crate::game::{GameStatus, Session, Statistics};
use colored::Colorize;

/// Print the result of scoring a guess
pub fn print_score_result(result: &ScoreResult) {
    println!("\n{}", "─".repeat(40).cyan());
    println!(
        "Guess {} against {}",
        result.guess.text().bright_yellow().bold(),
        result.solution.text().bright_yellow().bold()
    );
    println!("{}", "─".repeat(40).cyan());

    println!("\n  {}", row_tiles(&result.row()));
    println!("  {}  ({})", result.evaluation.to_emoji(), result.evaluation);

    if result.evaluation.is_solved() {
        println!("\n{}", "✅ Exact match".green().bold());
    }
}

/// Print the board and keyboard of the current game
pub fn print_board(session: &Session) {
    let game = session.game();
    println!(
        "\n{} {}/{}",
        "Attempts:".bright_black(),
        game.attempts(),
        game.max_attempts()
    );
    for row in session.rows() {
        println!("  {}", row_tiles(&row));
    }
    println!();
    for line in keyboard_lines(&session.keyboard_status()) {
        println!("  {line}");
    }
    println!();
}

/// Print the end-of-game banner
pub fn print_game_over(session: &Session) {
    let Some(message) = session.outcome_message() else {
        return;
    };

    println!("\n{}", "═".repeat(40).bright_cyan());
    match session.status() {
        GameStatus::Won => println!("  {}", message.bright_green().bold()),
        _ => println!("  {}", message.bright_red().bold()),
    }
    println!("{}", "═".repeat(40).bright_cyan());

    println!("\n{}", share_grid(&session.game().evaluations()));
    print_statistics(session.statistics());
}

/// Print session statistics with a guess distribution chart
pub fn print_statistics(stats: &Statistics) {
    println!(
        "\n📊 Played {} | Won {} | Win rate {:.0}%",
        stats.games_played,
        stats.games_won,
        stats.win_rate()
    );

    let max = stats.guess_distribution.iter().copied().max().unwrap_or(0);
    if max == 0 {
        return;
    }
    for (i, &count) in stats.guess_distribution.iter().enumerate() {
        let width = count * 20 / max;
        println!(
            "   {}: {}{} {count}",
            i + 1,
            "█".repeat(width).green(),
            "░".repeat(20 - width).bright_black()
        );
    }
}

//! TUI rendering with ratatui
//!
//! Board, keyboard and notification panels for the game interface.

use super::app::App;
use crate::core::LetterStatus;
use crate::game::{GameStatus, MessageStyle, Row};
use crate::output::formatters::KEYBOARD_ROWS;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(12),   // Main content
            Constraint::Length(3), // Outcome / prompt
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(60), // Board and keyboard
            Constraint::Percentage(40), // Notifications and statistics
        ])
        .split(chunks[1]);

    render_game_panel(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    render_prompt(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, app: &App, area: Rect) {
    let game = app.session.game();
    let tracker: String = (0..game.max_attempts())
        .map(|i| if i < game.attempts() { '●' } else { '○' })
        .collect();

    let header = Paragraph::new(Line::from(vec![
        Span::styled(
            "FOUR",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("   "),
        Span::styled(tracker, Style::default().fg(Color::Yellow)),
    ]))
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .style(Style::default().fg(Color::Cyan)),
    );
    f.render_widget(header, area);
}

fn render_game_panel(f: &mut Frame, app: &App, area: Rect) {
    let board = board_height(app.session.game().max_attempts());
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(board), // Board
            Constraint::Min(5),        // Keyboard
        ])
        .split(area);

    render_board(f, app, chunks[0]);
    render_keyboard(f, app, chunks[1]);
}

/// Board rows plus borders, clamped to what a terminal can address
fn board_height(max_attempts: usize) -> u16 {
    u16::try_from(max_attempts)
        .unwrap_or(u16::MAX)
        .saturating_add(2)
}

fn status_style(status: LetterStatus) -> Style {
    match status {
        LetterStatus::Correct => Style::default()
            .fg(Color::Black)
            .bg(Color::Green)
            .add_modifier(Modifier::BOLD),
        LetterStatus::Present => Style::default()
            .fg(Color::Black)
            .bg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
        LetterStatus::Absent => Style::default().fg(Color::White).bg(Color::DarkGray),
    }
}

fn board_line(app: &App, index: usize, row: &Row) -> Line<'static> {
    let input_row = index == app.session.game().attempts();
    let shaking = input_row && app.session.is_shaking();
    let revealed = app.revealed_tiles(index);

    let mut spans = vec![Span::raw(if shaking { " " } else { "  " })];
    for (i, letter) in row.letters.iter().enumerate() {
        let text = format!(" {} ", letter.unwrap_or('·'));
        let style = match row.evaluation {
            Some(evaluation) if i < revealed => status_style(evaluation.statuses()[i]),
            Some(_) => Style::default().fg(Color::White).bg(Color::Black),
            None if shaking => Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            None if letter.is_some() => Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
            None => Style::default().fg(Color::DarkGray),
        };
        spans.push(Span::styled(text, style));
        spans.push(Span::raw(" "));
    }
    Line::from(spans)
}

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let lines: Vec<Line> = app
        .session
        .rows()
        .iter()
        .enumerate()
        .map(|(i, row)| board_line(app, i, row))
        .collect();

    let board = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Board ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(board, area);
}

fn render_keyboard(f: &mut Frame, app: &App, area: Rect) {
    let keyboard = app.session.keyboard_status();
    let lines: Vec<Line> = KEYBOARD_ROWS
        .iter()
        .map(|keys| {
            let spans: Vec<Span> = keys
                .chars()
                .flat_map(|k| {
                    let style = keyboard
                        .get(k)
                        .map_or_else(|| Style::default().fg(Color::White), status_style);
                    [Span::styled(format!(" {k} "), style), Span::raw(" ")]
                })
                .collect();
            Line::from(spans)
        })
        .collect();

    let paragraph = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Keyboard ")
            .borders(Borders::ALL),
    );
    f.render_widget(paragraph, area);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(40), // Notifications
            Constraint::Percentage(60), // Statistics
        ])
        .split(area);

    render_notifications(f, app, chunks[0]);
    render_statistics(f, app, chunks[1]);
}

fn render_notifications(f: &mut Frame, app: &App, area: Rect) {
    let items: Vec<ListItem> = app
        .session
        .notifications()
        .iter()
        .rev()
        .map(|n| {
            let style = match n.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(n.text.clone()).style(style)
        })
        .collect();

    let list =
        List::new(items).block(Block::default().title(" Messages ").borders(Borders::ALL));
    f.render_widget(list, area);
}

fn render_statistics(f: &mut Frame, app: &App, area: Rect) {
    let stats = app.session.statistics();
    let max = stats.guess_distribution.iter().copied().max().unwrap_or(0);

    let mut lines = vec![
        Line::from(format!(
            "Played: {}  Won: {}  Win rate: {:.0}%",
            stats.games_played,
            stats.games_won,
            stats.win_rate()
        )),
        Line::from(""),
    ];
    for (i, &count) in stats.guess_distribution.iter().enumerate() {
        let width = if max == 0 { 0 } else { count * 16 / max };
        lines.push(Line::from(vec![
            Span::raw(format!("{}: ", i + 1)),
            Span::styled("█".repeat(width), Style::default().fg(Color::Green)),
            Span::raw(format!(" {count}")),
        ]));
    }

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .title(" Statistics ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(paragraph, area);
}

fn render_prompt(f: &mut Frame, app: &App, area: Rect) {
    let (content, color) = match (app.session.status(), app.session.outcome_message()) {
        (GameStatus::Won, Some(message)) => (message, Color::Green),
        (GameStatus::Lost, Some(message)) => (message, Color::Red),
        _ if app.session.game().pending_verdict().is_some() => (String::new(), Color::Yellow),
        _ => (
            format!("Type a {}-letter word", crate::core::WORD_LENGTH),
            Color::Yellow,
        ),
    };

    let prompt = Paragraph::new(content)
        .alignment(Alignment::Center)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );
    f.render_widget(prompt, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(area);

    let game = app.session.game();
    let game_text = format!(
        "Game {} | Attempts: {}/{}",
        game.id(),
        game.attempts(),
        game.max_attempts()
    );
    f.render_widget(
        Paragraph::new(game_text).alignment(Alignment::Center),
        chunks[0],
    );

    let help_text = if game.is_over() {
        "Enter: New Game | Esc: Quit"
    } else {
        "Enter: Submit | Backspace: Delete | Ctrl-N: New Game | Esc: Quit"
    };
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[1]);
}

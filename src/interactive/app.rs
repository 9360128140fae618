//! TUI application state and logic

use crate::core::WORD_LENGTH;
use crate::game::{GameStatus, Session};
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use log::debug;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::{Duration, Instant};

/// Upper bound on how long the event loop sleeps between redraws
const FRAME_MS: u64 = 50;

/// Application state
pub struct App {
    pub session: Session,
    pub should_quit: bool,
    /// Row being revealed and the session time its reveal started
    pub reveal: Option<(usize, u64)>,
}

impl App {
    #[must_use]
    pub fn new(session: Session) -> Self {
        Self {
            session,
            should_quit: false,
            reveal: None,
        }
    }

    /// Number of tiles of `row` whose color may be shown right now
    #[must_use]
    pub fn revealed_tiles(&self, row: usize) -> usize {
        let Some((reveal_row, started)) = self.reveal else {
            return WORD_LENGTH;
        };
        if reveal_row != row || self.session.revealing_row() != Some(row) {
            return WORD_LENGTH;
        }

        let interval = self.session.config().reveal_interval_ms.max(1);
        let elapsed = self.session.now_ms().saturating_sub(started);
        (elapsed / interval + 1).min(WORD_LENGTH as u64) as usize
    }

    pub fn new_game(&mut self) {
        self.session.start_new_game();
        self.reveal = None;
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Char('n') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.new_game();
            }
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Char(c) => {
                self.session.append_letter(c);
            }
            KeyCode::Backspace => {
                self.session.backspace();
            }
            KeyCode::Enter => {
                if self.session.status() == GameStatus::Playing {
                    self.submit();
                } else {
                    self.new_game();
                }
            }
            _ => {}
        }
    }

    fn submit(&mut self) {
        let started = self.session.now_ms();
        match self.session.submit_guess() {
            Ok(Some(accepted)) => self.reveal = Some((accepted.row, started)),
            Ok(None) => {}
            Err(rejection) => debug!("guess rejected: {rejection}"),
        }
    }

    /// Advance the session clock by real elapsed time
    pub fn tick(&mut self, elapsed: Duration) {
        let elapsed_ms = u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX);
        self.session.advance(elapsed_ms);
        if self.session.revealing_row().is_none() {
            self.reveal = None;
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    let mut last_tick = Instant::now();

    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        let timeout = app
            .session
            .next_deadline_in_ms()
            .map_or(FRAME_MS, |ms| ms.min(FRAME_MS));

        if event::poll(Duration::from_millis(timeout))?
            && let Event::Key(key) = event::read()?
            // Only process key press events (fixes Windows double-input bug)
            && key.kind == KeyEventKind::Press
        {
            app.handle_key(key);
        }

        let now = Instant::now();
        app.tick(now.duration_since(last_tick));
        last_tick = now;

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::wordlists::Lexicon;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn new_app() -> App {
        let lexicon = Lexicon::new(["NOTE", "TONE", "DATA", "CODE"]).unwrap();
        App::new(Session::new(
            lexicon,
            GameConfig::default(),
            StdRng::seed_from_u64(3),
        ))
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn type_word(app: &mut App, word: &str) {
        for c in word.chars() {
            press(app, KeyCode::Char(c));
        }
        press(app, KeyCode::Enter);
    }

    #[test]
    fn typing_and_backspace_edit_input() {
        let mut app = new_app();
        press(&mut app, KeyCode::Char('n'));
        press(&mut app, KeyCode::Char('o'));
        press(&mut app, KeyCode::Backspace);
        assert_eq!(app.session.game().input(), "N");
    }

    #[test]
    fn quit_keys() {
        let mut app = new_app();
        press(&mut app, KeyCode::Esc);
        assert!(app.should_quit);

        let mut app = new_app();
        app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.should_quit);
    }

    #[test]
    fn reveal_progresses_one_tile_per_interval() {
        let mut app = new_app();
        let solution = app.session.game().solution().text().to_string();
        let guess = if solution == "DATA" { "CODE" } else { "DATA" };

        type_word(&mut app, guess);
        assert_eq!(app.revealed_tiles(0), 1);

        app.tick(Duration::from_millis(500));
        assert_eq!(app.revealed_tiles(0), 2);

        app.tick(Duration::from_millis(1000));
        assert_eq!(app.revealed_tiles(0), 4);

        app.tick(Duration::from_millis(500));
        assert!(app.reveal.is_none());
        assert_eq!(app.revealed_tiles(0), WORD_LENGTH);
    }

    #[test]
    fn enter_after_game_over_starts_new_game() {
        let mut app = new_app();
        let solution = app.session.game().solution().text().to_string();
        let first_id = app.session.game().id();

        type_word(&mut app, &solution);
        app.tick(Duration::from_millis(2100));
        assert_eq!(app.session.status(), GameStatus::Won);

        press(&mut app, KeyCode::Enter);
        assert_eq!(app.session.status(), GameStatus::Playing);
        assert_ne!(app.session.game().id(), first_id);
    }

    #[test]
    fn ctrl_n_abandons_current_game() {
        let mut app = new_app();
        let first_id = app.session.game().id();
        press(&mut app, KeyCode::Char('d'));
        app.handle_key(KeyEvent::new(KeyCode::Char('n'), KeyModifiers::CONTROL));
        assert_ne!(app.session.game().id(), first_id);
        assert_eq!(app.session.game().input(), "");
    }
}

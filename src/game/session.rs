//! Game session
//!
//! The session is the only entry point the presentation layer mutates. It
//! owns the current [`Game`], a logical clock and the queue of deferred
//! effects. Starting a new game swaps in a fresh `Game` with the next
//! [`GameId`]; effects queued by the old game still fire, find a different
//! owner and are dropped.

use super::notifications::{MessageStyle, Notification, Notifications};
use super::scheduler::{Pending, Scheduler};
use super::state::{Accepted, Game, GameId, GameStatus, GuessRejection, Outcome, Row, tries};
use crate::config::GameConfig;
use crate::core::KeyboardStatus;
use crate::wordlists::Lexicon;
use log::{debug, info};
use rand::rngs::StdRng;

/// Deferred effect of an accepted or rejected guess
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// The row has finished revealing
    EndReveal { row: usize },
    /// The rejected input row stops shaking
    EndShake,
    /// Apply the pending win or loss
    Finalize,
}

/// Results of finished games in this session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Statistics {
    pub games_played: usize,
    pub games_won: usize,
    /// `guess_distribution[n - 1]` counts wins in `n` guesses
    pub guess_distribution: Vec<usize>,
}

impl Statistics {
    fn new(max_attempts: usize) -> Self {
        Self {
            games_played: 0,
            games_won: 0,
            guess_distribution: vec![0; max_attempts],
        }
    }

    fn record(&mut self, outcome: Outcome, attempts: usize) {
        self.games_played += 1;
        if outcome == Outcome::Won {
            self.games_won += 1;
            if let Some(slot) = attempts
                .checked_sub(1)
                .and_then(|i| self.guess_distribution.get_mut(i))
            {
                *slot += 1;
            }
        }
    }

    /// Percentage of finished games that were won
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.games_played == 0 {
            0.0
        } else {
            self.games_won as f64 / self.games_played as f64 * 100.0
        }
    }
}

/// A running game plus everything that outlives it
///
/// Owns the lexicon, configuration and RNG, the logical clock, the deferred
/// effect queue, notifications and statistics. All game mutation goes through
/// [`append_letter`](Self::append_letter), [`backspace`](Self::backspace),
/// [`submit_guess`](Self::submit_guess) and
/// [`start_new_game`](Self::start_new_game); time moves only through
/// [`advance`](Self::advance) and [`settle`](Self::settle).
pub struct Session {
    lexicon: Lexicon,
    config: GameConfig,
    rng: StdRng,
    game: Game,
    scheduler: Scheduler<Effect>,
    notifications: Notifications,
    now_ms: u64,
    revealing_row: Option<usize>,
    shaking: bool,
    stats: Statistics,
}

impl Session {
    /// Start a session with a first game already drawn
    #[must_use]
    pub fn new(lexicon: Lexicon, config: GameConfig, mut rng: StdRng) -> Self {
        let solution = lexicon.random_word(&mut rng).clone();
        let game = Game::new(GameId::FIRST, solution, config.max_attempts);
        info!(
            "session started with {} words, game {}",
            lexicon.len(),
            game.id()
        );

        Self {
            notifications: Notifications::new(config.notification_ttl_ms),
            stats: Statistics::new(config.max_attempts),
            lexicon,
            config,
            rng,
            game,
            scheduler: Scheduler::new(),
            now_ms: 0,
            revealing_row: None,
            shaking: false,
        }
    }

    /// Replace the current game with a fresh one
    ///
    /// Effects still queued for the old game are left in place and dropped
    /// when they fire.
    pub fn start_new_game(&mut self) {
        let id = self.game.id().next();
        let solution = self.lexicon.random_word(&mut self.rng).clone();
        self.game = Game::new(id, solution, self.config.max_attempts);
        self.revealing_row = None;
        self.shaking = false;
        self.notifications.clear();
        info!("started game {id}");
    }

    pub fn append_letter(&mut self, letter: char) -> bool {
        self.game.append_letter(letter)
    }

    pub fn backspace(&mut self) -> bool {
        self.game.backspace()
    }

    /// Submit the input buffer
    ///
    /// A rejection posts an error notification and shakes the input row. An
    /// accepted guess starts its reveal; if it decided the game, the outcome
    /// is applied once the reveal has finished.
    ///
    /// # Errors
    ///
    /// Returns the `GuessRejection` explaining why the guess was not accepted.
    /// The game is unchanged in that case.
    pub fn submit_guess(&mut self) -> Result<Option<Accepted>, GuessRejection> {
        let id = self.game.id();
        match self.game.submit(&self.lexicon) {
            Ok(Some(accepted)) => {
                debug!(
                    "game {id}: accepted {} as guess {} ({})",
                    accepted.guess,
                    accepted.row + 1,
                    accepted.evaluation
                );
                self.revealing_row = Some(accepted.row);
                self.scheduler.schedule(
                    self.now_ms,
                    self.config.reveal_duration_ms(),
                    id,
                    Effect::EndReveal { row: accepted.row },
                );
                if let Some(verdict) = accepted.verdict {
                    debug!("game {id}: {verdict:?} pending reveal");
                    self.scheduler.schedule(
                        self.now_ms,
                        self.config.finalize_delay_ms(),
                        id,
                        Effect::Finalize,
                    );
                }
                Ok(Some(accepted))
            }
            Ok(None) => Ok(None),
            Err(rejection) => {
                debug!("game {id}: rejected '{}': {rejection}", self.game.input());
                self.notifications
                    .push(self.now_ms, rejection.to_string(), MessageStyle::Error);
                self.shaking = true;
                self.scheduler
                    .schedule(self.now_ms, self.config.shake_ms, id, Effect::EndShake);
                Err(rejection)
            }
        }
    }

    /// Move the clock forward and fire everything that came due
    pub fn advance(&mut self, elapsed_ms: u64) {
        self.now_ms = self.now_ms.saturating_add(elapsed_ms);
        for pending in self.scheduler.drain_due(self.now_ms) {
            self.fire(pending);
        }
        self.notifications.expire(self.now_ms);
    }

    /// Advance until every queued effect has fired
    pub fn settle(&mut self) {
        if let Some(last) = self.scheduler.last_due() {
            self.advance(last.saturating_sub(self.now_ms));
        }
    }

    /// Time until the next effect fires or notification expires
    #[must_use]
    pub fn next_deadline_in_ms(&self) -> Option<u64> {
        let expiry = self
            .notifications
            .items()
            .iter()
            .map(|n| n.expires_at_ms)
            .min();
        [self.scheduler.next_due(), expiry]
            .into_iter()
            .flatten()
            .min()
            .map(|at| at.saturating_sub(self.now_ms))
    }

    fn fire(&mut self, pending: Pending<Effect>) {
        let Pending {
            due_ms,
            owner,
            task,
            ..
        } = pending;

        if owner != self.game.id() {
            debug!(
                "dropping {task:?} from game {owner}, current game is {}",
                self.game.id()
            );
            return;
        }

        match task {
            Effect::EndReveal { row } => {
                if self.revealing_row == Some(row) {
                    self.revealing_row = None;
                }
            }
            Effect::EndShake => self.shaking = false,
            Effect::Finalize => {
                let Some(outcome) = self.game.finalize(owner) else {
                    return;
                };
                let attempts = self.game.attempts();
                self.stats.record(outcome, attempts);
                info!("game {owner} {outcome:?} after {attempts} guesses");

                let (text, style) = match outcome {
                    Outcome::Won => (
                        format!("Excellent! Found in {}!", tries(attempts)),
                        MessageStyle::Success,
                    ),
                    Outcome::Lost => (
                        format!("Game over! The word was {}", self.game.solution()),
                        MessageStyle::Info,
                    ),
                };
                self.notifications.push(due_ms, text, style);
            }
        }
    }

    #[must_use]
    pub fn game(&self) -> &Game {
        &self.game
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.game.status()
    }

    #[must_use]
    pub fn rows(&self) -> Vec<Row> {
        self.game.rows()
    }

    #[must_use]
    pub fn keyboard_status(&self) -> KeyboardStatus {
        self.game.keyboard_status()
    }

    #[must_use]
    pub fn outcome_message(&self) -> Option<String> {
        self.game.outcome_message()
    }

    #[must_use]
    pub fn notifications(&self) -> &[Notification] {
        self.notifications.items()
    }

    /// Row whose tiles are still revealing
    #[must_use]
    pub fn revealing_row(&self) -> Option<usize> {
        self.revealing_row
    }

    #[must_use]
    pub fn is_shaking(&self) -> bool {
        self.shaking
    }

    #[must_use]
    pub fn statistics(&self) -> &Statistics {
        &self.stats
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    /// Effects still queued, including ones that will be dropped as stale
    #[must_use]
    pub fn pending_effects(&self) -> usize {
        self.scheduler.len()
    }
}

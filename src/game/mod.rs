//! Game state machine
//!
//! [`Game`] holds the rules for one instance; [`Session`] drives it on a
//! logical clock, sequencing reveal, shake and outcome effects and keeping the
//! notification list.

pub mod notifications;
pub mod scheduler;
mod session;
mod state;

pub use notifications::{MessageStyle, Notification};
pub use session::{Effect, Session, Statistics};
pub use state::{Accepted, Game, GameId, GameStatus, GuessRejection, Outcome, Row};

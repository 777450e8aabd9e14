//! Game-state core for Wormle: a snake that spells out a hidden word.
//!
//! The snake collects letter tiles; every `target.len()` pickups form one
//! Wordle-style guess. Picking a letter that cannot continue any dictionary
//! word loses the game, spelling the target wins it.

pub mod clock;
pub mod config;
pub mod error;
pub mod food;
pub mod grid;
pub mod guess;
pub mod session;
pub mod snake;
pub mod trie;
pub mod words;

pub type GridInt = i32;
pub type Coords = (GridInt, GridInt);

/// Letters that get a food tile on the board.
pub const ALPHABET: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";

pub use config::GameConfig;
pub use error::{ConfigError, SessionError, WordListError};
pub use guess::LetterTag;
pub use session::{GameState, LossCause, Session, Snapshot, TickOutcome};
pub use snake::Direction;
pub use words::{Lexicon, WordList};

use thiserror::Error;

use super::constants::{MAX_PLAYERS, MIN_PLAYERS};

/// Game-specific error types
#[derive(Debug, Error)]
pub enum GameError {
    /// Player count outside the supported range
    #[error("Invalid number of players. The game supports {min}-{max} players.", min = MIN_PLAYERS, max = MAX_PLAYERS)]
    InvalidPlayerCount { got: i64 },
    /// Deal total too small to give every player a card
    #[error("Cannot deal {total} cards between {players} players: every player needs at least one card.")]
    InvalidDealTotal { total: usize, players: usize },
    /// Failed to parse user input
    #[error("Parse error: {0}")]
    ParseError(String),
    /// Operation not allowed in the engine's current state
    #[error("Invalid state: {0}")]
    InvalidState(String),
    /// I/O error occurred
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Type alias for Results using GameError
pub type GameResult<T> = Result<T, GameError>;

impl From<std::num::ParseIntError> for GameError {
    fn from(err: std::num::ParseIntError) -> Self {
        GameError::ParseError(err.to_string())
    }
}

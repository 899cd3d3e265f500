//! Game setup parameters.

use super::constants::{DEFAULT_DEAL_TOTAL, MAX_PLAYERS, MIN_PLAYERS};
use super::errors::{GameError, GameResult};

/// Validated parameters for a single game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    num_players: usize,
    total_cards_to_deal: usize,
    seed: Option<u64>,
}

impl GameConfig {
    /// Validates the player count. The deal total starts at the default.
    pub fn new(num_players: usize) -> GameResult<Self> {
        if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&num_players) {
            return Err(GameError::InvalidPlayerCount {
                got: num_players as i64,
            });
        }
        Ok(GameConfig {
            num_players,
            total_cards_to_deal: DEFAULT_DEAL_TOTAL,
            seed: None,
        })
    }

    /// Sets the total deal. Every player must get at least one card, otherwise
    /// no request could ever succeed and the deck would never shrink. A deal
    /// larger than the deck simply stops when the deck runs out.
    pub fn with_deal_total(mut self, total: usize) -> GameResult<Self> {
        if total / self.num_players == 0 {
            return Err(GameError::InvalidDealTotal {
                total,
                players: self.num_players,
            });
        }
        self.total_cards_to_deal = total;
        Ok(self)
    }

    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    pub fn num_players(&self) -> usize {
        self.num_players
    }

    pub fn total_cards_to_deal(&self) -> usize {
        self.total_cards_to_deal
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Cards each player receives. Any remainder of the total is not dealt.
    pub fn cards_per_player(&self) -> usize {
        self.total_cards_to_deal / self.num_players
    }
}

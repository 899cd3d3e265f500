use tracing::info;

use crate::game_engine::{GameEngine, Winner};
use crate::io::{InputReader, InteractionPort};
use crate::models::config::GameConfig;
use crate::models::constants::{MAX_PLAYERS, MIN_PLAYERS};
use crate::models::errors::{GameError, GameResult};

pub const PLAYER_COUNT_PROMPT: &str = "Enter the number of players (2-4):";

/// Ask for the number of players. Any integer outside 2-4, negative ones
/// included, is an invalid player count rather than a parse error.
pub fn read_player_count(input: &mut dyn InputReader) -> GameResult<usize> {
    let line = input.read_line(PLAYER_COUNT_PROMPT)?;
    let n: i64 = line.trim().parse()?;
    if n < MIN_PLAYERS as i64 || n > MAX_PLAYERS as i64 {
        return Err(GameError::InvalidPlayerCount { got: n });
    }
    Ok(n as usize)
}

/// One session of play: a shuffled deck already dealt to every player.
pub struct Game {
    engine: GameEngine,
}

impl Game {
    pub fn new(config: GameConfig) -> GameResult<Self> {
        let mut engine = GameEngine::new(&config);
        let dealt = engine.deal(config.cards_per_player())?;
        info!(
            players = config.num_players(),
            per_player = config.cards_per_player(),
            dealt,
            seed = ?config.seed(),
            "game set up"
        );
        Ok(Game { engine })
    }

    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    pub fn run(&mut self, port: &mut dyn InteractionPort) -> GameResult<Winner> {
        self.engine.run(port)
    }
}

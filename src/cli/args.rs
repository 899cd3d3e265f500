use clap::{ArgAction, Parser};
use tracing::Level;

use crate::models::config::GameConfig;
use crate::models::constants::DEFAULT_DEAL_TOTAL;
use crate::models::errors::GameResult;

#[derive(Parser, Debug)]
#[command(author, version, about = "Happy Families card game for 2-4 players")]
pub struct Args {
    /// Number of players (2-4); prompted for when omitted
    #[arg(short, long)]
    pub players: Option<usize>,

    /// Total cards dealt at the start, split evenly between players
    #[arg(short, long, default_value_t = DEFAULT_DEAL_TOTAL)]
    pub deal: usize,

    /// Seed for the random number generator
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Log more detail to stderr (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    pub fn log_level(&self) -> Level {
        match self.verbose {
            0 => Level::WARN,
            1 => Level::INFO,
            2 => Level::DEBUG,
            _ => Level::TRACE,
        }
    }

    /// Builds the game configuration for `num_players`, rejecting a deal
    /// that would leave any player without cards.
    pub fn game_config(&self, num_players: usize) -> GameResult<GameConfig> {
        Ok(GameConfig::new(num_players)?
            .with_deal_total(self.deal)?
            .with_seed(self.seed))
    }
}

pub fn parse() -> Args {
    Args::parse()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::errors::GameError;

    #[test]
    fn defaults() {
        let args = Args::try_parse_from(["happy-families"]).unwrap();
        assert_eq!(args.players, None);
        assert_eq!(args.deal, DEFAULT_DEAL_TOTAL);
        assert_eq!(args.seed, None);
        assert_eq!(args.log_level(), Level::WARN);
    }

    #[test]
    fn all_options() {
        let args = Args::try_parse_from([
            "happy-families",
            "--players",
            "3",
            "-d",
            "12",
            "-s",
            "42",
            "-vv",
        ])
        .unwrap();
        assert_eq!(args.players, Some(3));
        assert_eq!(args.deal, 12);
        assert_eq!(args.seed, Some(42));
        assert_eq!(args.log_level(), Level::DEBUG);
    }

    #[test]
    fn deal_smaller_than_player_count_is_rejected() {
        let args = Args::try_parse_from(["happy-families", "-p", "3", "-d", "2"]).unwrap();
        assert!(matches!(
            args.game_config(3),
            Err(GameError::InvalidDealTotal { total: 2, players: 3 })
        ));
    }

    #[test]
    fn game_config_carries_deal_and_seed() {
        let args = Args::try_parse_from(["happy-families", "-d", "9", "-s", "4"]).unwrap();
        let config = args.game_config(4).unwrap();
        assert_eq!(config.cards_per_player(), 2);
        assert_eq!(config.seed(), Some(4));
        assert!(matches!(
            args.game_config(5),
            Err(GameError::InvalidPlayerCount { got: 5 })
        ));
    }

    #[test]
    fn seed_must_be_an_integer() {
        assert!(Args::try_parse_from(["happy-families", "--seed", "abc"]).is_err());
    }
}

//! Happy Families Game Engine
//!
//! A Rust implementation of the Happy Families card game for 2-4 players.
//!
//! # Overview
//!
//! Eleven families of four (father, mother, son and daughter) make up a
//! 44-card deck. Players take turns asking for cards, keep whatever they
//! draw, and lay down each family once they hold all four members. The game
//! ends when the deck runs out or a player lays down their last card.
//!
//! # Modules
//!
//! - [`game_engine`] - Turn state machine and winner determination
//! - [`models`] - Domain models (Card, Deck, Player, configuration, errors)
//! - [`services`] - Session setup and play loop
//! - [`io`] - Input/output abstractions, including the [`io::InteractionPort`]
//! - [`ui`] - Narration and presentation logic
//! - [`cli`] - Command-line arguments
//!
//! # Example
//!
//! ```rust,no_run
//! use happy_families::io::ConsoleInteraction;
//! use happy_families::models::config::GameConfig;
//! use happy_families::GameEngine;
//!
//! let config = GameConfig::new(2).unwrap();
//! let mut engine = GameEngine::new(&config);
//! engine.deal(config.cards_per_player()).unwrap();
//! let winner = engine.run(&mut ConsoleInteraction::terminal()).unwrap();
//! println!("{} wins", winner.name);
//! ```

pub mod game_engine;
pub mod models;
pub mod services;
pub mod io;
pub mod ui;
pub mod cli;

// Re-export commonly used types
pub use game_engine::{FinishReason, GameEngine, GameState, RequestOutcome, TurnReport, Winner};
pub use models::errors::{GameError, GameResult};

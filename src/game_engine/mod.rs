//! Game state machine
//!
//! The GameEngine owns the deck and the players, deals the opening hands and
//! runs turns until the deck is exhausted or a player empties their hand.
//! All narration goes through an [`InteractionPort`].

use tracing::{debug, info, trace};

use crate::io::InteractionPort;
use crate::models::card::Card;
use crate::models::config::GameConfig;
use crate::models::constants::{Family, Role};
use crate::models::deck::Deck;
use crate::models::errors::{GameError, GameResult};
use crate::models::player::Player;
use crate::ui::presenters::{ResultPresenter, TurnPresenter};

/// Core game engine that manages the deck, the players and whose turn it is
pub struct GameEngine {
    deck: Deck,
    players: Vec<Player>,
    current_player_index: usize,
    state: GameState,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    Dealing,
    Playing,
    Finished { winner: usize, reason: FinishReason },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FinishReason {
    /// A player laid down their last family.
    HandEmptied,
    /// The draw pile ran out.
    DeckExhausted,
}

/// What happened to the card a player asked for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestOutcome {
    /// The requester does not hold the card they named (or the name was not recognised).
    NotHeld,
    /// The target held an equal card and handed it over.
    Transferred { from: usize, card: Card },
    /// The target did not have it, so the requester drew from the deck.
    Drew {
        target: usize,
        card: Option<Card>,
        lucky_dip: bool,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnReport {
    pub player: usize,
    pub outcome: RequestOutcome,
    pub happy_family: Option<Family>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Winner {
    pub index: usize,
    pub name: String,
    pub reason: FinishReason,
}

impl GameEngine {
    /// Creates a game with a freshly shuffled deck and `config.num_players()` empty hands
    pub fn new(config: &GameConfig) -> Self {
        let mut deck = match config.seed() {
            Some(seed) => Deck::with_seed(seed),
            None => Deck::default(),
        };
        deck.shuffle();
        Self::with_deck(config, deck)
    }

    /// Creates a game around an already prepared deck. The deck is used as is.
    pub fn with_deck(config: &GameConfig, deck: Deck) -> Self {
        let players = (1..=config.num_players())
            .map(|n| Player::new(format!("Player {}", n)))
            .collect();
        Self {
            deck,
            players,
            current_player_index: 0,
            state: GameState::Dealing,
        }
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn current_player_index(&self) -> usize {
        self.current_player_index
    }

    pub fn current_player(&self) -> &Player {
        &self.players[self.current_player_index]
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Cards in the deck plus every card held or laid down by a player.
    pub fn card_count(&self) -> usize {
        self.deck.len() + self.players.iter().map(|p| p.card_count()).sum::<usize>()
    }

    /// Deals `cards_per_player` rounds, one card per player per round in turn
    /// order, stopping early if the deck runs out. Returns the number of cards dealt.
    pub fn deal(&mut self, cards_per_player: usize) -> GameResult<usize> {
        if self.state != GameState::Dealing {
            return Err(GameError::InvalidState("cards have already been dealt".to_string()));
        }

        let mut dealt = 0;
        'rounds: for _ in 0..cards_per_player {
            for player in self.players.iter_mut() {
                match self.deck.draw_top() {
                    Some(card) => {
                        player.add_card(card);
                        dealt += 1;
                    }
                    None => break 'rounds,
                }
            }
        }

        self.state = GameState::Playing;
        info!(
            players = self.players.len(),
            dealt,
            remaining = self.deck.len(),
            "cards dealt"
        );
        Ok(dealt)
    }

    /// Plays one full turn for the current player and passes play to the next.
    ///
    /// # Errors
    ///
    /// * `InvalidState` if the cards have not been dealt or the game is finished
    /// * any error raised by the port while prompting
    pub fn play_turn(&mut self, port: &mut dyn InteractionPort) -> GameResult<TurnReport> {
        match self.state {
            GameState::Playing => {}
            GameState::Dealing => {
                return Err(GameError::InvalidState("cards have not been dealt".to_string()))
            }
            GameState::Finished { .. } => {
                return Err(GameError::InvalidState("the game is over".to_string()))
            }
        }

        let current = self.current_player_index;
        TurnPresenter::show_turn_start(self.current_player(), port);

        let family_text = port.prompt_family()?;
        let role_text = port.prompt_role()?;
        let family = family_text.parse::<Family>().ok();
        let role = role_text.parse::<Role>().ok();

        let requested = family
            .zip(role)
            .and_then(|(family, role)| self.players[current].hand().find_card(family, role));

        let report = match requested {
            None => {
                debug!(player = current, family = %family_text, role = %role_text, "requested card not held");
                TurnPresenter::show_card_not_held(port);
                TurnReport {
                    player: current,
                    outcome: RequestOutcome::NotHeld,
                    happy_family: None,
                }
            }
            Some(requested) => {
                let outcome = self.resolve_request(current, requested, port);
                let happy_family = self.check_family(current, requested.family(), port);
                TurnReport {
                    player: current,
                    outcome,
                    happy_family,
                }
            }
        };

        self.current_player_index = self.next_player_index(current);
        Ok(report)
    }

    /// Checks for game over conditions and updates the game state
    ///
    /// # Returns
    ///
    /// * `Some(GameState::Finished { .. })` once the game has ended
    /// * `None` while the game is still in progress (or not yet dealt)
    pub fn check_game_over(&mut self) -> Option<GameState> {
        match self.state {
            GameState::Finished { .. } => return Some(self.state),
            GameState::Dealing => return None,
            GameState::Playing => {}
        }

        if self.deck.is_empty() {
            let winner = self.largest_hand_index();
            self.state = GameState::Finished {
                winner,
                reason: FinishReason::DeckExhausted,
            };
            info!(winner, "deck exhausted");
            return Some(self.state);
        }

        None
    }

    /// The winner of a finished game.
    ///
    /// A player who emptied their hand wins outright even though every other
    /// hand is larger. Otherwise the winner was chosen when the deck ran out:
    /// the first player, in turn order, holding the most cards.
    pub fn winner(&self) -> Option<Winner> {
        match self.state {
            GameState::Finished { winner, reason } => Some(Winner {
                index: winner,
                name: self.players[winner].name().to_string(),
                reason,
            }),
            _ => None,
        }
    }

    /// Runs turns until the game ends, then announces the winner.
    pub fn run(&mut self, port: &mut dyn InteractionPort) -> GameResult<Winner> {
        while self.check_game_over().is_none() {
            self.play_turn(port)?;
        }

        let winner = self
            .winner()
            .ok_or_else(|| GameError::InvalidState("game ended without a winner".to_string()))?;
        ResultPresenter::show_winner(&self.players[winner.index], port);
        ResultPresenter::show_standings(&self.players, port);
        info!(winner = %winner.name, reason = ?winner.reason, "game over");
        Ok(winner)
    }

    fn next_player_index(&self, index: usize) -> usize {
        (index + 1) % self.players.len()
    }

    /// The requester holds `requested`; ask the next player for an equal card,
    /// falling back to the deck.
    fn resolve_request(
        &mut self,
        current: usize,
        requested: Card,
        port: &mut dyn InteractionPort,
    ) -> RequestOutcome {
        let target = self.next_player_index(current);

        if self.players[target].hand_mut().remove_card(&requested) {
            self.players[current].add_card(requested);
            TurnPresenter::show_card_handed_over(
                &self.players[target],
                &self.players[current],
                &requested,
                port,
            );
            debug!(from = target, to = current, card = %requested, "card transferred");
            return RequestOutcome::Transferred {
                from: target,
                card: requested,
            };
        }

        TurnPresenter::show_pick_a_card(&self.players[target], port);
        let drawn = self.deck.draw_top();
        TurnPresenter::show_drawn_card(drawn.as_ref(), port);

        let lucky_dip = drawn.is_some_and(|card| card.family() == requested.family());
        if lucky_dip {
            TurnPresenter::show_lucky_dip(port);
        }
        // Drawn cards are kept whether or not they match the request.
        if let Some(card) = drawn {
            self.players[current].add_card(card);
        }
        trace!(player = current, card = ?drawn, lucky_dip, remaining = self.deck.len(), "card drawn");

        RequestOutcome::Drew {
            target,
            card: drawn,
            lucky_dip,
        }
    }

    /// Lays down `family` if the player now holds all of it. Emptying the hand wins the game.
    fn check_family(
        &mut self,
        current: usize,
        family: Family,
        port: &mut dyn InteractionPort,
    ) -> Option<Family> {
        if !self.players[current].hand().has_complete_family(family) {
            return None;
        }

        TurnPresenter::show_happy_family(&self.players[current], family, port);
        let laid_down = self.players[current].lay_down_family(family);
        info!(player = current, family = %family, laid_down, "happy family");

        if self.players[current].hand().is_empty() {
            self.state = GameState::Finished {
                winner: current,
                reason: FinishReason::HandEmptied,
            };
            info!(player = current, "hand emptied");
        }
        Some(family)
    }

    /// First player with the strictly largest hand.
    fn largest_hand_index(&self) -> usize {
        let mut best = 0;
        for (index, player) in self.players.iter().enumerate() {
            if player.hand().len() > self.players[best].hand().len() {
                best = index;
            }
        }
        best
    }
}

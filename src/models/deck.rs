use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use super::card::Card;
use super::constants::{Family, Role, DECK_SIZE};

/// The draw pile. The top of the deck is the end of `cards`.
pub struct Deck {
    cards: Vec<Card>,
    rng: StdRng,
}

impl Deck {
    /// Create a full 44-card deck in family-then-role order, with an entropy-seeded RNG.
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// Create a full deck whose shuffles are reproducible from `seed`.
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    /// Create a deck holding exactly `cards`, top card last. No shuffling is applied.
    pub fn from_cards(cards: Vec<Card>) -> Self {
        Deck {
            cards,
            rng: StdRng::from_entropy(),
        }
    }

    fn with_rng(rng: StdRng) -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);
        for family in Family::ALL {
            for role in Role::ALL {
                cards.push(Card::new(family, role));
            }
        }
        Deck { cards, rng }
    }

    pub fn shuffle(&mut self) {
        self.cards.shuffle(&mut self.rng);
    }

    /// Remove and return the top card, or `None` once the deck is exhausted.
    pub fn draw_top(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn new_deck_holds_every_card_once() {
        let deck = Deck::new();
        assert_eq!(deck.len(), DECK_SIZE);

        let unique: HashSet<Card> = deck.cards().iter().copied().collect();
        assert_eq!(unique.len(), DECK_SIZE);
        for family in Family::ALL {
            let count = deck.cards().iter().filter(|c| c.family() == family).count();
            assert_eq!(count, 4, "{} should have four cards", family);
        }
    }

    #[test]
    fn initial_order_is_family_then_role() {
        let deck = Deck::new();
        assert_eq!(deck.cards()[0], Card::new(Family::Block, Role::Father));
        assert_eq!(deck.cards()[3], Card::new(Family::Block, Role::Daughter));
        assert_eq!(deck.cards()[4], Card::new(Family::Bones, Role::Father));
        assert_eq!(deck.cards()[43], Card::new(Family::Tape, Role::Daughter));
    }

    #[test]
    fn draw_takes_from_the_end() {
        let mut deck = Deck::new();
        assert_eq!(deck.draw_top(), Some(Card::new(Family::Tape, Role::Daughter)));
        assert_eq!(deck.draw_top(), Some(Card::new(Family::Tape, Role::Son)));
        assert_eq!(deck.len(), DECK_SIZE - 2);
    }

    #[test]
    fn draw_from_empty_deck_returns_none() {
        let mut deck = Deck::from_cards(vec![Card::new(Family::Pots, Role::Son)]);
        assert!(deck.draw_top().is_some());
        assert!(deck.is_empty());
        assert_eq!(deck.draw_top(), None);
        assert_eq!(deck.draw_top(), None);
    }

    #[test]
    fn shuffle_keeps_the_same_cards() {
        let mut deck = Deck::with_seed(7);
        deck.shuffle();
        let unique: HashSet<Card> = deck.cards().iter().copied().collect();
        assert_eq!(unique.len(), DECK_SIZE);
    }

    #[test]
    fn same_seed_gives_same_order() {
        let mut a = Deck::with_seed(99);
        let mut b = Deck::with_seed(99);
        a.shuffle();
        b.shuffle();
        assert_eq!(a.cards(), b.cards());
    }

    #[test]
    fn successive_shuffles_differ() {
        let mut a = Deck::new();
        let mut b = Deck::new();
        a.shuffle();
        b.shuffle();
        // 44! orderings; a collision here is practically impossible.
        assert_ne!(a.cards(), b.cards());

        let before = a.cards().to_vec();
        a.shuffle();
        assert_ne!(a.cards(), before.as_slice());
    }
}

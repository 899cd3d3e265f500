use super::card::Card;
use super::constants::{Family, Role};

/// The cards held by one player. Order carries no meaning.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    pub fn has_card(&self, family: Family, role: Role) -> bool {
        self.find_card(family, role).is_some()
    }

    pub fn find_card(&self, family: Family, role: Role) -> Option<Card> {
        self.cards.iter().copied().find(|c| c.matches(family, role))
    }

    /// Remove the card equal to `card`. Returns false if it was not held.
    pub fn remove_card(&mut self, card: &Card) -> bool {
        match self.cards.iter().position(|c| c == card) {
            Some(index) => {
                self.cards.swap_remove(index);
                true
            }
            None => false,
        }
    }

    pub fn count_family(&self, family: Family) -> usize {
        self.cards.iter().filter(|c| c.family() == family).count()
    }

    /// True when every role of `family` is in the hand.
    pub fn has_complete_family(&self, family: Family) -> bool {
        Role::ALL.iter().all(|&role| self.has_card(family, role))
    }

    /// Remove and return every card of `family`.
    pub fn remove_family(&mut self, family: Family) -> Vec<Card> {
        let (removed, kept): (Vec<Card>, Vec<Card>) = std::mem::take(&mut self.cards)
            .into_iter()
            .partition(|c| c.family() == family);
        self.cards = kept;
        removed
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    name: String,
    hand: Hand,
    /// Cards of the families this player has laid down, in the order collected.
    collected: Vec<Card>,
}

impl Player {
    pub fn new(name: impl Into<String>) -> Self {
        Player {
            name: name.into(),
            hand: Hand::new(),
            collected: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn hand(&self) -> &Hand {
        &self.hand
    }

    pub fn hand_mut(&mut self) -> &mut Hand {
        &mut self.hand
    }

    pub fn add_card(&mut self, card: Card) {
        self.hand.add_card(card);
    }

    /// Move every card of `family` from the hand to the collected pile.
    /// Returns how many cards moved.
    pub fn lay_down_family(&mut self, family: Family) -> usize {
        let cards = self.hand.remove_family(family);
        let moved = cards.len();
        self.collected.extend(cards);
        moved
    }

    pub fn collected(&self) -> &[Card] {
        &self.collected
    }

    /// Families laid down so far.
    pub fn families(&self) -> Vec<Family> {
        let mut families: Vec<Family> = Vec::new();
        for card in &self.collected {
            if !families.contains(&card.family()) {
                families.push(card.family());
            }
        }
        families
    }

    /// Cards held plus cards laid down.
    pub fn card_count(&self) -> usize {
        self.hand.len() + self.collected.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hand_of(cards: &[(Family, Role)]) -> Hand {
        let mut hand = Hand::new();
        for &(family, role) in cards {
            hand.add_card(Card::new(family, role));
        }
        hand
    }

    #[test]
    fn has_and_find_card() {
        let hand = hand_of(&[(Family::Bun, Role::Son), (Family::Chip, Role::Mother)]);
        assert!(hand.has_card(Family::Bun, Role::Son));
        assert!(!hand.has_card(Family::Bun, Role::Father));
        assert_eq!(
            hand.find_card(Family::Chip, Role::Mother),
            Some(Card::new(Family::Chip, Role::Mother))
        );
        assert_eq!(hand.find_card(Family::Chip, Role::Son), None);
    }

    #[test]
    fn remove_card_by_value() {
        let mut hand = hand_of(&[(Family::Bun, Role::Son), (Family::Chip, Role::Mother)]);
        assert!(hand.remove_card(&Card::new(Family::Bun, Role::Son)));
        assert_eq!(hand.len(), 1);
        assert!(!hand.has_card(Family::Bun, Role::Son));
        assert!(!hand.remove_card(&Card::new(Family::Bun, Role::Son)));
        assert_eq!(hand.len(), 1);
    }

    #[test]
    fn count_and_remove_family() {
        let mut hand = hand_of(&[
            (Family::Dip, Role::Father),
            (Family::Dip, Role::Mother),
            (Family::Tape, Role::Son),
            (Family::Dip, Role::Daughter),
        ]);
        assert_eq!(hand.count_family(Family::Dip), 3);
        assert_eq!(hand.count_family(Family::Soot), 0);
        assert!(!hand.has_complete_family(Family::Dip));

        hand.add_card(Card::new(Family::Dip, Role::Son));
        assert!(hand.has_complete_family(Family::Dip));
        assert_eq!(hand.count_family(Family::Dip), 4);

        assert_eq!(hand.remove_family(Family::Dip).len(), 4);
        assert_eq!(hand.cards(), &[Card::new(Family::Tape, Role::Son)]);
        assert!(hand.remove_family(Family::Dip).is_empty());
    }

    #[test]
    fn player_starts_with_empty_hand() {
        let mut player = Player::new("Player 1");
        assert_eq!(player.name(), "Player 1");
        assert!(player.hand().is_empty());

        player.add_card(Card::new(Family::Pots, Role::Father));
        assert_eq!(player.hand().len(), 1);
        assert!(player.families().is_empty());
    }

    #[test]
    fn laying_down_a_family_keeps_the_cards() {
        let mut player = Player::new("Player 2");
        for role in Role::ALL {
            player.add_card(Card::new(Family::Soot, role));
        }
        player.add_card(Card::new(Family::Chip, Role::Son));

        assert_eq!(player.lay_down_family(Family::Soot), 4);
        assert_eq!(player.hand().cards(), &[Card::new(Family::Chip, Role::Son)]);
        assert_eq!(player.collected().len(), 4);
        assert_eq!(player.families(), vec![Family::Soot]);
        assert_eq!(player.card_count(), 5);
    }
}

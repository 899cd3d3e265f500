use crate::io::{InteractionPort, OutputWriter};
use crate::models::card::Card;
use crate::models::constants::Family;
use crate::models::player::Player;

pub struct HandPresenter;

impl HandPresenter {
    pub fn show_hand(player_name: &str, cards: &[Card], output: &mut dyn OutputWriter) {
        output.writeln(&format!("{}'s hand:", player_name));
        if cards.is_empty() {
            output.writeln("  (no cards)");
            return;
        }
        for card in cards {
            output.writeln(&format!("  {}", card));
        }
    }
}

pub struct TurnPresenter;

impl TurnPresenter {
    pub fn show_turn_start(player: &Player, port: &mut dyn InteractionPort) {
        port.display_message(&format!("{}'s turn.", player.name()));
        port.display_hand(player.name(), player.hand().cards());
    }

    pub fn show_card_not_held(port: &mut dyn InteractionPort) {
        port.display_message("You don't have the requested card.");
    }

    pub fn show_card_handed_over(from: &Player, to: &Player, card: &Card, port: &mut dyn InteractionPort) {
        port.display_message(&format!("{} hands {} to {}.", from.name(), card, to.name()));
    }

    pub fn show_pick_a_card(target: &Player, port: &mut dyn InteractionPort) {
        port.display_message(&format!("{} says: 'Pick a card!'", target.name()));
    }

    pub fn show_drawn_card(card: Option<&Card>, port: &mut dyn InteractionPort) {
        match card {
            Some(card) => port.display_message(&format!("Drawn card: {}", card)),
            None => port.display_message("No cards left to draw."),
        }
    }

    pub fn show_lucky_dip(port: &mut dyn InteractionPort) {
        port.display_message("Lucky dip!");
    }

    pub fn show_happy_family(player: &Player, family: Family, port: &mut dyn InteractionPort) {
        port.display_message(&format!("{} says: 'Happy family!' ({})", player.name(), family));
    }
}

pub struct ResultPresenter;

impl ResultPresenter {
    pub fn show_winner(winner: &Player, port: &mut dyn InteractionPort) {
        port.display_message(&format!("Game over! {} wins!", winner.name()));
    }

    pub fn show_standings(players: &[Player], port: &mut dyn InteractionPort) {
        port.display_message("Final standings:");
        for player in players {
            port.display_message(&format!(
                "  {:<10}{} cards in hand, {} families",
                player.name(),
                player.hand().len(),
                player.families().len()
            ));
        }
    }
}

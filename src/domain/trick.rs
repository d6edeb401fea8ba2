//! A single trick: the cards played this round, in order.

use serde::{Deserialize, Serialize};

use super::cards::{card_point_value, trump_strength, Card, Rank, Suit};
use super::position::Position;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trick {
    pub leader: Position,
    pub plays: Vec<(Position, Card)>,
}

impl Trick {
    pub fn new(leader: Position) -> Self {
        Self {
            leader,
            plays: Vec::new(),
        }
    }

    pub fn is_complete(&self, active_players: usize) -> bool {
        self.plays.len() >= active_players
    }

    /// The winner: whoever played the highest-ranking trump. Every
    /// play in a trick is trump by construction (non-trump is never legal).
    pub fn winner(&self, trump: Suit) -> Option<Position> {
        self.plays
            .iter()
            .max_by_key(|(_, card)| trump_strength(*card, trump).unwrap_or(0))
            .map(|(pos, _)| *pos)
    }

    /// Raw point total of the cards played in this trick.
    pub fn point_total(&self, trump: Suit) -> u32 {
        self.plays
            .iter()
            .map(|(_, card)| card_point_value(*card, trump) as u32)
            .sum()
    }

    /// The position that played the 2 of trump in this trick, if any.
    pub fn two_of_trump_player(&self, trump: Suit) -> Option<Position> {
        self.plays
            .iter()
            .find(|(_, card)| card.suit == trump && card.rank == Rank::Two)
            .map(|(pos, _)| *pos)
    }
}

//! Per-seat hand and per-hand metadata.

use serde::{Deserialize, Serialize};

use super::cards::Card;
use super::position::{Position, Team};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub position: Position,
    pub team: Team,
    pub hand: Vec<Card>,
    pub eliminated: bool,
    pub revealed_cards: Vec<Card>,
    pub tricks_won: u32,
    /// Whether this player has made their first play of the current hand.
    /// Drives the forced-first-play rule together with `killed_cards`.
    pub has_played: bool,
}

impl Player {
    pub fn new(position: Position) -> Self {
        Self {
            position,
            team: position.team(),
            hand: Vec::new(),
            eliminated: false,
            revealed_cards: Vec::new(),
            tricks_won: 0,
            has_played: false,
        }
    }

    /// Reset the per-hand fields at the start of a new hand, keeping
    /// identity/team fixed.
    pub fn reset_for_new_hand(&mut self) {
        self.hand.clear();
        self.eliminated = false;
        self.revealed_cards.clear();
        self.tricks_won = 0;
        self.has_played = false;
    }
}

//! The canonical immutable game record. Every mutation in this crate
//! takes a `&GameState` and returns a new, owned `GameState`; nothing
//! here is mutated in place from the outside.

use serde::{Deserialize, Serialize};

use crate::config::GameConfig;

use super::cards::{Card, Suit};
use super::events::EventRecord;
use super::player::Player;
use super::position::{Position, Seats, Team, TeamMap};
use super::trick::Trick;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Phase {
    DealerSelection,
    Dealing,
    Bidding,
    Declaring,
    Discarding,
    SecondDeal,
    Playing,
    Scoring,
    Complete,
}

impl Phase {
    /// Phases that advance without a player action. `SecondDeal` is
    /// automatic only while no manual dealer rob is pending; that extra
    /// condition is checked by the engine, not here.
    pub fn is_automatic(self) -> bool {
        matches!(
            self,
            Phase::DealerSelection
                | Phase::Dealing
                | Phase::Discarding
                | Phase::SecondDeal
                | Phase::Scoring
        )
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    pub phase: Phase,
    pub players: Seats<Player>,
    pub deck: Vec<Card>,
    pub discarded_cards: Vec<Card>,
    pub current_dealer: Position,
    pub current_turn: Option<Position>,
    pub bids: Vec<(Position, Option<u8>)>,
    pub highest_bid: Option<(Position, u8)>,
    pub bidding_team: Option<Team>,
    pub trump_suit: Option<Suit>,
    pub current_trick: Option<Trick>,
    pub trick_no: u32,
    pub hand_points: TeamMap<i32>,
    pub cumulative_scores: TeamMap<i32>,
    pub hand_number: u32,
    pub cards_requested: Seats<u8>,
    pub dealer_pool_size: Option<u32>,
    pub killed_cards: Seats<Vec<Card>>,
    pub events: Vec<EventRecord>,
    pub winner: Option<Team>,
    pub config: GameConfig,
    /// Base RNG seed for the whole game; per-hand seeds are derived from
    /// it (see [`super::deck::derive_hand_seed`]) so the state itself
    /// stays plain data with no embedded RNG stream.
    pub seed: u64,
    /// Monotonically increasing counter of player-initiated
    /// `apply_action` calls, used to tag events for `undo` (see
    /// [`super::events::EventRecord`]).
    pub action_seq: u64,
}

impl GameState {
    pub fn player(&self, position: Position) -> &Player {
        &self.players[position]
    }

    pub fn player_mut(&mut self, position: Position) -> &mut Player {
        &mut self.players[position]
    }

    pub fn active_positions(&self) -> impl Iterator<Item = Position> + '_ {
        Position::ALL
            .into_iter()
            .filter(move |&p| !self.player(p).eliminated)
    }

    pub fn active_count(&self) -> usize {
        self.active_positions().count()
    }

    /// Next non-eliminated seat clockwise from `from`.
    pub fn next_active(&self, from: Position) -> Position {
        let mut pos = from.next();
        for _ in 0..4 {
            if !self.player(pos).eliminated {
                return pos;
            }
            pos = pos.next();
        }
        from
    }

    pub fn all_hands_empty(&self) -> bool {
        self.active_positions().all(|p| self.player(p).hand.is_empty())
    }
}

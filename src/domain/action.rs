//! The closed set of actions the engine recognises.

use serde::{Deserialize, Serialize};

use super::cards::{Card, Suit};
use super::position::Position;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Action {
    Bid { amount: u8 },
    Pass,
    DeclareTrump { suit: Suit },
    DealerRobPack { selected: Vec<Card> },
    PlayCard { card: Card },
    /// Idempotent sentinel a collaborator may send to drive the
    /// auto-advance loop if the engine is not driving it intrinsically.
    SystemAutoTransition,
}

/// Who is acting. Automatic phases are dispatched as [`Actor::System`],
/// which bypasses the `position == current_turn` check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Actor {
    Seat(Position),
    System,
}

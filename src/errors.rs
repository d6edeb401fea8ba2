//! Domain-level error type for the Pidro rules engine.
//!
//! HTTP- and storage-agnostic: hosts map these to whatever transport error
//! shape they need. Every variant corresponds to a named kind in the
//! engine's error taxonomy; none are ad-hoc strings.

use thiserror::Error;

use crate::domain::state::Phase;
use crate::domain::{Card, Position};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("{position:?} acted out of turn")]
    NotYourTurn { position: Position },

    #[error("{position:?} is eliminated for this hand")]
    PlayerEliminated { position: Position },

    #[error("action not valid in phase {phase:?}")]
    InvalidActionForPhase { phase: Phase },

    #[error("invalid bid: {detail}")]
    InvalidBid { detail: String },

    #[error("invalid trump suit argument")]
    InvalidTrumpSuit,

    #[error("{card:?} is not in {position:?}'s hand")]
    CardNotInHand { position: Position, card: Card },

    #[error("{card:?} is not trump")]
    NotTrump { card: Card },

    #[error("{position:?} must play the top of their killed pile first")]
    MustPlayTopKilledCardFirst { position: Position },

    #[error("dealer rob selection invalid: {detail}")]
    InvalidDealerRobSelection { detail: String },

    #[error("game is already complete")]
    GameAlreadyComplete,

    #[error("no player-initiated action to undo")]
    NoHistory,
}

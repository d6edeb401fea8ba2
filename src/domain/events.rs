//! The closed set of events the engine emits, and the append-only log
//! that makes replay and undo possible.
//!
//! Visibility policy (part of the schema, not an implementation detail):
//! `SecondDealComplete` and `DealerRobbedPack` never carry card
//! identities, only counts — emitting identities there would leak the
//! dealer's pool or an opponent's replacement cards to anyone observing
//! the event stream. `CardsKilled` and `CardsDealt` are full-fidelity:
//! killed cards are face-up/public, and dealt hands are redacted (per
//! player) by whatever collaborator renders a view, not by this crate.
//!
//! `DealerRobbedPack` carries one extra field, `selected`, needed for
//! this crate's own `replay`/`undo` to reconstruct a manual
//! (`auto_dealer_rob = false`) rob exactly: it is `#[serde(skip)]`, so it
//! never reaches an external subscriber serializing the public event
//! schema, but remains available to the in-process fold in
//! [`super::replay`].

use serde::{Deserialize, Serialize};

use super::cards::{Card, Suit};
use super::position::{Position, Seats, Team, TeamMap};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Event {
    DealerSelected {
        dealer: Position,
    },
    CardsDealt {
        hands: Seats<Vec<Card>>,
    },
    BidMade {
        position: Position,
        amount: u8,
    },
    PlayerPassed {
        position: Position,
    },
    BiddingComplete {
        winner: Position,
        amount: u8,
        team: Team,
    },
    TrumpDeclared {
        position: Position,
        suit: Suit,
    },
    CardsDiscarded {
        discarded: Seats<Vec<Card>>,
    },
    /// Never carries card identities (see module docs).
    SecondDealComplete {
        dealt_counts: Seats<u8>,
    },
    /// Never carries card identities (see module docs).
    DealerRobbedPack {
        dealer: Position,
        took_count: u32,
        kept_count: u32,
        #[serde(skip)]
        selected: Vec<Card>,
    },
    CardsKilled {
        killed: Seats<Vec<Card>>,
    },
    CardPlayed {
        position: Position,
        card: Card,
    },
    TrickWon {
        winner: Position,
        team: Team,
        points: u32,
    },
    PlayerWentCold {
        position: Position,
        revealed: Vec<Card>,
    },
    HandScored {
        hand_points: TeamMap<i32>,
        cumulative_scores: TeamMap<i32>,
    },
    GameWon {
        winner: Team,
        final_scores: TeamMap<i32>,
    },
}

/// One logged event, tagged with the sequence number of the
/// player-initiated `apply_action` call that produced it (or its
/// automatic cascade). Sequence 0 is the initial `new_game` setup, which
/// `undo` never removes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventRecord {
    pub action_seq: u64,
    pub event: Event,
}

//! Single-round bidding. A bid is represented as `Option<u8>` within
//! [`GameState::bids`]: `None` is a pass, `Some(amount)` a bid in
//! 6..=14.

use tracing::debug;

use crate::errors::DomainError;

use super::events::Event;
use super::position::Position;
use super::state::{GameState, Phase};

pub const MIN_BID: u8 = 6;
pub const MAX_BID: u8 = 14;

/// Whether `amount` is a legal bid given the current highest bid.
/// A bid must be strictly higher, except that a second bid of 14 is
/// permitted and overwrites the first (later 14 wins).
pub fn bid_is_legal(amount: u8, highest: Option<u8>) -> bool {
    if !(MIN_BID..=MAX_BID).contains(&amount) {
        return false;
    }
    match highest {
        None => true,
        Some(h) if amount == MAX_BID && h == MAX_BID => true,
        Some(h) => amount > h,
    }
}

/// Whether `position` has no choice but to bid exactly `MIN_BID`: true
/// only when all three other seats have passed and it is the dealer's
/// turn (the dealer-forced bid).
fn dealer_is_forced(state: &GameState, position: Position) -> bool {
    position == state.current_dealer && state.highest_bid.is_none() && bids_so_far(state) == 3
}

fn bids_so_far(state: &GameState) -> usize {
    state.bids.len()
}

/// Legal bid amounts for `position` right now (empty if it is not their
/// turn or the phase is wrong).
pub fn legal_bid_amounts(state: &GameState, position: Position) -> Vec<u8> {
    if state.phase != Phase::Bidding || state.current_turn != Some(position) {
        return Vec::new();
    }
    if dealer_is_forced(state, position) {
        return vec![MIN_BID];
    }
    (MIN_BID..=MAX_BID)
        .filter(|&a| bid_is_legal(a, state.highest_bid.map(|(_, amt)| amt)))
        .collect()
}

/// Can `position` pass right now?
pub fn pass_is_legal(state: &GameState, position: Position) -> bool {
    state.phase == Phase::Bidding
        && state.current_turn == Some(position)
        && !dealer_is_forced(state, position)
}

pub fn place_bid(
    state: &GameState,
    position: Position,
    amount: u8,
) -> Result<(GameState, Vec<Event>), DomainError> {
    if state.phase != Phase::Bidding {
        return Err(DomainError::InvalidActionForPhase { phase: state.phase });
    }
    if state.current_turn != Some(position) {
        return Err(DomainError::NotYourTurn { position });
    }
    if dealer_is_forced(state, position) {
        if amount != MIN_BID {
            return Err(DomainError::InvalidBid {
                detail: format!("dealer is forced to bid {MIN_BID}"),
            });
        }
    } else if !bid_is_legal(amount, state.highest_bid.map(|(_, amt)| amt)) {
        return Err(DomainError::InvalidBid {
            detail: format!("{amount} is not a legal bid"),
        });
    }

    let mut state = state.clone();
    let mut events = Vec::new();
    debug!(?position, amount, "bid placed");
    state.bids.push((position, Some(amount)));
    state.highest_bid = Some((position, amount));
    events.push(Event::BidMade { position, amount });

    finish_turn(&mut state, position, &mut events);
    Ok((state, events))
}

pub fn pass(
    state: &GameState,
    position: Position,
) -> Result<(GameState, Vec<Event>), DomainError> {
    if state.phase != Phase::Bidding {
        return Err(DomainError::InvalidActionForPhase { phase: state.phase });
    }
    if state.current_turn != Some(position) {
        return Err(DomainError::NotYourTurn { position });
    }
    if dealer_is_forced(state, position) {
        return Err(DomainError::InvalidBid {
            detail: format!("dealer is forced to bid {MIN_BID}, cannot pass"),
        });
    }

    let mut state = state.clone();
    let mut events = Vec::new();
    debug!(?position, "player passed");
    state.bids.push((position, None));
    events.push(Event::PlayerPassed { position });

    finish_turn(&mut state, position, &mut events);
    Ok((state, events))
}

fn finish_turn(state: &mut GameState, position: Position, events: &mut Vec<Event>) {
    if position == state.current_dealer {
        // Dealer bids last: bidding is now complete.
        let (winner, amount) = state
            .highest_bid
            .expect("dealer-forced bid guarantees a highest bid exists");
        state.bidding_team = Some(winner.team());
        state.current_turn = Some(winner);
        state.phase = Phase::Declaring;
        events.push(Event::BiddingComplete {
            winner,
            amount,
            team: winner.team(),
        });
    } else {
        state.current_turn = Some(position.next());
    }
}

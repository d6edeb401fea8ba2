//! Trump declaration and the automatic discard that follows it.

use tracing::debug;

use crate::errors::DomainError;

use super::cards::{is_trump, Suit};
use super::events::Event;
use super::position::{Position, Seats};
use super::state::{GameState, Phase};

/// Declare trump. Only the bid winner, in the `Declaring` phase, may do
/// this; it hands off to `Discarding`, which the engine's auto-advance
/// loop resolves immediately via [`run_automatic_discard`].
pub fn declare_trump(
    state: &GameState,
    position: Position,
    suit: Suit,
) -> Result<(GameState, Vec<Event>), DomainError> {
    if state.phase != Phase::Declaring {
        return Err(DomainError::InvalidActionForPhase { phase: state.phase });
    }
    if state.current_turn != Some(position) {
        return Err(DomainError::NotYourTurn { position });
    }

    let mut state = state.clone();
    debug!(?position, ?suit, "trump declared");
    state.trump_suit = Some(suit);
    state.phase = Phase::Discarding;
    state.current_turn = None;
    let events = vec![Event::TrumpDeclared { position, suit }];
    Ok((state, events))
}

/// Automatic: partition every hand into trump/non-trump, move the
/// non-trump cards to `discarded_cards`, and advance to `SecondDeal`.
pub fn run_automatic_discard(state: &GameState) -> (GameState, Vec<Event>) {
    debug_assert_eq!(state.phase, Phase::Discarding);
    let trump = state.trump_suit.expect("trump declared before discarding");
    let mut state = state.clone();
    let mut discarded = Seats::from_fn(|_| Vec::new());

    for position in Position::ALL {
        let player = state.player_mut(position);
        let (trumps, non_trumps): (Vec<_>, Vec<_>) =
            player.hand.drain(..).partition(|&c| is_trump(c, trump));
        player.hand = trumps;
        discarded[position] = non_trumps;
    }
    for position in Position::ALL {
        state.discarded_cards.extend(discarded[position].clone());
    }

    state.phase = Phase::SecondDeal;
    let events = vec![Event::CardsDiscarded { discarded }];
    (state, events)
}

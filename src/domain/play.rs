//! The trick-taking phase: legal plays, the forced-first-play rule for
//! killed cards, going cold, and trick resolution.

use tracing::debug;

use crate::errors::DomainError;

use super::cards::is_trump;
use super::events::Event;
use super::position::Position;
use super::scoring::trick_points;
use super::state::{GameState, Phase};
use super::trick::Trick;

/// A player is cold once their hand holds no trump and they have no
/// forced card left in their kill pile to play instead. Going cold is
/// detected when it becomes their turn, not the moment their
/// last trump leaves their hand.
pub fn is_cold(state: &GameState, position: Position) -> bool {
    let trump = match state.trump_suit {
        Some(t) => t,
        None => return false,
    };
    let player = state.player(position);
    !player.eliminated
        && !player.hand.iter().any(|&c| is_trump(c, trump))
        && state.killed_cards[position].is_empty()
}

/// Which card(s) `position` may legally play right now. A forced first
/// play from the kill pile is the only option when one is pending;
/// otherwise every trump card in hand is legal.
pub fn legal_card_plays(state: &GameState, position: Position) -> Vec<super::cards::Card> {
    if state.phase != Phase::Playing || state.current_turn != Some(position) {
        return Vec::new();
    }
    let player = state.player(position);
    if !player.has_played {
        if let Some(&forced) = state.killed_cards[position].first() {
            return vec![forced];
        }
    }
    let trump = match state.trump_suit {
        Some(t) => t,
        None => return Vec::new(),
    };
    player
        .hand
        .iter()
        .copied()
        .filter(|&c| is_trump(c, trump))
        .collect()
}

/// Eliminate every player who is cold, starting from `current_turn` and
/// walking forward, until an active player who isn't cold holds the
/// turn, the hand abruptly empties out, or the trick in progress
/// completes as a result. Called by the engine before offering or
/// dispatching a play.
pub fn advance_past_cold(state: &GameState) -> (GameState, Vec<Event>) {
    let mut state = state.clone();
    let mut events = Vec::new();

    loop {
        let Some(position) = state.current_turn else {
            break;
        };
        if state.phase != Phase::Playing || !is_cold(&state, position) {
            break;
        }

        let revealed = std::mem::take(&mut state.player_mut(position).hand);
        state.player_mut(position).eliminated = true;
        state.player_mut(position).revealed_cards = revealed.clone();
        debug!(?position, "player went cold");
        events.push(Event::PlayerWentCold { position, revealed });

        if state.active_count() == 0 {
            state.current_turn = None;
            finish_hand_abruptly(&mut state);
            break;
        }

        let was_leader = state
            .current_trick
            .as_ref()
            .is_some_and(|t| t.leader == position && t.plays.is_empty());
        let next = state.next_active(position);
        if was_leader {
            if let Some(trick) = state.current_trick.as_mut() {
                trick.leader = next;
            }
        }
        state.current_turn = Some(next);

        if trick_would_complete(&state, next) {
            let (next_state, trick_events) = resolve_current_trick(&state);
            state = next_state;
            events.extend(trick_events);
        }
    }

    (state, events)
}

/// True once `next` cycling back to the trick leader, with at least one
/// card already played, means nobody else is left to act this trick.
fn trick_would_complete(state: &GameState, next: Position) -> bool {
    match &state.current_trick {
        Some(trick) if !trick.plays.is_empty() => next == trick.leader,
        _ => false,
    }
}

pub fn play_card(
    state: &GameState,
    position: Position,
    card: super::cards::Card,
) -> Result<(GameState, Vec<Event>), DomainError> {
    if state.phase != Phase::Playing {
        return Err(DomainError::InvalidActionForPhase { phase: state.phase });
    }
    if state.current_turn != Some(position) {
        return Err(DomainError::NotYourTurn { position });
    }
    if state.player(position).eliminated {
        return Err(DomainError::PlayerEliminated { position });
    }

    let mut state = state.clone();
    let mut events = Vec::new();

    let forced = state.killed_cards[position].first().copied();
    if !state.player(position).has_played && forced.is_some() {
        let forced = forced.unwrap();
        if card != forced {
            return Err(DomainError::MustPlayTopKilledCardFirst { position });
        }
        state.killed_cards[position].remove(0);
    } else {
        let trump = state.trump_suit.expect("trump declared before play");
        if !is_trump(card, trump) {
            return Err(DomainError::NotTrump { card });
        }
        let idx = state
            .player(position)
            .hand
            .iter()
            .position(|&c| c == card)
            .ok_or(DomainError::CardNotInHand { position, card })?;
        state.player_mut(position).hand.remove(idx);
    }

    state.player_mut(position).has_played = true;
    debug!(?position, %card, "card played");
    events.push(Event::CardPlayed { position, card });
    state
        .current_trick
        .as_mut()
        .expect("a trick is open while playing")
        .plays
        .push((position, card));

    let next = state.next_active(position);
    if trick_would_complete(&state, next) {
        let (next_state, trick_events) = resolve_current_trick(&state);
        state = next_state;
        events.extend(trick_events);
    } else {
        state.current_turn = Some(next);
    }

    Ok((state, events))
}

/// Score the completed trick, start the next one, or move to `Scoring`
/// if every active hand is now empty.
fn resolve_current_trick(state: &GameState) -> (GameState, Vec<Event>) {
    let mut state = state.clone();
    let trick = state.current_trick.take().expect("trick open at resolution");
    let trump = state.trump_suit.expect("trump declared before play");
    let (winner, team_points) = trick_points(&trick, trump);

    for &team in &[super::position::Team::NorthSouth, super::position::Team::EastWest] {
        state.hand_points[team] += team_points[team] as i32;
    }
    state.player_mut(winner).tricks_won += 1;

    debug!(?winner, points = trick.point_total(trump), "trick won");
    let mut events = vec![Event::TrickWon {
        winner,
        team: winner.team(),
        points: trick.point_total(trump),
    }];

    if state.all_hands_empty() {
        state.phase = Phase::Scoring;
        state.current_turn = None;
        state.current_trick = None;
    } else {
        state.trick_no += 1;
        state.current_turn = Some(winner);
        state.current_trick = Some(Trick::new(winner));
    }
    (state, events)
}

/// Every remaining active player went cold in the same sweep, mid-trick,
/// with nobody left to resolve it against: fold straight to scoring on
/// whatever points were already banked.
fn finish_hand_abruptly(state: &mut GameState) {
    state.phase = Phase::Scoring;
    state.current_trick = None;
}

//! Reconstructing a [`GameState`] from its event log, and undoing the
//! last player action.
//!
//! Automatic-phase events (dealing, discard, second deal, kill, scoring,
//! going cold, ...) are never replayed directly: they are deterministic
//! functions of the state that preceded them, so [`engine::new_game`]
//! and [`engine::apply_action`] regenerate them identically from the
//! same seed. Only the events that originated from an actual player
//! decision are re-driven through `apply_action`; every other event in
//! the log is there for an observer, not for this fold.

use crate::config::GameConfig;
use crate::errors::DomainError;

use super::action::{Action, Actor};
use super::engine::{apply_action, new_game};
use super::events::{Event, EventRecord};
use super::state::GameState;

/// Rebuild a [`GameState`] from scratch by replaying `events` against a
/// freshly constructed game with the same `config` and `seed`.
pub fn replay(config: GameConfig, seed: u64, events: &[EventRecord]) -> Result<GameState, DomainError> {
    let mut state = new_game(config, seed);
    let mut applied_seq = 0u64;

    for record in events {
        if record.action_seq == 0 || record.action_seq <= applied_seq {
            continue;
        }
        if let Some((actor, action)) = driving_action(&state, &record.event) {
            state = apply_action(&state, actor, action)?;
            applied_seq = record.action_seq;
        }
    }
    Ok(state)
}

/// The player action that produced `event`, if any. `DealerRobbedPack`
/// only drives replay when the rob was manual (`auto_dealer_rob =
/// false`); under the automatic policy it is the engine's own cascade
/// output and replaying it as an action would hit the wrong phase.
fn driving_action(state: &GameState, event: &Event) -> Option<(Actor, Action)> {
    match event {
        Event::BidMade { position, amount } => {
            Some((Actor::Seat(*position), Action::Bid { amount: *amount }))
        }
        Event::PlayerPassed { position } => Some((Actor::Seat(*position), Action::Pass)),
        Event::TrumpDeclared { position, suit } => {
            Some((Actor::Seat(*position), Action::DeclareTrump { suit: *suit }))
        }
        Event::DealerRobbedPack { dealer, selected, .. } if !state.config.auto_dealer_rob => {
            Some((
                Actor::Seat(*dealer),
                Action::DealerRobPack {
                    selected: selected.clone(),
                },
            ))
        }
        Event::CardPlayed { position, card } => {
            Some((Actor::Seat(*position), Action::PlayCard { card: *card }))
        }
        _ => None,
    }
}

/// Drop every event tagged with the most recent `action_seq` and replay
/// what remains, undoing the last player action (and whatever automatic
/// cascade it triggered) as one atomic step.
pub fn undo(state: &GameState) -> Result<GameState, DomainError> {
    let max_seq = state.events.iter().map(|r| r.action_seq).max().unwrap_or(0);
    if max_seq == 0 {
        return Err(DomainError::NoHistory);
    }
    let remaining: Vec<EventRecord> = state
        .events
        .iter()
        .filter(|r| r.action_seq != max_seq)
        .cloned()
        .collect();
    replay(state.config, state.seed, &remaining)
}

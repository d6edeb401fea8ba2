//! Game setup and the top-level `apply_action` / `legal_actions` surface.
//! This is the only module that knows about the full phase graph; every
//! other domain module exposes one phase's rules in isolation.

use tracing::{info, instrument};

use crate::config::GameConfig;
use crate::errors::DomainError;

use super::action::{Action, Actor};
use super::bidding;
use super::cards::Card;
use super::deck::{derive_hand_seed, deal, shuffled_deck};
use super::events::{Event, EventRecord};
use super::play;
use super::player::Player;
use super::position::{Position, Seats};
use super::redeal;
use super::scoring;
use super::state::{GameState, Phase};
use super::trump;

/// Build a fresh game and run it forward through every automatic phase
/// up to the first point a player decision is required (normally the
/// first bid). All of the setup events are tagged `action_seq = 0`,
/// which `undo` never removes.
#[instrument(skip(config))]
pub fn new_game(config: GameConfig, seed: u64) -> GameState {
    let state = GameState {
        phase: Phase::DealerSelection,
        players: Seats::from_fn(Player::new),
        deck: Vec::new(),
        discarded_cards: Vec::new(),
        current_dealer: Position::North,
        current_turn: None,
        bids: Vec::new(),
        highest_bid: None,
        bidding_team: None,
        trump_suit: None,
        current_trick: None,
        trick_no: 0,
        hand_points: super::position::TeamMap::new(0),
        cumulative_scores: super::position::TeamMap::new(0),
        hand_number: 1,
        cards_requested: Seats::from_fn(|_| 0),
        dealer_pool_size: None,
        killed_cards: Seats::from_fn(|_| Vec::new()),
        events: Vec::new(),
        winner: None,
        config,
        seed,
        action_seq: 0,
    };
    let (mut state, events) = run_cascade(&state);
    state.events = to_records(0, events);
    info!(seed, "new game started");
    state
}

/// Dispatch one player-initiated action. Validates the actor, runs the
/// handler for the current phase, appends its events, then runs the
/// automatic cascade (discard, second deal, scoring, cold sweeps, ...)
/// before handing control back. Every event produced along the way,
/// including the cascade, is tagged with the same `action_seq` so
/// [`super::replay::undo`] can remove the whole turn atomically.
#[instrument(skip(state, action), fields(phase = ?state.phase))]
pub fn apply_action(
    state: &GameState,
    actor: Actor,
    action: Action,
) -> Result<GameState, DomainError> {
    if state.phase == Phase::Complete {
        return Err(DomainError::GameAlreadyComplete);
    }

    let (direct_state, direct_events) = dispatch(state, actor, action)?;
    let seq = state.action_seq + 1;
    let (mut final_state, cascade_events) = run_cascade(&direct_state);

    let mut all_events = direct_events;
    all_events.extend(cascade_events);
    final_state.events.extend(to_records(seq, all_events));
    final_state.action_seq = seq;
    Ok(final_state)
}

fn dispatch(
    state: &GameState,
    actor: Actor,
    action: Action,
) -> Result<(GameState, Vec<Event>), DomainError> {
    match action {
        Action::SystemAutoTransition => Ok((state.clone(), Vec::new())),
        Action::Bid { amount } => {
            let position = seat_of(actor)?;
            bidding::place_bid(state, position, amount)
        }
        Action::Pass => {
            let position = seat_of(actor)?;
            bidding::pass(state, position)
        }
        Action::DeclareTrump { suit } => {
            let position = seat_of(actor)?;
            trump::declare_trump(state, position, suit)
        }
        Action::DealerRobPack { selected } => {
            let position = seat_of(actor)?;
            redeal::dealer_rob(state, position, selected)
        }
        Action::PlayCard { card } => {
            let position = seat_of(actor)?;
            play::play_card(state, position, card)
        }
    }
}

fn seat_of(actor: Actor) -> Result<Position, DomainError> {
    match actor {
        Actor::Seat(position) => Ok(position),
        Actor::System => Err(DomainError::NotYourTurn {
            position: Position::North,
        }),
    }
}

/// Run every automatic phase transition until either a player decision
/// is required or the game is complete.
fn run_cascade(state: &GameState) -> (GameState, Vec<Event>) {
    let mut state = state.clone();
    let mut events = Vec::new();

    loop {
        match state.phase {
            Phase::DealerSelection => {
                let (s, ev) = run_dealer_selection(&state);
                state = s;
                events.extend(ev);
            }
            Phase::Dealing => {
                let (s, ev) = run_dealing(&state);
                state = s;
                events.extend(ev);
            }
            Phase::Discarding => {
                let (s, ev) = trump::run_automatic_discard(&state);
                state = s;
                events.extend(ev);
            }
            Phase::SecondDeal => {
                if state.current_turn.is_some() {
                    break; // awaiting a manual dealer rob
                }
                let (s, ev) = redeal::run_second_deal(&state);
                state = s;
                events.extend(ev);
            }
            Phase::Scoring => {
                let (s, ev) = scoring::run_scoring(&state);
                state = s;
                events.extend(ev);
            }
            Phase::Playing => {
                let (s, ev) = play::advance_past_cold(&state);
                let settled = s.phase == Phase::Playing;
                state = s;
                events.extend(ev);
                if settled {
                    break;
                }
            }
            Phase::Bidding | Phase::Declaring | Phase::Complete => break,
        }
    }
    (state, events)
}

fn run_dealer_selection(state: &GameState) -> (GameState, Vec<Event>) {
    let mut state = state.clone();
    let dealer = if state.hand_number == 1 {
        Position::North
    } else {
        state.current_dealer.next()
    };
    state.current_dealer = dealer;
    state.phase = Phase::Dealing;
    (state, vec![Event::DealerSelected { dealer }])
}

fn run_dealing(state: &GameState) -> (GameState, Vec<Event>) {
    let mut state = state.clone();
    for position in Position::ALL {
        state.player_mut(position).reset_for_new_hand();
    }
    state.trump_suit = None;
    state.bids.clear();
    state.highest_bid = None;
    state.bidding_team = None;
    state.discarded_cards.clear();
    state.killed_cards = Seats::from_fn(|_| Vec::new());
    state.hand_points = super::position::TeamMap::new(0);
    state.dealer_pool_size = None;
    state.current_trick = None;
    state.trick_no = 0;

    let hand_seed = derive_hand_seed(state.seed, state.hand_number);
    state.deck = shuffled_deck(hand_seed);

    // Dealt clockwise from the dealer's left in batches of three (not one
    // contiguous chunk per seat), so a given shuffled deck lands the same
    // cards on the same seats as the table game it's modelled on.
    let dealer = state.current_dealer;
    let deal_size = state.config.initial_deal_size as usize;
    let batch_size = 3;
    let mut hands: Seats<Vec<Card>> = Seats::from_fn(|_| Vec::new());
    let mut dealt = 0usize;
    while dealt < deal_size {
        let this_batch = batch_size.min(deal_size - dealt);
        let mut position = dealer.next();
        for _ in 0..4 {
            hands[position].extend(deal(&mut state.deck, this_batch));
            position = position.next();
        }
        dealt += this_batch;
    }
    for position in Position::ALL {
        state.player_mut(position).hand = hands[position].clone();
    }

    state.phase = Phase::Bidding;
    state.current_turn = Some(dealer.next());
    (state, vec![Event::CardsDealt { hands }])
}

fn to_records(action_seq: u64, events: Vec<Event>) -> Vec<EventRecord> {
    events
        .into_iter()
        .map(|event| EventRecord { action_seq, event })
        .collect()
}

/// What `position` may legally do right now, expressed as the concrete
/// set of actions `apply_action` would accept. Empty outside their turn
/// or in a phase with no player actions.
pub fn legal_actions(state: &GameState, position: Position) -> Vec<Action> {
    if state.current_turn != Some(position) {
        return Vec::new();
    }
    match state.phase {
        Phase::Bidding => {
            let mut actions: Vec<Action> = bidding::legal_bid_amounts(state, position)
                .into_iter()
                .map(|amount| Action::Bid { amount })
                .collect();
            if bidding::pass_is_legal(state, position) {
                actions.push(Action::Pass);
            }
            actions
        }
        Phase::Declaring => super::cards::Suit::ALL
            .into_iter()
            .map(|suit| Action::DeclareTrump { suit })
            .collect(),
        // The dealer's rob selection is a free choice of up to
        // `final_hand_size` cards out of their pool, not an enumerable
        // set of actions; `dealer_rob` validates the choice directly.
        Phase::SecondDeal => Vec::new(),
        Phase::Playing => play::legal_card_plays(state, position)
            .into_iter()
            .map(|card| Action::PlayCard { card })
            .collect(),
        _ => Vec::new(),
    }
}

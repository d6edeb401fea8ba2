//! Second deal, dealer rob, and the kill pile.
//!
//! The second deal always runs in full — refilling every non-dealer and
//! killing anyone's excess trump — before the dealer's rob is resolved,
//! even though the dealer physically acts last; running rob first would
//! let the dealer see a smaller, stale remaining deck.

use tracing::debug;

use crate::errors::DomainError;

use super::cards::{card_point_value, is_trump, trump_strength, Card, Suit};
use super::deck::deal;
use super::events::Event;
use super::position::{Position, Seats};
use super::state::{GameState, Phase};
use super::trick::Trick;

/// Refill every non-dealer seat to `final_hand_size` and kill anyone's
/// (including a non-dealer's) excess trump. Leaves the dealer's own hand
/// untouched. Safe to call unconditionally at the start of `SecondDeal`.
fn refill_non_dealers_and_kill(state: &mut GameState) -> Seats<u8> {
    let final_size = state.config.final_hand_size as usize;
    let dealer = state.current_dealer;
    let mut dealt_counts = Seats::from_fn(|_| 0u8);

    // Clockwise from the dealer's left: when the deck runs short,
    // the seat closest to the dealer's left is topped up first.
    let mut position = dealer.next();
    for _ in 0..3 {
        let have = state.player(position).hand.len();
        if have < final_size {
            let need = final_size - have;
            let drawn = deal(&mut state.deck, need);
            dealt_counts[position] = drawn.len() as u8;
            state.player_mut(position).hand.extend(drawn);
        }
        kill_excess_trump(state, position);
        position = position.next();
    }
    state.cards_requested = dealt_counts;
    dealt_counts
}

/// Move excess non-point trump in `position`'s hand into the public kill
/// pile, weakest first. Kill-eligible means trump and non-point; a stray
/// non-trump card (the second deal draws unfiltered from the deck, so
/// one can land in a non-dealer's hand) is never killed, matching
/// `play::is_cold`'s treatment of it as dead weight that only surfaces
/// in `revealed_cards` once the player goes cold. If the hand cannot be
/// reduced to `final_hand_size` without killing a point-bearing card
/// (7+ point cards held at once), nothing is killed and the hand is
/// left oversized.
fn kill_excess_trump(state: &mut GameState, position: Position) {
    let final_size = state.config.final_hand_size as usize;
    let trump = state.trump_suit.expect("trump declared before second deal");
    let player = state.player_mut(position);
    if player.hand.len() <= final_size {
        return;
    }
    let excess = player.hand.len() - final_size;
    let non_point_count = player
        .hand
        .iter()
        .filter(|&&c| is_trump(c, trump) && card_point_value(c, trump) == 0)
        .count();
    if excess > non_point_count {
        return;
    }

    let mut non_point: Vec<Card> = Vec::new();
    let mut rest: Vec<Card> = Vec::new();
    for &c in player.hand.iter() {
        if is_trump(c, trump) && card_point_value(c, trump) == 0 {
            non_point.push(c);
        } else {
            rest.push(c);
        }
    }
    non_point.sort_by_key(|&c| trump_strength(c, trump).unwrap_or(0));
    let killed: Vec<Card> = non_point.drain(0..excess).collect();
    non_point.extend(rest);
    player.hand = non_point;

    debug!(?position, count = killed.len(), "excess trump killed");
    state.killed_cards[position].extend(killed);
}

/// Automatic half of the second deal: refill non-dealers, then either
/// resolve the dealer's rob automatically (`auto_dealer_rob = true`) or
/// hand control to the dealer via `current_turn` for a manual
/// [`dealer_rob`] action.
pub fn run_second_deal(state: &GameState) -> (GameState, Vec<Event>) {
    debug_assert_eq!(state.phase, Phase::SecondDeal);
    let mut state = state.clone();
    let dealt_counts = refill_non_dealers_and_kill(&mut state);
    let mut events = vec![Event::SecondDealComplete { dealt_counts }];

    let dealer = state.current_dealer;
    if state.deck.is_empty() {
        // Nothing left to rob: the dealer keeps whatever hand they have
        // (post-discard, pre-kill); only the kill pipeline still applies.
        kill_excess_trump(&mut state, dealer);
        events.push(Event::CardsKilled {
            killed: state.killed_cards.clone(),
        });
        let leader = dealer.next();
        state.phase = Phase::Playing;
        state.current_turn = Some(leader);
        state.trick_no = 1;
        state.current_trick = Some(Trick::new(leader));
        state.dealer_pool_size = None;
    } else if state.config.auto_dealer_rob {
        let pool = take_dealer_pool(&mut state, dealer);
        let (kept, took_count) = auto_select_rob(&state, &pool);
        events.extend(finalize_rob(&mut state, dealer, pool, kept, took_count));
    } else {
        state.dealer_pool_size =
            Some((state.player(dealer).hand.len() + state.deck.len()) as u32);
        state.current_turn = Some(dealer);
    }
    (state, events)
}

/// Manual dealer rob: `position` (must be the dealer) chooses exactly
/// which cards from their combined hand-plus-deck pool to keep.
pub fn dealer_rob(
    state: &GameState,
    position: Position,
    selected: Vec<Card>,
) -> Result<(GameState, Vec<Event>), DomainError> {
    if state.phase != Phase::SecondDeal || state.current_turn != Some(position) {
        return Err(DomainError::InvalidActionForPhase { phase: state.phase });
    }
    if position != state.current_dealer {
        return Err(DomainError::NotYourTurn { position });
    }

    let mut state = state.clone();
    let pool = take_dealer_pool(&mut state, position);
    let final_size = state.config.final_hand_size as usize;

    if selected.len() > final_size || selected.len() > pool.len() {
        return Err(DomainError::InvalidDealerRobSelection {
            detail: format!("selected {} cards, limit is {}", selected.len(), final_size),
        });
    }
    let mut remaining = pool.clone();
    for card in &selected {
        let idx = remaining.iter().position(|c| c == card).ok_or_else(|| {
            DomainError::InvalidDealerRobSelection {
                detail: format!("{card} is not in the dealer's pool"),
            }
        })?;
        remaining.remove(idx);
    }

    let took_count = pool.len() as u32;
    let events = finalize_rob(&mut state, position, pool, selected, took_count);
    Ok((state, events))
}

/// Take the dealer's current hand plus the whole remaining deck,
/// emptying both: the combined pool they rob from.
fn take_dealer_pool(state: &mut GameState, dealer: Position) -> Vec<Card> {
    let mut pool = std::mem::take(&mut state.player_mut(dealer).hand);
    pool.extend(state.deck.drain(..));
    pool
}

/// Score every card in the pool (`rank + 20` if it carries a point,
/// `+10` if it is trump) and keep the top `final_hand_size`. In
/// practice this always prefers trump, since a non-trump point card
/// (at most rank 14 + 20 = 34) never outscores a trump non-point card
/// with rank 6 or higher (6 + 10 = 16 already beats most off-suit junk,
/// and every trump outranks every non-trump, non-point card), but the
/// scoring is computed exactly as specified rather than pre-filtered to
/// trump-only so a pool with fewer than six trump cards still fills out
/// with the dealer's best remaining point cards.
fn auto_select_rob(state: &GameState, pool: &[Card]) -> (Vec<Card>, u32) {
    let trump = state.trump_suit.expect("trump declared before rob");
    let final_size = state.config.final_hand_size as usize;
    let mut scored: Vec<(i32, Card)> = pool
        .iter()
        .copied()
        .map(|c| (rob_score(c, trump), c))
        .collect();
    scored.sort_by_key(|&(score, _)| std::cmp::Reverse(score));
    let kept: Vec<Card> = scored.into_iter().take(final_size).map(|(_, c)| c).collect();
    let took = pool.len() as u32;
    (kept, took)
}

/// `rank + 20` if the card carries a point under `trump`, `+10` if it is
/// trump. Rank is the card's face value (2..=14).
fn rob_score(card: Card, trump: Suit) -> i32 {
    let mut score = card_rank_value(card) as i32;
    if card_point_value(card, trump) > 0 {
        score += 20;
    }
    if is_trump(card, trump) {
        score += 10;
    }
    score
}

fn card_rank_value(card: Card) -> u8 {
    use super::cards::Rank;
    match card.rank {
        Rank::Two => 2,
        Rank::Three => 3,
        Rank::Four => 4,
        Rank::Five => 5,
        Rank::Six => 6,
        Rank::Seven => 7,
        Rank::Eight => 8,
        Rank::Nine => 9,
        Rank::Ten => 10,
        Rank::Jack => 11,
        Rank::Queen => 12,
        Rank::King => 13,
        Rank::Ace => 14,
    }
}

/// Common tail of both rob paths: install the kept hand, push the
/// leftovers to `discarded_cards`, kill the dealer's own excess trump
/// (a no-op in practice since `kept` is already capped), emit the
/// combined `CardsKilled` event, and open the playing phase.
fn finalize_rob(
    state: &mut GameState,
    dealer: Position,
    pool: Vec<Card>,
    kept: Vec<Card>,
    took_count: u32,
) -> Vec<Event> {
    let kept_count = kept.len() as u32;
    let mut remainder = pool;
    for card in &kept {
        if let Some(idx) = remainder.iter().position(|c| c == card) {
            remainder.remove(idx);
        }
    }
    state.discarded_cards.extend(remainder);
    state.player_mut(dealer).hand = kept.clone();
    kill_excess_trump(state, dealer);

    debug!(?dealer, took_count, kept_count, "dealer robbed the pack");
    let mut events = vec![Event::DealerRobbedPack {
        dealer,
        took_count,
        kept_count,
        selected: kept,
    }];
    events.push(Event::CardsKilled {
        killed: state.killed_cards.clone(),
    });

    let leader = dealer.next();
    state.phase = Phase::Playing;
    state.current_turn = Some(leader);
    state.trick_no = 1;
    state.current_trick = Some(Trick::new(leader));
    state.dealer_pool_size = None;
    events
}

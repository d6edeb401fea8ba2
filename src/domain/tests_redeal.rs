//! Property and scenario tests for the second deal / dealer-rob / kill
//! pipeline.

use proptest::prelude::*;

use super::cards::{Card, Rank, Suit};
use super::position::{Position, Seats};
use super::redeal::{dealer_rob, run_second_deal};
use super::state::Phase;
use super::test_support::{bare_state, proptest_config};

fn card(suit: Suit, rank: Rank) -> Card {
    Card { suit, rank }
}

/// Build a post-discard state: every non-dealer already has some trump
/// residue, the dealer has theirs, and a remaining deck of non-trump
/// filler cards (their suit doesn't matter for second-deal bookkeeping).
fn post_discard_state(
    dealer: Position,
    trump: Suit,
    hands: Seats<Vec<Card>>,
    deck: Vec<Card>,
) -> super::state::GameState {
    let mut state = bare_state(dealer, Phase::SecondDeal);
    state.trump_suit = Some(trump);
    state.deck = deck;
    for p in Position::ALL {
        state.players[p].hand = hands[p].clone();
    }
    state
}

proptest! {
    #![proptest_config(proptest_config())]

    /// After the second deal and kill, every seat's hand is either
    /// exactly `final_hand_size` or strictly larger and entirely trump.
    #[test]
    fn prop_hand_size_post_redeal(
        residues in prop::collection::vec(0usize..=8, 4),
    ) {
        let trump = Suit::Spades;
        let dealer = Position::North;
        let mut hands = Seats::from_fn(|_| Vec::new());
        // Give every non-dealer seat `residue` low trump cards (never a
        // point card, so kill always has something to work with).
        let filler_ranks = [Rank::Three, Rank::Four, Rank::Six, Rank::Seven,
                             Rank::Eight, Rank::Nine, Rank::Queen, Rank::King];
        for p in Position::ALL {
            if p == dealer {
                continue;
            }
            let n = residues[p.index()].min(filler_ranks.len());
            hands[p] = filler_ranks[..n].iter().map(|&r| card(trump, r)).collect();
        }
        hands[dealer] = vec![card(trump, Rank::Ace)];
        // Generously sized filler deck: always enough to refill every
        // non-dealer to six regardless of how few cards they started
        // with (worst case all three need six each).
        let deck: Vec<Card> = (0..24).map(|i| card(trump, filler_ranks[i % filler_ranks.len()])).collect();

        let state = post_discard_state(dealer, trump, hands, deck);
        let (state, _) = run_second_deal(&state);

        for p in Position::ALL {
            let len = state.player(p).hand.len();
            let all_trump = state
                .player(p)
                .hand
                .iter()
                .all(|&c| super::cards::is_trump(c, trump));
            prop_assert!(len == 6 || (len > 6 && all_trump), "seat {p:?} hand len={len}");
        }
    }
}

/// The second-deal info-leak regression. Dealer E,
/// trump diamonds; N holds 1 trump, S holds 2, W holds 3, E holds 5
/// before the second deal, with 16 cards left in the deck. The second
/// deal delivers 5/4/3 to N/S/W respectively in clockwise order from the
/// dealer's left, and the dealer's final hand (after rob) is six cards.
#[test]
fn dealer_rob_info_leak_regression_scenario() {
    let trump = Suit::Diamonds;
    let dealer = Position::East;
    let mut hands = Seats::from_fn(|_| Vec::new());
    hands[Position::North] = vec![card(trump, Rank::Three)];
    hands[Position::South] = vec![card(trump, Rank::Four), card(trump, Rank::Six)];
    hands[Position::West] = vec![
        card(trump, Rank::Seven),
        card(trump, Rank::Eight),
        card(trump, Rank::Nine),
    ];
    hands[Position::East] = vec![
        card(trump, Rank::Ten),
        card(trump, Rank::Jack),
        card(trump, Rank::Queen),
        card(trump, Rank::King),
        card(trump, Rank::Ace),
    ];
    let deck: Vec<Card> = (0..16)
        .map(|i| card(trump, [Rank::Two, Rank::Three, Rank::Four, Rank::Six][i % 4]))
        .collect();

    let mut state = post_discard_state(dealer, trump, hands, deck);
    state.config.auto_dealer_rob = true;
    let (state, _) = run_second_deal(&state);

    // North needed 5, South needed 4, West needed 3.
    assert_eq!(state.cards_requested[Position::North], 5);
    assert_eq!(state.cards_requested[Position::South], 4);
    assert_eq!(state.cards_requested[Position::West], 3);

    assert_eq!(state.phase, Phase::Playing);
    assert_eq!(state.player(Position::North).hand.len(), 6);
    assert_eq!(state.player(Position::South).hand.len(), 6);
    assert_eq!(state.player(Position::West).hand.len(), 6);
    assert_eq!(state.player(dealer).hand.len(), 6);
}

#[test]
fn manual_rob_rejects_selection_outside_pool() {
    let mut state = bare_state(Position::North, Phase::SecondDeal);
    state.trump_suit = Some(Suit::Clubs);
    state.config.auto_dealer_rob = false;
    state.player_mut(Position::North).hand = vec![card(Suit::Clubs, Rank::Two)];
    state.deck = vec![card(Suit::Clubs, Rank::Three)];
    let (state, _) = run_second_deal(&state);

    let foreign = card(Suit::Clubs, Rank::King);
    let err = dealer_rob(&state, Position::North, vec![foreign]).unwrap_err();
    assert!(matches!(
        err,
        crate::errors::DomainError::InvalidDealerRobSelection { .. }
    ));
}

#[test]
fn manual_rob_rejects_more_than_final_hand_size() {
    let mut state = bare_state(Position::North, Phase::SecondDeal);
    state.trump_suit = Some(Suit::Clubs);
    state.config.auto_dealer_rob = false;
    state.player_mut(Position::North).hand = vec![
        card(Suit::Clubs, Rank::Two),
        card(Suit::Clubs, Rank::Three),
        card(Suit::Clubs, Rank::Four),
        card(Suit::Clubs, Rank::Five),
        card(Suit::Clubs, Rank::Six),
        card(Suit::Clubs, Rank::Seven),
        card(Suit::Clubs, Rank::Eight),
    ];
    let (state, _) = run_second_deal(&state);
    let selection: Vec<Card> = state.player(Position::North).hand.clone();
    assert!(dealer_rob(&state, Position::North, selection).is_err());
}

#[test]
fn kill_takes_non_point_trump_first_and_spares_point_heavy_hands() {
    let mut state = bare_state(Position::North, Phase::SecondDeal);
    state.trump_suit = Some(Suit::Hearts);
    state.config.auto_dealer_rob = true;
    // North: 7 trump, all point cards (A, J, 10, right-5, wrong-5, 2, and
    // another A-equivalent stand-in is impossible with one deck, so use
    // the 2-of-trump plus the two fives plus A/J/10 plus one extra King
    // to push to 7 total with exactly one non-point card).
    state.player_mut(Position::North).hand = vec![
        card(Suit::Hearts, Rank::Ace),
        card(Suit::Hearts, Rank::Jack),
        card(Suit::Hearts, Rank::Ten),
        card(Suit::Hearts, Rank::Five),
        card(Suit::Diamonds, Rank::Five), // wrong-5 under Hearts trump
        card(Suit::Hearts, Rank::Two),
        card(Suit::Hearts, Rank::King), // the only non-point trump
    ];
    state.deck = Vec::new();
    let (state, _) = run_second_deal(&state);

    // Only one non-point trump existed, so only it is killed.
    assert_eq!(state.killed_cards[Position::North], vec![card(Suit::Hearts, Rank::King)]);
    assert_eq!(state.player(Position::North).hand.len(), 6);
}

#[test]
fn kill_is_skipped_when_excess_exceeds_non_point_trump() {
    let mut state = bare_state(Position::North, Phase::SecondDeal);
    state.trump_suit = Some(Suit::Hearts);
    state.config.auto_dealer_rob = true;
    // North: 7 trump, all point cards, zero non-point trump to kill.
    state.player_mut(Position::North).hand = vec![
        card(Suit::Hearts, Rank::Ace),
        card(Suit::Hearts, Rank::Jack),
        card(Suit::Hearts, Rank::Ten),
        card(Suit::Hearts, Rank::Five),
        card(Suit::Diamonds, Rank::Five),
        card(Suit::Hearts, Rank::Two),
        card(Suit::Hearts, Rank::Ace), // duplicate is impossible in a real
                                        // deck but harmless for this unit
                                        // test of the kill-skip condition
    ];
    state.deck = Vec::new();
    let (state, _) = run_second_deal(&state);

    assert!(state.killed_cards[Position::North].is_empty());
    assert_eq!(state.player(Position::North).hand.len(), 7);
}

/// A stray non-trump card (a legitimate outcome of the second deal,
/// which draws unfiltered from the deck) is never kill-eligible, even
/// though it shares `card_point_value`'s zero score with a genuine
/// non-point trump. The real non-point trump (the king) is the one
/// killed; the off-suit card stays in hand.
#[test]
fn kill_never_takes_a_stray_non_trump_card() {
    let mut state = bare_state(Position::North, Phase::SecondDeal);
    state.trump_suit = Some(Suit::Hearts);
    state.config.auto_dealer_rob = true;
    state.player_mut(Position::North).hand = vec![
        card(Suit::Hearts, Rank::Ace),
        card(Suit::Hearts, Rank::Jack),
        card(Suit::Hearts, Rank::Ten),
        card(Suit::Hearts, Rank::Five),
        card(Suit::Diamonds, Rank::Five), // wrong-5 under Hearts trump
        card(Suit::Hearts, Rank::King),   // the only real non-point trump
        card(Suit::Clubs, Rank::Two),     // stray non-trump, not kill-eligible
    ];
    state.deck = Vec::new();
    let (state, _) = run_second_deal(&state);

    assert_eq!(state.killed_cards[Position::North], vec![card(Suit::Hearts, Rank::King)]);
    assert!(state.player(Position::North).hand.contains(&card(Suit::Clubs, Rank::Two)));
    assert_eq!(state.player(Position::North).hand.len(), 6);
}

//! Deterministic deck construction, shuffling, and dealing.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use super::cards::{Card, Rank, Suit};

/// The 52-card product of ranks and suits, in a fixed canonical order.
pub fn full_deck() -> Vec<Card> {
    let ranks = [
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
        Rank::Ace,
    ];
    let mut deck = Vec::with_capacity(52);
    for &suit in &Suit::ALL {
        for &rank in &ranks {
            deck.push(Card { suit, rank });
        }
    }
    deck
}

/// Build a freshly shuffled 52-card deck from a seed.
pub fn shuffled_deck(seed: u64) -> Vec<Card> {
    let mut deck = full_deck();
    let mut rng = StdRng::seed_from_u64(seed);
    deck.shuffle(&mut rng);
    deck
}

/// Derive a per-hand shuffle seed from the game's base seed and the
/// 1-based hand number: a cheap, collision-resistant mix rather than
/// carrying an RNG stream across hands, so any hand can be reshuffled in
/// isolation and `GameState` stays plain-data/`Clone`.
pub fn derive_hand_seed(base_seed: u64, hand_number: u32) -> u64 {
    base_seed
        .wrapping_add((hand_number as u64).wrapping_mul(0x9E3779B97F4A7C15))
        .wrapping_add(1)
}

/// Deal `count` cards off the top of `deck`, in order.
pub fn deal(deck: &mut Vec<Card>, count: usize) -> Vec<Card> {
    let count = count.min(deck.len());
    deck.drain(0..count).collect()
}

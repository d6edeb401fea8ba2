//! Recognised game configuration options.
//!
//! Mirrors the `config` field of `GameState`: a closed set of options, not
//! a free-form map, so an unrecognised option is a compile error rather
//! than a silently-ignored key.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Hand size every player is redealt up to after discard.
    pub final_hand_size: u8,
    /// Whether the engine picks the dealer's rob selection automatically.
    pub auto_dealer_rob: bool,
    /// Cards dealt per player in the initial deal.
    pub initial_deal_size: u8,
    /// Cumulative score at which a team wins the game.
    pub winning_score: i32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            final_hand_size: 6,
            auto_dealer_rob: true,
            initial_deal_size: 9,
            winning_score: 62,
        }
    }
}

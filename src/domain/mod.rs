//! Domain layer: pure game logic types and helpers.

pub mod action;
pub mod bidding;
pub mod cards;
pub mod deck;
pub mod engine;
pub mod events;
pub mod play;
pub mod player;
pub mod position;
pub mod redeal;
pub mod replay;
pub mod scoring;
pub mod state;
pub mod trick;
pub mod trump;


#[cfg(test)]
mod tests_redeal;
#[cfg(test)]
mod tests_scoring;

// Re-exports for ergonomics
pub use action::{Action, Actor};
pub use cards::{card_point_value, is_trump, trump_strength, Card, Rank, Suit};
pub use events::{Event, EventRecord};
pub use player::Player;
pub use position::{Position, Seats, Team, TeamMap};
pub use state::{GameState, Phase};
pub use trick::Trick;

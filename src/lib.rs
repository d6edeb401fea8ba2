//! Deterministic rules engine for the Finnish Pidro card game.
//!
//! This crate is a pure, side-effect-free state machine: it takes a
//! [`domain::GameState`] and a player action and returns a new state plus
//! an event record, or rejects the action with a [`errors::DomainError`].
//! Transport, persistence, presence, and AI strategy are all external
//! collaborators that sit on top of the `apply_action` / `legal_actions`
//! / `get_state` surface exposed by [`domain::engine`].

pub mod config;
pub mod domain;
pub mod errors;

pub use config::GameConfig;
pub use domain::engine::{apply_action, legal_actions, new_game};
pub use domain::replay::{replay, undo};
pub use errors::DomainError;

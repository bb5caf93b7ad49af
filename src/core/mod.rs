//! Core match types: player identity, per-player storage, configuration,
//! and the turn clock.
//!
//! These are the building blocks the board, rules, and engine modules
//! compose. Nothing here knows about the grid.

pub mod clock;
pub mod config;
pub mod player;

pub use clock::TurnClock;
pub use config::MatchConfig;
pub use player::{Player, PlayerPair};

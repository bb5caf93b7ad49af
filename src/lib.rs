//! # connect-five
//!
//! The match engine for a two-player Connect 5 game: five-in-a-row on a
//! gravity-fed 7×8 grid, with a per-player inactivity clock that forfeits
//! the turn of a player who stalls too long.
//!
//! ## Design Principles
//!
//! 1. **One Owner**: `MatchEngine` owns the board, the clock, and the
//!    match status. Collaborators (renderers, input handlers) get
//!    read-only views or detached snapshots, never mutable references.
//!
//! 2. **Tick-Driven**: the engine is polled by an external loop that
//!    delivers discrete placement attempts and "time advanced to T"
//!    ticks. Every call returns synchronously; the engine never reads a
//!    wall clock of its own.
//!
//! 3. **Configuration Over Constants**: grid size, run length, and the
//!    timeout budget are `MatchConfig` parameters with the classic
//!    values (7×8, five in a row, 20 seconds) as defaults.
//!
//! ## Modules
//!
//! - `core`: player identity, per-player storage, configuration, clock
//! - `board`: the gravity-fed grid and placement-legality queries
//! - `rules`: five-in-a-row detection across the four line families
//! - `engine`: the authoritative match state machine
//!
//! ## Example
//!
//! ```
//! use connect_five::{MatchEngine, MatchStatus, Player};
//!
//! let mut engine = MatchEngine::default();
//!
//! // The players alternate until Player 1 has five in column 3.
//! for _ in 0..4 {
//!     engine.attempt_placement(3).unwrap(); // Player 1
//!     engine.attempt_placement(4).unwrap(); // Player 2
//! }
//! engine.attempt_placement(3).unwrap();
//!
//! assert_eq!(engine.status(), MatchStatus::Won(Player::One));
//! ```

pub mod board;
pub mod core;
pub mod engine;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{
    config::{DEFAULT_COLS, DEFAULT_ROWS, DEFAULT_TURN_TIMEOUT, DEFAULT_WIN_LENGTH},
    MatchConfig, Player, PlayerPair, TurnClock,
};

pub use crate::board::{Board, BoardError, Cell};

pub use crate::rules::has_winning_run;

pub use crate::engine::{MatchEngine, MatchError, MatchStatus, MoveRecord, Placement};

//! The authoritative match state machine.
//!
//! `MatchEngine` owns the board, the turn clock, and the match status;
//! nothing else mutates them. An external driver feeds it discrete
//! placement attempts and "time advanced to T" ticks, and every call
//! either rejects without touching state or applies its full effect
//! (placement, win check, turn advance) before returning.
//!
//! ## Lifecycle
//!
//! `InProgress` → `Won(player)` or `Drawn`, both terminal. A terminal
//! engine rejects all placements and ticks until `reset()` starts a
//! rematch under the same configuration.

use std::time::Duration;

use im::Vector;
use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::board::{Board, BoardError};
use crate::core::{MatchConfig, Player, TurnClock};
use crate::rules;

/// Match progress. `Won` and `Drawn` are terminal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchStatus {
    InProgress,
    Won(Player),
    Drawn,
}

impl MatchStatus {
    /// Whether the match has ended.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, MatchStatus::InProgress)
    }

    /// The winner, if there is one.
    #[must_use]
    pub const fn winner(self) -> Option<Player> {
        match self {
            MatchStatus::Won(player) => Some(player),
            _ => None,
        }
    }
}

/// Rejected engine calls.
///
/// All rejections are local and recoverable: the engine state is exactly
/// as it was before the call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MatchError {
    /// Column index outside `[0, cols)`.
    InvalidColumn { col: usize, cols: usize },
    /// Column has no open row.
    ColumnFull { col: usize },
    /// Placement or tick delivered after the match ended.
    MatchOver,
}

impl std::fmt::Display for MatchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MatchError::InvalidColumn { col, cols } => {
                write!(f, "column {col} is outside 0..{cols}")
            }
            MatchError::ColumnFull { col } => write!(f, "column {col} is full"),
            MatchError::MatchOver => write!(f, "the match is already over"),
        }
    }
}

impl std::error::Error for MatchError {}

impl From<BoardError> for MatchError {
    fn from(err: BoardError) -> Self {
        match err {
            BoardError::InvalidColumn { col, cols } => MatchError::InvalidColumn { col, cols },
        }
    }
}

/// An accepted placement: where the piece landed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placement {
    pub player: Player,
    pub row: usize,
    pub col: usize,
}

/// One accepted placement in the match history.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    /// Who placed the piece.
    pub player: Player,

    /// The requested column.
    pub col: usize,

    /// The landing row.
    pub row: usize,

    /// Position in the move sequence, starting at 0.
    pub sequence: u32,
}

/// The match engine.
///
/// Cloning is cheap enough for speculative drivers (the history shares
/// structure), but a clone is a detached match: mutating it never
/// affects the original.
#[derive(Clone, Debug)]
pub struct MatchEngine {
    config: MatchConfig,
    board: Board,
    clock: TurnClock,
    active: Player,
    status: MatchStatus,
    now: Duration,
    history: Vector<MoveRecord>,
}

impl Default for MatchEngine {
    fn default() -> Self {
        Self::new(MatchConfig::default())
    }
}

impl MatchEngine {
    /// Create a fresh match under `config`.
    #[must_use]
    pub fn new(config: MatchConfig) -> Self {
        assert!(
            config.win_length <= config.rows.max(config.cols),
            "Win length must fit on the board"
        );

        let board = Board::new(config.rows, config.cols);
        let clock = TurnClock::new(config.turn_timeout);
        let active = config.starting_player;

        Self {
            config,
            board,
            clock,
            active,
            status: MatchStatus::InProgress,
            now: Duration::ZERO,
            history: Vector::new(),
        }
    }

    /// The match configuration.
    #[must_use]
    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    /// Current match status.
    #[must_use]
    pub fn status(&self) -> MatchStatus {
        self.status
    }

    /// Whether the match has ended.
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.status.is_terminal()
    }

    /// The player whose turn it is. After a win this stays frozen on the
    /// winner.
    #[must_use]
    pub fn active_player(&self) -> Player {
        self.active
    }

    /// Read-only view of the board.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Detached board copy for rendering collaborators.
    #[must_use]
    pub fn snapshot(&self) -> Board {
        self.board.snapshot()
    }

    /// Accepted placements in order.
    #[must_use]
    pub fn history(&self) -> &Vector<MoveRecord> {
        &self.history
    }

    /// The latest time delivered via `advance_time`.
    #[must_use]
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Attempt to drop the active player's piece in `col`.
    ///
    /// On success the placement, the win/draw check, and the turn advance
    /// happen as one atomic step. Rejections (`InvalidColumn`,
    /// `ColumnFull`, `MatchOver`) leave every piece of state untouched;
    /// in particular the turn does not advance.
    pub fn attempt_placement(&mut self, col: usize) -> Result<Placement, MatchError> {
        if self.status.is_terminal() {
            return Err(MatchError::MatchOver);
        }
        if !self.board.is_column_playable(col)? {
            return Err(MatchError::ColumnFull { col });
        }
        let Some(row) = self.board.next_open_row(col) else {
            return Err(MatchError::ColumnFull { col });
        };

        let actor = self.active;
        self.board.place(row, col, actor);
        self.clock.record_action(actor, self.now);
        let sequence = self.history.len() as u32;
        self.history.push_back(MoveRecord {
            player: actor,
            col,
            row,
            sequence,
        });
        debug!("{actor} placed in column {col}, landing at row {row}");

        if rules::has_winning_run(&self.board, actor, self.config.win_length) {
            self.status = MatchStatus::Won(actor);
            debug!("{actor} wins after {} moves", self.history.len());
        } else if self.board.is_full() {
            self.status = MatchStatus::Drawn;
            debug!("board full with no winner, match drawn");
        } else {
            self.active = actor.other();
            // The incoming player starts their turn with a full budget.
            self.clock.record_action(self.active, self.now);
        }

        Ok(Placement {
            player: actor,
            row,
            col,
        })
    }

    /// Deliver a time tick.
    ///
    /// Updates the engine's observed time (regressions clamp to the
    /// latest instant seen) and applies forced expiry: if the active
    /// player has idled past the budget, the turn passes to the other
    /// player with no board mutation and no win check, and both clocks
    /// restart. Returns the player whose turn was forfeited, if any.
    pub fn advance_time(&mut self, now: Duration) -> Result<Option<Player>, MatchError> {
        if self.status.is_terminal() {
            return Err(MatchError::MatchOver);
        }

        self.now = self.now.max(now);

        if let Some(expired) = self.clock.check_expiry(self.active, self.now) {
            self.active = expired.other();
            self.clock.reset_all(self.now);
            warn!("{expired} idled past the budget, turn passes to {}", self.active);
            return Ok(Some(expired));
        }

        Ok(None)
    }

    /// Start a rematch under the same configuration: empty board, fresh
    /// clock, cleared history, starting player restored.
    pub fn reset(&mut self) {
        self.board = Board::new(self.config.rows, self.config.cols);
        self.clock = TurnClock::new(self.config.turn_timeout);
        self.active = self.config.starting_player;
        self.status = MatchStatus::InProgress;
        self.now = Duration::ZERO;
        self.history = Vector::new();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let engine = MatchEngine::default();

        assert_eq!(engine.status(), MatchStatus::InProgress);
        assert_eq!(engine.active_player(), Player::One);
        assert_eq!(engine.board().piece_count(), 0);
        assert!(engine.history().is_empty());
        assert!(!engine.is_over());
    }

    #[test]
    fn test_placement_lands_bottom_up() {
        let mut engine = MatchEngine::default();

        let first = engine.attempt_placement(4).unwrap();
        assert_eq!(first.row, 0);
        assert_eq!(first.player, Player::One);

        let second = engine.attempt_placement(4).unwrap();
        assert_eq!(second.row, 1);
        assert_eq!(second.player, Player::Two);
    }

    #[test]
    fn test_invalid_column_maps_from_board_error() {
        let mut engine = MatchEngine::default();

        assert_eq!(
            engine.attempt_placement(42),
            Err(MatchError::InvalidColumn { col: 42, cols: 8 })
        );
        assert_eq!(engine.active_player(), Player::One);
        assert_eq!(engine.board().piece_count(), 0);
    }

    #[test]
    fn test_clone_is_detached() {
        let mut engine = MatchEngine::default();
        engine.attempt_placement(0).unwrap();

        let mut fork = engine.clone();
        fork.attempt_placement(1).unwrap();

        assert_eq!(engine.history().len(), 1);
        assert_eq!(fork.history().len(), 2);
    }

    #[test]
    #[should_panic(expected = "Win length must fit on the board")]
    fn test_win_length_must_fit() {
        MatchEngine::new(MatchConfig::new().with_rows(3).with_cols(3));
    }

    #[test]
    fn test_move_record_serialization() {
        let record = MoveRecord {
            player: Player::Two,
            col: 3,
            row: 1,
            sequence: 7,
        };

        let json = serde_json::to_string(&record).unwrap();
        let deserialized: MoveRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(record, deserialized);
    }

    #[test]
    fn test_status_queries() {
        assert!(!MatchStatus::InProgress.is_terminal());
        assert!(MatchStatus::Won(Player::One).is_terminal());
        assert!(MatchStatus::Drawn.is_terminal());
        assert_eq!(MatchStatus::Won(Player::Two).winner(), Some(Player::Two));
        assert_eq!(MatchStatus::Drawn.winner(), None);
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            MatchError::ColumnFull { col: 3 }.to_string(),
            "column 3 is full"
        );
        assert_eq!(MatchError::MatchOver.to_string(), "the match is already over");
    }
}

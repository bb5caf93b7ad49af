//! Match configuration.
//!
//! The classic rules bake the grid size, the run length, and the timeout
//! into the code; here they are parameters with those values as defaults.
//! The engine asserts cross-field consistency (the run must fit on the
//! board) at construction.

use std::time::Duration;

use super::Player;

/// Default number of rows (board height).
pub const DEFAULT_ROWS: usize = 7;

/// Default number of columns (board width).
pub const DEFAULT_COLS: usize = 8;

/// Default run length required to win.
pub const DEFAULT_WIN_LENGTH: usize = 5;

/// Default inactivity budget before a turn is forfeited.
pub const DEFAULT_TURN_TIMEOUT: Duration = Duration::from_secs(20);

/// Complete match configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MatchConfig {
    /// Board height. Row 0 is the bottom.
    pub rows: usize,

    /// Board width.
    pub cols: usize,

    /// Consecutive same-player pieces required to win.
    pub win_length: usize,

    /// How long the active player may idle before the turn is forfeited.
    pub turn_timeout: Duration,

    /// Who owns the opening move.
    pub starting_player: Player,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl MatchConfig {
    /// Create a configuration with the classic Connect 5 values.
    #[must_use]
    pub fn new() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
            win_length: DEFAULT_WIN_LENGTH,
            turn_timeout: DEFAULT_TURN_TIMEOUT,
            starting_player: Player::One,
        }
    }

    /// Set the board height.
    #[must_use]
    pub fn with_rows(mut self, rows: usize) -> Self {
        assert!(rows > 0, "Board must have at least 1 row");
        self.rows = rows;
        self
    }

    /// Set the board width.
    #[must_use]
    pub fn with_cols(mut self, cols: usize) -> Self {
        assert!(cols > 0, "Board must have at least 1 column");
        self.cols = cols;
        self
    }

    /// Set the run length required to win.
    #[must_use]
    pub fn with_win_length(mut self, win_length: usize) -> Self {
        assert!(win_length >= 2, "Win length must be at least 2");
        self.win_length = win_length;
        self
    }

    /// Set the inactivity budget.
    #[must_use]
    pub fn with_turn_timeout(mut self, timeout: Duration) -> Self {
        assert!(!timeout.is_zero(), "Turn timeout must be non-zero");
        self.turn_timeout = timeout;
        self
    }

    /// Set the player who opens the match.
    #[must_use]
    pub fn with_starting_player(mut self, player: Player) -> Self {
        self.starting_player = player;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = MatchConfig::new();

        assert_eq!(config.rows, 7);
        assert_eq!(config.cols, 8);
        assert_eq!(config.win_length, 5);
        assert_eq!(config.turn_timeout, Duration::from_secs(20));
        assert_eq!(config.starting_player, Player::One);
        assert_eq!(config, MatchConfig::default());
    }

    #[test]
    fn test_builder() {
        let config = MatchConfig::new()
            .with_rows(6)
            .with_cols(7)
            .with_win_length(4)
            .with_turn_timeout(Duration::from_secs(30))
            .with_starting_player(Player::Two);

        assert_eq!(config.rows, 6);
        assert_eq!(config.cols, 7);
        assert_eq!(config.win_length, 4);
        assert_eq!(config.turn_timeout, Duration::from_secs(30));
        assert_eq!(config.starting_player, Player::Two);
    }

    #[test]
    #[should_panic(expected = "Board must have at least 1 row")]
    fn test_zero_rows() {
        MatchConfig::new().with_rows(0);
    }

    #[test]
    #[should_panic(expected = "Win length must be at least 2")]
    fn test_degenerate_win_length() {
        MatchConfig::new().with_win_length(1);
    }

    #[test]
    #[should_panic(expected = "Turn timeout must be non-zero")]
    fn test_zero_timeout() {
        MatchConfig::new().with_turn_timeout(Duration::ZERO);
    }
}

//! The gravity-fed game board.
//!
//! Row 0 is the bottom of the grid: a dropped piece lands on the lowest
//! Empty row of its column, and a column is full exactly when its topmost
//! row is occupied. Rendering collaborators that want the top row first
//! can use the `Display` impl or walk the snapshot themselves; the flip
//! is a presentation concern, not a board one.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::Player;

/// One grid cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    Empty,
    One,
    Two,
}

impl Cell {
    /// Whether this cell holds no piece.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// The player owning the piece in this cell, if any.
    #[must_use]
    pub const fn player(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::One => Some(Player::One),
            Cell::Two => Some(Player::Two),
        }
    }
}

impl From<Player> for Cell {
    fn from(player: Player) -> Self {
        match player {
            Player::One => Cell::One,
            Player::Two => Cell::Two,
        }
    }
}

/// Board-level query errors.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BoardError {
    /// Column index outside `[0, cols)`.
    InvalidColumn { col: usize, cols: usize },
}

impl std::fmt::Display for BoardError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BoardError::InvalidColumn { col, cols } => {
                write!(f, "column {col} is outside 0..{cols}")
            }
        }
    }
}

impl std::error::Error for BoardError {}

/// A `rows × cols` grid of cells, row 0 at the bottom.
///
/// Dimensions come from `MatchConfig` rather than the type; the grid is
/// stored row-major in a single allocation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Create an empty board.
    #[must_use]
    pub fn new(rows: usize, cols: usize) -> Self {
        assert!(rows > 0, "Board must have at least 1 row");
        assert!(cols > 0, "Board must have at least 1 column");
        Self {
            rows,
            cols,
            cells: vec![Cell::Empty; rows * cols],
        }
    }

    /// Board height.
    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Board width.
    #[must_use]
    pub fn cols(&self) -> usize {
        self.cols
    }

    fn idx(&self, row: usize, col: usize) -> usize {
        debug_assert!(row < self.rows && col < self.cols, "cell out of range");
        row * self.cols + col
    }

    /// Cell at (row, col). Out-of-range coordinates are a caller bug.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[self.idx(row, col)]
    }

    /// Whether a piece can currently be dropped in `col`.
    ///
    /// `Ok(false)` means the column is full. Querying a column outside
    /// `[0, cols)` is a contract violation reported as `InvalidColumn`
    /// rather than silently answered.
    pub fn is_column_playable(&self, col: usize) -> Result<bool, BoardError> {
        if col >= self.cols {
            return Err(BoardError::InvalidColumn {
                col,
                cols: self.cols,
            });
        }
        Ok(self.get(self.rows - 1, col).is_empty())
    }

    /// Lowest Empty row in `col`, scanning bottom-up.
    ///
    /// Returns `None` when the column is full. Callers should have
    /// confirmed `is_column_playable` first, but a full column is a
    /// well-defined query result, not a crash.
    #[must_use]
    pub fn next_open_row(&self, col: usize) -> Option<usize> {
        debug_assert!(col < self.cols, "column out of range");
        (0..self.rows).find(|&row| self.get(row, col).is_empty())
    }

    /// Write `player`'s piece into (row, col).
    ///
    /// The cell must currently be Empty; violating that is a programming
    /// error, not a runtime-handled case.
    pub fn place(&mut self, row: usize, col: usize, player: Player) {
        let idx = self.idx(row, col);
        debug_assert!(self.cells[idx].is_empty(), "cell already occupied");
        self.cells[idx] = Cell::from(player);
    }

    /// Whether every column is full.
    #[must_use]
    pub fn is_full(&self) -> bool {
        (0..self.cols).all(|col| !self.get(self.rows - 1, col).is_empty())
    }

    /// Number of occupied cells.
    #[must_use]
    pub fn piece_count(&self) -> usize {
        self.cells.iter().filter(|cell| !cell.is_empty()).count()
    }

    /// Columns that can still take a piece.
    ///
    /// At most `cols` entries; stack-allocated for the default width.
    #[must_use]
    pub fn playable_columns(&self) -> SmallVec<[usize; 8]> {
        (0..self.cols)
            .filter(|&col| self.get(self.rows - 1, col).is_empty())
            .collect()
    }

    /// Detached copy for rendering and printing collaborators.
    #[must_use]
    pub fn snapshot(&self) -> Board {
        self.clone()
    }
}

/// Textual dump, top row first (the orientation a player sees).
impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in (0..self.rows).rev() {
            for col in 0..self.cols {
                let ch = match self.get(row, col) {
                    Cell::Empty => '.',
                    Cell::One => '1',
                    Cell::Two => '2',
                };
                if col > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{ch}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

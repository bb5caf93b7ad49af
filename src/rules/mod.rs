//! Win-detection rules.
//!
//! A winning run is `win_length` consecutive same-player pieces along one
//! of four line families: vertical, horizontal, and the two diagonals.
//! The scan walks the whole board and short-circuits on the first run
//! found: only existence matters, and the board is small enough that
//! recomputing from scratch after every placement beats maintaining
//! anything incrementally.

use crate::board::{Board, Cell};
use crate::core::Player;

/// Whether `player` has `win_length` consecutive pieces along any line.
///
/// Invoked for the player who just moved, immediately after a successful
/// placement. Scan order across the four families is irrelevant to the
/// result.
#[must_use]
pub fn has_winning_run(board: &Board, player: Player, win_length: usize) -> bool {
    let piece = Cell::from(player);
    vertical_run(board, piece, win_length)
        || horizontal_run(board, piece, win_length)
        || diagonal_up_run(board, piece, win_length)
        || diagonal_down_run(board, piece, win_length)
}

fn vertical_run(board: &Board, piece: Cell, len: usize) -> bool {
    if board.rows() < len {
        return false;
    }
    for col in 0..board.cols() {
        for row in 0..=(board.rows() - len) {
            if (0..len).all(|i| board.get(row + i, col) == piece) {
                return true;
            }
        }
    }
    false
}

fn horizontal_run(board: &Board, piece: Cell, len: usize) -> bool {
    if board.cols() < len {
        return false;
    }
    for row in 0..board.rows() {
        for col in 0..=(board.cols() - len) {
            if (0..len).all(|i| board.get(row, col + i) == piece) {
                return true;
            }
        }
    }
    false
}

/// Positive slope: cells (row+i, col+i), the "/" family.
fn diagonal_up_run(board: &Board, piece: Cell, len: usize) -> bool {
    if board.rows() < len || board.cols() < len {
        return false;
    }
    for row in 0..=(board.rows() - len) {
        for col in 0..=(board.cols() - len) {
            if (0..len).all(|i| board.get(row + i, col + i) == piece) {
                return true;
            }
        }
    }
    false
}

/// Negative slope: cells (row-i, col+i) from row >= len-1, the "\" family.
fn diagonal_down_run(board: &Board, piece: Cell, len: usize) -> bool {
    if board.rows() < len || board.cols() < len {
        return false;
    }
    for row in (len - 1)..board.rows() {
        for col in 0..=(board.cols() - len) {
            if (0..len).all(|i| board.get(row - i, col + i) == piece) {
                return true;
            }
        }
    }
    false
}

//! Four-in-a-row detection. The scan is existential and per piece: search
//! needs to ask "does this color connect four anywhere?" on hypothetical
//! boards, so the check covers the whole grid rather than radiating from a
//! last move.

use super::board::{Board, Cell, COLS, ROWS};

/// True iff `cell` has four consecutive pieces anywhere on the board, along
/// any of the four axes. Returns on the first line found.
pub fn has_four_in_a_row(board: &Board, cell: Cell) -> bool {
    debug_assert!(cell != Cell::Empty, "cannot connect four empty cells");

    // Horizontal
    for row in 0..ROWS {
        for col in 0..=COLS - 4 {
            if (0..4).all(|i| board.get(row, col + i) == cell) {
                return true;
            }
        }
    }

    // Vertical
    for col in 0..COLS {
        for row in 0..=ROWS - 4 {
            if (0..4).all(|i| board.get(row + i, col) == cell) {
                return true;
            }
        }
    }

    // Diagonal up-right (/)
    for row in 0..=ROWS - 4 {
        for col in 0..=COLS - 4 {
            if (0..4).all(|i| board.get(row + i, col + i) == cell) {
                return true;
            }
        }
    }

    // Diagonal down-right (\)
    for row in 3..ROWS {
        for col in 0..=COLS - 4 {
            if (0..4).all(|i| board.get(row - i, col + i) == cell) {
                return true;
            }
        }
    }

    false
}

/// True iff the game is over on this board: either color connects four, or
/// no column is playable (a draw).
pub fn is_terminal(board: &Board) -> bool {
    has_four_in_a_row(board, Cell::Red)
        || has_four_in_a_row(board, Cell::Yellow)
        || board.valid_columns().is_empty()
}

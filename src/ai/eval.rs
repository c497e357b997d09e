//! Static evaluation of board positions. Two heuristics live here: the
//! full window heuristic that drives the minimax strategy, and a narrow
//! threat-only variant that drives the legacy one-ply greedy strategy.
//! Both slide a 4-cell window along every axis and score what it holds.

use crate::game::{Board, Cell, Player, COLS, ROWS};

const CENTER_COL: usize = 3;

/// Trait for evaluating a board position from a player's perspective.
pub trait Heuristic: Send {
    fn evaluate(&self, board: &Board, player: Player) -> i64;
}

/// Sum `score_window(own, opp, empty)` over every 4-cell window on the
/// board: all horizontals, verticals, and both diagonal directions.
fn score_all_windows(
    board: &Board,
    player: Player,
    score_window: fn(own: u32, opp: u32, empty: u32) -> i64,
) -> i64 {
    let own_cell = player.to_cell();
    let opp_cell = player.other().to_cell();
    let mut score = 0;

    let mut tally = |cells: [Cell; 4]| {
        let mut own = 0;
        let mut opp = 0;
        let mut empty = 0;
        for cell in cells {
            if cell == own_cell {
                own += 1;
            } else if cell == opp_cell {
                opp += 1;
            } else {
                empty += 1;
            }
        }
        score += score_window(own, opp, empty);
    };

    // Horizontal
    for row in 0..ROWS {
        for col in 0..=COLS - 4 {
            tally([0, 1, 2, 3].map(|i| board.get(row, col + i)));
        }
    }

    // Vertical
    for col in 0..COLS {
        for row in 0..=ROWS - 4 {
            tally([0, 1, 2, 3].map(|i| board.get(row + i, col)));
        }
    }

    // Diagonal up-right (/)
    for row in 0..=ROWS - 4 {
        for col in 0..=COLS - 4 {
            tally([0, 1, 2, 3].map(|i| board.get(row + i, col + i)));
        }
    }

    // Diagonal down-right (\)
    for row in 3..ROWS {
        for col in 0..=COLS - 4 {
            tally([0, 1, 2, 3].map(|i| board.get(row - i, col + i)));
        }
    }

    score
}

/// Full heuristic used by the minimax strategy: center-column bias plus
/// window scoring for completed lines, open threes, mixed twos, and an
/// opponent-blocking penalty.
pub struct WindowHeuristic;

impl WindowHeuristic {
    fn score_window(own: u32, opp: u32, empty: u32) -> i64 {
        let mut score = 0;
        if own == 4 {
            score += 100;
        } else if own == 3 && empty == 1 {
            score += 10;
        } else if own == 2 && opp == 2 {
            score += 5;
        }
        if opp == 3 && empty == 1 {
            score -= 80;
        }
        score
    }
}

impl Heuristic for WindowHeuristic {
    fn evaluate(&self, board: &Board, player: Player) -> i64 {
        let own_cell = player.to_cell();

        // Center column bonus: central pieces join the most winning lines
        let center_count = (0..ROWS)
            .filter(|&row| board.get(row, CENTER_COL) == own_cell)
            .count() as i64;

        center_count * 6 + score_all_windows(board, player, Self::score_window)
    }
}

/// Narrow heuristic used by the one-ply greedy strategy: counts only the
/// evaluated player's completed fours and open threes. Intentionally blind
/// to opponent threats and the center.
pub struct ThreatHeuristic;

impl ThreatHeuristic {
    fn score_window(own: u32, _opp: u32, empty: u32) -> i64 {
        if own == 4 {
            100
        } else if own == 3 && empty == 1 {
            10
        } else {
            0
        }
    }
}

impl Heuristic for ThreatHeuristic {
    fn evaluate(&self, board: &Board, player: Player) -> i64 {
        score_all_windows(board, player, Self::score_window)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_board_scores_zero() {
        let board = Board::new();
        assert_eq!(WindowHeuristic.evaluate(&board, Player::Red), 0);
        assert_eq!(WindowHeuristic.evaluate(&board, Player::Yellow), 0);
        assert_eq!(ThreatHeuristic.evaluate(&board, Player::Red), 0);
    }

    #[test]
    fn center_piece_scores_center_bonus() {
        let mut board = Board::new();
        board.drop_piece(3, Cell::Red).unwrap();
        // A lone piece contributes nothing through windows, only +6 center
        assert_eq!(WindowHeuristic.evaluate(&board, Player::Red), 6);
        assert_eq!(WindowHeuristic.evaluate(&board, Player::Yellow), 0);
    }

    #[test]
    fn edge_piece_scores_zero() {
        let mut board = Board::new();
        board.drop_piece(0, Cell::Red).unwrap();
        assert_eq!(WindowHeuristic.evaluate(&board, Player::Red), 0);
    }

    #[test]
    fn open_three_scores_ten() {
        let mut board = Board::new();
        for col in 0..3 {
            board.drop_piece(col, Cell::Red).unwrap();
        }
        // One horizontal window holds 3 own + 1 empty; every other window
        // holds at most 2 own pieces alongside empties
        assert_eq!(WindowHeuristic.evaluate(&board, Player::Red), 10);
    }

    #[test]
    fn opponent_open_three_is_penalized() {
        let mut board = Board::new();
        for col in 0..3 {
            board.drop_piece(col, Cell::Red).unwrap();
        }
        assert_eq!(WindowHeuristic.evaluate(&board, Player::Yellow), -80);
    }

    #[test]
    fn mixed_two_two_window_scores_five() {
        let mut board = Board::new();
        board.drop_piece(0, Cell::Red).unwrap();
        board.drop_piece(1, Cell::Red).unwrap();
        board.drop_piece(2, Cell::Yellow).unwrap();
        board.drop_piece(3, Cell::Yellow).unwrap();
        // The cols 0..=3 window holds 2 red + 2 yellow: +5 for each side
        assert_eq!(WindowHeuristic.evaluate(&board, Player::Red), 5);
        // Yellow additionally owns the center cell at (0, 3)
        assert_eq!(WindowHeuristic.evaluate(&board, Player::Yellow), 11);
    }

    #[test]
    fn evaluation_is_piece_swap_symmetric() {
        // Play out a midgame position, then mirror every piece's color and
        // check the swapped player sees the identical score.
        let mut board = Board::new();
        let mut mirrored = Board::new();
        let mut cell = Cell::Red;
        for col in [3, 3, 2, 4, 4, 0, 6, 2, 1, 5, 5, 5, 0, 3] {
            board.drop_piece(col, cell).unwrap();
            let swapped = if cell == Cell::Red { Cell::Yellow } else { Cell::Red };
            mirrored.drop_piece(col, swapped).unwrap();
            cell = swapped;
        }

        assert_eq!(
            WindowHeuristic.evaluate(&board, Player::Red),
            WindowHeuristic.evaluate(&mirrored, Player::Yellow)
        );
        assert_eq!(
            WindowHeuristic.evaluate(&board, Player::Yellow),
            WindowHeuristic.evaluate(&mirrored, Player::Red)
        );
        assert_eq!(
            ThreatHeuristic.evaluate(&board, Player::Red),
            ThreatHeuristic.evaluate(&mirrored, Player::Yellow)
        );
    }

    #[test]
    fn threat_heuristic_counts_own_threats_only() {
        let mut board = Board::new();
        for col in 0..3 {
            board.drop_piece(col, Cell::Yellow).unwrap();
        }
        // Yellow sees its open three; Red is blind to the danger
        assert_eq!(ThreatHeuristic.evaluate(&board, Player::Yellow), 10);
        assert_eq!(ThreatHeuristic.evaluate(&board, Player::Red), 0);
    }

    #[test]
    fn threat_heuristic_scores_completed_four() {
        let mut board = Board::new();
        for col in 0..4 {
            board.drop_piece(col, Cell::Red).unwrap();
        }
        // The completed window scores 100, its right neighbor is an open
        // three for another 10
        assert_eq!(ThreatHeuristic.evaluate(&board, Player::Red), 110);
    }
}

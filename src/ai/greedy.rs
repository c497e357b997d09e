//! The legacy one-ply strategy: simulate a single drop in every playable
//! column, score each result with the narrow threat heuristic, and keep the
//! best. No lookahead, no notion of the opponent.

use crate::game::{Board, GameState, Player};

use super::agent::Agent;
use super::eval::{Heuristic, ThreatHeuristic};

/// Best immediate column for `player` under the threat heuristic. The best
/// score starts at 0, so a column must score above that floor to displace
/// the default first valid column — positions where every drop scores 0
/// (or would score negative under a richer heuristic) keep the default.
pub fn pick_best_move(board: &Board, player: Player) -> usize {
    let valid = board.valid_columns();
    assert!(
        !valid.is_empty(),
        "cannot pick a move on a board with no playable column"
    );

    let mut best_score = 0;
    let mut best_col = valid[0];

    for col in valid {
        let mut candidate = *board;
        let row = candidate
            .next_open_row(col)
            .expect("valid column has an open row");
        candidate.place(row, col, player.to_cell());

        let score = ThreatHeuristic.evaluate(&candidate, player);
        if score > best_score {
            best_score = score;
            best_col = col;
        }
    }

    best_col
}

/// One-ply greedy strategy.
pub struct GreedyAgent;

impl Agent for GreedyAgent {
    fn select_action(&mut self, state: &GameState) -> usize {
        pick_best_move(state.board(), state.current_player())
    }

    fn name(&self) -> &str {
        "Greedy"
    }

    fn clone_agent(&self) -> Box<dyn Agent> {
        Box::new(GreedyAgent)
    }
}

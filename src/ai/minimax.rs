//! Exhaustive fixed-depth minimax. The search explores every playable
//! column at every ply over disposable board copies, with terminal states
//! scored far outside the heuristic range. Depth is the difficulty dial:
//! cost is O(7^depth) with no pruning.

use crate::game::{win, Board, GameState, Player};

use super::agent::Agent;
use super::eval::{Heuristic, WindowHeuristic};

/// Score of a proven win (loss when negated) anywhere in the tree; dwarfs
/// any value the heuristic can produce.
pub const WIN_SCORE: i64 = 10_000_000_000_000;

/// The column a search settled on, paired with the score it assigned.
/// `column` is `None` exactly at leaf and terminal returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    pub column: Option<usize>,
    pub score: i64,
}

/// Minimax over `board` to the given depth. `ai` is the piece being played
/// for; `maximizing` is true when it is `ai`'s turn on `board`. Ties break
/// to the first column reaching the extreme value, in ascending order.
pub fn minimax(
    board: &Board,
    depth: u32,
    maximizing: bool,
    ai: Player,
    heuristic: &dyn Heuristic,
) -> SearchResult {
    let terminal = win::is_terminal(board);
    if depth == 0 || terminal {
        if terminal {
            if win::has_four_in_a_row(board, ai.to_cell()) {
                return SearchResult {
                    column: None,
                    score: WIN_SCORE,
                };
            }
            if win::has_four_in_a_row(board, ai.other().to_cell()) {
                return SearchResult {
                    column: None,
                    score: -WIN_SCORE,
                };
            }
            // Board full, nobody connected: a draw
            return SearchResult {
                column: None,
                score: 0,
            };
        }
        // Depth exhausted on a live position: static evaluation
        return SearchResult {
            column: None,
            score: heuristic.evaluate(board, ai),
        };
    }

    let valid = board.valid_columns();
    assert!(
        !valid.is_empty(),
        "non-terminal board must have a playable column"
    );

    let mover = if maximizing { ai } else { ai.other() };
    let mut best = SearchResult {
        column: Some(valid[0]),
        score: if maximizing { i64::MIN } else { i64::MAX },
    };

    for col in valid {
        let mut child = *board;
        let row = child
            .next_open_row(col)
            .expect("valid column has an open row");
        child.place(row, col, mover.to_cell());

        let score = minimax(&child, depth - 1, !maximizing, ai, heuristic).score;
        let improves = if maximizing {
            score > best.score
        } else {
            score < best.score
        };
        if improves {
            best = SearchResult {
                column: Some(col),
                score,
            };
        }
    }

    best
}

/// Minimax strategy with a configurable depth and heuristic.
pub struct MinimaxAgent {
    depth: u32,
    heuristic: Box<dyn Heuristic>,
}

impl MinimaxAgent {
    pub fn new(depth: u32) -> Self {
        MinimaxAgent {
            depth,
            heuristic: Box::new(WindowHeuristic),
        }
    }

    pub fn with_heuristic(depth: u32, heuristic: Box<dyn Heuristic>) -> Self {
        MinimaxAgent { depth, heuristic }
    }

    /// Run the search for `ai` to move on `board`.
    pub fn choose_move(&self, board: &Board, ai: Player) -> SearchResult {
        minimax(board, self.depth, true, ai, self.heuristic.as_ref())
    }
}

impl Agent for MinimaxAgent {
    fn select_action(&mut self, state: &GameState) -> usize {
        let result = self.choose_move(state.board(), state.current_player());
        result
            .column
            .expect("search from a live position settles on a column")
    }

    fn name(&self) -> &str {
        "Minimax"
    }

    fn clone_agent(&self) -> Box<dyn Agent> {
        Box::new(MinimaxAgent::new(self.depth))
    }
}

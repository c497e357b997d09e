//! AI strategies behind a common [`Agent`] interface: the minimax search,
//! the legacy one-ply greedy picker, and a uniform-random baseline.

mod agent;
mod eval;
mod greedy;
mod minimax;
mod random;

pub use agent::Agent;
pub use eval::{Heuristic, ThreatHeuristic, WindowHeuristic};
pub use greedy::{pick_best_move, GreedyAgent};
pub use minimax::{minimax, MinimaxAgent, SearchResult, WIN_SCORE};
pub use random::RandomAgent;

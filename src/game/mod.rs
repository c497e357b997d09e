//! Core Connect Four game logic: board representation, player types,
//! four-in-a-row detection, and the game state machine with immutable
//! transitions.

mod board;
mod player;
mod state;
pub mod win;

pub use board::{Board, Cell, COLS, ROWS};
pub use player::Player;
pub use state::{GameOutcome, GameState, MoveError};

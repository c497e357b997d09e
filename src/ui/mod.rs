//! Terminal UI: a ratatui front-end over the game state machine. Either
//! side can be handed to an AI strategy at any time; the core is a pure
//! consumer of key presses and producer of board snapshots.

mod app;
mod game_view;

pub use app::App;

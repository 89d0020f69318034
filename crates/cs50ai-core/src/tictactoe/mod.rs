//! Tic-tac-toe with an unbeatable minimax player.

pub mod board;
pub mod game;
pub mod minimax;

pub use board::{Action, Board, Player, SIZE};
pub use game::{actions, initial_state, player, result, terminal, utility, winner};
pub use minimax::{minimax, value};

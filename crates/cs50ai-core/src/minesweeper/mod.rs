//! Minesweeper: the hidden board and a player that reasons about it.

pub mod ai;
pub mod game;
pub mod knowledge;

pub use ai::MinesweeperAi;
pub use game::{board_cells, neighbors, Cell, Minesweeper, MAX_CELLS};
pub use knowledge::Knowledge;

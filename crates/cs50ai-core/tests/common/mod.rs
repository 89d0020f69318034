use std::collections::BTreeSet;

use cs50ai_core::minesweeper::{Cell, Minesweeper, MinesweeperAi};
use cs50ai_core::tictactoe::{self, Board};
use cs50ai_core::SimpleRng;

/// Parse a board that the test knows is valid
#[allow(dead_code)]
pub fn board(text: &str) -> Board {
    Board::parse(text).unwrap()
}

/// Play both sides with minimax until the game ends
#[allow(dead_code)]
pub fn play_out(mut board: Board) -> Board {
    while let Some(action) = tictactoe::minimax(&board) {
        board = tictactoe::result(&board, action).unwrap();
    }
    board
}

/// Outcome of one AI-driven minesweeper game
#[allow(dead_code)]
#[derive(Debug)]
pub struct PlayedGame {
    pub game: Minesweeper,
    pub ai: MinesweeperAi,
    pub revealed: Vec<Cell>,
    pub hit_mine: Option<Cell>,
}

/// Let the AI play a game to the end: safe moves first, random otherwise.
///
/// Stops on the first mine revealed or when no move is left.
#[allow(dead_code)]
pub fn autoplay(game: Minesweeper, rng: &mut SimpleRng) -> PlayedGame {
    let mut ai = MinesweeperAi::new(game.height(), game.width());
    let mut revealed = Vec::new();
    let mut hit_mine = None;

    loop {
        let next = ai.make_safe_move().or_else(|| ai.make_random_move(rng));
        let Some(cell) = next else { break };
        if game.is_mine(cell).unwrap() {
            hit_mine = Some(cell);
            break;
        }
        revealed.push(cell);
        let count = game.nearby_mines(cell).unwrap();
        ai.add_knowledge(cell, count).unwrap();
    }

    PlayedGame {
        game,
        ai,
        revealed,
        hit_mine,
    }
}

#[allow(dead_code)]
pub fn cells(list: &[Cell]) -> BTreeSet<Cell> {
    list.iter().copied().collect()
}

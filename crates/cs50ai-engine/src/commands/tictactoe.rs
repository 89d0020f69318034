//! Tic-tac-toe commands: best move and self-play.

#![allow(clippy::result_large_err)]

use cs50ai_core::errors::ExError;
use cs50ai_core::tictactoe::{self, Action, Board, Player};
use cs50ai_core::{log_op_end, log_op_error, log_op_start};
use cs50ai_core_types::SessionId;
use cs50ai_store::errors::Result;
use serde::Serialize;

/// Best move for the player to move on a board
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BestMoveResult {
    pub session_id: SessionId,
    /// Board in compact form, e.g. `X.O/.X./..O`
    pub board: String,
    /// Player to move; `None` once the game is over
    pub player: Option<Player>,
    pub action: Option<Action>,
    /// Game value under optimal play: 1 X wins, -1 O wins, 0 draw
    pub value: i8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PlayedMove {
    pub player: Player,
    pub action: Action,
}

/// Optimal play by both sides until the game ends
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelfPlayResult {
    pub session_id: SessionId,
    pub start: String,
    pub moves: Vec<PlayedMove>,
    pub final_board: String,
    pub winner: Option<Player>,
}

/// Parse `board` and find the optimal move.
pub fn tictactoe_best_move(board: &str) -> Result<BestMoveResult> {
    let session_id = SessionId::new();
    log_op_start!("tictactoe_best_move", session_id = %session_id, board = board);
    let start = std::time::Instant::now();

    let result = best_move_impl(board, session_id).map_err(|e| {
        log_op_error!(
            "tictactoe_best_move",
            e.clone(),
            duration_ms = start.elapsed().as_millis() as u64
        );
        e
    })?;

    log_op_end!(
        "tictactoe_best_move",
        duration_ms = start.elapsed().as_millis() as u64,
        session_id = %result.session_id,
        value = result.value
    );
    Ok(result)
}

fn best_move_impl(board: &str, session_id: SessionId) -> Result<BestMoveResult> {
    let board = Board::parse(board).map_err(ExError::from)?;
    let player = (!tictactoe::terminal(&board)).then(|| tictactoe::player(&board));
    Ok(BestMoveResult {
        session_id,
        board: board.to_compact(),
        player,
        action: tictactoe::minimax(&board),
        value: tictactoe::value(&board),
    })
}

/// Play both sides optimally from `board` (empty board when `None`).
pub fn tictactoe_self_play(board: Option<&str>) -> Result<SelfPlayResult> {
    let session_id = SessionId::new();
    log_op_start!("tictactoe_self_play", session_id = %session_id);
    let start = std::time::Instant::now();

    let result = self_play_impl(board, session_id).map_err(|e| {
        log_op_error!(
            "tictactoe_self_play",
            e.clone(),
            duration_ms = start.elapsed().as_millis() as u64
        );
        e
    })?;

    log_op_end!(
        "tictactoe_self_play",
        duration_ms = start.elapsed().as_millis() as u64,
        session_id = %result.session_id,
        moves = result.moves.len() as u64
    );
    Ok(result)
}

fn self_play_impl(board: Option<&str>, session_id: SessionId) -> Result<SelfPlayResult> {
    let mut board = match board {
        Some(text) => Board::parse(text).map_err(ExError::from)?,
        None => tictactoe::initial_state(),
    };
    let start = board.to_compact();

    let mut moves = Vec::new();
    while let Some(action) = tictactoe::minimax(&board) {
        let player = tictactoe::player(&board);
        board = tictactoe::result(&board, action).map_err(ExError::from)?;
        moves.push(PlayedMove { player, action });
    }

    Ok(SelfPlayResult {
        session_id,
        start,
        moves,
        final_board: board.to_compact(),
        winner: tictactoe::winner(&board),
    })
}

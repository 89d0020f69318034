//! Engine-level commands: one enum for every operation a front end can run.

#![allow(clippy::result_large_err)]

use cs50ai_store::config::MinesweeperConfig;
use cs50ai_store::errors::Result;
use serde::Serialize;

use crate::commands::knights::{knights_solve, KnightsSolveResult, PuzzleSource};
use crate::commands::logic::{logic_entails, logic_show, EntailsResult, ShowResult};
use crate::commands::minesweeper::{minesweeper_autoplay, AutoplayResult};
use crate::commands::tictactoe::{
    tictactoe_best_move, tictactoe_self_play, BestMoveResult, SelfPlayResult,
};

#[derive(Debug, Clone)]
pub enum EngineCommand {
    /// Optimal move on a board given in compact text form.
    TictactoeBestMove { board: String },
    /// Optimal play for both sides; empty board when `board` is `None`.
    TictactoeSelfPlay { board: Option<String> },
    /// Let the minesweeper player run `games` games.
    MinesweeperAutoplay {
        settings: MinesweeperConfig,
        games: usize,
        seed: Option<u64>,
    },
    KnightsSolve { source: PuzzleSource },
    /// Does the conjunction of `knowledge` entail `query`?
    LogicEntails {
        knowledge: Vec<String>,
        query: String,
    },
    LogicShow { formula: String },
}

/// Result of applying an engine command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum EngineCommandResult {
    TictactoeBestMove(BestMoveResult),
    TictactoeSelfPlay(SelfPlayResult),
    MinesweeperAutoplay(AutoplayResult),
    KnightsSolve(KnightsSolveResult),
    LogicEntails(EntailsResult),
    LogicShow(ShowResult),
}

/// Apply an engine command.
pub fn apply_engine_command(cmd: EngineCommand) -> Result<EngineCommandResult> {
    match cmd {
        EngineCommand::TictactoeBestMove { board } => {
            tictactoe_best_move(&board).map(EngineCommandResult::TictactoeBestMove)
        }
        EngineCommand::TictactoeSelfPlay { board } => {
            tictactoe_self_play(board.as_deref()).map(EngineCommandResult::TictactoeSelfPlay)
        }
        EngineCommand::MinesweeperAutoplay {
            settings,
            games,
            seed,
        } => minesweeper_autoplay(&settings, games, seed)
            .map(EngineCommandResult::MinesweeperAutoplay),
        EngineCommand::KnightsSolve { source } => {
            knights_solve(&source).map(EngineCommandResult::KnightsSolve)
        }
        EngineCommand::LogicEntails { knowledge, query } => {
            logic_entails(&knowledge, &query).map(EngineCommandResult::LogicEntails)
        }
        EngineCommand::LogicShow { formula } => {
            logic_show(&formula).map(EngineCommandResult::LogicShow)
        }
    }
}

//! Knights and knaves: load puzzles and solve them by model checking.

#![allow(clippy::result_large_err)]

use std::path::PathBuf;

use cs50ai_core::errors::ExError;
use cs50ai_core::knights::{builtin_puzzles, solve, Puzzle, Solution};
use cs50ai_core::{log_op_end, log_op_error, log_op_start};
use cs50ai_core_types::SessionId;
use cs50ai_store::errors::Result;
use cs50ai_store::{load_puzzle_dir, load_puzzle_file};
use serde::Serialize;

/// Where the puzzles come from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PuzzleSource {
    /// The four classic puzzles
    Builtin,
    File(PathBuf),
    /// Every `*.yaml`/`*.yml` file, sorted by name
    Dir(PathBuf),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KnightsSolveResult {
    pub session_id: SessionId,
    pub solutions: Vec<Solution>,
}

pub fn knights_solve(source: &PuzzleSource) -> Result<KnightsSolveResult> {
    let session_id = SessionId::new();
    log_op_start!("knights_solve", session_id = %session_id, source = ?source);
    let start = std::time::Instant::now();

    let result = knights_solve_impl(source, session_id).map_err(|e| {
        log_op_error!(
            "knights_solve",
            e.clone(),
            duration_ms = start.elapsed().as_millis() as u64
        );
        e
    })?;

    log_op_end!(
        "knights_solve",
        duration_ms = start.elapsed().as_millis() as u64,
        session_id = %result.session_id,
        puzzles = result.solutions.len() as u64
    );
    Ok(result)
}

fn knights_solve_impl(source: &PuzzleSource, session_id: SessionId) -> Result<KnightsSolveResult> {
    let puzzles: Vec<Puzzle> = match source {
        PuzzleSource::Builtin => builtin_puzzles().map_err(ExError::from)?,
        PuzzleSource::File(path) => vec![load_puzzle_file(path)?],
        PuzzleSource::Dir(dir) => load_puzzle_dir(dir)?,
    };

    let solutions = puzzles
        .iter()
        .map(|puzzle| {
            solve(puzzle).map_err(|e| ExError::from(e).with_subject(puzzle.title().to_string()))
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(KnightsSolveResult {
        session_id,
        solutions,
    })
}

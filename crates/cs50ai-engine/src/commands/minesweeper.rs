//! Minesweeper autoplay: the knowledge-based player runs whole games.
//!
//! Each turn the player makes a known-safe move if it has one and a random
//! move otherwise. With no move left the known mines are flagged and the
//! game is scored; revealing a mine loses at once.

#![allow(clippy::result_large_err)]

use cs50ai_core::errors::{ExError, ExErrorKind};
use cs50ai_core::minesweeper::{Cell, Minesweeper, MinesweeperAi};
use cs50ai_core::SimpleRng;
use cs50ai_core::{log_op_end, log_op_error, log_op_start};
use cs50ai_core_types::SessionId;
use cs50ai_store::config::MinesweeperConfig;
use cs50ai_store::errors::Result;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MoveKind {
    Safe,
    Random,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    Won,
    Lost,
}

/// One revealed cell. `nearby` is `None` when the cell was a mine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MoveRecord {
    pub cell: Cell,
    pub kind: MoveKind,
    pub nearby: Option<usize>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameReport {
    /// 1-based game number
    pub game: usize,
    pub moves: Vec<MoveRecord>,
    pub outcome: Outcome,
    /// Cells the player had proven to be mines when the game ended
    pub mines_identified: Vec<Cell>,
    /// Rendered board with every mine shown
    pub board: String,
}

impl GameReport {
    /// Number of safe cells revealed
    pub fn revealed(&self) -> usize {
        self.moves.iter().filter(|m| m.nearby.is_some()).count()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AutoplayResult {
    pub session_id: SessionId,
    /// Seed the batch was played with; rerunning with it replays every game
    pub seed: u64,
    pub height: usize,
    pub width: usize,
    pub mines: usize,
    pub games: Vec<GameReport>,
    pub wins: usize,
}

/// Play `games` games on boards described by `settings`.
///
/// `seed` overrides `settings.seed`; with neither, a seed is drawn from
/// entropy and reported in the result.
pub fn minesweeper_autoplay(
    settings: &MinesweeperConfig,
    games: usize,
    seed: Option<u64>,
) -> Result<AutoplayResult> {
    let session_id = SessionId::new();
    log_op_start!(
        "minesweeper_autoplay",
        session_id = %session_id,
        height = settings.height as u64,
        width = settings.width as u64,
        mines = settings.mines as u64,
        games = games as u64
    );
    let start = std::time::Instant::now();

    let result = autoplay_impl(settings, games, seed, session_id).map_err(|e| {
        log_op_error!(
            "minesweeper_autoplay",
            e.clone(),
            duration_ms = start.elapsed().as_millis() as u64
        );
        e
    })?;

    log_op_end!(
        "minesweeper_autoplay",
        duration_ms = start.elapsed().as_millis() as u64,
        session_id = %result.session_id,
        seed = result.seed,
        wins = result.wins as u64
    );
    Ok(result)
}

/// Most games one autoplay run will play
pub const MAX_GAMES: usize = 100_000;

fn autoplay_impl(
    settings: &MinesweeperConfig,
    games: usize,
    seed: Option<u64>,
    session_id: SessionId,
) -> Result<AutoplayResult> {
    settings.validate()?;
    if games == 0 || games > MAX_GAMES {
        return Err(ExError::new(ExErrorKind::InvalidConfig)
            .with_op("minesweeper_autoplay")
            .with_message(format!(
                "game count must be between 1 and {}, got {}",
                MAX_GAMES, games
            )));
    }

    let seed = seed
        .or(settings.seed)
        .unwrap_or_else(|| SimpleRng::from_entropy().next_u64());
    let mut streams = SimpleRng::new(seed);

    let mut reports = Vec::new();
    for game in 1..=games {
        let mut rng = streams.fork();
        reports.push(play_game(settings, game, &mut rng)?);
    }
    let wins = reports.iter().filter(|r| r.outcome == Outcome::Won).count();

    Ok(AutoplayResult {
        session_id,
        seed,
        height: settings.height,
        width: settings.width,
        mines: settings.mines,
        games: reports,
        wins,
    })
}

fn play_game(settings: &MinesweeperConfig, game: usize, rng: &mut SimpleRng) -> Result<GameReport> {
    let mut board =
        Minesweeper::new(settings.height, settings.width, settings.mines, rng).map_err(ExError::from)?;
    let mut ai = MinesweeperAi::new(settings.height, settings.width);
    let mut moves = Vec::new();

    let outcome = loop {
        let next = match ai.make_safe_move() {
            Some(cell) => Some((cell, MoveKind::Safe)),
            None => ai.make_random_move(rng).map(|cell| (cell, MoveKind::Random)),
        };
        let Some((cell, kind)) = next else {
            board.flag_all(ai.mines());
            break if board.won() { Outcome::Won } else { Outcome::Lost };
        };

        if board.is_mine(cell).map_err(ExError::from)? {
            moves.push(MoveRecord {
                cell,
                kind,
                nearby: None,
            });
            break Outcome::Lost;
        }

        let nearby = board.nearby_mines(cell).map_err(ExError::from)?;
        ai.add_knowledge(cell, nearby).map_err(ExError::from)?;
        moves.push(MoveRecord {
            cell,
            kind,
            nearby: Some(nearby),
        });
    };

    tracing::debug!(
        game = game as u64,
        moves = moves.len() as u64,
        outcome = ?outcome,
        "minesweeper game finished"
    );
    Ok(GameReport {
        game,
        moves,
        outcome,
        mines_identified: ai.mines().iter().copied().collect(),
        board: board.render(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings(height: usize, width: usize, mines: usize) -> MinesweeperConfig {
        MinesweeperConfig {
            height,
            width,
            mines,
            seed: None,
        }
    }

    #[test]
    fn test_same_seed_replays_the_same_games() {
        let a = minesweeper_autoplay(&settings(8, 8, 8), 5, Some(11)).unwrap();
        let b = minesweeper_autoplay(&settings(8, 8, 8), 5, Some(11)).unwrap();
        assert_eq!(a.games, b.games);
        assert_eq!(a.wins, b.wins);
        assert_ne!(a.session_id, b.session_id);
    }

    #[test]
    fn test_config_seed_used_when_none_given() {
        let mut with_seed = settings(5, 5, 3);
        with_seed.seed = Some(4);
        let result = minesweeper_autoplay(&with_seed, 1, None).unwrap();
        assert_eq!(result.seed, 4);
    }

    #[test]
    fn test_no_mines_always_wins_without_guessing_after_first_move() {
        let result = minesweeper_autoplay(&settings(4, 4, 0), 3, Some(1)).unwrap();
        assert_eq!(result.wins, 3);
        for game in &result.games {
            assert_eq!(game.revealed(), 16);
            assert_eq!(game.moves[0].kind, MoveKind::Random);
            assert!(game.moves[1..].iter().all(|m| m.kind == MoveKind::Safe));
        }
    }

    #[test]
    fn test_all_mines_loses_on_first_move() {
        let result = minesweeper_autoplay(&settings(2, 2, 4), 1, Some(1)).unwrap();
        let game = &result.games[0];
        assert_eq!(game.outcome, Outcome::Lost);
        assert_eq!(game.moves.len(), 1);
        assert_eq!(game.moves[0].nearby, None);
    }

    #[test]
    fn test_lost_games_end_on_a_mine_and_won_games_flag_all() {
        let result = minesweeper_autoplay(&settings(8, 8, 8), 20, Some(99)).unwrap();
        for game in &result.games {
            match game.outcome {
                Outcome::Lost => assert_eq!(game.moves.last().and_then(|m| m.nearby), None),
                Outcome::Won => {
                    assert_eq!(game.mines_identified.len(), 8);
                    assert_eq!(game.revealed(), 56);
                }
            }
        }
    }

    #[test]
    fn test_game_count_out_of_range_rejected() {
        for games in [0, MAX_GAMES + 1, usize::MAX] {
            let err = minesweeper_autoplay(&settings(4, 4, 2), games, Some(1)).unwrap_err();
            assert_eq!(err.kind(), ExErrorKind::InvalidConfig);
        }
    }

    #[test]
    fn test_invalid_settings_rejected() {
        let err = minesweeper_autoplay(&settings(2, 2, 9), 1, Some(1)).unwrap_err();
        assert_eq!(err.kind(), ExErrorKind::InvalidConfig);
    }
}

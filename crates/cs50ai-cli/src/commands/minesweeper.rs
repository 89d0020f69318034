//! Minesweeper autoplay command

use clap::{Args, Subcommand};
use cs50ai_engine::commands::engine_command::{
    apply_engine_command, EngineCommand, EngineCommandResult,
};
use cs50ai_engine::commands::minesweeper::{AutoplayResult, MoveKind, Outcome};
use cs50ai_store::Config;

use crate::commands::print_json;

#[derive(Debug, Args)]
pub struct MinesweeperArgs {
    #[command(subcommand)]
    pub command: MinesweeperCommand,
}

#[derive(Debug, Subcommand)]
pub enum MinesweeperCommand {
    /// Let the AI play whole games and report how they went
    Autoplay(AutoplayArgs),
}

#[derive(Debug, Args)]
pub struct AutoplayArgs {
    /// Board height (config `minesweeper.height`, default 8)
    #[arg(long)]
    pub height: Option<usize>,

    /// Board width (config `minesweeper.width`, default 8)
    #[arg(long)]
    pub width: Option<usize>,

    /// Number of mines (config `minesweeper.mines`, default 8)
    #[arg(long)]
    pub mines: Option<usize>,

    /// Seed for reproducible games
    #[arg(long)]
    pub seed: Option<u64>,

    #[arg(long, default_value_t = 1)]
    pub games: usize,

    /// Print each board with its mines after the game
    #[arg(long)]
    pub show_board: bool,

    #[arg(long)]
    pub json: bool,
}

pub fn execute(args: MinesweeperArgs, config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    match args.command {
        MinesweeperCommand::Autoplay(args) => execute_autoplay(args, config),
    }
}

fn execute_autoplay(args: AutoplayArgs, config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let mut settings = config.minesweeper;
    if let Some(height) = args.height {
        settings.height = height;
    }
    if let Some(width) = args.width {
        settings.width = width;
    }
    if let Some(mines) = args.mines {
        settings.mines = mines;
    }

    let cmd = EngineCommand::MinesweeperAutoplay {
        settings,
        games: args.games,
        seed: args.seed,
    };
    let EngineCommandResult::MinesweeperAutoplay(result) = apply_engine_command(cmd)? else {
        return Err("unexpected engine result".into());
    };

    if args.json {
        return print_json(&result);
    }
    print_report(&result, args.show_board);
    Ok(())
}

fn print_report(result: &AutoplayResult, show_board: bool) {
    for game in &result.games {
        let random = game
            .moves
            .iter()
            .filter(|m| m.kind == MoveKind::Random)
            .count();
        let outcome = match game.outcome {
            Outcome::Won => "won",
            Outcome::Lost => "lost",
        };
        println!(
            "Game {}: {} after {} moves ({} random), {} of {} mines identified",
            game.game,
            outcome,
            game.moves.len(),
            random,
            game.mines_identified.len(),
            result.mines
        );
        if show_board {
            print!("{}", game.board);
        }
    }
    println!(
        "Won {} of {} games on a {}x{} board with {} mines (seed {})",
        result.wins,
        result.games.len(),
        result.height,
        result.width,
        result.mines,
        result.seed
    );
}

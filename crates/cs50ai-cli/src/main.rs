//! cs50ai CLI
//!
//! Command-line interface for the tic-tac-toe, minesweeper, knights and
//! logic engines

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use cs50ai_core::logging_facility::{self, Profile};
use cs50ai_store::load_config;

mod commands;

#[derive(Debug, Parser)]
#[command(name = "cs50ai")]
#[command(about = "cs50ai - search and knowledge-based game players", long_about = None)]
struct Cli {
    /// Configuration file (default: ./cs50ai.toml when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Human-readable debug logs on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Tic-tac-toe with an optimal minimax player
    Tictactoe(commands::tictactoe::TictactoeArgs),
    /// Minesweeper played by a knowledge-based AI
    Minesweeper(commands::minesweeper::MinesweeperArgs),
    /// Knights and knaves puzzles solved by model checking
    Knights(commands::knights::KnightsArgs),
    /// Propositional logic: entailment and formula inspection
    Logic(commands::logic::LogicArgs),
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config(cli.config.as_deref())?;

    if cli.verbose {
        logging_facility::init(Profile::Development);
    } else if let Some(profile) = config.logging.profile() {
        logging_facility::init(profile);
    }

    match cli.command {
        Commands::Tictactoe(args) => commands::tictactoe::execute(args),
        Commands::Minesweeper(args) => commands::minesweeper::execute(args, &config),
        Commands::Knights(args) => commands::knights::execute(args, &config),
        Commands::Logic(args) => commands::logic::execute(args),
    }
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

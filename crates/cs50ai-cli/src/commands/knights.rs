//! Knights and knaves command

use std::path::PathBuf;

use clap::{Args, Subcommand};
use cs50ai_core::knights::Verdict;
use cs50ai_engine::commands::engine_command::{
    apply_engine_command, EngineCommand, EngineCommandResult,
};
use cs50ai_engine::commands::knights::PuzzleSource;
use cs50ai_store::Config;

use crate::commands::print_json;

#[derive(Debug, Args)]
pub struct KnightsArgs {
    #[command(subcommand)]
    pub command: KnightsCommand,
}

#[derive(Debug, Subcommand)]
pub enum KnightsCommand {
    /// Solve puzzles: the built-in four unless a file or directory is given
    Solve(SolveArgs),
}

#[derive(Debug, Args)]
pub struct SolveArgs {
    /// A single puzzle file
    #[arg(long, conflicts_with = "dir")]
    pub file: Option<PathBuf>,

    /// A directory of puzzle files (config `knights.puzzle_dir`)
    #[arg(long, conflicts_with = "file")]
    pub dir: Option<PathBuf>,

    #[arg(long)]
    pub json: bool,
}

pub fn execute(args: KnightsArgs, config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    match args.command {
        KnightsCommand::Solve(args) => execute_solve(args, config),
    }
}

fn execute_solve(args: SolveArgs, config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let source = match (args.file, args.dir) {
        (Some(file), _) => PuzzleSource::File(file),
        (None, Some(dir)) => PuzzleSource::Dir(dir),
        (None, None) => match &config.knights.puzzle_dir {
            Some(dir) => PuzzleSource::Dir(dir.clone()),
            None => PuzzleSource::Builtin,
        },
    };

    let EngineCommandResult::KnightsSolve(result) =
        apply_engine_command(EngineCommand::KnightsSolve { source })?
    else {
        return Err("unexpected engine result".into());
    };

    if args.json {
        return print_json(&result);
    }

    for solution in &result.solutions {
        println!("{}", solution.title);
        for verdict in &solution.verdicts {
            match verdict.verdict {
                Verdict::Knight => println!("    {} is a Knight", verdict.name),
                Verdict::Knave => println!("    {} is a Knave", verdict.name),
                Verdict::Undetermined => println!("    {} cannot be determined", verdict.name),
                Verdict::Contradiction => {
                    println!("    {}: the statements contradict each other", verdict.name)
                }
            }
        }
    }
    Ok(())
}

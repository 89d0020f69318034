//! Tic-tac-toe commands

use std::io::{self, BufRead, Write};

use clap::{Args, Subcommand, ValueEnum};
use cs50ai_core::tictactoe::{self, Action, Board, Player};
use cs50ai_engine::commands::engine_command::{
    apply_engine_command, EngineCommand, EngineCommandResult,
};
use cs50ai_engine::commands::tictactoe::tictactoe_best_move;

use crate::commands::print_json;

#[derive(Debug, Args)]
pub struct TictactoeArgs {
    #[command(subcommand)]
    pub command: TictactoeCommand,
}

#[derive(Debug, Subcommand)]
pub enum TictactoeCommand {
    /// Optimal move for the player to move, e.g. `best-move "X.O/.X./..."`
    BestMove(BestMoveArgs),
    /// Let the computer play both sides
    SelfPlay(SelfPlayArgs),
    /// Play against the computer; moves are `row col` on stdin
    Play(PlayArgs),
}

#[derive(Debug, Args)]
pub struct BestMoveArgs {
    /// Board as nine cells of X, O or `.`; `/` between rows is optional
    pub board: String,

    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Args)]
pub struct SelfPlayArgs {
    /// Starting position (empty board by default)
    #[arg(long)]
    pub board: Option<String>,

    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Side {
    X,
    O,
}

impl From<Side> for Player {
    fn from(side: Side) -> Self {
        match side {
            Side::X => Player::X,
            Side::O => Player::O,
        }
    }
}

#[derive(Debug, Args)]
pub struct PlayArgs {
    /// Which mark you play; X moves first
    #[arg(long, value_enum, default_value = "x")]
    pub human: Side,
}

pub fn execute(args: TictactoeArgs) -> Result<(), Box<dyn std::error::Error>> {
    match args.command {
        TictactoeCommand::BestMove(args) => execute_best_move(args),
        TictactoeCommand::SelfPlay(args) => execute_self_play(args),
        TictactoeCommand::Play(args) => execute_play(args),
    }
}

fn execute_best_move(args: BestMoveArgs) -> Result<(), Box<dyn std::error::Error>> {
    let cmd = EngineCommand::TictactoeBestMove { board: args.board };
    let EngineCommandResult::TictactoeBestMove(result) = apply_engine_command(cmd)? else {
        return Err("unexpected engine result".into());
    };

    if args.json {
        return print_json(&result);
    }

    let board = Board::parse(&result.board)?;
    print!("{}", board);
    match (result.player, result.action) {
        (Some(player), Some((row, col))) => {
            println!("Best move for {}: {} {}", player, row, col);
            println!("Value: {}", describe_value(result.value));
        }
        _ => println!("{}", game_over_message(&board)),
    }
    Ok(())
}

fn execute_self_play(args: SelfPlayArgs) -> Result<(), Box<dyn std::error::Error>> {
    let cmd = EngineCommand::TictactoeSelfPlay { board: args.board };
    let EngineCommandResult::TictactoeSelfPlay(result) = apply_engine_command(cmd)? else {
        return Err("unexpected engine result".into());
    };

    if args.json {
        return print_json(&result);
    }

    for played in &result.moves {
        println!("{} plays {} {}", played.player, played.action.0, played.action.1);
    }
    let board = Board::parse(&result.final_board)?;
    print!("{}", board);
    println!("{}", game_over_message(&board));
    Ok(())
}

fn execute_play(args: PlayArgs) -> Result<(), Box<dyn std::error::Error>> {
    let human: Player = args.human.into();
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    let mut board = tictactoe::initial_state();

    println!("You play {}.", human);
    while !tictactoe::terminal(&board) {
        print!("{}", board);
        if tictactoe::player(&board) == human {
            print!("Your move (row col): ");
            io::stdout().flush()?;
            let Some(line) = lines.next() else {
                return Err("input ended before the game finished".into());
            };
            let line = line?;
            match parse_move(&line) {
                Some(action) => match tictactoe::result(&board, action) {
                    Ok(next) => board = next,
                    Err(e) => println!("{}", e),
                },
                None => println!("Enter a row and a column between 0 and 2, e.g. `1 1`."),
            }
        } else {
            let best = tictactoe_best_move(&board.to_compact())?;
            let action = best.action.ok_or("computer found no move")?;
            println!("Computer plays {} {}", action.0, action.1);
            board = tictactoe::result(&board, action)?;
        }
    }

    print!("{}", board);
    println!("{}", game_over_message(&board));
    Ok(())
}

/// `row col`, separated by whitespace or a comma
fn parse_move(line: &str) -> Option<Action> {
    let mut parts = line
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|part| !part.is_empty());
    let row = parts.next()?.parse().ok()?;
    let col = parts.next()?.parse().ok()?;
    if parts.next().is_some() {
        return None;
    }
    Some((row, col))
}

fn game_over_message(board: &Board) -> String {
    match tictactoe::winner(board) {
        Some(player) => format!("Game Over: {} wins.", player),
        None => "Game Over: Tie.".to_string(),
    }
}

fn describe_value(value: i8) -> &'static str {
    match value {
        1 => "X wins with best play",
        -1 => "O wins with best play",
        _ => "draw with best play",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_move_forms() {
        assert_eq!(parse_move("1 2"), Some((1, 2)));
        assert_eq!(parse_move(" 0,2 "), Some((0, 2)));
        assert_eq!(parse_move("1"), None);
        assert_eq!(parse_move("a b"), None);
        assert_eq!(parse_move("1 1 1"), None);
    }

    #[test]
    fn test_game_over_message() {
        let won = Board::parse("XXX/OO./...").unwrap();
        assert_eq!(game_over_message(&won), "Game Over: X wins.");
        let tie = Board::parse("XOX/XOO/OXX").unwrap();
        assert_eq!(game_over_message(&tie), "Game Over: Tie.");
    }
}

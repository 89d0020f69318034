//! Propositional logic commands

use clap::{Args, Subcommand};
use cs50ai_engine::commands::engine_command::{
    apply_engine_command, EngineCommand, EngineCommandResult,
};

use crate::commands::print_json;

#[derive(Debug, Args)]
pub struct LogicArgs {
    #[command(subcommand)]
    pub command: LogicCommand,
}

#[derive(Debug, Subcommand)]
pub enum LogicCommand {
    /// Check whether the knowledge base entails a query
    Entails(EntailsArgs),
    /// Parse a formula and show its structure
    Show(ShowArgs),
}

#[derive(Debug, Args)]
pub struct EntailsArgs {
    /// Knowledge formula; repeat for several (they are conjoined)
    #[arg(long = "kb")]
    pub knowledge: Vec<String>,

    #[arg(long)]
    pub query: String,

    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Args)]
pub struct ShowArgs {
    pub formula: String,

    #[arg(long)]
    pub json: bool,
}

pub fn execute(args: LogicArgs) -> Result<(), Box<dyn std::error::Error>> {
    match args.command {
        LogicCommand::Entails(args) => execute_entails(args),
        LogicCommand::Show(args) => execute_show(args),
    }
}

fn execute_entails(args: EntailsArgs) -> Result<(), Box<dyn std::error::Error>> {
    let cmd = EngineCommand::LogicEntails {
        knowledge: args.knowledge,
        query: args.query,
    };
    let EngineCommandResult::LogicEntails(result) = apply_engine_command(cmd)? else {
        return Err("unexpected engine result".into());
    };

    if args.json {
        return print_json(&result);
    }

    for formula in &result.knowledge {
        println!("KB: {}", formula);
    }
    let verdict = if result.entailed { "entailed" } else { "not entailed" };
    println!("{}: {}", result.query, verdict);
    Ok(())
}

fn execute_show(args: ShowArgs) -> Result<(), Box<dyn std::error::Error>> {
    let cmd = EngineCommand::LogicShow {
        formula: args.formula,
    };
    let EngineCommandResult::LogicShow(result) = apply_engine_command(cmd)? else {
        return Err("unexpected engine result".into());
    };

    if args.json {
        return print_json(&result);
    }

    println!("{}", result.formula);
    println!("{}", result.structure);
    println!("symbols: {}", result.symbols.join(", "));
    Ok(())
}

//! Puzzle parser with validation
//!
//! Parses YAML, validates the schema version, the character list and every
//! formula, then builds a `cs50ai_core::knights::Puzzle`.

use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use cs50ai_core::knights::{knave_symbol, knight_symbol, Puzzle};
use cs50ai_core::logic::{self, Sentence};

use crate::errors::{io_error, puzzle_invalid, puzzle_rejected, Result};
use crate::puzzles::format_v0::{PuzzleV0, StatementV0};

/// Parse a puzzle file from a path
pub fn load_puzzle_file(path: &Path) -> Result<Puzzle> {
    let content = fs::read_to_string(path).map_err(|e| {
        io_error("load_puzzle_file", e).with_subject(path.display().to_string())
    })?;

    parse_puzzle_str(&content).map_err(|e| e.with_subject(path.display().to_string()))
}

/// Load every `*.yaml` / `*.yml` puzzle in `dir`, sorted by file name
pub fn load_puzzle_dir(dir: &Path) -> Result<Vec<Puzzle>> {
    let entries = fs::read_dir(dir)
        .map_err(|e| io_error("load_puzzle_dir", e).with_subject(dir.display().to_string()))?;

    let mut paths: Vec<PathBuf> = Vec::new();
    for entry in entries {
        let path = entry
            .map_err(|e| io_error("load_puzzle_dir", e).with_subject(dir.display().to_string()))?
            .path();
        let is_yaml = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext == "yaml" || ext == "yml");
        if is_yaml && path.is_file() {
            paths.push(path);
        }
    }
    paths.sort();

    tracing::debug!(dir = %dir.display(), files = paths.len(), "loading puzzle directory");
    paths.iter().map(|path| load_puzzle_file(path)).collect()
}

/// Parse a puzzle from a string
pub fn parse_puzzle_str(content: &str) -> Result<Puzzle> {
    let raw: PuzzleV0 = serde_yaml::from_str(content)
        .map_err(|e| puzzle_invalid(&format!("YAML parse error: {}", e)))?;

    validate_header(&raw)?;
    build_puzzle(&raw)
}

fn validate_header(raw: &PuzzleV0) -> Result<()> {
    if raw.schema_version != 0 {
        return Err(puzzle_invalid(&format!(
            "Unsupported schema_version: {}. Expected 0",
            raw.schema_version
        )));
    }
    if raw.characters.is_empty() {
        return Err(puzzle_invalid("Puzzle declares no characters"));
    }

    let mut seen = BTreeSet::new();
    for name in &raw.characters {
        if name.trim().is_empty() {
            return Err(puzzle_invalid("Character names cannot be empty"));
        }
        // Role symbols are written quoted, so the name cannot contain a quote.
        if name.contains('"') {
            return Err(puzzle_invalid(&format!(
                "Character name {} cannot contain `\"`",
                name
            )));
        }
        if !seen.insert(name.as_str()) {
            return Err(puzzle_invalid(&format!("Duplicate character {}", name)));
        }
    }
    Ok(())
}

fn build_puzzle(raw: &PuzzleV0) -> Result<Puzzle> {
    let names: Vec<&str> = raw.characters.iter().map(String::as_str).collect();
    let mut puzzle = Puzzle::with_characters(raw.title.clone(), &names).map_err(puzzle_rejected)?;

    let roles: BTreeSet<String> = names
        .iter()
        .flat_map(|name| [knight_symbol(name), knave_symbol(name)])
        .collect();

    for (index, statement) in raw.statements.iter().enumerate() {
        add_statement(&mut puzzle, &roles, index, statement)?;
    }
    for (index, fact) in raw.facts.iter().enumerate() {
        let sentence = parse_formula(&roles, fact, &format!("facts[{}]", index))?;
        puzzle.fact(sentence).map_err(puzzle_rejected)?;
    }

    Ok(puzzle)
}

fn add_statement(
    puzzle: &mut Puzzle,
    roles: &BTreeSet<String>,
    index: usize,
    statement: &StatementV0,
) -> Result<()> {
    let location = format!("statements[{}]", index);
    match (&statement.says, &statement.one_of) {
        (Some(text), None) => {
            let sentence = parse_formula(roles, text, &location)?;
            puzzle
                .says(&statement.speaker, sentence)
                .map_err(puzzle_rejected)
        }
        (None, Some(alternatives)) => {
            let sentences = alternatives
                .iter()
                .map(|text| parse_formula(roles, text, &location))
                .collect::<Result<Vec<_>>>()?;
            puzzle
                .says_one_of(&statement.speaker, sentences)
                .map_err(puzzle_rejected)
        }
        _ => Err(puzzle_invalid(&format!(
            "{}: exactly one of `says` and `one_of` is required",
            location
        ))),
    }
}

/// Parse a formula and check it only mentions declared characters' roles.
fn parse_formula(roles: &BTreeSet<String>, text: &str, location: &str) -> Result<Sentence> {
    let sentence = logic::parse(text).map_err(|e| {
        puzzle_invalid(&format!("{}: formula `{}` does not parse", location, text))
            .with_source(e.into())
    })?;

    if let Some(unknown) = sentence.symbols().into_iter().find(|s| !roles.contains(s)) {
        return Err(puzzle_invalid(&format!(
            "{}: symbol `{}` is not a role of a declared character",
            location, unknown
        )));
    }
    Ok(sentence)
}

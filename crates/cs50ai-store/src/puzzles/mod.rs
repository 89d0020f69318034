//! Knights and knaves puzzle files
//!
//! Provides:
//! - Puzzle Format v0 schema
//! - YAML parser that validates and builds core puzzles
//! - Directory loading

pub mod format_v0;
pub mod parser;

pub use format_v0::{PuzzleV0, StatementV0};
pub use parser::{load_puzzle_dir, load_puzzle_file, parse_puzzle_str};

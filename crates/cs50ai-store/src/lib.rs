//! cs50ai store - on-disk formats
//!
//! Provides:
//! - Puzzle format v0: knights and knaves puzzles as YAML
//! - Puzzle loading from a file, a directory or a string
//! - TOML configuration with validation

pub mod config;
pub mod errors;
pub mod puzzles;

// Re-export key types
pub use config::{load_config, Config};
pub use errors::Result;
pub use puzzles::{load_puzzle_dir, load_puzzle_file, parse_puzzle_str};

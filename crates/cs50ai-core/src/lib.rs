//! cs50ai core - search and knowledge-based game players
//!
//! This crate holds the pure algorithms:
//! - Tic-tac-toe rules and an optimal minimax player
//! - Propositional logic with model checking and a text syntax
//! - Knights and knaves puzzles solved by entailment
//! - Minesweeper with an inference-driven player
//!
//! Nothing here touches the filesystem. Loading puzzles and configuration
//! lives in `cs50ai-store`, command orchestration in `cs50ai-engine`.

pub mod errors;
pub mod knights;
pub mod logging_facility;
pub mod logic;
pub mod minesweeper;
pub mod rng;
pub mod tictactoe;

// Re-export commonly used types
pub use errors::{AiError, ExError, ExErrorKind, Result};
pub use logic::Sentence;
pub use rng::SimpleRng;

//! Command orchestration layer.
//!
//! ## Logging Ownership
//!
//! Each command owns lifecycle logging for its run:
//! - `log_op_start!` at entry
//! - `log_op_end!` on success
//! - `log_op_error!` on failure
//!
//! Lower layers (store, core) use only `tracing::debug!()` for internal details.

pub mod engine_command;
pub mod knights;
pub mod logic;
pub mod minesweeper;
pub mod tictactoe;

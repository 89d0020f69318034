//! cs50ai Engine - Orchestration layer
//!
//! Provides high-level commands that coordinate the core algorithms with the
//! store's file formats, wrap every run in lifecycle logging, and return
//! serialisable results.

pub mod commands;

pub use commands::engine_command::{apply_engine_command, EngineCommand, EngineCommandResult};

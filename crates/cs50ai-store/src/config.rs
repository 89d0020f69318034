//! TOML configuration
//!
//! ```toml
//! [logging]
//! profile = "development"
//!
//! [minesweeper]
//! height = 8
//! width = 8
//! mines = 8
//! seed = 42
//!
//! [knights]
//! puzzle_dir = "puzzles"
//! ```
//!
//! Every section and key is optional. Unknown keys are rejected.

use std::fs;
use std::path::{Path, PathBuf};

use cs50ai_core::logging_facility::Profile;
use cs50ai_core::minesweeper::{board_cells, MAX_CELLS};
use serde::{Deserialize, Serialize};

use crate::errors::{config_invalid, io_error, Result};

/// File picked up from the working directory when no path is given
pub const DEFAULT_CONFIG_FILE: &str = "cs50ai.toml";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub logging: LoggingConfig,
    pub minesweeper: MinesweeperConfig,
    pub knights: KnightsConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingConfig {
    /// `development` or `production`; no logging when absent
    pub profile: Option<String>,
}

impl LoggingConfig {
    /// The configured profile, if any. Only valid after `Config::validate`.
    pub fn profile(&self) -> Option<Profile> {
        self.profile.as_deref().and_then(Profile::from_name)
    }
}

/// Board settings for minesweeper games
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MinesweeperConfig {
    pub height: usize,
    pub width: usize,
    pub mines: usize,
    /// Fixed seed for reproducible games
    pub seed: Option<u64>,
}

impl Default for MinesweeperConfig {
    fn default() -> Self {
        Self {
            height: 8,
            width: 8,
            mines: 8,
            seed: None,
        }
    }
}

impl MinesweeperConfig {
    /// Check that the board can hold the mines.
    pub fn validate(&self) -> Result<()> {
        let Some(cells) = board_cells(self.height, self.width) else {
            return Err(config_invalid(&format!(
                "minesweeper board must be between 1 and {} cells, got {}x{}",
                MAX_CELLS, self.height, self.width
            )));
        };
        if self.mines > cells {
            return Err(config_invalid(&format!(
                "{} mines do not fit on a {}x{} board",
                self.mines, self.height, self.width
            )));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct KnightsConfig {
    /// Directory of puzzle files solved instead of the built-in puzzles
    pub puzzle_dir: Option<PathBuf>,
}

impl Config {
    pub fn validate(&self) -> Result<()> {
        if let Some(name) = &self.logging.profile {
            if Profile::from_name(name).is_none() {
                return Err(config_invalid(&format!(
                    "unknown logging profile `{}`",
                    name
                )));
            }
        }
        self.minesweeper.validate()
    }
}

/// Parse and validate configuration text
pub fn parse_config_str(content: &str) -> Result<Config> {
    let config: Config = toml::from_str(content)
        .map_err(|e| config_invalid(&format!("TOML parse error: {}", e)))?;
    config.validate()?;
    Ok(config)
}

/// Load and validate a configuration file
pub fn load_config_file(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)
        .map_err(|e| io_error("config_load", e).with_subject(path.display().to_string()))?;
    parse_config_str(&content).map_err(|e| e.with_subject(path.display().to_string()))
}

/// Resolve the configuration for a run.
///
/// An explicit path must exist. Without one, `cs50ai.toml` in the working
/// directory is used when present, defaults otherwise.
pub fn load_config(explicit: Option<&Path>) -> Result<Config> {
    match explicit {
        Some(path) => load_config_file(path),
        None => {
            let fallback = Path::new(DEFAULT_CONFIG_FILE);
            if fallback.is_file() {
                tracing::debug!(path = DEFAULT_CONFIG_FILE, "using working directory config");
                load_config_file(fallback)
            } else {
                Ok(Config::default())
            }
        }
    }
}

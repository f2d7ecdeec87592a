//! Scoreboard configuration.
//!
//! Defaults, then an optional JSON file named by `HOCKEY_SCOREBOARD_CONFIG`.
//! The CLI applies its own flags on top.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::{MatchError, Result};

pub const CONFIG_PATH_ENV: &str = "HOCKEY_SCOREBOARD_CONFIG";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScoreboardConfig {
    /// Record `=== Start of Q1 ===` when the match is created.
    pub log_match_start: bool,
    /// Record `=== Start of Q<n> ===` after each non-final quarter break.
    pub log_quarter_start: bool,
}

impl Default for ScoreboardConfig {
    fn default() -> Self {
        Self { log_match_start: false, log_quarter_start: true }
    }
}

impl ScoreboardConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            MatchError::Config(format!("Failed to read config file '{}': {e}", path.display()))
        })?;

        Self::from_json(&content).map_err(|e| {
            MatchError::Config(format!("Failed to parse config file '{}': {e}", path.display()))
        })
    }

    /// Resolve from the value of [`CONFIG_PATH_ENV`]; unset or blank yields defaults.
    pub fn from_env_value(value: Option<&str>) -> Result<Self> {
        let Some(path) = value.map(str::trim).filter(|p| !p.is_empty()) else {
            return Ok(Self::default());
        };

        let config = Self::load_from_path(Path::new(path))?;
        tracing::debug!(path, ?config, "loaded scoreboard config");
        Ok(config)
    }
}

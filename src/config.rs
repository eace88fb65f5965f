//! TOML-based user configuration.
//!
//! Stored at `~/.config/eventplan/config.toml` on Linux. The
//! `EVENTPLAN_CONFIG` environment variable overrides the path. A missing
//! file means defaults.

use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{PlanError, Result};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Directory holding `timelines.json`. Defaults to the XDG data dir.
    #[serde(default)]
    pub data_dir: Option<PathBuf>,
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,
    /// Reject unknown answer labels instead of ignoring them.
    #[serde(default)]
    pub strict_answers: bool,
    /// Show completed tasks by default in `show` and the TUI.
    #[serde(default)]
    pub show_completed: bool,
}

fn default_currency_symbol() -> String {
    "$".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: None,
            currency_symbol: default_currency_symbol(),
            strict_answers: false,
            show_completed: false,
        }
    }
}

impl Config {
    pub fn format_cost(&self, amount: f64) -> String {
        format!("{}{:.2}", self.currency_symbol, amount)
    }
}

pub fn config_path() -> PathBuf {
    std::env::var("EVENTPLAN_CONFIG").map(PathBuf::from).unwrap_or_else(|_| {
        let mut p = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        p.push("eventplan");
        p.push("config.toml");
        p
    })
}

/// Loads the config file, falling back to defaults when it does not exist.
pub fn load_config() -> Result<Config> {
    let path = config_path();
    if !path.exists() {
        tracing::debug!(path = %path.display(), "no config file, using defaults");
        return Ok(Config::default());
    }
    let raw = fs::read_to_string(&path)?;
    toml::from_str(&raw).map_err(|source| PlanError::Config { path, source })
}

// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! CLI configuration.
//!
//! Configuration is stored in `<state dir>/config.toml` and includes:
//! - `backend`: where freshness state is kept (`file` or `sqlite`)
//! - `path`: optional override for the storage file
//! - `cleanup_on_start`: evict expired records whenever the state is opened
//! - `log_level`: default log filter when `MRF_LOG` is unset
//!
//! A missing file means all defaults.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::env;
use crate::error::{Error, Result};

const STATE_DIR_NAME: &str = "mrfresh";
const CONFIG_FILE_NAME: &str = "config.toml";
const FILE_STORE_NAME: &str = "store.json";
const SQLITE_STORE_NAME: &str = "store.db";

/// Storage backend for the freshness state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Backend {
    /// JSON document on disk.
    #[default]
    File,
    /// SQLite database.
    Sqlite,
}

/// Configuration stored in `config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub backend: Backend,
    /// Storage file (relative to the state directory or absolute).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(default = "default_cleanup_on_start")]
    pub cleanup_on_start: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_level: Option<String>,
}

fn default_cleanup_on_start() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Config {
            backend: Backend::default(),
            path: None,
            cleanup_on_start: default_cleanup_on_start(),
            log_level: None,
        }
    }
}

impl Config {
    /// Loads configuration from the given state directory.
    ///
    /// Returns the defaults if no config file exists.
    pub fn load(state_dir: &Path) -> Result<Self> {
        let config_path = state_dir.join(CONFIG_FILE_NAME);
        if !config_path.exists() {
            return Ok(Config::default());
        }
        let content = fs::read_to_string(&config_path)
            .map_err(|e| Error::Config(format!("failed to read config: {}", e)))?;
        let config: Config = toml::from_str(&content)
            .map_err(|e| Error::Config(format!("failed to parse config: {}", e)))?;
        Ok(config)
    }

    /// Saves configuration to the given state directory.
    pub fn save(&self, state_dir: &Path) -> Result<()> {
        fs::create_dir_all(state_dir)?;
        let config_path = state_dir.join(CONFIG_FILE_NAME);
        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("failed to serialize config: {}", e)))?;
        fs::write(&config_path, content)?;
        Ok(())
    }

    /// Path of the storage file for the configured backend.
    pub fn store_path(&self, state_dir: &Path) -> PathBuf {
        match &self.path {
            Some(path) => {
                let path = PathBuf::from(path);
                if path.is_absolute() {
                    path
                } else {
                    state_dir.join(path)
                }
            }
            None => match self.backend {
                Backend::File => state_dir.join(FILE_STORE_NAME),
                Backend::Sqlite => state_dir.join(SQLITE_STORE_NAME),
            },
        }
    }
}

/// Resolves the state directory.
///
/// Resolution order:
/// 1. Explicit `--state-dir`
/// 2. `MRF_STATE_DIR`
/// 3. `$XDG_STATE_HOME/mrfresh`
/// 4. `~/.local/state/mrfresh`
pub fn resolve_state_dir(explicit: Option<&Path>) -> PathBuf {
    if let Some(dir) = explicit {
        return dir.to_path_buf();
    }
    if let Some(dir) = env::state_dir() {
        return dir;
    }
    if let Some(dir) = env::xdg_state_home() {
        return dir.join(STATE_DIR_NAME);
    }
    dirs::home_dir()
        .map(|h| h.join(".local/state").join(STATE_DIR_NAME))
        .unwrap_or_else(|| PathBuf::from(".local/state").join(STATE_DIR_NAME))
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;

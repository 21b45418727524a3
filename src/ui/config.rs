//! # Configuration Persistence
//!
//! User configuration stored in `~/.config/jobscout/config.json`.
//!
//! ## Overview
//!
//! [`Config`] is serialized to / deserialized from a JSON file in the user's
//! XDG config directory. Command-line flags override whatever is loaded here;
//! only the theme is written back (when it is changed from inside the TUI).
//!
//! ```json
//! {
//!   "theme": "Catppuccin Mocha",
//!   "server_url": "http://127.0.0.1:8000",
//!   "default_num_jobs": 20,
//!   "default_location": "Berlin",
//!   "request_timeout_secs": 30
//! }
//! ```

use crate::ui::form::DEFAULT_NUM_JOBS;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:8000";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Name of the selected theme (must match a built-in theme name).
    #[serde(default = "default_theme_name")]
    pub theme: String,

    /// Base URL of the job search backend.
    #[serde(default = "default_server_url")]
    pub server_url: String,

    #[serde(default = "default_num_jobs")]
    pub default_num_jobs: u32,

    /// Prefilled into the location field.
    #[serde(default)]
    pub default_location: String,

    /// Per-request timeout. Unset leaves requests to the transport.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_timeout_secs: Option<u64>,
}

fn default_theme_name() -> String {
    "Catppuccin Mocha".to_string()
}

fn default_server_url() -> String {
    DEFAULT_SERVER_URL.to_string()
}

fn default_num_jobs() -> u32 {
    DEFAULT_NUM_JOBS
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: default_theme_name(),
            server_url: default_server_url(),
            default_num_jobs: default_num_jobs(),
            default_location: String::new(),
            request_timeout_secs: None,
        }
    }
}

impl Config {
    /// Load configuration from disk. Returns `Config::default()` if the file
    /// does not exist or cannot be parsed.
    pub fn load() -> Self {
        match Self::try_load() {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!(error = %e, "falling back to default config");
                Self::default()
            }
        }
    }

    fn try_load() -> Result<Self> {
        let path = Self::config_path()?;
        Self::load_from(&path)
    }

    /// Load configuration from a specific path. Returns `Config::default()` if
    /// the file does not exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config: Self = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;
        self.save_to(&path)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let contents = serde_json::to_string_pretty(self).context("Failed to serialize config")?;
        fs::write(path, contents)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs
            .filter(|secs| *secs > 0)
            .map(Duration::from_secs)
    }

    fn config_path() -> Result<PathBuf> {
        let dirs = directories::ProjectDirs::from("", "", "jobscout")
            .context("Could not determine config directory")?;
        Ok(dirs.config_dir().join("config.json"))
    }
}

/// Default location of the log file: `<data dir>/jobscout.log`.
pub fn default_log_path() -> Result<PathBuf> {
    let dirs = directories::ProjectDirs::from("", "", "jobscout")
        .context("Could not determine data directory")?;
    Ok(dirs.data_dir().join("jobscout.log"))
}

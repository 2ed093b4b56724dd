//! Configuration management.
//!
//! Settings are stored as pretty-printed JSON in the per-user application
//! data directory. Every section is optional so a missing or empty file
//! still yields a working default configuration.
//!
//! The log file location is resolved once per command, in this order:
//!
//! 1. The `STINT_LOG` environment variable (also honored from `.env`)
//! 2. The `log.path` configuration value
//! 3. `log.txt` inside the per-user data directory
//!
//! The resolved path is handed to [`crate::store::log::Log`] explicitly;
//! nothing below the command layer consults the environment.

use crate::libs::data_storage::DataStorage;
use crate::libs::messages::Message;
use crate::msg_print;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs::{self, File};
use std::path::PathBuf;

pub const CONFIG_FILE_NAME: &str = "config.json";
pub const LOG_FILE_NAME: &str = "log.txt";

/// Environment variable overriding the log file location.
pub const LOG_ENV_VAR: &str = "STINT_LOG";

/// Log storage settings.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct LogConfig {
    /// Absolute path of the entry log file.
    pub path: PathBuf,
}

/// Root configuration object.
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct Config {
    /// Log storage overrides; `None` uses the per-user default location.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log: Option<LogConfig>,
}

impl Config {
    /// Loads the configuration, falling back to defaults if no file exists.
    pub fn read() -> Result<Config> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        if !config_file_path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(config_file_path)?;
        let config: Config = serde_json::from_str(&config_str)?;
        Ok(config)
    }

    /// Saves the configuration as pretty-printed JSON.
    pub fn save(&self) -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        let config_file = File::create(config_file_path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Runs the interactive configuration setup.
    ///
    /// Prompts are pre-filled with the current values so re-running the
    /// wizard only changes what the user actually edits. Leaving the log
    /// path blank keeps the per-user default location.
    pub fn init() -> Result<Self> {
        let mut config = Self::read().unwrap_or_default();

        msg_print!(Message::ConfigModuleLog);

        let current = config
            .log
            .as_ref()
            .map(|log| log.path.display().to_string())
            .unwrap_or_default();
        let path: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptLogPath.to_string())
            .default(current)
            .allow_empty(true)
            .interact_text()?;

        config.log = if path.trim().is_empty() {
            None
        } else {
            Some(LogConfig {
                path: PathBuf::from(path.trim()),
            })
        };

        Ok(config)
    }

    /// Resolves the log file path for this invocation.
    pub fn log_path(&self) -> Result<PathBuf> {
        if let Ok(path) = env::var(LOG_ENV_VAR) {
            if !path.is_empty() {
                return Ok(PathBuf::from(path));
            }
        }

        if let Some(log) = &self.log {
            return Ok(log.path.clone());
        }

        DataStorage::new().get_path(LOG_FILE_NAME)
    }
}

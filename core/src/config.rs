// SPDX-FileCopyrightText: 2025-2026 Fearefull <todoreminder@fearefull.com>
//
// SPDX-License-Identifier: Apache-2.0

use std::path::{Path, PathBuf};

use crate::{Alarm, AlarmTitleType, Error, Repeat};

/// The name of the application.
pub const APP_NAME: &str = "todoreminder";

const DB_FILENAME: &str = "todoreminder.db";

/// Configuration for the reminder core.
#[derive(Debug, Clone, Default, serde::Deserialize)]
pub struct Config {
    /// Directory for storing application state.
    #[serde(default)]
    pub state_dir: Option<PathBuf>,

    /// Ringtone given to new alarms.
    #[serde(default)]
    pub default_ringtone: String,

    /// Title type given to new alarms.
    #[serde(default)]
    pub default_title_type: AlarmTitleType,

    /// Repeat page new alarms open on.
    #[serde(default)]
    pub default_repeat: Repeat,
}

impl Config {
    /// Normalize the configuration.
    pub fn normalize(&mut self) -> Result<(), Error> {
        match &self.state_dir {
            Some(a) => {
                self.state_dir = Some(expand_path(a).map_err(|e| {
                    Error::Config(format!("Failed to expand state directory path: {e}"))
                })?)
            }

            None => match get_state_dir() {
                Ok(a) => self.state_dir = Some(a.join(APP_NAME)),
                Err(e) => tracing::warn!("Failed to get state directory: {e}"),
            },
        };

        Ok(())
    }

    /// Path of the SQLite database, `None` for an in-memory database.
    pub fn db_path(&self) -> Option<PathBuf> {
        self.state_dir.as_ref().map(|a| a.join(DB_FILENAME))
    }

    /// A new alarm filled with the configured defaults.
    pub fn default_alarm(&self) -> Alarm {
        let mut alarm = Alarm {
            ringtone: self.default_ringtone.clone(),
            default_repeat: self.default_repeat,
            ..Default::default()
        };
        alarm.set_title_type(self.default_title_type);
        alarm
    }
}

/// Handle tilde (~) and environment variables in the path
fn expand_path(path: &Path) -> Result<PathBuf, Error> {
    if path.is_absolute() {
        return Ok(path.to_owned());
    }

    let path = path
        .to_str()
        .ok_or_else(|| Error::Config("Invalid path".to_string()))?;

    // Handle tilde and home directory
    let home_prefixes: &[&str] = if cfg!(unix) {
        &["~/", "$HOME/", "${HOME}/"]
    } else {
        &[r"~\", "~/", r"%UserProfile%\", r"%UserProfile%/"]
    };
    for prefix in home_prefixes {
        if let Some(stripped) = path.strip_prefix(prefix) {
            return Ok(get_home_dir()?.join(stripped));
        }
    }

    // Handle config directories
    let config_prefixes: &[&str] = if cfg!(unix) {
        &["$XDG_CONFIG_HOME/", "${XDG_CONFIG_HOME}/"]
    } else {
        &[r"%LOCALAPPDATA%\", "%LOCALAPPDATA%/"]
    };
    for prefix in config_prefixes {
        if let Some(stripped) = path.strip_prefix(prefix) {
            return Ok(get_config_dir()?.join(stripped));
        }
    }

    Ok(path.into())
}

fn get_home_dir() -> Result<PathBuf, Error> {
    dirs::home_dir().ok_or_else(|| Error::Config("User-specific home directory not found".into()))
}

fn get_config_dir() -> Result<PathBuf, Error> {
    #[cfg(unix)]
    let config_dir = xdg::BaseDirectories::new().get_config_home();
    #[cfg(windows)]
    let config_dir = dirs::config_dir();
    config_dir.ok_or_else(|| Error::Config("User-specific config directory not found".into()))
}

fn get_state_dir() -> Result<PathBuf, Error> {
    #[cfg(unix)]
    let state_dir = xdg::BaseDirectories::new().get_state_home();
    #[cfg(windows)]
    let state_dir = dirs::data_dir();
    state_dir.ok_or_else(|| Error::Config("User-specific state directory not found".into()))
}

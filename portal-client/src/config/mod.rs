//! Configuration persistence
//!
//! Settings are stored as `config.json` in the platform config directory.
//! The key-value storage and the signed-in profile default to sibling files.

mod settings;

use std::fs;
#[cfg(unix)]
use std::path::Path;
use std::path::PathBuf;

pub use settings::Settings;

use crate::constants::{APP_DIR_NAME, CONFIG_FILE_NAME, PROFILE_FILE_NAME, STORAGE_FILE_NAME};
use crate::i18n::{t, t_args};

/// File permissions for the config file on Unix (owner read/write only)
#[cfg(unix)]
const CONFIG_FILE_MODE: u32 = 0o600;

/// Application configuration
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
pub struct Config {
    #[serde(default)]
    pub settings: Settings,
}

impl Config {
    /// Directory holding all portal files
    pub fn config_dir() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(APP_DIR_NAME))
    }

    /// Get the platform-specific config file path
    ///
    /// Returns None if the config directory cannot be determined.
    pub fn config_path() -> Option<PathBuf> {
        Self::config_dir().map(|dir| dir.join(CONFIG_FILE_NAME))
    }

    /// Load config from disk, or return defaults
    ///
    /// Returns defaults if:
    /// - Config directory cannot be determined
    /// - Config file doesn't exist
    /// - Config file cannot be read
    /// - Config file contains invalid JSON
    pub fn load() -> Self {
        let Some(path) = Self::config_path() else {
            return Self::default();
        };
        if !path.exists() {
            return Self::default();
        }

        match fs::read_to_string(&path).map(|contents| serde_json::from_str::<Config>(&contents)) {
            Ok(Ok(config)) => config,
            Ok(Err(e)) => {
                tracing::warn!(path = %path.display(), error = %e, "Config file is malformed, using defaults");
                Self::default()
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "Could not read config file");
                Self::default()
            }
        }
    }

    /// Whether a config file has been written before
    pub fn exists() -> bool {
        Self::config_path().is_some_and(|path| path.exists())
    }

    /// Save config to disk
    ///
    /// Creates the config directory if it doesn't exist.
    /// On Unix systems, sets file permissions to 0o600.
    pub fn save(&self) -> Result<(), String> {
        let path = Self::config_path().ok_or_else(|| t("config-save-no-config-dir"))?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                t_args("config-save-create-dir-failed", &[("error", &e.to_string())])
            })?;
        }

        let json = serde_json::to_string_pretty(self).map_err(|e| {
            t_args("config-save-serialize-failed", &[("error", &e.to_string())])
        })?;

        fs::write(&path, json)
            .map_err(|e| t_args("config-save-write-failed", &[("error", &e.to_string())]))?;

        #[cfg(unix)]
        Self::set_config_permissions(&path)?;

        Ok(())
    }

    /// Location of the key-value storage file
    pub fn storage_path(&self) -> Option<PathBuf> {
        match &self.settings.storage_path {
            Some(path) => Some(PathBuf::from(path)),
            None => Self::config_dir().map(|dir| dir.join(STORAGE_FILE_NAME)),
        }
    }

    /// Location of the signed-in profile file
    pub fn profile_path(&self) -> Option<PathBuf> {
        match &self.settings.profile_path {
            Some(path) => Some(PathBuf::from(path)),
            None => Self::config_dir().map(|dir| dir.join(PROFILE_FILE_NAME)),
        }
    }

    #[cfg(unix)]
    fn set_config_permissions(path: &Path) -> Result<(), String> {
        use std::os::unix::fs::PermissionsExt;

        let perms = fs::Permissions::from_mode(CONFIG_FILE_MODE);
        fs::set_permissions(path, perms)
            .map_err(|e| t_args("config-save-write-failed", &[("error", &e.to_string())]))
    }
}

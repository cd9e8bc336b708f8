//! User preference settings

use crate::logging::DEFAULT_LOG_FILTER;
use crate::style::{WINDOW_HEIGHT, WINDOW_WIDTH};

/// User preferences for the application
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct Settings {
    /// UI locale ("ru", "en"); system locale when not set
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,

    /// Tracing filter directive (overridden by `RUST_LOG`)
    #[serde(default = "default_log_filter")]
    pub log_filter: String,

    /// Location of the key-value storage file
    /// Defaults to `storage.json` in the config directory if not set
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub storage_path: Option<String>,

    /// Location of the signed-in profile
    /// Defaults to `profile.json` in the config directory if not set
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_path: Option<String>,

    /// Use the dark theme
    #[serde(default)]
    pub dark_theme: bool,

    /// Window width in pixels
    #[serde(default = "default_window_width")]
    pub window_width: f32,

    /// Window height in pixels
    #[serde(default = "default_window_height")]
    pub window_height: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            locale: None,
            log_filter: default_log_filter(),
            storage_path: None,
            profile_path: None,
            dark_theme: false,
            window_width: default_window_width(),
            window_height: default_window_height(),
        }
    }
}

// =============================================================================
// Default Functions (for serde)
// =============================================================================

fn default_log_filter() -> String {
    DEFAULT_LOG_FILTER.to_string()
}

fn default_window_width() -> f32 {
    WINDOW_WIDTH
}

fn default_window_height() -> f32 {
    WINDOW_HEIGHT
}

// =============================================================================
// Tests
// =============================================================================

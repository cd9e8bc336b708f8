//! Application-wide constants
//!
//! Shared constants used across multiple modules.

use std::time::Duration;

/// Application directory name (used in config directory path)
pub const APP_DIR_NAME: &str = "portal";

/// Config file name
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Key-value storage file name
pub const STORAGE_FILE_NAME: &str = "storage.json";

/// Signed-in profile file name (read by the local auth provider)
pub const PROFILE_FILE_NAME: &str = "profile.json";

/// Storage key holding the report form definitions
pub const REPORT_FORMS_KEY: &str = "report_forms";

/// Storage key holding the request (application) form definitions
pub const REQUEST_FORMS_KEY: &str = "request_forms";

/// Upper bound for a profile fetch before the session is ended
pub const PROFILE_TIMEOUT: Duration = Duration::from_secs(10);

/// URI scheme for direct navigation links
pub const URI_SCHEME: &str = "portal";

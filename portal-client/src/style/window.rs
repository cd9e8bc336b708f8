//! Window constants for application dimensions

// ============================================================================
// Window Dimensions
// ============================================================================

/// Default window width
pub const WINDOW_WIDTH: f32 = 1100.0;

/// Default window height
pub const WINDOW_HEIGHT: f32 = 700.0;

/// Minimum window width
pub const WINDOW_WIDTH_MIN: f32 = 720.0;

/// Minimum window height
pub const WINDOW_HEIGHT_MIN: f32 = 480.0;

/// Linux application id (matches the desktop file)
pub const APPLICATION_ID: &str = "portal";

//! Layout constants (sizes, padding, spacing)

// ============================================================================
// Padding
// ============================================================================

/// Padding around the content pane
pub const CONTENT_PADDING: f32 = 24.0;

/// Padding inside the sidebar panel
pub const SIDEBAR_PADDING: f32 = 12.0;

/// Padding inside nav buttons
pub const NAV_BUTTON_PADDING: iced::Padding = iced::Padding {
    top: 6.0,
    right: 10.0,
    bottom: 6.0,
    left: 10.0,
};

/// Padding inside regular buttons
pub const BUTTON_PADDING: f32 = 8.0;

/// Padding inside a form table row
pub const ROW_PADDING: f32 = 6.0;

// ============================================================================
// Spacing
// ============================================================================

/// Standard spacing between elements
pub const ELEMENT_SPACING: f32 = 10.0;

/// Tight spacing (nav entries, role toggles)
pub const SMALL_SPACING: f32 = 4.0;

/// Space above a sidebar section header
pub const SECTION_SPACING: f32 = 14.0;

// ============================================================================
// Sizes
// ============================================================================

/// Sidebar width
pub const SIDEBAR_WIDTH: f32 = 240.0;

/// Content pane heading size
pub const TITLE_SIZE: f32 = 22.0;

/// Sidebar section header size
pub const SECTION_HEADER_SIZE: f32 = 12.0;

/// Body text size
pub const TEXT_SIZE: f32 = 14.0;

/// Centered placeholder text size (loading, denied, empty)
pub const PLACEHOLDER_SIZE: f32 = 16.0;

/// Nav entry icon column width
pub const NAV_ICON_WIDTH: f32 = 22.0;

/// Sidebar border width
pub const BORDER_WIDTH: f32 = 1.0;

//! Widget style functions
//!
//! All styles derive from Iced's theme palette so both light and dark themes
//! work without extra colors.

use iced::widget::{button, container, text};
use iced::{Background, Border, Color, Theme};

use super::BORDER_WIDTH;

// ============================================================================
// Colors
// ============================================================================

fn muted_text_color(theme: &Theme) -> Color {
    theme.extended_palette().background.strong.color
}

fn sidebar_background(theme: &Theme) -> Color {
    theme.extended_palette().background.weak.color
}

fn sidebar_border(theme: &Theme) -> Color {
    theme.extended_palette().background.strong.color
}

// ============================================================================
// Button Styles
// ============================================================================

/// Sidebar nav entry - primary background when its group is active
pub fn nav_button_style(is_active: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme, status| {
        let ext = theme.extended_palette();
        if is_active {
            return button::Style {
                background: Some(Background::Color(ext.primary.strong.color)),
                text_color: ext.primary.strong.text,
                border: Border {
                    radius: 4.0.into(),
                    ..Default::default()
                },
                ..Default::default()
            };
        }
        button::Style {
            background: match status {
                button::Status::Hovered => Some(Background::Color(ext.background.strong.color)),
                _ => None,
            },
            text_color: ext.background.weak.text,
            border: Border {
                radius: 4.0.into(),
                ..Default::default()
            },
            ..Default::default()
        }
    }
}

/// Role toggle - filled when the role is held
pub fn role_toggle_style(is_held: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme, status| {
        if is_held {
            button::primary(theme, status)
        } else {
            button::secondary(theme, status)
        }
    }
}

/// Delete button - transparent with danger color
pub fn danger_text_button_style(theme: &Theme, status: button::Status) -> button::Style {
    let danger = theme.palette().danger;
    button::Style {
        background: match status {
            button::Status::Hovered => Some(Background::Color(Color {
                a: 0.15,
                ..danger
            })),
            _ => None,
        },
        text_color: danger,
        ..Default::default()
    }
}

// ============================================================================
// Container Styles
// ============================================================================

/// Content pane background
pub fn content_background_style(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(theme.palette().background)),
        ..Default::default()
    }
}

/// Sidebar panel background with right border
pub fn sidebar_panel_style(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(sidebar_background(theme))),
        border: Border {
            color: sidebar_border(theme),
            width: BORDER_WIDTH,
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Alternating form table row
pub fn alternating_row_style(is_even: bool) -> impl Fn(&Theme) -> container::Style {
    move |theme| {
        if is_even {
            container::Style {
                background: Some(Background::Color(theme.extended_palette().background.weak.color)),
                ..Default::default()
            }
        } else {
            container::Style::default()
        }
    }
}

// ============================================================================
// Text Styles
// ============================================================================

/// Secondary text (section headers, placeholders, hints)
pub fn muted_text_style(theme: &Theme) -> text::Style {
    text::Style {
        color: Some(muted_text_color(theme)),
    }
}

/// Status line for failed operations
pub fn error_text_style(theme: &Theme) -> text::Style {
    text::Style {
        color: Some(theme.palette().danger),
    }
}

//! Main application layout

use iced::widget::{column, container, row, text};
use iced::{Element, Fill};

use super::content::content_view;
use super::sidebar::sidebar_panel;
use crate::router::NavItem;
use crate::style::{CONTENT_PADDING, ELEMENT_SPACING, TEXT_SIZE, content_background_style, error_text_style};
use crate::types::{Content, Message};

/// Sidebar on the left, content pane filling the rest
///
/// `status` is the last failed operation, shown above the content.
pub fn main_layout(
    sidebar: Vec<NavItem>,
    content: Content,
    status: Option<&str>,
) -> Element<'static, Message> {
    let mut pane = column![].spacing(ELEMENT_SPACING).width(Fill).height(Fill);
    if let Some(status) = status {
        pane = pane.push(text(status.to_string()).size(TEXT_SIZE).style(error_text_style));
    }
    pane = pane.push(content_view(content));

    let pane = container(pane)
        .width(Fill)
        .height(Fill)
        .padding(CONTENT_PADDING)
        .style(content_background_style);

    if sidebar.is_empty() {
        return pane.into();
    }

    row![sidebar_panel(sidebar), pane].height(Fill).into()
}

//! Sidebar panel

use iced::widget::{Column, Space, button, container, row, scrollable, text};
use iced::{Center, Element, Fill};

use crate::router::{NavAction, NavEntry, NavItem};
use crate::style::{
    NAV_BUTTON_PADDING, NAV_ICON_WIDTH, SECTION_HEADER_SIZE, SECTION_SPACING, SIDEBAR_PADDING,
    SIDEBAR_WIDTH, SMALL_SPACING, TEXT_SIZE, muted_text_style, nav_button_style,
    sidebar_panel_style,
};
use crate::types::Message;

fn nav_button(entry: NavEntry) -> Element<'static, Message> {
    let message = match entry.action {
        NavAction::Open(view) => Message::Navigate(view),
        NavAction::SignOut => Message::SignOut,
    };

    let label = row![
        text(entry.icon).size(TEXT_SIZE).width(NAV_ICON_WIDTH),
        text(entry.label).size(TEXT_SIZE),
    ]
    .align_y(Center);

    button(label)
        .width(Fill)
        .padding(NAV_BUTTON_PADDING)
        .style(nav_button_style(entry.is_active))
        .on_press(message)
        .into()
}

/// Sidebar with section headers and nav entries
///
/// An empty item list (no session yet) renders an empty panel.
pub fn sidebar_panel(items: Vec<NavItem>) -> Element<'static, Message> {
    let mut column = Column::new().spacing(SMALL_SPACING).width(Fill);

    for (index, item) in items.into_iter().enumerate() {
        match item {
            NavItem::Header(title) => {
                if index > 0 {
                    column = column.push(Space::new().height(SECTION_SPACING));
                }
                column = column.push(
                    text(title.to_uppercase())
                        .size(SECTION_HEADER_SIZE)
                        .style(muted_text_style),
                );
            }
            NavItem::Entry(entry) => {
                if entry.action == NavAction::SignOut {
                    column = column.push(Space::new().height(SECTION_SPACING));
                }
                column = column.push(nav_button(entry));
            }
        }
    }

    container(scrollable(column))
        .width(SIDEBAR_WIDTH)
        .height(Fill)
        .padding(SIDEBAR_PADDING)
        .style(sidebar_panel_style)
        .into()
}

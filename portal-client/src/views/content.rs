//! Content pane

use iced::widget::{Column, Row, button, column, container, row, scrollable, text};
use iced::{Center, Element, Fill, FillPortion};
use portal_common::{FormCategory, FormDefinition, Role, RoleSet, UserProfile};
use strum::IntoEnumIterator;

use crate::i18n::t;
use crate::style::{
    BUTTON_PADDING, ELEMENT_SPACING, PLACEHOLDER_SIZE, ROW_PADDING, SMALL_SPACING, TEXT_SIZE,
    TITLE_SIZE, alternating_row_style, danger_text_button_style, muted_text_style,
    role_toggle_style,
};
use crate::types::{Content, Message, ViewId};

/// Widgets for the router's content
pub fn content_view(content: Content) -> Element<'static, Message> {
    match content {
        Content::Loading => placeholder(t("content-loading")),
        Content::SignedOut => signed_out_view(),
        Content::Denied => placeholder(t("content-denied")),
        Content::Nothing => container(text("")).width(Fill).height(Fill).into(),
        Content::Profile { profile, roles } => profile_view(profile, &roles),
        Content::FormList { category, forms } => form_list_view(category, &forms),
        Content::EmptyList(category) => column![
            heading(list_heading(category)),
            placeholder(t("content-empty-forms")),
        ]
        .spacing(ELEMENT_SPACING)
        .into(),
        Content::Editor(category) => editor_view(category),
        Content::Section(view) => column![
            heading(t(&format!("nav-{view}"))),
            text(t("content-section-external"))
                .size(TEXT_SIZE)
                .style(muted_text_style),
        ]
        .spacing(ELEMENT_SPACING)
        .into(),
    }
}

// ============================================================================
// Helpers
// ============================================================================

fn heading(title: String) -> Element<'static, Message> {
    text(title).size(TITLE_SIZE).into()
}

/// Centered muted message filling the pane
fn placeholder(message: String) -> Element<'static, Message> {
    container(text(message).size(PLACEHOLDER_SIZE).style(muted_text_style))
        .width(Fill)
        .height(Fill)
        .center(Fill)
        .into()
}

fn list_heading(category: FormCategory) -> String {
    match category {
        FormCategory::Report => t("heading-report-forms"),
        FormCategory::Request => t("heading-request-forms"),
    }
}

fn constructor_of(category: FormCategory) -> ViewId {
    match category {
        FormCategory::Report => ViewId::ReportConstructor,
        FormCategory::Request => ViewId::RequestConstructor,
    }
}

// ============================================================================
// Session Surfaces
// ============================================================================

fn signed_out_view() -> Element<'static, Message> {
    let form = column![
        text(t("content-signed-out")).size(PLACEHOLDER_SIZE),
        button(text(t("button-sign-in")).size(TEXT_SIZE))
            .padding(BUTTON_PADDING)
            .on_press(Message::SignIn),
    ]
    .spacing(ELEMENT_SPACING)
    .align_x(Center);

    container(form).width(Fill).height(Fill).center(Fill).into()
}

// ============================================================================
// Profile
// ============================================================================

fn detail_row(label: String, value: String) -> Element<'static, Message> {
    row![
        text(label)
            .size(TEXT_SIZE)
            .width(160.0)
            .style(muted_text_style),
        text(value).size(TEXT_SIZE),
    ]
    .spacing(ELEMENT_SPACING)
    .into()
}

fn profile_view(profile: UserProfile, roles: &RoleSet) -> Element<'static, Message> {
    let toggles = Role::iter().fold(Row::new().spacing(SMALL_SPACING), |toggles, role| {
        toggles.push(
            button(text(role.to_string()).size(TEXT_SIZE))
                .padding(BUTTON_PADDING)
                .style(role_toggle_style(roles.contains(role)))
                .on_press(Message::ToggleRole(role)),
        )
    });

    let view = column![
        heading(profile.full_name),
        detail_row(t("profile-email"), profile.email),
        detail_row(t("profile-phone"), profile.phone),
        detail_row(t("profile-birth-date"), profile.birth_date),
        text(t("profile-roles")).size(TEXT_SIZE),
        toggles,
        text(t("profile-roles-hint"))
            .size(TEXT_SIZE)
            .style(muted_text_style),
    ]
    .spacing(ELEMENT_SPACING);

    scrollable(view).into()
}

// ============================================================================
// Form Listings
// ============================================================================

fn form_row(category: FormCategory, form: &FormDefinition, is_even: bool) -> Element<'static, Message> {
    let delete = button(text(t("button-delete")).size(TEXT_SIZE))
        .padding(ROW_PADDING)
        .style(danger_text_button_style)
        .on_press_maybe(form.id.map(|id| Message::DeleteForm(category, id)));

    let cells = row![
        text(form.name.clone()).size(TEXT_SIZE).width(FillPortion(4)),
        text(form.responsible.to_string())
            .size(TEXT_SIZE)
            .width(FillPortion(2)),
        text(form.field_count().to_string())
            .size(TEXT_SIZE)
            .width(FillPortion(1)),
        text(form.period.clone()).size(TEXT_SIZE).width(FillPortion(2)),
        text(form.form_type.clone())
            .size(TEXT_SIZE)
            .width(FillPortion(2)),
        delete,
    ]
    .spacing(ELEMENT_SPACING)
    .align_y(Center);

    container(cells)
        .width(Fill)
        .padding(ROW_PADDING)
        .style(alternating_row_style(is_even))
        .into()
}

fn header_row() -> Element<'static, Message> {
    let cell = |key: &str, portion: u16| {
        text(t(key))
            .size(TEXT_SIZE)
            .width(FillPortion(portion))
            .style(muted_text_style)
    };

    container(
        row![
            cell("column-name", 4),
            cell("column-responsible", 2),
            cell("column-fields", 1),
            cell("column-period", 2),
            cell("column-type", 2),
            // Keeps headers aligned with the delete column
            text(t("button-delete"))
                .size(TEXT_SIZE)
                .style(|_theme| text::Style {
                    color: Some(iced::Color::TRANSPARENT),
                }),
        ]
        .spacing(ELEMENT_SPACING),
    )
    .width(Fill)
    .padding(ROW_PADDING)
    .into()
}

fn form_list_view(category: FormCategory, forms: &[FormDefinition]) -> Element<'static, Message> {
    let rows = forms
        .iter()
        .enumerate()
        .fold(Column::new(), |rows, (index, form)| {
            rows.push(form_row(category, form, index % 2 == 0))
        });

    column![heading(list_heading(category)), header_row(), scrollable(rows)]
        .spacing(ELEMENT_SPACING)
        .into()
}

// ============================================================================
// Editor
// ============================================================================

fn editor_view(category: FormCategory) -> Element<'static, Message> {
    let title = match category {
        FormCategory::Report => t("view-report-editor"),
        FormCategory::Request => t("view-request-editor"),
    };

    column![
        heading(title),
        text(t("content-editor-unavailable"))
            .size(TEXT_SIZE)
            .style(muted_text_style),
        button(text(t("button-back-to-list")).size(TEXT_SIZE))
            .padding(BUTTON_PADDING)
            .on_press(Message::Navigate(constructor_of(category))),
    ]
    .spacing(ELEMENT_SPACING)
    .into()
}

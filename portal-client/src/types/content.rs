//! Renderer output

use portal_common::{FormCategory, FormDefinition, RoleSet, UserProfile};

use super::ViewId;

/// What the content pane shows
///
/// Produced by the router, turned into widgets by `views::content`.
#[derive(Debug, Clone, PartialEq)]
pub enum Content {
    /// Profile fetch in flight
    Loading,
    /// No session; the sign-in surface
    SignedOut,
    /// Guard rejected the active view
    Denied,
    /// Active identifier has no registry entry
    Nothing,
    Profile {
        profile: UserProfile,
        roles: RoleSet,
    },
    FormList {
        category: FormCategory,
        forms: Vec<FormDefinition>,
    },
    /// Listing view with an empty repository
    EmptyList(FormCategory),
    Editor(FormCategory),
    /// A section whose pane lives outside this client
    Section(ViewId),
}

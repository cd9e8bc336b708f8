//! Message types for the Elm-style architecture

use portal_common::{FormCategory, FormId, Role, UserProfile};

use super::ViewId;
use crate::auth::AuthError;

/// Messages that drive the application state machine
#[derive(Debug, Clone)]
pub enum Message {
    /// Content: Delete button pressed on a form row
    DeleteForm(FormCategory, FormId),
    /// Sidebar: Nav entry clicked
    Navigate(ViewId),
    /// Auth: Profile fetch completed
    ProfileLoaded(Result<UserProfile, AuthError>),
    /// Signed-out surface: Sign in button pressed
    SignIn,
    /// Sidebar: Sign out entry clicked
    SignOut,
    /// Profile view: Role toggle pressed
    ToggleRole(Role),
}

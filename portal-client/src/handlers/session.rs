//! Profile loading, sign-in and sign-out

use iced::Task;
use portal_common::{Role, UserProfile};

use crate::PortalApp;
use crate::auth::{AuthError, fetch_profile};
use crate::i18n::t_args;
use crate::types::Message;

impl PortalApp {
    /// Issue a profile fetch
    pub fn load_profile(&mut self) -> Task<Message> {
        self.router.begin_loading();
        Task::perform(fetch_profile(self.auth.clone()), Message::ProfileLoaded)
    }

    /// Profile fetch completed
    ///
    /// Any failure ends the session with the provider.
    pub fn handle_profile_loaded(
        &mut self,
        result: Result<UserProfile, AuthError>,
    ) -> Task<Message> {
        match result {
            Ok(profile) => {
                self.status = None;
                self.router.profile_loaded(profile);
            }
            Err(e) => {
                tracing::warn!(error = %e, "Profile fetch failed, signing out");
                self.auth.logout();
                self.router.profile_failed();
                self.status = Some(t_args("err-profile-failed", &[("error", &e.to_string())]));
            }
        }
        Task::none()
    }

    /// Sign-in button on the signed-out surface
    pub fn handle_sign_in(&mut self) -> Task<Message> {
        self.status = None;
        self.load_profile()
    }

    /// Sign-out sidebar entry
    pub fn handle_sign_out(&mut self) -> Task<Message> {
        self.auth.logout();
        self.router.sign_out();
        self.status = None;
        Task::none()
    }

    /// Role toggle on the profile view
    pub fn handle_toggle_role(&mut self, role: Role) -> Task<Message> {
        if self.router.toggle_role(role).is_none() {
            tracing::debug!(role = %role, "Role toggle ignored without session");
        }
        Task::none()
    }
}

//! Form template management

use iced::Task;
use portal_common::{FormCategory, FormId};

use crate::PortalApp;
use crate::i18n::t_args;
use crate::types::Message;

impl PortalApp {
    /// Delete button on a template row
    pub fn handle_delete_form(&mut self, category: FormCategory, id: FormId) -> Task<Message> {
        match self.router.delete_form(category, id) {
            Ok(true) => {
                tracing::info!(%id, ?category, "Template deleted");
                self.status = None;
            }
            Ok(false) => {
                tracing::debug!(%id, ?category, "Template already gone");
            }
            Err(e) => {
                tracing::error!(%id, ?category, error = %e, "Could not delete template");
                self.status = Some(t_args("err-form-delete-failed", &[("error", &e.to_string())]));
            }
        }
        Task::none()
    }
}

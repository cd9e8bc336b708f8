//! View navigation and deep links

use iced::Task;

use crate::PortalApp;
use crate::types::{Message, ViewId};
use crate::uri::PortalUri;

impl PortalApp {
    /// Sidebar click or in-pane link
    pub fn handle_navigate(&mut self, view: ViewId) -> Task<Message> {
        self.status = None;
        self.router.request(view);
        Task::none()
    }

    /// Direct navigation from a portal:// link
    ///
    /// Goes through the same guard as a click.
    pub fn handle_portal_uri(&mut self, uri: PortalUri) {
        tracing::info!(view = %uri.view, "Opening portal link");
        self.router.request_path(&uri.view);
    }
}

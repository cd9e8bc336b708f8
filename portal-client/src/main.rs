//! Portal Client - GUI Application
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod auth;
mod config;
mod constants;
mod forms;
mod handlers;
mod i18n;
mod logging;
mod router;
mod storage;
mod style;
mod types;
pub mod uri;
mod views;

use std::sync::{Arc, Mutex};

use once_cell::sync::Lazy;

use iced::{Element, Task, Theme};

use auth::{AuthProvider, LocalProfileProvider};
use forms::FormStore;
use router::ViewRouter;
use storage::{FileStorage, MemoryStorage, Storage};
use style::{APPLICATION_ID, WINDOW_HEIGHT_MIN, WINDOW_WIDTH_MIN};
use types::Message;

/// Startup URI passed via command line (consumed by PortalApp::new)
static STARTUP_URI: Lazy<Mutex<Option<String>>> = Lazy::new(|| Mutex::new(None));

/// Parse command line arguments for a portal:// URI
fn get_startup_uri() -> Option<String> {
    // Handle both direct URI and %u placeholder from desktop files
    std::env::args()
        .skip(1)
        .map(|arg| arg.trim().to_string())
        .filter(|arg| arg != "%u")
        .find(|arg| uri::is_portal_uri(arg))
}

/// Application entry point
///
/// Sets up logging and translations from the config file, then starts the
/// event loop.
pub fn main() -> iced::Result {
    let config = config::Config::load();
    logging::init(&config.settings.log_filter);
    i18n::init(config.settings.locale.as_deref());

    // First run: write defaults so the file can be edited
    if !config::Config::exists()
        && let Err(e) = config.save()
    {
        tracing::warn!(error = %e, "Could not write default config");
    }

    // Store startup URI in a static for PortalApp::new to pick up
    if let Some(uri_str) = get_startup_uri()
        && let Ok(mut startup) = STARTUP_URI.lock()
    {
        startup.replace(uri_str);
    }

    let window_size = iced::Size::new(config.settings.window_width, config.settings.window_height);

    iced::application(PortalApp::new, PortalApp::update, PortalApp::view)
        .title(PortalApp::title)
        .theme(PortalApp::theme)
        .window(iced::window::Settings {
            size: window_size,
            min_size: Some(iced::Size::new(WINDOW_WIDTH_MIN, WINDOW_HEIGHT_MIN)),
            #[cfg(target_os = "linux")]
            platform_specific: iced::window::settings::PlatformSpecific {
                application_id: APPLICATION_ID.to_string(),
                ..Default::default()
            },
            ..Default::default()
        })
        .run()
}

/// Main application state for the portal client
struct PortalApp {
    /// Application configuration
    config: config::Config,
    /// Session, active view and form templates
    router: ViewRouter,
    /// Source of the signed-in profile
    auth: Arc<dyn AuthProvider>,
    /// Last failed operation, shown above the content pane
    status: Option<String>,
}

impl PortalApp {
    /// Initialize the application and start the profile fetch
    fn new() -> (Self, Task<Message>) {
        let config = config::Config::load();

        let storage: Arc<dyn Storage> = match config.storage_path() {
            Some(path) => {
                tracing::debug!(path = %path.display(), "Using file storage");
                Arc::new(FileStorage::new(path))
            }
            None => {
                tracing::warn!("No config directory, templates are kept in memory");
                Arc::new(MemoryStorage::new())
            }
        };
        let auth: Arc<dyn AuthProvider> =
            Arc::new(LocalProfileProvider::new(config.profile_path()));

        let mut app = Self {
            config,
            router: ViewRouter::new(FormStore::open(storage)),
            auth,
            status: None,
        };

        // Check for startup URI
        let startup_uri = STARTUP_URI.lock().ok().and_then(|mut uri| uri.take());
        if let Some(uri_str) = startup_uri {
            match uri::parse(&uri_str) {
                Ok(parsed_uri) => app.handle_portal_uri(parsed_uri),
                Err(e) => tracing::warn!(uri = %uri_str, error = %e, "Ignoring startup URI"),
            }
        }

        let task = app.load_profile();
        (app, task)
    }

    /// Process a message and update application state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::DeleteForm(category, id) => self.handle_delete_form(category, id),
            Message::Navigate(view) => self.handle_navigate(view),
            Message::ProfileLoaded(result) => self.handle_profile_loaded(result),
            Message::SignIn => self.handle_sign_in(),
            Message::SignOut => self.handle_sign_out(),
            Message::ToggleRole(role) => self.handle_toggle_role(role),
        }
    }

    /// Render the current application state to the UI
    fn view(&self) -> Element<'_, Message> {
        views::main_layout(
            self.router.sidebar(),
            self.router.render(),
            self.status.as_deref(),
        )
    }

    fn title(&self) -> String {
        i18n::t("title-portal")
    }

    fn theme(&self) -> Theme {
        if self.config.settings.dark_theme {
            Theme::Dark
        } else {
            Theme::Light
        }
    }
}

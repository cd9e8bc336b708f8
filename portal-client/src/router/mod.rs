//! Role-gated view router
//!
//! A view request is always recorded. Whether the recorded view's content is
//! shown is decided on every render by the registry entry's guard. A denied
//! view stays active so the sidebar keeps highlighting it.

mod registry;
mod sidebar;

use portal_common::{FormCategory, FormDefinition, FormId, Role, RoleSet, UserProfile};

pub use registry::Registry;
use registry::RenderContext;
pub use sidebar::{NavAction, NavEntry, NavItem, compose};

use crate::forms::{FormStore, RepositoryError};
use crate::types::{Content, ViewId};

/// Authentication state as seen by the router
#[derive(Debug, Clone, PartialEq)]
pub enum Session {
    /// Profile fetch in flight; no guard is evaluated
    Loading,
    Ready {
        profile: UserProfile,
        roles: RoleSet,
    },
    SignedOut,
}

/// The requested view
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    View(ViewId),
    /// A direct-navigation target with no matching identifier
    Unknown(String),
}

pub struct ViewRouter {
    registry: Registry,
    forms: FormStore,
    session: Session,
    route: Route,
}

impl ViewRouter {
    pub fn new(forms: FormStore) -> Self {
        Self::with_registry(Registry::default(), forms)
    }

    pub fn with_registry(registry: Registry, forms: FormStore) -> Self {
        Self {
            registry,
            forms,
            session: Session::Loading,
            route: Route::View(ViewId::Profile),
        }
    }

    pub fn active(&self) -> &Route {
        &self.route
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    #[cfg_attr(not(test), allow(dead_code))]
    pub fn forms(&self) -> &FormStore {
        &self.forms
    }

    fn active_view(&self) -> Option<ViewId> {
        match self.route {
            Route::View(view) => Some(view),
            Route::Unknown(_) => None,
        }
    }

    /// Make `target` the active view
    ///
    /// Accepted regardless of the current roles. Entering a listing view
    /// reloads its repository.
    pub fn request(&mut self, target: ViewId) {
        tracing::debug!(view = %target, "View requested");
        self.route = Route::View(target);
        self.resync(target);
    }

    /// Make the view named by `path` active (direct navigation)
    pub fn request_path(&mut self, path: &str) {
        match ViewId::parse(path) {
            Some(view) => self.request(view),
            None => {
                tracing::warn!(path, "Unknown view requested");
                self.route = Route::Unknown(path.to_string());
            }
        }
    }

    fn resync(&mut self, view: ViewId) {
        if let Some(category) = self.registry.get(view).and_then(|entry| entry.listing) {
            self.forms.get_mut(category).reload();
        }
    }

    /// Start the session with a fetched profile
    pub fn profile_loaded(&mut self, profile: UserProfile) {
        for label in profile.unknown_roles() {
            tracing::warn!(user = profile.id, role = label, "Ignoring unknown role");
        }
        let roles = profile.role_set();
        tracing::info!(user = profile.id, roles = roles.len(), "Profile loaded");

        self.session = Session::Ready { profile, roles };
        if let Some(view) = self.active_view() {
            self.resync(view);
        }
    }

    /// The profile fetch failed; the session is over
    pub fn profile_failed(&mut self) {
        self.end_session();
    }

    pub fn sign_out(&mut self) {
        self.end_session();
    }

    fn end_session(&mut self) {
        self.session = Session::SignedOut;
        self.route = Route::View(ViewId::Profile);
    }

    /// A new profile fetch has been issued
    pub fn begin_loading(&mut self) {
        self.session = Session::Loading;
    }

    /// Flip `role` in the current role set
    ///
    /// Returns whether the role is now held, or `None` without a session.
    pub fn toggle_role(&mut self, role: Role) -> Option<bool> {
        let Session::Ready { roles, .. } = &mut self.session else {
            return None;
        };
        let held = roles.toggle(role);
        tracing::debug!(role = %role, held, "Role toggled");
        Some(held)
    }

    /// Content for the active view
    pub fn render(&self) -> Content {
        let (profile, roles) = match &self.session {
            Session::Loading => return Content::Loading,
            Session::SignedOut => return Content::SignedOut,
            Session::Ready { profile, roles } => (profile, roles),
        };

        let Some(view) = self.active_view() else {
            return Content::Nothing;
        };
        let Some(entry) = self.registry.get(view) else {
            tracing::warn!(view = %view, "View has no registry entry");
            return Content::Nothing;
        };

        if !roles.has_any(entry.required_roles) {
            return Content::Denied;
        }

        (entry.render)(&RenderContext {
            view,
            profile,
            roles,
            forms: &self.forms,
        })
    }

    /// Sidebar for the current session; empty until a profile is loaded
    pub fn sidebar(&self) -> Vec<NavItem> {
        match &self.session {
            Session::Ready { roles, .. } => compose(&self.registry, roles, self.active_view()),
            Session::Loading | Session::SignedOut => Vec::new(),
        }
    }

    /// Append or replace a definition (the editor's save callback)
    #[cfg_attr(not(test), allow(dead_code))]
    pub fn save_form(
        &mut self,
        category: FormCategory,
        def: FormDefinition,
    ) -> Result<FormId, RepositoryError> {
        self.forms.get_mut(category).insert(def)
    }

    pub fn delete_form(
        &mut self,
        category: FormCategory,
        id: FormId,
    ) -> Result<bool, RepositoryError> {
        self.forms.get_mut(category).delete_by_id(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use strum::IntoEnumIterator;

    use super::registry::ViewEntry;
    use crate::forms::{FormRepository, storage_key};
    use crate::storage::{MemoryStorage, Storage};

    fn profile(labels: &[&str]) -> UserProfile {
        UserProfile {
            id: 42,
            full_name: "Петров Алексей Иванович".to_string(),
            roles: labels.iter().map(|l| l.to_string()).collect(),
            email: "a.petrov@example.org".to_string(),
            phone: "+7 900 000-00-00".to_string(),
            birth_date: "1985-09-01".to_string(),
        }
    }

    fn definition(name: &str) -> FormDefinition {
        FormDefinition {
            id: None,
            name: name.to_string(),
            description: String::new(),
            responsible: Role::Teacher,
            fields: vec![serde_json::json!({"label": "Часы"})],
            period: "Ежемесячно".to_string(),
            form_type: "Отчёт".to_string(),
        }
    }

    fn router_with(storage: Arc<MemoryStorage>, labels: &[&str]) -> ViewRouter {
        let mut router = ViewRouter::new(FormStore::open(storage));
        router.profile_loaded(profile(labels));
        router
    }

    fn signed_in(labels: &[&str]) -> ViewRouter {
        router_with(Arc::new(MemoryStorage::new()), labels)
    }

    #[test]
    fn test_initial_state_is_loading_profile() {
        let router = ViewRouter::new(FormStore::open(Arc::new(MemoryStorage::new())));
        assert_eq!(router.session(), &Session::Loading);
        assert_eq!(router.active(), &Route::View(ViewId::Profile));
        assert_eq!(router.render(), Content::Loading);
        assert!(router.sidebar().is_empty());
    }

    #[test]
    fn test_loading_never_shows_denied() {
        let mut router = ViewRouter::new(FormStore::open(Arc::new(MemoryStorage::new())));
        router.request(ViewId::AdminPanel);
        assert_eq!(router.render(), Content::Loading);
    }

    #[test]
    fn test_profile_renders_for_empty_roles() {
        let router = signed_in(&[]);
        assert_eq!(
            router.render(),
            Content::Profile {
                profile: profile(&[]),
                roles: RoleSet::new(),
            }
        );
    }

    #[test]
    fn test_admin_empty_report_constructor() {
        let mut router = signed_in(&["Админ"]);
        router.request(ViewId::ReportConstructor);
        assert_eq!(router.render(), Content::EmptyList(FormCategory::Report));
    }

    #[test]
    fn test_student_denied_report_constructor() {
        let mut router = signed_in(&["Студент"]);
        router.request(ViewId::ReportConstructor);
        assert_eq!(router.render(), Content::Denied);
        assert_eq!(router.active(), &Route::View(ViewId::ReportConstructor));
    }

    #[test]
    fn test_denied_view_stays_highlighted() {
        let mut router = signed_in(&["Админ"]);
        router.request(ViewId::ReportEditor);
        router.toggle_role(Role::Admin);

        assert_eq!(router.render(), Content::Denied);
        assert_eq!(router.active(), &Route::View(ViewId::ReportEditor));

        // Regaining the role shows the same view without navigating
        router.toggle_role(Role::Admin);
        assert_eq!(router.render(), Content::Editor(FormCategory::Report));
        assert!(router.sidebar().iter().any(|item| matches!(
            item,
            NavItem::Entry(NavEntry {
                action: NavAction::Open(ViewId::ReportConstructor),
                is_active: true,
                ..
            })
        )));
    }

    #[test]
    fn test_denied_iff_guard_fails() {
        let registry = Registry::default();
        let all: Vec<Role> = Role::iter().collect();

        for mask in 0..(1u32 << all.len()) {
            let selected: Vec<Role> = all
                .iter()
                .enumerate()
                .filter(|(bit, _)| mask & (1 << bit) != 0)
                .map(|(_, role)| *role)
                .collect();
            let roles: RoleSet = selected.iter().copied().collect();
            let labels: Vec<&str> = selected.iter().map(Role::as_str).collect();
            let mut router = signed_in(&labels);

            for entry in registry.entries() {
                router.request(entry.id);
                let denied = router.render() == Content::Denied;
                assert_eq!(
                    denied,
                    !roles.has_any(entry.required_roles),
                    "{} with {:?}",
                    entry.id,
                    labels
                );
                if entry.required_roles.is_empty() {
                    assert!(!denied);
                }
            }
        }
    }

    #[test]
    fn test_granted_content() {
        let mut router = signed_in(&["Админ", "Студент"]);

        router.request(ViewId::News);
        assert_eq!(router.render(), Content::Section(ViewId::News));

        router.request(ViewId::Plan);
        assert_eq!(router.render(), Content::Section(ViewId::Plan));

        router.request(ViewId::RequestEditor);
        assert_eq!(router.render(), Content::Editor(FormCategory::Request));

        router.request(ViewId::RequestConstructor);
        assert_eq!(router.render(), Content::EmptyList(FormCategory::Request));
    }

    #[test]
    fn test_unknown_path_renders_nothing() {
        let mut router = signed_in(&["Админ"]);
        router.request_path("settings");
        assert_eq!(router.active(), &Route::Unknown("settings".to_string()));
        assert_eq!(router.render(), Content::Nothing);

        let sidebar = router.sidebar();
        assert!(!sidebar.is_empty());
        assert!(sidebar.iter().all(|item| !matches!(
            item,
            NavItem::Entry(NavEntry { is_active: true, .. })
        )));
    }

    #[test]
    fn test_request_path_known_view() {
        let mut router = signed_in(&["Студент"]);
        router.request_path("report-constructor");
        assert_eq!(router.active(), &Route::View(ViewId::ReportConstructor));
        assert_eq!(router.render(), Content::Denied);
    }

    #[test]
    fn test_missing_registry_entry_renders_nothing() {
        let registry = Registry::new(vec![ViewEntry::new(ViewId::Profile, &[], |_| {
            Content::Section(ViewId::Profile)
        })]);
        let mut router =
            ViewRouter::with_registry(registry, FormStore::open(Arc::new(MemoryStorage::new())));
        router.profile_loaded(profile(&["Админ"]));

        router.request(ViewId::AdminPanel);
        assert_eq!(router.render(), Content::Nothing);
    }

    #[test]
    fn test_entering_listing_reloads() {
        let storage = Arc::new(MemoryStorage::new());
        let mut router = router_with(storage.clone(), &["Админ"]);
        router.request(ViewId::ReportConstructor);
        assert_eq!(router.render(), Content::EmptyList(FormCategory::Report));

        // Another context writes to the same storage
        let mut other = FormRepository::open(storage.clone(), storage_key(FormCategory::Report));
        let id = other.insert(definition("Отчёт о нагрузке")).expect("insert");

        // Stale until the listing is entered again
        assert_eq!(router.render(), Content::EmptyList(FormCategory::Report));

        router.request(ViewId::AdminPanel);
        assert!(router.forms().get(FormCategory::Report).forms().is_empty());

        router.request(ViewId::ReportConstructor);
        match router.render() {
            Content::FormList { category, forms } => {
                assert_eq!(category, FormCategory::Report);
                assert_eq!(forms.len(), 1);
                assert_eq!(forms[0].id, Some(id));
            }
            content => panic!("unexpected content: {content:?}"),
        }
    }

    #[test]
    fn test_denied_listing_still_reloads() {
        let storage = Arc::new(MemoryStorage::new());
        let mut other = FormRepository::open(storage.clone(), storage_key(FormCategory::Request));
        let mut router = router_with(storage, &["Студент"]);
        other.insert(definition("Справка")).expect("insert");

        router.request(ViewId::RequestConstructor);
        assert_eq!(router.render(), Content::Denied);
        assert_eq!(router.forms().get(FormCategory::Request).forms().len(), 1);
    }

    #[test]
    fn test_profile_arrival_resyncs_listing() {
        let storage = Arc::new(MemoryStorage::new());
        let mut router = ViewRouter::new(FormStore::open(storage.clone()));
        router.request(ViewId::ReportConstructor);

        let mut other = FormRepository::open(storage, storage_key(FormCategory::Report));
        other.insert(definition("Отчёт")).expect("insert");

        router.profile_loaded(profile(&["Админ"]));
        assert!(matches!(router.render(), Content::FormList { .. }));
    }

    #[test]
    fn test_unknown_role_labels_ignored() {
        let router = signed_in(&["Админ", "Суперпользователь"]);
        match router.session() {
            Session::Ready { roles, .. } => {
                assert_eq!(roles.len(), 1);
                assert!(roles.contains(Role::Admin));
            }
            other => panic!("unexpected session: {other:?}"),
        }
    }

    #[test]
    fn test_profile_failed_signs_out() {
        let mut router = ViewRouter::new(FormStore::open(Arc::new(MemoryStorage::new())));
        router.request(ViewId::News);
        router.profile_failed();

        assert_eq!(router.session(), &Session::SignedOut);
        assert_eq!(router.active(), &Route::View(ViewId::Profile));
        assert_eq!(router.render(), Content::SignedOut);
        assert!(router.sidebar().is_empty());
    }

    #[test]
    fn test_sign_out_and_back_in() {
        let mut router = signed_in(&["Преподаватель"]);
        router.request(ViewId::Load);
        router.sign_out();
        assert_eq!(router.render(), Content::SignedOut);

        router.begin_loading();
        assert_eq!(router.render(), Content::Loading);

        router.profile_loaded(profile(&["Преподаватель"]));
        assert!(matches!(router.render(), Content::Profile { .. }));
    }

    #[test]
    fn test_toggle_role() {
        let mut router = signed_in(&["Сотрудник"]);
        router.request(ViewId::AdminPanel);
        assert_eq!(router.render(), Content::Denied);

        assert_eq!(router.toggle_role(Role::Admin), Some(true));
        assert_eq!(router.render(), Content::Section(ViewId::AdminPanel));

        assert_eq!(router.toggle_role(Role::Admin), Some(false));
        assert_eq!(router.render(), Content::Denied);
    }

    #[test]
    fn test_toggle_role_without_session() {
        let mut router = ViewRouter::new(FormStore::open(Arc::new(MemoryStorage::new())));
        assert_eq!(router.toggle_role(Role::Admin), None);
        router.profile_failed();
        assert_eq!(router.toggle_role(Role::Admin), None);
    }

    #[test]
    fn test_empty_roles_sidebar() {
        let router = signed_in(&[]);
        let sidebar = router.sidebar();
        let actions: Vec<NavAction> = sidebar
            .iter()
            .filter_map(|item| match item {
                NavItem::Entry(entry) => Some(entry.action),
                NavItem::Header(_) => None,
            })
            .collect();
        assert_eq!(
            actions,
            vec![NavAction::Open(ViewId::Profile), NavAction::SignOut]
        );
    }

    #[test]
    fn test_save_and_delete_persist() {
        let storage = Arc::new(MemoryStorage::new());
        let mut router = router_with(storage.clone(), &["Админ"]);

        let first = router
            .save_form(FormCategory::Report, definition("Первый"))
            .expect("save");
        let second = router
            .save_form(FormCategory::Report, definition("Второй"))
            .expect("save");

        assert!(router.delete_form(FormCategory::Report, first).expect("delete"));
        assert!(!router.delete_form(FormCategory::Report, first).expect("delete"));

        let persisted = FormRepository::open(storage.clone(), storage_key(FormCategory::Report));
        assert_eq!(persisted.forms(), router.forms().get(FormCategory::Report).forms());
        assert_eq!(persisted.forms().len(), 1);
        assert_eq!(persisted.forms()[0].id, Some(second));
        assert!(storage
            .read(storage_key(FormCategory::Request))
            .expect("read")
            .is_none());
    }

    #[test]
    fn test_editor_save_replaces_record() {
        let mut router = signed_in(&["Админ"]);
        let id = router
            .save_form(FormCategory::Request, definition("Справка"))
            .expect("save");

        let mut edited = definition("Справка с места учёбы");
        edited.id = Some(id);
        assert_eq!(
            router.save_form(FormCategory::Request, edited).expect("save"),
            id
        );

        router.request(ViewId::RequestConstructor);
        match router.render() {
            Content::FormList { forms, .. } => {
                assert_eq!(forms.len(), 1);
                assert_eq!(forms[0].name, "Справка с места учёбы");
            }
            other => panic!("unexpected content: {other:?}"),
        }
    }
}

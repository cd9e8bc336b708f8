//! View registry
//!
//! One declarative table maps each [`ViewId`] to its guard, its renderer and
//! its sidebar metadata. The router and the sidebar both read from here, so a
//! nav click and a deep link are judged by the same entry.

use portal_common::{FormCategory, Role, RoleSet, UserProfile};

use crate::forms::FormStore;
use crate::types::{Content, ViewId};

/// Roles that may see an entry behind any role at all
const ANY_ROLE: &[Role] = &[Role::Employee, Role::Student, Role::Teacher, Role::Admin];
const ADMIN_ONLY: &[Role] = &[Role::Admin];

/// Sidebar section an entry is listed under
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavSection {
    Main,
    Administrator,
}

impl NavSection {
    /// Sections in display order
    pub const ALL: [NavSection; 2] = [NavSection::Main, NavSection::Administrator];

    /// Roles required for the section header to appear
    pub fn gate(self) -> &'static [Role] {
        match self {
            NavSection::Main => &[],
            NavSection::Administrator => ADMIN_ONLY,
        }
    }

    pub fn label_key(self) -> &'static str {
        match self {
            NavSection::Main => "section-main",
            NavSection::Administrator => "section-administrator",
        }
    }
}

/// How an entry appears in the sidebar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavMeta {
    pub section: NavSection,
    /// Translation key of the label
    pub label_key: &'static str,
    pub icon: &'static str,
}

/// Everything a renderer may look at
pub struct RenderContext<'a> {
    pub view: ViewId,
    pub profile: &'a UserProfile,
    pub roles: &'a RoleSet,
    pub forms: &'a FormStore,
}

pub type Renderer = fn(&RenderContext<'_>) -> Content;

/// One row of the registry
#[derive(Clone)]
pub struct ViewEntry {
    pub id: ViewId,
    /// Empty means unconditional
    pub required_roles: &'static [Role],
    pub render: Renderer,
    /// `None` for sub-views reached only from another view
    pub nav: Option<NavMeta>,
    /// Group head used for sidebar highlighting
    pub group: ViewId,
    /// Set for listing views; entering one reloads that repository
    pub listing: Option<FormCategory>,
}

impl ViewEntry {
    pub fn new(id: ViewId, required_roles: &'static [Role], render: Renderer) -> Self {
        Self {
            id,
            required_roles,
            render,
            nav: None,
            group: id,
            listing: None,
        }
    }

    pub fn with_nav(mut self, section: NavSection, label_key: &'static str, icon: &'static str) -> Self {
        self.nav = Some(NavMeta {
            section,
            label_key,
            icon,
        });
        self
    }

    pub fn in_group(mut self, group: ViewId) -> Self {
        self.group = group;
        self
    }

    pub fn listing_of(mut self, category: FormCategory) -> Self {
        self.listing = Some(category);
        self
    }
}

impl std::fmt::Debug for ViewEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ViewEntry")
            .field("id", &self.id)
            .field("required_roles", &self.required_roles)
            .field("nav", &self.nav)
            .field("group", &self.group)
            .field("listing", &self.listing)
            .finish_non_exhaustive()
    }
}

/// Ordered table of views
///
/// Declaration order is sidebar order.
#[derive(Debug, Clone)]
pub struct Registry {
    entries: Vec<ViewEntry>,
}

impl Registry {
    pub fn new(entries: Vec<ViewEntry>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[ViewEntry] {
        &self.entries
    }

    pub fn get(&self, id: ViewId) -> Option<&ViewEntry> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    /// Group head of `id`; a view without an entry is its own group
    pub fn group_of(&self, id: ViewId) -> ViewId {
        self.get(id).map_or(id, |entry| entry.group)
    }
}

impl Default for Registry {
    fn default() -> Self {
        use NavSection::{Administrator, Main};

        Self::new(vec![
            ViewEntry::new(ViewId::Profile, &[], render_profile).with_nav(
                Main,
                "nav-profile",
                "☺",
            ),
            ViewEntry::new(
                ViewId::Applications,
                &[Role::Employee, Role::Student, Role::Teacher],
                render_section,
            )
            .with_nav(Main, "nav-applications", "✉"),
            ViewEntry::new(ViewId::Reports, &[Role::Employee, Role::Teacher], render_section)
                .with_nav(Main, "nav-reports", "▤"),
            ViewEntry::new(ViewId::Schedule, &[Role::Student, Role::Teacher], render_section)
                .with_nav(Main, "nav-schedule", "◷"),
            ViewEntry::new(ViewId::Plan, &[Role::Student], render_section)
                .with_nav(Main, "nav-plan", "☰"),
            ViewEntry::new(ViewId::Load, &[Role::Teacher], render_section)
                .with_nav(Main, "nav-load", "⚖"),
            ViewEntry::new(ViewId::News, ANY_ROLE, render_section)
                .with_nav(Main, "nav-news", "✎"),
            ViewEntry::new(ViewId::AdminPanel, ADMIN_ONLY, render_section)
                .with_nav(Administrator, "nav-admin-panel", "⚙"),
            ViewEntry::new(ViewId::ReportConstructor, ADMIN_ONLY, render_report_list)
                .with_nav(Administrator, "nav-report-constructor", "▦")
                .listing_of(FormCategory::Report),
            ViewEntry::new(ViewId::RequestConstructor, ADMIN_ONLY, render_request_list)
                .with_nav(Administrator, "nav-request-constructor", "✚")
                .listing_of(FormCategory::Request),
            ViewEntry::new(ViewId::ReportEditor, ADMIN_ONLY, render_report_editor)
                .in_group(ViewId::ReportConstructor),
            ViewEntry::new(ViewId::RequestEditor, ADMIN_ONLY, render_request_editor)
                .in_group(ViewId::RequestConstructor),
        ])
    }
}

// =============================================================================
// Renderers
// =============================================================================

fn render_profile(ctx: &RenderContext<'_>) -> Content {
    Content::Profile {
        profile: ctx.profile.clone(),
        roles: ctx.roles.clone(),
    }
}

fn render_section(ctx: &RenderContext<'_>) -> Content {
    Content::Section(ctx.view)
}

fn render_form_list(ctx: &RenderContext<'_>, category: FormCategory) -> Content {
    let forms = ctx.forms.get(category).forms();
    if forms.is_empty() {
        Content::EmptyList(category)
    } else {
        Content::FormList {
            category,
            forms: forms.to_vec(),
        }
    }
}

fn render_report_list(ctx: &RenderContext<'_>) -> Content {
    render_form_list(ctx, FormCategory::Report)
}

fn render_request_list(ctx: &RenderContext<'_>) -> Content {
    render_form_list(ctx, FormCategory::Request)
}

fn render_report_editor(_ctx: &RenderContext<'_>) -> Content {
    Content::Editor(FormCategory::Report)
}

fn render_request_editor(_ctx: &RenderContext<'_>) -> Content {
    Content::Editor(FormCategory::Request)
}

//! Sidebar composition

use portal_common::RoleSet;

use super::registry::{NavSection, Registry};
use crate::i18n::t;
use crate::types::ViewId;

const SIGN_OUT_ICON: &str = "⎋";

/// What activating a nav entry does
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavAction {
    Open(ViewId),
    SignOut,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavEntry {
    pub label: String,
    pub icon: &'static str,
    pub is_active: bool,
    pub action: NavAction,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavItem {
    Header(String),
    Entry(NavEntry),
}

/// Build the sidebar for `roles` with `active` highlighted
///
/// Entries keep registry order under their section header. A header appears
/// only when its section gate passes. An entry is active when its group is
/// the active view's group. Sign-out always closes the list.
pub fn compose(registry: &Registry, roles: &RoleSet, active: Option<ViewId>) -> Vec<NavItem> {
    let active_group = active.map(|view| registry.group_of(view));
    let mut items = Vec::new();

    for section in NavSection::ALL {
        if !roles.has_any(section.gate()) {
            continue;
        }
        items.push(NavItem::Header(t(section.label_key())));

        for entry in registry.entries() {
            let Some(nav) = entry.nav else {
                continue;
            };
            if nav.section != section || !roles.has_any(entry.required_roles) {
                continue;
            }
            items.push(NavItem::Entry(NavEntry {
                label: t(nav.label_key),
                icon: nav.icon,
                is_active: active_group == Some(entry.group),
                action: NavAction::Open(entry.id),
            }));
        }
    }

    items.push(NavItem::Entry(NavEntry {
        label: t("nav-sign-out"),
        icon: SIGN_OUT_ICON,
        is_active: false,
        action: NavAction::SignOut,
    }));

    items
}

#[cfg(test)]
mod tests {
    use super::*;
    use portal_common::Role;

    fn entries(items: &[NavItem]) -> Vec<&NavEntry> {
        items
            .iter()
            .filter_map(|item| match item {
                NavItem::Entry(entry) => Some(entry),
                NavItem::Header(_) => None,
            })
            .collect()
    }

    fn actions(items: &[NavItem]) -> Vec<NavAction> {
        entries(items).into_iter().map(|e| e.action).collect()
    }

    fn find(items: &[NavItem], view: ViewId) -> Option<&NavEntry> {
        entries(items)
            .into_iter()
            .find(|e| e.action == NavAction::Open(view))
    }

    fn roles(list: &[Role]) -> RoleSet {
        list.iter().copied().collect()
    }

    #[test]
    fn test_empty_roles_still_have_profile_and_sign_out() {
        let items = compose(&Registry::default(), &RoleSet::new(), None);
        assert_eq!(
            items,
            vec![
                NavItem::Header(t("section-main")),
                NavItem::Entry(NavEntry {
                    label: t("nav-profile"),
                    icon: "☺",
                    is_active: false,
                    action: NavAction::Open(ViewId::Profile),
                }),
                NavItem::Entry(NavEntry {
                    label: t("nav-sign-out"),
                    icon: SIGN_OUT_ICON,
                    is_active: false,
                    action: NavAction::SignOut,
                }),
            ]
        );
    }

    #[test]
    fn test_admin_header_only_for_admin() {
        let registry = Registry::default();
        let admin_header = NavItem::Header(t("section-administrator"));

        let teacher = compose(&registry, &roles(&[Role::Teacher]), None);
        assert!(!teacher.contains(&admin_header));

        let admin = compose(&registry, &roles(&[Role::Admin]), None);
        assert!(admin.contains(&admin_header));
    }

    #[test]
    fn test_student_entries() {
        let items = compose(
            &Registry::default(),
            &roles(&[Role::Student]),
            Some(ViewId::Profile),
        );
        assert_eq!(
            actions(&items),
            vec![
                NavAction::Open(ViewId::Profile),
                NavAction::Open(ViewId::Applications),
                NavAction::Open(ViewId::Schedule),
                NavAction::Open(ViewId::Plan),
                NavAction::Open(ViewId::News),
                NavAction::SignOut,
            ]
        );
    }

    #[test]
    fn test_order_follows_registry() {
        let all = roles(&[Role::Employee, Role::Student, Role::Teacher, Role::Admin]);
        let items = compose(&Registry::default(), &all, None);

        assert_eq!(items.first(), Some(&NavItem::Header(t("section-main"))));
        assert_eq!(
            actions(&items),
            vec![
                NavAction::Open(ViewId::Profile),
                NavAction::Open(ViewId::Applications),
                NavAction::Open(ViewId::Reports),
                NavAction::Open(ViewId::Schedule),
                NavAction::Open(ViewId::Plan),
                NavAction::Open(ViewId::Load),
                NavAction::Open(ViewId::News),
                NavAction::Open(ViewId::AdminPanel),
                NavAction::Open(ViewId::ReportConstructor),
                NavAction::Open(ViewId::RequestConstructor),
                NavAction::SignOut,
            ]
        );

        let admin_header = items
            .iter()
            .position(|item| *item == NavItem::Header(t("section-administrator")))
            .expect("admin header");
        let news = items
            .iter()
            .position(|item| matches!(item, NavItem::Entry(e) if e.action == NavAction::Open(ViewId::News)))
            .expect("news entry");
        assert_eq!(admin_header, news + 1);
    }

    #[test]
    fn test_group_highlighting() {
        let registry = Registry::default();
        let admin = roles(&[Role::Admin]);

        for active in [ViewId::ReportConstructor, ViewId::ReportEditor] {
            let items = compose(&registry, &admin, Some(active));
            assert!(find(&items, ViewId::ReportConstructor).unwrap().is_active);
            assert!(!find(&items, ViewId::RequestConstructor).unwrap().is_active);
            assert_eq!(entries(&items).iter().filter(|e| e.is_active).count(), 1);
        }

        for active in [ViewId::Profile, ViewId::RequestEditor, ViewId::AdminPanel] {
            let items = compose(&registry, &admin, Some(active));
            assert!(!find(&items, ViewId::ReportConstructor).unwrap().is_active);
        }
    }

    #[test]
    fn test_no_active_view() {
        let items = compose(&Registry::default(), &roles(&[Role::Admin]), None);
        assert!(entries(&items).iter().all(|e| !e.is_active));
    }

    #[test]
    fn test_sign_out_is_last() {
        let registry = Registry::default();
        for set in [
            RoleSet::new(),
            roles(&[Role::Employee]),
            roles(&[Role::Admin, Role::Teacher]),
        ] {
            let items = compose(&registry, &set, Some(ViewId::Profile));
            assert!(matches!(
                items.last(),
                Some(NavItem::Entry(NavEntry {
                    action: NavAction::SignOut,
                    ..
                }))
            ));
        }
    }
}

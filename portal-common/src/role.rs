//! Portal roles and role sets
//!
//! Roles are the labels a user is granted by the portal backend. They carry no
//! hierarchy: visibility is decided by set intersection only.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, EnumIter, EnumString, IntoEnumIterator};

/// A role label granted to a portal user
///
/// The wire form is the Russian label used by the backend (e.g. "Админ").
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, EnumIter, EnumString, Serialize,
    Deserialize,
)]
pub enum Role {
    /// Staff member
    #[strum(serialize = "Сотрудник")]
    #[serde(rename = "Сотрудник")]
    Employee,
    /// Enrolled student
    #[strum(serialize = "Студент")]
    #[serde(rename = "Студент")]
    Student,
    /// Teaching staff
    #[strum(serialize = "Преподаватель")]
    #[serde(rename = "Преподаватель")]
    Teacher,
    /// Portal administrator
    #[strum(serialize = "Админ")]
    #[serde(rename = "Админ")]
    Admin,
}

impl Role {
    /// Wire label of the role
    pub fn as_str(&self) -> &str {
        self.as_ref()
    }

    /// Parse a wire label into a role.
    ///
    /// Labels are matched exactly. Anything outside the known vocabulary
    /// returns `None`, so a typo can never grant access.
    pub fn parse(label: &str) -> Option<Self> {
        label.parse().ok()
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The set of roles held by the current user
///
/// An empty set is valid: it denotes a viewer without assigned roles, who can
/// still reach unconditional views.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoleSet {
    roles: HashSet<Role>,
}

impl RoleSet {
    /// Create an empty role set
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a role set from wire labels, dropping labels that are not roles
    pub fn from_labels<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            roles: labels
                .into_iter()
                .filter_map(|label| Role::parse(label.as_ref()))
                .collect(),
        }
    }

    /// Check if the set intersects `required`
    ///
    /// An empty `required` slice means "always visible" and returns `true`.
    pub fn has_any(&self, required: &[Role]) -> bool {
        required.is_empty() || required.iter().any(|role| self.roles.contains(role))
    }

    pub fn contains(&self, role: Role) -> bool {
        self.roles.contains(&role)
    }

    /// Add a role; returns `false` if it was already present
    pub fn insert(&mut self, role: Role) -> bool {
        self.roles.insert(role)
    }

    /// Remove a role; returns `false` if it was not present
    pub fn remove(&mut self, role: Role) -> bool {
        self.roles.remove(&role)
    }

    /// Flip membership of a role and return whether it is now held
    pub fn toggle(&mut self, role: Role) -> bool {
        if self.roles.remove(&role) {
            false
        } else {
            self.roles.insert(role);
            true
        }
    }

    pub fn is_empty(&self) -> bool {
        self.roles.is_empty()
    }

    pub fn len(&self) -> usize {
        self.roles.len()
    }

    /// Iterate held roles in declaration order (stable for display)
    pub fn iter(&self) -> impl Iterator<Item = Role> + '_ {
        Role::iter().filter(|role| self.roles.contains(role))
    }
}

impl FromIterator<Role> for RoleSet {
    fn from_iter<I: IntoIterator<Item = Role>>(iter: I) -> Self {
        Self {
            roles: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ALL_ROLES;

    #[test]
    fn test_role_labels() {
        assert_eq!(Role::Employee.as_str(), "Сотрудник");
        assert_eq!(Role::Student.as_str(), "Студент");
        assert_eq!(Role::Teacher.as_str(), "Преподаватель");
        assert_eq!(Role::Admin.as_str(), "Админ");
    }

    #[test]
    fn test_role_parse_invalid() {
        assert_eq!(Role::parse(""), None);
        assert_eq!(Role::parse("Admin"), None);
        assert_eq!(Role::parse("админ"), None); // Wrong case
        assert_eq!(Role::parse("Админ "), None);
    }

    #[test]
    fn test_role_enum_matches_all_roles() {
        for label in ALL_ROLES {
            assert!(
                Role::parse(label).is_some(),
                "ALL_ROLES contains '{}' but Role::parse() doesn't recognize it",
                label
            );
        }
        for role in Role::iter() {
            assert!(ALL_ROLES.contains(&role.as_str()));
            assert_eq!(Role::parse(role.as_str()), Some(role));
        }
        assert_eq!(Role::iter().count(), ALL_ROLES.len());
    }

    #[test]
    fn test_role_serde_uses_labels() {
        let json = serde_json::to_string(&Role::Admin).expect("serialize");
        assert_eq!(json, "\"Админ\"");
        let role: Role = serde_json::from_str("\"Студент\"").expect("deserialize");
        assert_eq!(role, Role::Student);
        assert!(serde_json::from_str::<Role>("\"Guest\"").is_err());
    }

    #[test]
    fn test_has_any_empty_required_is_always_true() {
        assert!(RoleSet::new().has_any(&[]));
        assert!(RoleSet::from_iter([Role::Admin]).has_any(&[]));
    }

    #[test]
    fn test_has_any_intersection() {
        let roles = RoleSet::from_iter([Role::Student, Role::Employee]);
        assert!(roles.has_any(&[Role::Student]));
        assert!(roles.has_any(&[Role::Admin, Role::Employee]));
        assert!(!roles.has_any(&[Role::Admin]));
        assert!(!roles.has_any(&[Role::Admin, Role::Teacher]));
    }

    #[test]
    fn test_empty_set_matches_nothing_required() {
        let roles = RoleSet::new();
        for role in Role::iter() {
            assert!(!roles.has_any(&[role]));
        }
    }

    #[test]
    fn test_from_labels_drops_unknown() {
        let roles = RoleSet::from_labels(["Админ", "Guest", "Студент", "Студент"]);
        assert_eq!(roles.len(), 2);
        assert!(roles.contains(Role::Admin));
        assert!(roles.contains(Role::Student));
    }

    #[test]
    fn test_toggle() {
        let mut roles = RoleSet::new();
        assert!(roles.toggle(Role::Admin));
        assert!(roles.contains(Role::Admin));
        assert!(!roles.toggle(Role::Admin));
        assert!(roles.is_empty());
    }

    #[test]
    fn test_insert_remove() {
        let mut roles = RoleSet::new();
        assert!(roles.insert(Role::Teacher));
        assert!(!roles.insert(Role::Teacher));
        assert!(roles.remove(Role::Teacher));
        assert!(!roles.remove(Role::Teacher));
    }

    #[test]
    fn test_iter_declaration_order() {
        let roles = RoleSet::from_iter([Role::Admin, Role::Employee, Role::Teacher]);
        let ordered: Vec<Role> = roles.iter().collect();
        assert_eq!(ordered, vec![Role::Employee, Role::Teacher, Role::Admin]);
    }
}

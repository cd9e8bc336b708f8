//! User profile returned by the portal backend

use serde::{Deserialize, Serialize};

use crate::role::RoleSet;

/// Profile of the signed-in user
///
/// `roles` holds raw wire labels; unknown labels are kept here so they can be
/// reported, and dropped when converting to a [`RoleSet`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: u64,

    #[serde(default)]
    pub full_name: String,

    #[serde(default)]
    pub roles: Vec<String>,

    #[serde(default)]
    pub email: String,

    #[serde(default)]
    pub phone: String,

    /// Birth date as sent by the backend (ISO 8601 date)
    #[serde(default)]
    pub birth_date: String,
}

impl UserProfile {
    /// Role set derived from the profile's labels
    pub fn role_set(&self) -> RoleSet {
        RoleSet::from_labels(&self.roles)
    }

    /// Labels that do not name a known role
    pub fn unknown_roles(&self) -> impl Iterator<Item = &str> {
        self.roles
            .iter()
            .map(String::as_str)
            .filter(|label| crate::role::Role::parse(label).is_none())
    }
}

//! Portal Common Library
//!
//! Shared types for the portal client: roles, form definitions, user profiles
//! and validators.

pub mod form;
pub mod profile;
pub mod role;
pub mod validators;

pub use form::{FormCategory, FormDefinition, FormError, FormId};
pub use profile::UserProfile;
pub use role::{Role, RoleSet};

/// All role labels known to the portal.
///
/// These strings must match the backend's labels exactly (they are not
/// translated). The list is maintained in declaration order of [`Role`].
///
/// Role meanings:
/// - `Сотрудник`: staff member (applications, reports, news)
/// - `Студент`: student (applications, schedule, study plan, news)
/// - `Преподаватель`: teaching staff (reports, schedule, teaching load, news)
/// - `Админ`: administrator (admin panel, form constructors)
pub const ALL_ROLES: &[&str] = &["Сотрудник", "Студент", "Преподаватель", "Админ"];

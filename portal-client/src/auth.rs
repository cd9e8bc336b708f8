//! Authentication collaborator
//!
//! The portal backend owns sign-in and token issuance. The client only asks
//! for the signed-in user's profile and tells the provider when the session
//! ends.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use portal_common::UserProfile;

use crate::constants::PROFILE_TIMEOUT;

/// Why a profile could not be obtained
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    #[error("profile source unavailable: {0}")]
    Unavailable(String),

    #[error("profile is malformed: {0}")]
    Malformed(String),

    #[error("profile request timed out")]
    TimedOut,
}

/// Source of the signed-in user's profile
#[async_trait]
pub trait AuthProvider: Send + Sync {
    /// Fetch the profile of the signed-in user
    async fn get_user_profile(&self) -> Result<UserProfile, AuthError>;

    /// End the session with the provider
    fn logout(&self);
}

/// Reads the profile from a JSON file
///
/// Stands in for the portal backend on a desktop install: whatever signs the
/// user in drops `profile.json` next to the config file.
#[derive(Debug, Clone)]
pub struct LocalProfileProvider {
    path: Option<PathBuf>,
}

impl LocalProfileProvider {
    pub fn new(path: Option<PathBuf>) -> Self {
        Self { path }
    }
}

#[async_trait]
impl AuthProvider for LocalProfileProvider {
    async fn get_user_profile(&self) -> Result<UserProfile, AuthError> {
        let path = self
            .path
            .as_ref()
            .ok_or_else(|| AuthError::Unavailable("no config directory".to_string()))?;

        let contents = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| AuthError::Unavailable(format!("{}: {e}", path.display())))?;

        serde_json::from_str(&contents).map_err(|e| AuthError::Malformed(e.to_string()))
    }

    fn logout(&self) {
        tracing::info!("Session ended");
    }
}

/// Fetch the profile, giving up after [`PROFILE_TIMEOUT`]
pub async fn fetch_profile(provider: Arc<dyn AuthProvider>) -> Result<UserProfile, AuthError> {
    fetch_profile_with_timeout(provider, PROFILE_TIMEOUT).await
}

pub async fn fetch_profile_with_timeout(
    provider: Arc<dyn AuthProvider>,
    limit: Duration,
) -> Result<UserProfile, AuthError> {
    match tokio::time::timeout(limit, provider.get_user_profile()).await {
        Ok(result) => result,
        Err(_) => Err(AuthError::TimedOut),
    }
}

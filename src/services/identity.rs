//! The slice of the external identity provider this crate depends on: a
//! stable user id and an optional display name.

use crate::types::errors::AuthError;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserIdentity {
    pub uid: String,
    pub username: Option<String>,
}

impl UserIdentity {
    pub fn new(uid: impl Into<String>, username: Option<String>) -> Self {
        Self {
            uid: uid.into(),
            username,
        }
    }

    /// Name used in greetings; falls back to `"User"`.
    pub fn greeting_name(&self) -> &str {
        self.username
            .as_deref()
            .filter(|name| !name.trim().is_empty())
            .unwrap_or("User")
    }
}

#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// `Ok(None)` means nobody is signed in.
    async fn current_user(&self) -> Result<Option<UserIdentity>, AuthError>;
}

/// Provider answering with a fixed identity (CLI flags or environment).
#[derive(Debug, Clone, Default)]
pub struct StaticIdentity {
    user: Option<UserIdentity>,
}

impl StaticIdentity {
    pub fn new(user: Option<UserIdentity>) -> Self {
        Self { user }
    }
}

#[async_trait]
impl IdentityProvider for StaticIdentity {
    async fn current_user(&self) -> Result<Option<UserIdentity>, AuthError> {
        Ok(self.user.clone())
    }
}

/// Outcome of an identity check. Protected content is only available in
/// [`AuthState::SignedIn`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum AuthState {
    #[default]
    Loading,
    SignedIn(UserIdentity),
    SignedOut,
    Failed(String),
}

impl AuthState {
    /// Ask the provider once. Failures are reported, never retried.
    pub async fn resolve(provider: &dyn IdentityProvider) -> Self {
        match provider.current_user().await {
            Ok(Some(user)) => AuthState::SignedIn(user),
            Ok(None) => AuthState::SignedOut,
            Err(e) => {
                log::error!("Identity check failed: {e}");
                AuthState::Failed(e.to_string())
            }
        }
    }

    pub fn require_user(&self) -> Result<&UserIdentity, AuthError> {
        match self {
            AuthState::SignedIn(user) => Ok(user),
            AuthState::SignedOut => Err(AuthError::SignedOut),
            AuthState::Loading => Err(AuthError::Pending),
            AuthState::Failed(reason) => Err(AuthError::Provider(reason.clone())),
        }
    }
}

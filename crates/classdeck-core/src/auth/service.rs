use serde_json::json;
use thiserror::Error;
use tracing::{debug, warn};

use crate::api::{error::body_message, ApiClient, ApiError};
use crate::extract;
use crate::models::UserProfile;
use crate::storage::{keys, CredentialStore, StorageError};

use super::AuthState;

/// Accepted token field names in the login response, in priority order.
pub const TOKEN_KEYS: [&str; 2] = ["token", "idToken"];

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("login rejected: {0}")]
    InvalidCredentials(String),

    #[error("login response contained no session token")]
    MissingToken,

    #[error("network error during authentication: {0}")]
    Network(#[source] reqwest::Error),

    #[error("unexpected authentication response: {0}")]
    InvalidResponse(String),

    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Login, logout, and session-state queries.
/// Clone is cheap - both handles share their underlying state.
#[derive(Clone)]
pub struct AuthService {
    api: ApiClient,
    store: CredentialStore,
}

impl AuthService {
    pub fn new(api: ApiClient, store: CredentialStore) -> Self {
        Self { api, store }
    }

    /// Authenticate against the backend.
    ///
    /// On success the session token (whichever of `token`/`idToken` the
    /// server used, first present wins) and the whole response body are
    /// persisted; the body is returned as the user's profile. On failure
    /// nothing is persisted and the session state is unchanged.
    pub async fn login(&self, email: &str, password: &str) -> Result<UserProfile, AuthError> {
        let body = json!({ "email": email, "password": password });
        let response = self
            .api
            .post_value("/auth/login", &body)
            .await
            .map_err(|err| match err {
                ApiError::Server { status, body } => AuthError::InvalidCredentials(
                    body_message(&body)
                        .unwrap_or_else(|| format!("server returned status {}", status)),
                ),
                ApiError::Network(e) => AuthError::Network(e),
                ApiError::Storage(e) => AuthError::Storage(e),
                other => AuthError::InvalidResponse(other.to_string()),
            })?;

        let token =
            extract::first_string(&response, &TOKEN_KEYS).ok_or(AuthError::MissingToken)?;

        self.store.set(keys::TOKEN, &token).await?;
        self.store
            .set(keys::USER_PROFILE, &response.to_string())
            .await?;

        debug!(email, "login succeeded; session token stored");
        Ok(UserProfile::from_value(response))
    }

    /// Drop the session. Idempotent - logging out while already logged out
    /// succeeds and leaves the token absent.
    pub async fn logout(&self) -> Result<(), StorageError> {
        self.store.remove(keys::TOKEN).await?;
        self.store.remove(keys::USER_PROFILE).await?;
        // Full sweep: anything else session-scoped goes too
        self.store.clear().await?;
        debug!("logged out; credential store cleared");
        Ok(())
    }

    /// The stored session token, if any.
    pub async fn token(&self) -> Result<Option<String>, StorageError> {
        self.store.get(keys::TOKEN).await
    }

    /// True iff a non-empty session token is stored.
    pub async fn is_authenticated(&self) -> Result<bool, StorageError> {
        Ok(self
            .token()
            .await?
            .map(|t| !t.is_empty())
            .unwrap_or(false))
    }

    /// The stored profile blob, if any. A blob that no longer parses is a
    /// storage fault, not an absent profile.
    pub async fn profile(&self) -> Result<Option<UserProfile>, StorageError> {
        match self.store.get(keys::USER_PROFILE).await? {
            Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
            None => Ok(None),
        }
    }

    /// Overwrite the stored profile blob (profile edits work the same way
    /// login does - whole-blob replacement).
    pub async fn set_profile(&self, profile: &UserProfile) -> Result<(), StorageError> {
        let raw = serde_json::to_string(profile.as_value())?;
        self.store.set(keys::USER_PROFILE, &raw).await
    }

    /// The explicit session state for exhaustive handling at the UI boundary.
    pub async fn state(&self) -> Result<AuthState, StorageError> {
        match self.token().await?.filter(|t| !t.is_empty()) {
            Some(token) => {
                let profile = match self.profile().await {
                    Ok(profile) => profile,
                    Err(err) => {
                        warn!(error = %err, "profile blob unreadable; reporting token-only session");
                        None
                    }
                };
                Ok(AuthState::Authenticated { token, profile })
            }
            None => Ok(AuthState::Unauthenticated),
        }
    }
}

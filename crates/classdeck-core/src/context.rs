//! The composition root.
//!
//! `AppContext` owns the credential store and wires the HTTP client and
//! services together. A UI layer constructs one of these at startup and
//! calls through it; nothing in this crate reads ambient global state, so
//! tests (and alternative frontends) can build contexts against their own
//! storage paths and base URLs.

use std::path::PathBuf;

use anyhow::{Context as _, Result};

use crate::api::ApiClient;
use crate::auth::{AuthService, AuthState};
use crate::classroom::ClassroomService;
use crate::config::Config;
use crate::storage::{CredentialStore, StorageError};

pub struct AppContext {
    pub config: Config,
    pub store: CredentialStore,
    pub auth: AuthService,
    pub classroom: ClassroomService,
}

impl AppContext {
    /// Build a context from the on-disk configuration and the default
    /// credential store location.
    pub async fn new() -> Result<Self> {
        let config = Config::load().context("Failed to load configuration")?;
        let store_path = Config::credentials_path()?;
        Self::with_config(config, store_path).await
    }

    /// Build a context against an explicit configuration and store path.
    pub async fn with_config(config: Config, store_path: PathBuf) -> Result<Self> {
        let store = CredentialStore::open(store_path)
            .await
            .context("Failed to open credential store")?;
        let api = ApiClient::new(&config.api_base_url, store.clone())
            .context("Failed to build API client")?;
        let auth = AuthService::new(api.clone(), store.clone());
        let classroom = ClassroomService::new(api, store.clone());

        Ok(Self {
            config,
            store,
            auth,
            classroom,
        })
    }

    /// The session state, for exhaustive handling at the UI boundary.
    pub async fn auth_state(&self) -> Result<AuthState, StorageError> {
        self.auth.state().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_login_then_join_flow_through_one_context() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/auth/login"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "token": "tok-ctx",
                "email": "a@b.c"
            })))
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(path("/classrooms/join"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({"classroomId": "c1"})),
            )
            .mount(&server)
            .await;

        let dir = tempfile::tempdir().unwrap();
        let config = Config {
            api_base_url: server.uri(),
            last_email: None,
        };
        let ctx = AppContext::with_config(config, dir.path().join("credentials.json"))
            .await
            .unwrap();

        assert_eq!(ctx.auth_state().await.unwrap(), AuthState::Unauthenticated);

        ctx.auth.login("a@b.c", "pw").await.unwrap();
        let state = ctx.auth_state().await.unwrap();
        assert_eq!(state.token(), Some("tok-ctx"));

        ctx.classroom.join_classroom("CODE").await.unwrap();
        assert_eq!(
            ctx.classroom.current_classroom().await.unwrap().as_deref(),
            Some("c1")
        );

        // The join request carried the freshly stored token
        let requests = server.received_requests().await.unwrap();
        let join = requests
            .iter()
            .find(|r| r.url.path() == "/classrooms/join")
            .unwrap();
        assert_eq!(join.headers.get("authorization").unwrap(), "Bearer tok-ctx");

        // Logout clears everything, including the classroom reference
        ctx.auth.logout().await.unwrap();
        assert_eq!(ctx.auth_state().await.unwrap(), AuthState::Unauthenticated);
        assert_eq!(ctx.classroom.current_classroom().await.unwrap(), None);
    }
}

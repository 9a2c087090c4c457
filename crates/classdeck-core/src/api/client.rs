//! HTTP client for the classroom backend API.
//!
//! A single configured client bound to one base URL. Before every outgoing
//! request it reads the session token from the credential store; when a token
//! is present it is attached as `Authorization: Bearer <token>`, when absent
//! the request goes out without the header - the server is the source of
//! truth for authorization failures, nothing is blocked client-side.

use reqwest::{header, Client, RequestBuilder};
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;
use tracing::{debug, warn};

use crate::storage::{keys, CredentialStore};

use super::ApiError;

/// Default API base for the hosted backend.
pub const DEFAULT_BASE_URL: &str = "https://anouvot.web.app/api/v1";

/// HTTP request timeout in seconds.
/// 30s allows for slow API responses while failing fast enough for good UX.
const REQUEST_TIMEOUT_SECS: u64 = 30;

/// API client for the classroom backend.
/// Clone is cheap - reqwest::Client uses Arc internally for connection pooling.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
    store: CredentialStore,
}

impl ApiClient {
    /// Create a new API client against `base_url`, reading tokens from `store`.
    pub fn new(base_url: impl Into<String>, store: CredentialStore) -> Result<Self, ApiError> {
        let mut default_headers = header::HeaderMap::new();
        default_headers.insert(
            header::CONTENT_TYPE,
            header::HeaderValue::from_static("application/json"),
        );

        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .default_headers(default_headers)
            .build()
            .map_err(ApiError::Network)?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            store,
        })
    }

    /// GET `path`, parsing the response body as `T`.
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let value = self.get_value(path).await?;
        serde_json::from_value(value)
            .map_err(|e| ApiError::InvalidResponse(format!("response from {path}: {e}")))
    }

    /// GET `path`, returning the raw JSON body.
    pub async fn get_value(&self, path: &str) -> Result<Value, ApiError> {
        let request = self.client.get(self.url(path));
        self.execute(request, "GET", path).await
    }

    /// POST `body` to `path`, parsing the response body as `T`.
    pub async fn post<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let value = self.post_value(path, body).await?;
        serde_json::from_value(value)
            .map_err(|e| ApiError::InvalidResponse(format!("response from {path}: {e}")))
    }

    /// POST `body` to `path`, returning the raw JSON body.
    pub async fn post_value<B: Serialize>(&self, path: &str, body: &B) -> Result<Value, ApiError> {
        let request = self.client.post(self.url(path)).json(body);
        self.execute(request, "POST", path).await
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    // Token lookup happens here, before header construction, before dispatch.
    // Every call goes through this path - no per-call header boilerplate.
    async fn auth_headers(&self) -> Result<header::HeaderMap, ApiError> {
        let mut headers = header::HeaderMap::new();
        match self.store.get(keys::TOKEN).await? {
            Some(token) if !token.is_empty() => {
                debug!(token = %mask_token(&token), "attaching bearer token");
                let value = header::HeaderValue::from_str(&format!("Bearer {}", token))
                    .map_err(|e| {
                        ApiError::InvalidResponse(format!("stored token is not header-safe: {e}"))
                    })?;
                headers.insert(header::AUTHORIZATION, value);
            }
            _ => {
                warn!("no session token in store; request will be unauthenticated");
            }
        }
        Ok(headers)
    }

    async fn execute(
        &self,
        request: RequestBuilder,
        method: &str,
        path: &str,
    ) -> Result<Value, ApiError> {
        let request = request.headers(self.auth_headers().await?);

        debug!(method, path, "dispatching API request");
        let response = request.send().await.map_err(ApiError::Network)?;

        let status = response.status();
        let text = response.text().await.map_err(ApiError::Network)?;

        if !status.is_success() {
            warn!(method, path, status = status.as_u16(), "API request failed");
            return Err(ApiError::server(status, &text));
        }

        if text.is_empty() {
            return Ok(Value::Null);
        }
        serde_json::from_str(&text)
            .map_err(|e| ApiError::InvalidResponse(format!("response from {path}: {e}")))
    }
}

/// Mask a token for logging: keep a few characters at each end so sessions
/// can be told apart, never the whole credential. The token is opaque
/// server-supplied data, so counting is by char, not byte.
fn mask_token(token: &str) -> String {
    let count = token.chars().count();
    if count > 20 {
        let head: String = token.chars().take(10).collect();
        let tail: String = token.chars().skip(count - 10).collect();
        format!("{}...{}", head, tail)
    } else {
        "***".to_string()
    }
}

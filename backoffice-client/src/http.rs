//! HTTP client core
//!
//! One shared client carries the whole authentication and
//! error-surfacing protocol:
//!
//! - every outgoing call attaches the session token (when present)
//!   under [`AUTH_HEADER`];
//! - every decoded body is inspected for a business status,
//!   independently of the transport status code. Business code 401
//!   runs the unauthorized sequence exactly once (latch-guarded);
//!   any other non-200 business code surfaces a notice but the
//!   envelope is still returned to the caller, which branches on
//!   `code` itself.

use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use reqwest::{multipart, Client, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;

use shared::{ApiEnvelope, CODE_SUCCESS, CODE_UNAUTHORIZED};

use crate::config::ClientConfig;
use crate::error::{ClientError, ClientResult};
use crate::navigate::{Navigator, NoopNavigator, LOGIN_PAGE};
use crate::notify::{Notifier, NoopNotifier};
use crate::session::SessionStore;

/// Header carrying the session token on every outgoing call
pub const AUTH_HEADER: http::HeaderName = http::HeaderName::from_static("x-auth-token");

/// Fallback notice when an error body carries no usable message
const DEFAULT_ERROR_MESSAGE: &str = "Request failed";

/// Fallback notice for the unauthorized sequence
const LOGIN_EXPIRED_MESSAGE: &str = "Login expired, please sign in again";

/// Shared HTTP client for the back-office API.
///
/// Clones share the session store and the unauthorized latch, so a
/// client can be handed out freely across tasks.
#[derive(Clone)]
pub struct BackofficeClient {
    client: Client,
    base_url: String,
    session: SessionStore,
    notifier: Arc<dyn Notifier>,
    navigator: Arc<dyn Navigator>,
    handling_unauthorized: Arc<AtomicBool>,
}

impl fmt::Debug for BackofficeClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BackofficeClient")
            .field("base_url", &self.base_url)
            .field("has_token", &self.session.has())
            .finish()
    }
}

impl BackofficeClient {
    /// Create a client from configuration, with no-op UI seams
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout))
            .build()?;

        let session = match &config.storage_dir {
            Some(dir) => SessionStore::persistent(dir),
            None => SessionStore::in_memory(),
        };

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            session,
            notifier: Arc::new(NoopNotifier),
            navigator: Arc::new(NoopNavigator),
            handling_unauthorized: Arc::new(AtomicBool::new(false)),
        })
    }

    /// Attach a notification presenter
    pub fn with_notifier(mut self, notifier: Arc<dyn Notifier>) -> Self {
        self.notifier = notifier;
        self
    }

    /// Attach a navigable surface
    pub fn with_navigator(mut self, navigator: Arc<dyn Navigator>) -> Self {
        self.navigator = navigator;
        self
    }

    /// Base URL of the remote service
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Session token store
    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    /// Re-arm the unauthorized latch. Called after a fresh login so a
    /// later genuine 401 is handled again instead of silently ignored.
    pub(crate) fn reset_unauthorized_latch(&self) {
        self.handling_unauthorized.store(false, Ordering::SeqCst);
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn apply_auth(&self, request: RequestBuilder) -> RequestBuilder {
        match self.session.get() {
            Some(token) => request.header(AUTH_HEADER, token),
            None => request,
        }
    }

    /// Make a GET request
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<ApiEnvelope<T>> {
        tracing::debug!(path, "GET");
        let request = self.apply_auth(self.client.get(self.url(path)));
        self.handle_response(request.send().await?).await
    }

    /// Make a GET request with a query string
    pub async fn get_with_query<T: DeserializeOwned, Q: serde::Serialize + Sync>(
        &self,
        path: &str,
        query: &Q,
    ) -> ClientResult<ApiEnvelope<T>> {
        tracing::debug!(path, "GET");
        let request = self.apply_auth(self.client.get(self.url(path)).query(query));
        self.handle_response(request.send().await?).await
    }

    /// Make a POST request with a JSON body
    pub async fn post<T: DeserializeOwned, B: serde::Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<ApiEnvelope<T>> {
        tracing::debug!(path, "POST");
        let request = self.apply_auth(self.client.post(self.url(path)).json(body));
        self.handle_response(request.send().await?).await
    }

    /// Make a PUT request with a JSON body
    pub async fn put<T: DeserializeOwned, B: serde::Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<ApiEnvelope<T>> {
        tracing::debug!(path, "PUT");
        let request = self.apply_auth(self.client.put(self.url(path)).json(body));
        self.handle_response(request.send().await?).await
    }

    /// Make a DELETE request with a JSON body
    pub async fn delete_with_body<T: DeserializeOwned, B: serde::Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<ApiEnvelope<T>> {
        tracing::debug!(path, "DELETE");
        let request = self.apply_auth(self.client.delete(self.url(path)).json(body));
        self.handle_response(request.send().await?).await
    }

    /// Make a POST request with a multipart body (file uploads)
    pub async fn post_multipart<T: DeserializeOwned>(
        &self,
        path: &str,
        form: multipart::Form,
    ) -> ClientResult<ApiEnvelope<T>> {
        tracing::debug!(path, "POST multipart");
        let request = self.apply_auth(self.client.post(self.url(path)).multipart(form));
        self.handle_response(request.send().await?).await
    }

    /// Inspect a completed transport round-trip.
    ///
    /// 2xx with business code 401, or a transport-level 401, runs the
    /// latch-guarded unauthorized sequence and fails the call. 2xx with
    /// any other non-200 business code notifies and still returns the
    /// decoded envelope unchanged.
    async fn handle_response<T: DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> ClientResult<ApiEnvelope<T>> {
        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            let body: Option<Value> = serde_json::from_str(&text).ok();
            let embedded = body.as_ref().and_then(business_code);
            if status == StatusCode::UNAUTHORIZED || embedded == Some(CODE_UNAUTHORIZED) {
                self.handle_unauthorized(body.as_ref().and_then(business_message));
                return Err(ClientError::Unauthorized);
            }
            return Err(match status {
                StatusCode::FORBIDDEN => ClientError::Forbidden(text),
                StatusCode::NOT_FOUND => ClientError::NotFound(text),
                StatusCode::BAD_REQUEST => ClientError::Validation(text),
                _ => ClientError::Internal(text),
            });
        }

        let body: Value = serde_json::from_str(&text)?;
        match business_code(&body) {
            Some(CODE_UNAUTHORIZED) => {
                self.handle_unauthorized(business_message(&body));
                Err(ClientError::Unauthorized)
            }
            Some(code) if code != CODE_SUCCESS => {
                let message =
                    business_message(&body).unwrap_or_else(|| DEFAULT_ERROR_MESSAGE.to_string());
                tracing::debug!(code, message = %message, "Business error surfaced");
                self.notifier.error(&message, None);
                serde_json::from_value(body).map_err(Into::into)
            }
            _ => serde_json::from_value(body).map_err(Into::into),
        }
    }

    /// Unauthorized sequence: notify once, drop the token, redirect to
    /// the login page unless already there. The latch collapses
    /// concurrent failures into a single action; it stays set until the
    /// next successful login re-arms it.
    fn handle_unauthorized(&self, message: Option<String>) {
        if self
            .handling_unauthorized
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_err()
        {
            tracing::debug!("Unauthorized handling already in flight");
            return;
        }

        let message = message.unwrap_or_else(|| LOGIN_EXPIRED_MESSAGE.to_string());
        tracing::info!(message = %message, "Session rejected, forcing logout");
        self.notifier.error(&message, None);

        if let Err(e) = self.session.clear() {
            tracing::warn!(error = %e, "Failed to clear session token");
        }

        if self.navigator.current_location().as_deref() != Some(LOGIN_PAGE) {
            self.navigator.goto(LOGIN_PAGE);
        }
    }
}

/// Business status of a decoded body: `code` primary, `status` fallback
fn business_code(body: &Value) -> Option<i32> {
    body.get("code")
        .or_else(|| body.get("status"))
        .and_then(Value::as_i64)
        .map(|code| code as i32)
}

/// Error message of a decoded body: `message` primary, `msg` is a
/// compatibility fallback for older server builds
fn business_message(body: &Value) -> Option<String> {
    body.get("message")
        .or_else(|| body.get("msg"))
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

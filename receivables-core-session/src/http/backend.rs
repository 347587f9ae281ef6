use receivables_core_api::domain::envelope::ApiResponse;
use receivables_core_api::error::{ApiError, ApiResult};
use receivables_core_db::repository::session_storage::SessionStorage;
use receivables_core_db::repository::storage_key::StorageKey;
use reqwest::RequestBuilder;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::sync::Arc;

use crate::auth::auth_session::{AuthSession, SESSION_EXPIRED_MESSAGE};
use crate::config::ClientConfig;
use crate::error::{SessionError, SessionResult};

const SKIP_TUNNEL_WARNING_HEADER: &str = "ngrok-skip-browser-warning";

/// REST client for the receivables backend
///
/// Every request carries the stored login token as a bearer credential. A
/// `403` answer means the token is no longer accepted, so the attached
/// [`AuthSession`] is signed out before the error reaches the caller.
pub struct HttpBackend {
    client: reqwest::Client,
    base_url: String,
    storage: Arc<dyn SessionStorage>,
    auth: Option<Arc<AuthSession>>,
}

impl HttpBackend {
    pub fn new(
        config: &ClientConfig,
        storage: Arc<dyn SessionStorage>,
        auth: Option<Arc<AuthSession>>,
    ) -> SessionResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()
            .map_err(|error| SessionError::Client(error.to_string()))?;

        Ok(Self {
            client,
            base_url: config.api_url.trim_end_matches('/').to_string(),
            storage,
            auth,
        })
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub(crate) fn client(&self) -> &reqwest::Client {
        &self.client
    }

    async fn token(&self) -> Option<String> {
        match self.storage.load(StorageKey::LoginToken).await {
            Ok(token) => token.filter(|token| !token.is_empty()),
            Err(error) => {
                tracing::warn!(%error, "could not read login token");
                None
            }
        }
    }

    /// Send a request and decode the response envelope
    pub(crate) async fn send<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
    ) -> ApiResult<ApiResponse<T>> {
        let mut request = request.header(SKIP_TUNNEL_WARNING_HEADER, "true");
        if let Some(token) = self.token().await {
            request = request.bearer_auth(token);
        }

        let response = request
            .send()
            .await
            .map_err(|error| ApiError::Transport(error.to_string()))?;
        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|error| ApiError::Transport(error.to_string()))?;

        if !status.is_success() {
            let error = ApiError::from_status(status.as_u16(), error_message(&body));
            tracing::warn!(status = status.as_u16(), %error, "backend request failed");
            if error.is_forbidden() {
                self.expire_session().await;
            }
            return Err(error);
        }

        Ok(serde_json::from_slice(&body)?)
    }

    async fn expire_session(&self) {
        let Some(auth) = &self.auth else {
            return;
        };
        if let Err(error) = auth.sign_out(Some(SESSION_EXPIRED_MESSAGE)).await {
            tracing::warn!(%error, "sign-out after rejected token failed");
        }
    }
}

/// Pick the most useful message out of an error body
///
/// Prefers the envelope `message`, then the raw text.
pub(crate) fn error_message(body: &[u8]) -> String {
    if let Ok(envelope) = serde_json::from_slice::<ApiResponse<Value>>(body) {
        if !envelope.message.is_empty() {
            return envelope.message;
        }
    }
    let text = String::from_utf8_lossy(body).trim().to_string();
    if text.is_empty() {
        "request failed".to_string()
    } else {
        text
    }
}

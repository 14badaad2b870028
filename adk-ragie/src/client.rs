//! The remote Ragie client.
//!
//! [`RagieClient`] is the seam between the retriever and the service; tests
//! substitute their own implementation. [`HttpRagieClient`] talks to the real
//! `/retrievals` endpoint with `reqwest`.

use std::sync::OnceLock;

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use crate::credentials::ApiKey;
use crate::error::{RagieError, Result};
use crate::request::RetrievalRequest;
use crate::response::RetrievalResult;

const USER_AGENT: &str = concat!("adk-ragie/", env!("CARGO_PKG_VERSION"));

/// A client able to run a retrieval against Ragie.
///
/// Implementations must pass the request through as given and report
/// failures as errors; retries and timeouts are their own business.
#[async_trait]
pub trait RagieClient: Send + Sync {
    /// Run the retrieval, blocking the current thread until it completes.
    fn retrieve(&self, request: &RetrievalRequest) -> Result<RetrievalResult>;

    /// Run the retrieval asynchronously.
    async fn retrieve_async(&self, request: &RetrievalRequest) -> Result<RetrievalResult>;
}

/// A [`RagieClient`] backed by the Ragie HTTP API.
///
/// The async `reqwest::Client` is built up front. The blocking client is
/// built on the first blocking call, because `reqwest::blocking` must not be
/// created or dropped from inside an async runtime.
pub struct HttpRagieClient {
    client: reqwest::Client,
    blocking: OnceLock<reqwest::blocking::Client>,
    api_key: ApiKey,
    endpoint: String,
}

impl HttpRagieClient {
    /// Create a client for the API at `server_url`.
    ///
    /// # Errors
    ///
    /// Returns [`RagieError::ConfigError`] if the HTTP client cannot be built.
    pub fn new(api_key: ApiKey, server_url: impl Into<String>) -> Result<Self> {
        let client = reqwest::Client::builder().user_agent(USER_AGENT).build().map_err(|e| {
            RagieError::ConfigError(format!("failed to build HTTP client: {e}"))
        })?;
        let endpoint = format!("{}/retrievals", server_url.into().trim_end_matches('/'));

        Ok(Self { client, blocking: OnceLock::new(), api_key, endpoint })
    }

    /// The full URL retrievals are posted to.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn blocking_client(&self) -> Result<&reqwest::blocking::Client> {
        if let Some(client) = self.blocking.get() {
            return Ok(client);
        }
        let client =
            reqwest::blocking::Client::builder().user_agent(USER_AGENT).build().map_err(|e| {
                RagieError::ConfigError(format!("failed to build blocking HTTP client: {e}"))
            })?;
        // A concurrent caller may have won the race; either client is fine.
        Ok(self.blocking.get_or_init(|| client))
    }
}

// ── Ragie API error body ───────────────────────────────────────────

#[derive(Deserialize)]
struct ErrorResponse {
    detail: Value,
}

fn transport_error(e: reqwest::Error) -> RagieError {
    RagieError::TransportError(format!("request failed: {e}"))
}

/// Turn a status and body into a retrieval result or the matching error.
fn decode(status: StatusCode, body: String) -> Result<RetrievalResult> {
    if !status.is_success() {
        let message = match serde_json::from_str::<ErrorResponse>(&body) {
            Ok(ErrorResponse { detail: Value::String(detail) }) => detail,
            Ok(ErrorResponse { detail }) => detail.to_string(),
            Err(_) => body,
        };
        return Err(RagieError::RemoteError { status: status.as_u16(), message });
    }

    serde_json::from_str(&body).map_err(|e| RagieError::MalformedResponse(e.to_string()))
}

// ── RagieClient implementation ─────────────────────────────────────

#[async_trait]
impl RagieClient for HttpRagieClient {
    fn retrieve(&self, request: &RetrievalRequest) -> Result<RetrievalResult> {
        let response = self
            .blocking_client()?
            .post(&self.endpoint)
            .bearer_auth(self.api_key.expose_secret())
            .json(request)
            .send()
            .map_err(transport_error)?;

        let status = response.status();
        let body = response.text().map_err(transport_error)?;
        debug!(status = status.as_u16(), body_len = body.len(), "ragie retrieval (blocking)");

        decode(status, body)
    }

    async fn retrieve_async(&self, request: &RetrievalRequest) -> Result<RetrievalResult> {
        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(self.api_key.expose_secret())
            .json(request)
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status();
        let body = response.text().await.map_err(transport_error)?;
        debug!(status = status.as_u16(), body_len = body.len(), "ragie retrieval");

        decode(status, body)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn string_detail_becomes_the_message() {
        let body = json!({"detail": "Invalid filter"}).to_string();
        let err = decode(StatusCode::BAD_REQUEST, body).unwrap_err();
        match err {
            RagieError::RemoteError { status, message } => {
                assert_eq!(status, 400);
                assert_eq!(message, "Invalid filter");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn structured_detail_is_rendered_as_json() {
        let body = json!({"detail": [{"loc": ["body", "top_k"], "msg": "bad"}]}).to_string();
        let err = decode(StatusCode::UNPROCESSABLE_ENTITY, body).unwrap_err();
        assert!(matches!(
            err,
            RagieError::RemoteError { status: 422, ref message } if message.contains("top_k")
        ));
    }

    #[test]
    fn non_json_error_body_is_kept_raw() {
        let err = decode(StatusCode::TOO_MANY_REQUESTS, "slow down".into()).unwrap_err();
        assert!(matches!(
            err,
            RagieError::RemoteError { status: 429, ref message } if message == "slow down"
        ));
    }

    #[test]
    fn malformed_success_body() {
        let err = decode(StatusCode::OK, json!({"chunks": []}).to_string()).unwrap_err();
        assert!(matches!(err, RagieError::MalformedResponse(_)));
    }

    #[test]
    fn endpoint_tolerates_trailing_slash() {
        let key = crate::credentials::resolve_api_key(Some("k".into()), |_| None).unwrap();
        let client = HttpRagieClient::new(key, "https://api.ragie.ai/").unwrap();
        assert_eq!(client.endpoint(), "https://api.ragie.ai/retrievals");
    }
}

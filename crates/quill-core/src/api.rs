//! HTTP transport for the blog API.
//!
//! Single-shot requests: no retry, no backoff. The store layer decides
//! success/failure handling entirely from one response. Non-2xx responses
//! are normalized to an [`ApiError`] carrying the server's `{ "message" }`
//! envelope when one is present.

use std::fmt;

use anyhow::Result;
use reqwest::Method;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use uuid::Uuid;

use crate::config::Config;

/// Standard User-Agent header for quill API requests.
pub const USER_AGENT: &str = concat!("quill/", env!("CARGO_PKG_VERSION"));

// ============================================================================
// Error normalization
// ============================================================================

/// Categories of API errors for consistent error handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiErrorKind {
    /// HTTP status error (4xx, 5xx)
    HttpStatus,
    /// Connection timeout or request timeout
    Timeout,
    /// Connection-level failure before any response arrived
    Network,
    /// Failed to parse the response body
    Parse,
}

impl fmt::Display for ApiErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiErrorKind::HttpStatus => write!(f, "http_status"),
            ApiErrorKind::Timeout => write!(f, "timeout"),
            ApiErrorKind::Network => write!(f, "network"),
            ApiErrorKind::Parse => write!(f, "parse"),
        }
    }
}

/// Normalized error from the API with kind and details.
#[derive(Debug, Clone)]
pub struct ApiError {
    /// Error category
    pub kind: ApiErrorKind,
    /// One-line summary suitable for display
    pub message: String,
    /// Optional additional details (e.g., raw error body)
    pub details: Option<String>,
    /// Whether `message` came out of the server's error envelope.
    from_server: bool,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(kind: ApiErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            details: None,
            from_server: false,
        }
    }

    /// Creates an HTTP status error, pulling the message out of the
    /// `{ "message": "..." }` error envelope when the body carries one.
    pub fn http_status(status: u16, body: &str) -> Self {
        if let Ok(json) = serde_json::from_str::<Value>(body)
            && let Some(msg) = json.get("message").and_then(|v| v.as_str())
            && !msg.trim().is_empty()
        {
            return Self {
                kind: ApiErrorKind::HttpStatus,
                message: msg.to_string(),
                details: Some(body.to_string()),
                from_server: true,
            };
        }

        Self {
            kind: ApiErrorKind::HttpStatus,
            message: format!("HTTP {status}"),
            details: (!body.is_empty()).then(|| body.to_string()),
            from_server: false,
        }
    }

    /// Creates a timeout error.
    pub fn timeout(message: impl Into<String>) -> Self {
        Self::new(ApiErrorKind::Timeout, message)
    }

    /// Creates a network error.
    pub fn network(message: impl Into<String>) -> Self {
        Self::new(ApiErrorKind::Network, message)
    }

    /// Creates a parse error.
    pub fn parse(message: impl Into<String>) -> Self {
        Self::new(ApiErrorKind::Parse, message)
    }

    /// Returns true if `message` was supplied by the server.
    pub fn is_from_server(&self) -> bool {
        self.from_server
    }

    /// Replaces the message with an operation-specific fallback unless the
    /// server supplied one. The original summary moves into `details` so
    /// nothing is lost for logs.
    pub fn with_fallback(mut self, fallback: &str) -> Self {
        if !self.from_server {
            let original = std::mem::replace(&mut self.message, fallback.to_string());
            if self.details.is_none() {
                self.details = Some(original);
            }
        }
        self
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for ApiError {}

/// Result type for API operations.
pub type ApiResult<T> = std::result::Result<T, ApiError>;

fn classify_reqwest_error(e: &reqwest::Error) -> ApiError {
    if e.is_timeout() {
        ApiError::timeout("Request timed out")
    } else {
        ApiError::network(e.to_string())
    }
}

// ============================================================================
// Client
// ============================================================================

/// Blog API client.
///
/// Owns the base URL, the HTTP connection pool, and the current bearer
/// token. The token rotates on login/logout via [`ApiClient::set_token`] and
/// [`ApiClient::clear_token`].
pub struct ApiClient {
    base_url: String,
    http: reqwest::Client,
    token: Option<String>,
}

impl ApiClient {
    /// Creates a new client from configuration.
    ///
    /// # Panics
    /// In test builds (`#[cfg(test)]`), panics if `base_url` resolves to the
    /// stock default. Unit tests must point QUILL_BASE_URL (or the config)
    /// at a mock server so they never talk to a live API.
    ///
    /// # Errors
    /// Returns an error if the base URL is malformed or the HTTP client
    /// cannot be constructed.
    pub fn new(config: &Config) -> Result<Self> {
        let base_url = config.resolved_base_url()?;

        #[cfg(test)]
        assert!(
            base_url != Config::DEFAULT_BASE_URL,
            "Tests must not use the default live API URL. \
             Point QUILL_BASE_URL at a mock server. Found base_url: {base_url}",
        );

        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.request_timeout() {
            builder = builder.timeout(timeout);
        }
        let http = builder.build()?;

        Ok(Self {
            base_url,
            http,
            token: None,
        })
    }

    /// Returns the base URL requests are issued against.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns true if a bearer token is attached to outgoing requests.
    pub fn has_token(&self) -> bool {
        self.token.is_some()
    }

    /// Attaches a bearer token to all subsequent requests.
    pub fn set_token(&mut self, token: impl Into<String>) {
        self.token = Some(token.into());
    }

    /// Drops the bearer token; subsequent requests go out unauthenticated.
    pub fn clear_token(&mut self) {
        self.token = None;
    }

    fn request(&self, method: Method, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}{path}", self.base_url);
        let mut builder = self
            .http
            .request(method, url)
            .header("accept", "application/json")
            .header("user-agent", USER_AGENT);
        if let Some(token) = &self.token {
            builder = builder.bearer_auth(token);
        }
        builder
    }

    /// Sends a prepared request and normalizes the failure modes.
    async fn send(
        &self,
        builder: reqwest::RequestBuilder,
        method: &'static str,
        path: &str,
    ) -> ApiResult<reqwest::Response> {
        let request_id = Uuid::new_v4();
        tracing::debug!(%request_id, method, path, "issuing request");

        let response = builder
            .send()
            .await
            .map_err(|e| classify_reqwest_error(&e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let err = ApiError::http_status(status.as_u16(), &body);
            tracing::warn!(
                %request_id,
                status = status.as_u16(),
                message = %err.message,
                "request failed"
            );
            return Err(err);
        }

        tracing::debug!(%request_id, status = status.as_u16(), "request settled");
        Ok(response)
    }

    async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> ApiResult<T> {
        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::parse(format!("Failed to decode response body: {e}")))
    }

    /// GET `path`.
    ///
    /// # Errors
    /// Returns an error if the request fails or the body does not decode.
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        let response = self.send(self.request(Method::GET, path), "GET", path).await?;
        Self::decode(response).await
    }

    /// GET `path` with a serialized query string.
    ///
    /// # Errors
    /// Returns an error if the request fails or the body does not decode.
    pub async fn get_with_query<T, Q>(&self, path: &str, query: &Q) -> ApiResult<T>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        let builder = self.request(Method::GET, path).query(query);
        let response = self.send(builder, "GET", path).await?;
        Self::decode(response).await
    }

    /// POST `path` with a JSON body.
    ///
    /// # Errors
    /// Returns an error if the request fails or the body does not decode.
    pub async fn post<T, B>(&self, path: &str, body: &B) -> ApiResult<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let builder = self.request(Method::POST, path).json(body);
        let response = self.send(builder, "POST", path).await?;
        Self::decode(response).await
    }

    /// POST `path` with no body (toggle-style endpoints).
    ///
    /// # Errors
    /// Returns an error if the request fails or the body does not decode.
    pub async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        let response = self
            .send(self.request(Method::POST, path), "POST", path)
            .await?;
        Self::decode(response).await
    }

    /// PUT `path` with a JSON body.
    ///
    /// # Errors
    /// Returns an error if the request fails or the body does not decode.
    pub async fn put<T, B>(&self, path: &str, body: &B) -> ApiResult<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let builder = self.request(Method::PUT, path).json(body);
        let response = self.send(builder, "PUT", path).await?;
        Self::decode(response).await
    }

    /// DELETE `path`. The response body, if any, is discarded.
    ///
    /// # Errors
    /// Returns an error if the request fails.
    pub async fn delete(&self, path: &str) -> ApiResult<()> {
        self.send(self.request(Method::DELETE, path), "DELETE", path)
            .await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Test: the `{ "message" }` error envelope wins over the status line.
    #[test]
    fn test_http_status_extracts_envelope_message() {
        let err = ApiError::http_status(403, r#"{"message":"You are not the author"}"#);
        assert_eq!(err.kind, ApiErrorKind::HttpStatus);
        assert_eq!(err.message, "You are not the author");
        assert!(err.is_from_server());
        assert!(err.details.is_some());
    }

    /// Test: a body without the envelope falls back to `HTTP <status>`.
    #[test]
    fn test_http_status_without_envelope() {
        let err = ApiError::http_status(502, "<html>Bad Gateway</html>");
        assert_eq!(err.message, "HTTP 502");
        assert!(!err.is_from_server());
        assert_eq!(err.details.as_deref(), Some("<html>Bad Gateway</html>"));
    }

    #[test]
    fn test_http_status_empty_body() {
        let err = ApiError::http_status(500, "");
        assert_eq!(err.message, "HTTP 500");
        assert!(err.details.is_none());
    }

    /// Test: a blank envelope message does not count as server-supplied.
    #[test]
    fn test_blank_envelope_message_ignored() {
        let err = ApiError::http_status(500, r#"{"message":"  "}"#);
        assert_eq!(err.message, "HTTP 500");
        assert!(!err.is_from_server());
    }

    /// Test: fallback replaces only non-server messages.
    #[test]
    fn test_with_fallback() {
        let err = ApiError::http_status(500, "").with_fallback("Failed to delete blog");
        assert_eq!(err.message, "Failed to delete blog");
        assert_eq!(err.details.as_deref(), Some("HTTP 500"));

        let err = ApiError::http_status(403, r#"{"message":"Not the author"}"#)
            .with_fallback("Failed to delete blog");
        assert_eq!(err.message, "Not the author");
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(ApiErrorKind::HttpStatus.to_string(), "http_status");
        assert_eq!(ApiErrorKind::Timeout.to_string(), "timeout");
        assert_eq!(ApiErrorKind::Network.to_string(), "network");
        assert_eq!(ApiErrorKind::Parse.to_string(), "parse");
    }

    #[test]
    fn test_client_attaches_token_state() {
        let config = Config {
            base_url: "http://127.0.0.1:9/api".to_string(),
            ..Config::default()
        };
        let mut client = ApiClient::new(&config).unwrap();
        assert!(!client.has_token());

        client.set_token("tok");
        assert!(client.has_token());

        client.clear_token();
        assert!(!client.has_token());
    }
}

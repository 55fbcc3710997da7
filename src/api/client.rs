use std::fmt;

use async_trait::async_trait;
use log::{debug, info};

use super::types::{NewPattern, RejectionBody, SavedPattern};

/// Errors that can occur talking to the pattern API.
#[derive(Debug)]
pub enum ApiError {
    /// Network-level failure (timeout, DNS, connection refused).
    Network(String),
    /// The server rejected the request. `msg` is the user-facing message
    /// from the response body, passed through verbatim.
    Rejected { status: u16, msg: String },
    /// Failed to parse the server's response.
    Parse(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Network(msg) => write!(f, "network error: {msg}"),
            ApiError::Rejected { msg, .. } => write!(f, "{msg}"),
            ApiError::Parse(msg) => write!(f, "parse error: {msg}"),
        }
    }
}

impl std::error::Error for ApiError {}

/// The persistence seam. Core logic and the TUI only depend on this trait.
#[async_trait]
pub trait PatternStore: Send + Sync {
    /// Returns the name of the store (for logging).
    fn name(&self) -> &str;

    /// Persists a named pattern to the owner's collection.
    async fn create_pattern(&self, pattern: &NewPattern) -> Result<(), ApiError>;

    /// Fetches every pattern in the owner's collection.
    async fn list_patterns(&self, owner: &str) -> Result<Vec<SavedPattern>, ApiError>;
}

/// HTTP implementation of `PatternStore` against the simulator server.
pub struct HttpPatternClient {
    base_url: String,
    http: reqwest::Client,
}

impl HttpPatternClient {
    pub fn new(base_url: String) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http: reqwest::Client::new(),
        }
    }

    /// Turns a non-success response into `ApiError::Rejected`, reading the
    /// user-facing message out of the `{ "msg": ... }` body when present.
    async fn rejection(response: reqwest::Response) -> ApiError {
        let status = response.status();
        let msg = match response.json::<RejectionBody>().await {
            Ok(body) => body.msg,
            // No structured body; fall back to the status line
            Err(_) => status
                .canonical_reason()
                .unwrap_or("request rejected")
                .to_string(),
        };
        ApiError::Rejected {
            status: status.as_u16(),
            msg,
        }
    }
}

#[async_trait]
impl PatternStore for HttpPatternClient {
    fn name(&self) -> &str {
        "http"
    }

    async fn create_pattern(&self, pattern: &NewPattern) -> Result<(), ApiError> {
        let url = format!("{}/api/patterns", self.base_url);
        debug!("POST {} (owner={}, name={})", url, pattern.owner, pattern.name);

        let response = self
            .http
            .post(&url)
            .json(pattern)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        if !response.status().is_success() {
            return Err(Self::rejection(response).await);
        }

        info!("Pattern '{}' stored for {}", pattern.name, pattern.owner);
        Ok(())
    }

    async fn list_patterns(&self, owner: &str) -> Result<Vec<SavedPattern>, ApiError> {
        let url = format!("{}/api/patterns/{}", self.base_url, owner);
        debug!("GET {}", url);

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        if !response.status().is_success() {
            return Err(Self::rejection(response).await);
        }

        response
            .json::<Vec<SavedPattern>>()
            .await
            .map_err(|e| ApiError::Parse(e.to_string()))
    }
}

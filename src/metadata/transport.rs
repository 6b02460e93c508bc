//! HTTP transport abstraction for the metadata client.

use crate::Result;
use ohno::IntoAppError;

/// Status code and body text of a completed HTTP exchange.
#[derive(Debug, Clone)]
pub struct TextResponse {
    pub status: u16,
    pub body: String,
}

impl TextResponse {
    /// Returns `true` for an HTTP 200 response.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.status == 200
    }
}

/// Minimal GET-only transport the metadata client issues its requests through.
///
/// The production implementation is [`HttpTransport`]; tests substitute their own
/// to produce deterministic network failures.
#[expect(async_fn_in_trait, reason = "Callers use static dispatch only; no auto-trait bounds needed")]
pub trait Transport {
    /// Issue a GET request and read the response body as text.
    ///
    /// An `Err` means the exchange failed below the HTTP layer (connection refused,
    /// timeout, interrupted body read). Non-200 statuses are not errors; they come
    /// back as a normal [`TextResponse`].
    async fn get(&self, url: &str) -> Result<TextResponse>;
}

/// [`Transport`] backed by a `reqwest` client.
///
/// No timeout is configured beyond the client defaults, and no retries are made.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    http: reqwest::Client,
}

impl HttpTransport {
    pub fn new() -> Result<Self> {
        let http = reqwest::Client::builder()
            .user_agent("imds-fetch")
            .build()
            .into_app_err("unable to create HTTP client")?;

        Ok(Self { http })
    }
}

impl Transport for HttpTransport {
    async fn get(&self, url: &str) -> Result<TextResponse> {
        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| ohno::app_err!("could not send HTTP request to '{url}': {e}"))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| ohno::app_err!("could not read response body from '{url}': {e}"))?;

        Ok(TextResponse { status, body })
    }
}

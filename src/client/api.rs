use std::error::Error as _;
use std::fmt;
use std::time::Duration;

use serde::Serialize;
use serde_json::{Map, Value};
use tracing::debug;

use crate::core::{ErrorResponse, InvoiceGenError, Request, Response};

use super::config::{API_KEY_ENV, ClientBuilder};

const MISSING_KEY: &str = "API key is required. Get your API key at: https://apiverve.com";

/// Client for the invoice generator endpoint.
///
/// Cheap to clone; clones share the underlying connection pool.
#[derive(Clone)]
pub struct Client {
    api_key: String,
    base_url: String,
    timeout: Duration,
    http: reqwest::Client,
}

impl fmt::Debug for Client {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Client")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl Client {
    /// Client with the default endpoint and timeout.
    pub fn new(api_key: impl Into<String>) -> Result<Self, InvoiceGenError> {
        ClientBuilder::new(api_key).build()
    }

    pub fn builder(api_key: impl Into<String>) -> ClientBuilder {
        ClientBuilder::new(api_key)
    }

    /// Client keyed from the `APIVERVE_API_KEY` environment variable.
    ///
    /// An unset variable is not an error here; `execute` reports it.
    pub fn from_env() -> Result<Self, InvoiceGenError> {
        Self::new(std::env::var(API_KEY_ENV).unwrap_or_default())
    }

    pub(super) fn from_parts(
        api_key: String,
        base_url: String,
        timeout: Duration,
        http: reqwest::Client,
    ) -> Self {
        Self {
            api_key,
            base_url,
            timeout,
            http,
        }
    }

    pub fn set_timeout(&mut self, timeout: Duration) {
        self.timeout = timeout;
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Validate `request` and submit it.
    ///
    /// Nothing is sent if the API key is missing or validation fails.
    ///
    /// # Errors
    ///
    /// - `Configuration` when no API key is set.
    /// - `Validation` with every parameter problem found.
    /// - `Transport` when the HTTP call cannot complete (including timeout).
    /// - `Api` on a non-2xx reply.
    /// - `Decode` when a 2xx body is not a valid [`Response`].
    pub async fn execute(&self, request: &Request) -> Result<Response, InvoiceGenError> {
        self.ensure_key()?;
        request.validate()?;
        self.post(request).await
    }

    /// Submit arbitrary parameters without validation.
    ///
    /// For fields this crate does not model yet. Errors as for
    /// [`execute`](Self::execute), minus `Validation`.
    pub async fn execute_raw(&self, params: &Map<String, Value>) -> Result<Response, InvoiceGenError> {
        self.ensure_key()?;
        self.post(params).await
    }

    fn ensure_key(&self) -> Result<(), InvoiceGenError> {
        if self.api_key.is_empty() {
            return Err(InvoiceGenError::Configuration(MISSING_KEY.into()));
        }
        Ok(())
    }

    async fn post<B: Serialize + ?Sized>(&self, body: &B) -> Result<Response, InvoiceGenError> {
        debug!(endpoint = %self.base_url, timeout_ms = self.timeout.as_millis() as u64, "submitting invoice request");

        let resp = self
            .http
            .post(&self.base_url)
            .timeout(self.timeout)
            .header("x-api-key", &self.api_key)
            .json(body)
            .send()
            .await
            .map_err(transport_error)?;

        let status = resp.status();
        let text = resp.text().await.map_err(transport_error)?;
        debug!(status = status.as_u16(), bytes = text.len(), "invoice service replied");

        if !status.is_success() {
            return Err(api_error(status.as_u16(), &text));
        }

        serde_json::from_str(&text).map_err(|e| InvoiceGenError::Decode(e.to_string()))
    }
}

fn transport_error(err: reqwest::Error) -> InvoiceGenError {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    InvoiceGenError::Transport {
        timeout: err.is_timeout(),
        message,
    }
}

fn api_error(status: u16, body: &str) -> InvoiceGenError {
    let message = match serde_json::from_str::<ErrorResponse>(body) {
        Ok(e) if !e.error.is_empty() => e.error,
        _ => format!("status {status}"),
    };
    InvoiceGenError::Api { status, message }
}

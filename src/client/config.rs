use std::fmt;
use std::time::Duration;

use crate::core::InvoiceGenError;

use super::api::Client;

/// Invoice generator endpoint.
pub const BASE_URL: &str = "https://api.apiverve.com/v1/invoicegenerator";

/// Per-request timeout unless overridden.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Environment variable read by [`Client::from_env`].
pub const API_KEY_ENV: &str = "APIVERVE_API_KEY";

/// Configures a [`Client`].
///
/// An empty API key is accepted here; calls made with it fail with
/// [`InvoiceGenError::Configuration`] before anything is sent.
#[derive(Clone)]
pub struct ClientBuilder {
    api_key: String,
    base_url: String,
    timeout: Duration,
}

impl fmt::Debug for ClientBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientBuilder")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl ClientBuilder {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Send requests somewhere other than [`BASE_URL`], e.g. a local stub.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// # Errors
    ///
    /// Returns `InvoiceGenError::Configuration` if the HTTP client cannot be
    /// initialised (e.g. no TLS backend).
    pub fn build(self) -> Result<Client, InvoiceGenError> {
        let http = reqwest::Client::builder()
            .build()
            .map_err(|e| InvoiceGenError::Configuration(e.to_string()))?;
        Ok(Client::from_parts(
            self.api_key,
            self.base_url,
            self.timeout,
            http,
        ))
    }
}

use thiserror::Error;

/// Errors returned by the invoice generator client.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum InvoiceGenError {
    /// The client is missing required configuration (usually the API key).
    #[error("configuration error: {0}")]
    Configuration(String),

    /// One or more request parameters failed validation. No request was sent.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The HTTP call could not be completed.
    #[error("request failed: {message}")]
    Transport {
        /// Underlying transport failure.
        message: String,
        /// Whether the failure was the configured timeout expiring.
        timeout: bool,
    },

    /// The service answered with a non-success HTTP status.
    #[error("API error: {message}")]
    Api {
        /// HTTP status code of the reply.
        status: u16,
        /// Message from the error payload, or `status <N>` when there was none.
        message: String,
    },

    /// A success reply could not be parsed into a [`Response`](super::Response).
    #[error("failed to parse response: {0}")]
    Decode(String),
}

impl InvoiceGenError {
    /// True when the error was raised before any network request was made.
    pub fn is_local(&self) -> bool {
        matches!(self, Self::Configuration(_) | Self::Validation(_))
    }
}

/// All parameter problems found in one request, in field declaration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Human-readable messages, e.g. `Required parameter [to_zip] is missing`.
    pub errors: Vec<String>,
}

impl ValidationError {
    /// Wrap a list of messages. Returns `None` for an empty list.
    pub fn from_messages(errors: Vec<String>) -> Option<Self> {
        if errors.is_empty() {
            None
        } else {
            Some(Self { errors })
        }
    }

    /// Whether any message mentions the given wire field name.
    pub fn mentions(&self, field: &str) -> bool {
        let needle = format!("[{field}]");
        self.errors.iter().any(|e| e.contains(&needle))
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Validation failed: {}", self.errors.join("; "))
    }
}

impl std::error::Error for ValidationError {}

//! HTTP client for the invoice generator service.
//!
//! Requests are validated locally, then sent as a single JSON `POST` with
//! the API key in the `x-api-key` header.
//!
//! # Example
//!
//! ```ignore
//! use invoicegen::client::Client;
//! use invoicegen::core::*;
//!
//! let client = Client::new("your-api-key")?;
//! let response = client.execute(&request).await?;
//! println!("{}", response.data.download_url);
//! ```

mod api;
mod config;

pub use api::Client;
pub use config::{API_KEY_ENV, BASE_URL, ClientBuilder, DEFAULT_TIMEOUT};

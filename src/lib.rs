//! # invoicegen
//!
//! Client for the [APIVerve Invoice Generator](https://apiverve.com/marketplace/invoicegenerator)
//! API: describe an invoice, get back a link to the rendered PDF.
//!
//! Requests are checked against the service's parameter rules before
//! anything is sent, and every problem is reported at once. Amounts use
//! [`rust_decimal::Decimal`], never floating point.
//!
//! ## Quick Start
//!
//! ```rust
//! use invoicegen::core::*;
//! use rust_decimal_macros::dec;
//!
//! let request = RequestBuilder::new("INV-2024-001")
//!     .date("2024-06-15")
//!     .from(Address::new("ACME Inc.", "1 Main St", "Springfield", "IL", "62701"))
//!     .to(Address::new("Globex Corp", "42 Elm Ave", "Shelbyville", "IL", "62565"))
//!     .add_item(LineItem::new(dec!(10), "Consulting", dec!(150)))
//!     .build()
//!     .unwrap();
//!
//! assert!(validate(&request).is_ok());
//! assert_eq!(request.subtotal(), dec!(1500));
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `core` (default) | Request/response types, parameter rules, validation |
//! | `client` (default) | Async HTTP client (`reqwest`) |
//! | `all` | Everything |

#[cfg(feature = "core")]
pub mod core;

#[cfg(feature = "client")]
pub mod client;

// Re-export core types at crate root for convenience
#[cfg(feature = "core")]
pub use crate::core::*;

#[cfg(feature = "client")]
pub use crate::client::Client;

//! Request and response types, parameter rules, and validation.
//!
//! Nothing in this module touches the network; requests can be built and
//! checked offline before handing them to [`Client`](crate::client::Client).

mod builder;
mod error;
pub mod formats;
mod params;
pub mod rules;
mod types;
mod validation;

pub use builder::*;
pub use error::*;
pub use formats::{Format, UnknownFormat};
pub use rules::{REQUEST_RULES, RuleType, ValidationRule, rule_for};
pub use types::*;
pub use validation::*;

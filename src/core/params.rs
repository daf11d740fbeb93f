use std::collections::BTreeMap;

use super::types::{FieldValue, Request};

impl Request {
    /// Flatten the request into string parameters.
    ///
    /// Only non-zero fields are included. Items are rendered as their JSON
    /// encoding.
    pub fn to_query_params(&self) -> Result<BTreeMap<&'static str, String>, serde_json::Error> {
        let mut params = BTreeMap::new();
        for (name, value) in self.fields() {
            if value.is_zero() {
                continue;
            }
            let rendered = match value {
                FieldValue::List(_) => serde_json::to_string(&self.items)?,
                other => other.render(),
            };
            params.insert(name, rendered);
        }
        Ok(params)
    }
}

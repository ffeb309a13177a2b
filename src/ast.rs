use crate::error::{FilterError, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Pandoc attribute triple: `[identifier, [classes], [[key, value]]]`.
/// Kept as a tuple struct so it serializes back to the same array shape.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Attr(pub String, pub Vec<String>, pub Vec<(String, String)>);

impl Attr {
    pub fn identifier(&self) -> &str {
        &self.0
    }

    pub fn classes(&self) -> &[String] {
        &self.1
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.1.iter().any(|c| c == class)
    }

    /// Append `class` unless already present. Returns whether the list changed.
    pub fn add_class(&mut self, class: &str) -> bool {
        if self.has_class(class) {
            return false;
        }
        self.1.push(class.to_string());
        true
    }
}

/// Accept major version 1 only; the interchange shape is not stable
/// across major revisions.
pub fn check_api_version(doc: &Map<String, Value>) -> Result<()> {
    let version = doc
        .get("pandoc-api-version")
        .and_then(Value::as_array)
        .ok_or(FilterError::NotADocument)?;
    match version.first().and_then(Value::as_u64) {
        Some(1) => Ok(()),
        _ => Err(FilterError::UnsupportedApiVersion(
            Value::Array(version.clone()).to_string(),
        )),
    }
}

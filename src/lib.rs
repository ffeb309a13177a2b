pub mod annotate;
pub mod ast;
pub mod error;
pub mod filter;
pub mod walk;

use crate::error::{FilterError, Result};
use crate::filter::FilterSet;
use serde_json::Value;

/// Apply `filters` to every block node of an already-parsed document.
/// `meta` and the version stamp are carried through untouched.
pub fn apply(doc: &mut Value, filters: &FilterSet) -> Result<()> {
    let map = doc.as_object_mut().ok_or(FilterError::NotADocument)?;
    ast::check_api_version(map)?;
    let blocks = map.get_mut("blocks").ok_or(FilterError::NotADocument)?;
    walk::walk_value(blocks, filters)
}

/// Run the shipped filter set over a pandoc JSON document.
pub fn filter_str(input: &str) -> Result<String> {
    let mut doc: Value = serde_json::from_str(input)?;
    apply(&mut doc, &filter::default_set())?;
    Ok(serde_json::to_string(&doc)?)
}

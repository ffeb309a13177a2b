use crate::error::Result;
use crate::filter::FilterSet;
use serde_json::Value;

/// Depth-first walk over a pandoc JSON subtree, children before
/// parents. Every object carrying a `"t"` type tag is offered to the
/// filter set once its payload has been visited; untagged objects and
/// scalars pass through.
pub fn walk_value(value: &mut Value, filters: &FilterSet) -> Result<()> {
    match value {
        Value::Array(items) => {
            for item in items {
                walk_value(item, filters)?;
            }
        }
        Value::Object(map) => {
            for child in map.values_mut() {
                walk_value(child, filters)?;
            }
            let tag = map.get("t").and_then(Value::as_str).map(str::to_owned);
            if let Some(tag) = tag {
                if let Some(handler) = filters.get(&tag) {
                    handler(map)?;
                }
            }
        }
        _ => {}
    }
    Ok(())
}

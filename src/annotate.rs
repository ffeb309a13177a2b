use crate::ast::Attr;
use crate::error::{FilterError, Result};
use serde_json::{Map, Value};

/// Class that marks a div as a quotation block.
pub const QUOTE_CLASS: &str = "quote";

/// Class appended so the stylesheet renders the div as a note.
pub const NOTE_CLASS: &str = "note";

/// Div handler: a div carrying the `quote` class also gets the `note`
/// class. The attribute triple is rewritten only when a class is
/// actually added; everything else about the node stays untouched.
pub fn annotate_quote_div(node: &mut Map<String, Value>) -> Result<()> {
    let attr_value = node
        .get_mut("c")
        .and_then(Value::as_array_mut)
        .and_then(|content| content.first_mut())
        .ok_or(FilterError::MalformedNode("Div"))?;

    let mut attr: Attr = serde_json::from_value(attr_value.clone())
        .map_err(|_| FilterError::MalformedNode("Div"))?;

    if attr.has_class(QUOTE_CLASS) && attr.add_class(NOTE_CLASS) {
        *attr_value = serde_json::to_value(&attr)?;
    }
    Ok(())
}

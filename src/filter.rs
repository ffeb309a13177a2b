use crate::annotate;
use crate::error::Result;
use indexmap::IndexMap;
use serde_json::{Map, Value};

/// A handler receives one node of its registered type as a mutable
/// borrow for the duration of the call and must not retain it.
pub type Handler = fn(&mut Map<String, Value>) -> Result<()>;

/// Registry mapping a pandoc node type tag to the handler applied to
/// every node of that type. One handler per tag; registering a tag
/// twice replaces the earlier handler.
#[derive(Default)]
pub struct FilterSet {
    handlers: IndexMap<&'static str, Handler>,
}

impl FilterSet {
    pub fn new() -> Self {
        FilterSet {
            handlers: IndexMap::new(),
        }
    }

    pub fn register(&mut self, node_type: &'static str, handler: Handler) {
        self.handlers.insert(node_type, handler);
    }

    pub fn get(&self, node_type: &str) -> Option<&Handler> {
        self.handlers.get(node_type)
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}

/// The shipped rule set: quote divs get the note class.
pub fn default_set() -> FilterSet {
    let mut set = FilterSet::new();
    set.register("Div", annotate::annotate_quote_div);
    set
}

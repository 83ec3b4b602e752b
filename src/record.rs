//! Structured result of one command invocation

use std::collections::HashMap;
use std::ops::Index;

use tracing::debug;

/// A single parsed field: one value, or an ordered list of sub-values for
/// multi-valued schemas and id-keyed row listings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    /// Single trimmed value
    Text(String),
    /// Ordered sub-values
    List(Vec<String>),
}

impl Value {
    /// The value as text, if this field holds a single value
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(text) => Some(text),
            Value::List(_) => None,
        }
    }

    /// The value as an ordered slice, if this field holds a list
    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            Value::Text(_) => None,
            Value::List(list) => Some(list),
        }
    }
}

/// Mapping from canonical field key to parsed value, built fresh per call.
///
/// [`Record::get`] is the canonical lookup; indexing (`record["key"]`) is
/// sugar that resolves through the same lookup and panics on a missing key,
/// like `HashMap` indexing. Duplicate keys within one output keep the last
/// value written.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Record {
    fields: HashMap<String, Value>,
}

impl Record {
    /// Create an empty record
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn insert(&mut self, key: String, value: Value) {
        if self.fields.contains_key(&key) {
            debug!(key = %key, "duplicate field key, keeping last value");
        }
        self.fields.insert(key, value);
    }

    /// Look up a field by its canonical key
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// Look up a single-valued field as text
    pub fn text(&self, key: &str) -> Option<&str> {
        self.get(key)?.as_text()
    }

    /// Look up a multi-valued field as an ordered slice
    pub fn values(&self, key: &str) -> Option<&[String]> {
        self.get(key)?.as_list()
    }

    /// Whether a field with this key was parsed
    pub fn contains_key(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    /// Number of parsed fields
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether the record holds no fields
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// All field keys
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    /// All (key, value) pairs
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.fields.iter().map(|(key, value)| (key.as_str(), value))
    }
}

impl Index<&str> for Record {
    type Output = Value;

    fn index(&self, key: &str) -> &Value {
        self.get(key)
            .unwrap_or_else(|| panic!("no field `{}` in record", key))
    }
}

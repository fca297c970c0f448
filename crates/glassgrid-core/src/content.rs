//! Opaque component payloads stored on cells.
//!
//! The engine stores and forwards [`Content`] without interpreting it. Its
//! shape is owned by whichever template populated the cell.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A key/value payload attached to an occupied cell.
///
/// # Examples
///
/// ```
/// # use glassgrid_core::content::Content;
/// # use serde_json::json;
/// let content = Content::new()
///     .with("title", json!("Revenue"))
///     .with("value", json!(1200));
///
/// assert_eq!(content.get("title"), Some(&json!("Revenue")));
/// assert_eq!(content.len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Content(Map<String, Value>);

impl Content {
    /// Creates an empty payload.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a field (builder style).
    pub fn with(mut self, key: impl Into<String>, value: Value) -> Self {
        self.0.insert(key.into(), value);
        self
    }

    /// Inserts a field, returning the previous value if any.
    pub fn insert(&mut self, key: impl Into<String>, value: Value) -> Option<Value> {
        self.0.insert(key.into(), value)
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates fields in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter()
    }
}

impl From<Map<String, Value>> for Content {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

//! String-keyed metadata attached to errors and negotiated responses.
//!
//! `Meta` knows nothing about output formats; the `render` module owns one
//! adapter per format.

use indexmap::IndexMap;
use serde::Serialize;
use serde_json::Value;

/// Insertion-ordered map from key to a dynamic value.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Meta(IndexMap<String, Value>);

impl Meta {
    pub fn new() -> Self {
        Self(IndexMap::new())
    }

    /// Builder-style insert.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.0.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter()
    }
}

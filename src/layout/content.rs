//! Content map: literal cell and title text keyed by ID.

use crate::error::Result;
use log::warn;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::TextSource;

/// Text supplied for content keys referenced by a layout.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContentMap {
    entries: BTreeMap<String, String>,
}

impl ContentMap {
    /// Create an empty content map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a content map from a JSON object of strings.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Add or replace an entry.
    pub fn insert(&mut self, key: impl Into<String>, text: impl Into<String>) {
        self.entries.insert(key.into(), text.into());
    }

    /// Add an entry and return self.
    pub fn with(mut self, key: impl Into<String>, text: impl Into<String>) -> Self {
        self.insert(key, text);
        self
    }

    /// Look up the text for a key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Resolve a text source to its final text.
    ///
    /// Unknown keys resolve to an empty string.
    pub fn resolve(&self, source: &TextSource) -> String {
        match source {
            TextSource::Literal(text) => text.clone(),
            TextSource::Key(key) => match self.get(key) {
                Some(text) => text.to_string(),
                None => {
                    warn!("content key {:?} not found, rendering blank", key);
                    String::new()
                }
            },
        }
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the map has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Overlay another map; its entries win.
    pub fn merge(&mut self, other: ContentMap) {
        self.entries.extend(other.entries);
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for ContentMap {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

use serde::Deserialize;

use crate::entry::EntryRecord;
use crate::error::ValidationError;

/// Body of one search request: `{"hits": {"hits": [...]}}`
#[derive(Debug, Clone, Deserialize)]
pub struct SearchResult {
    pub hits: Hits,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Hits {
    /// Total reported by the index, either a bare count or `{"value": n, ...}`
    #[serde(default)]
    total: Option<serde_json::Value>,
    pub hits: Vec<EntryRecord>,
}

impl SearchResult {
    pub fn from_json(json: &str) -> Result<Self, ValidationError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_value(value: serde_json::Value) -> Result<Self, ValidationError> {
        Ok(serde_json::from_value(value)?)
    }

    /// Entries in index ranking order
    pub fn entries(&self) -> &[EntryRecord] {
        &self.hits.hits
    }

    pub fn into_entries(self) -> Vec<EntryRecord> {
        self.hits.hits
    }

    pub fn len(&self) -> usize {
        self.hits.hits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hits.hits.is_empty()
    }

    /// Number of matches the index reports, which may exceed the page
    pub fn total(&self) -> Option<u64> {
        match self.hits.total.as_ref()? {
            serde_json::Value::Number(n) => n.as_u64(),
            serde_json::Value::Object(map) => map.get("value")?.as_u64(),
            _ => None,
        }
    }
}

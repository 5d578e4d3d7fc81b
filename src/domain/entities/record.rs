use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The shape of every value in the store: `{key, value}` plus an optional save time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredRecord {
    pub key: String,
    pub value: Value,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub saved_at: Option<String>,
}

impl StoredRecord {
    pub fn new(key: impl Into<String>, value: Value) -> Self {
        Self {
            key: key.into(),
            value,
            saved_at: None,
        }
    }

    pub fn with_saved_at(mut self, saved_at: String) -> Self {
        self.saved_at = Some(saved_at);
        self
    }
}

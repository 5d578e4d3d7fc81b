use anyhow::Result;
use async_trait::async_trait;
use serde_json::Value;
use std::fmt;

/// The two collections the start page keeps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    Settings,
    Images,
}

impl Collection {
    pub const ALL: [Collection; 2] = [Collection::Settings, Collection::Images];

    pub fn name(self) -> &'static str {
        match self {
            Collection::Settings => "settings",
            Collection::Images => "images",
        }
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Collection-scoped key-value storage provided by the host.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    async fn get(&self, collection: Collection, key: &str) -> Result<Option<Value>>;
    async fn put(&self, collection: Collection, key: &str, value: Value) -> Result<()>;
    async fn delete(&self, collection: Collection, key: &str) -> Result<()>;
    async fn clear(&self, collection: Collection) -> Result<()>;
}

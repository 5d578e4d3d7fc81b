use crate::domain::repositories::{Collection, KeyValueStore};
use anyhow::Result;
use async_trait::async_trait;
use serde_json::Value;
use std::collections::HashMap;
use tokio::sync::Mutex;

/// Store that lives only as long as the process.
#[derive(Default)]
pub struct MemoryStore {
    collections: Mutex<HashMap<Collection, HashMap<String, Value>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self, collection: Collection) -> usize {
        self.collections
            .lock()
            .await
            .get(&collection)
            .map_or(0, HashMap::len)
    }
}

#[async_trait]
impl KeyValueStore for MemoryStore {
    async fn get(&self, collection: Collection, key: &str) -> Result<Option<Value>> {
        let collections = self.collections.lock().await;
        Ok(collections
            .get(&collection)
            .and_then(|records| records.get(key))
            .cloned())
    }

    async fn put(&self, collection: Collection, key: &str, value: Value) -> Result<()> {
        self.collections
            .lock()
            .await
            .entry(collection)
            .or_default()
            .insert(key.to_string(), value);
        Ok(())
    }

    async fn delete(&self, collection: Collection, key: &str) -> Result<()> {
        if let Some(records) = self.collections.lock().await.get_mut(&collection) {
            records.remove(key);
        }
        Ok(())
    }

    async fn clear(&self, collection: Collection) -> Result<()> {
        self.collections.lock().await.remove(&collection);
        Ok(())
    }
}

use crate::domain::repositories::{Collection, KeyValueStore};
use anyhow::{Context, Result};
use async_trait::async_trait;
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};

pub const DATA_DIR_ENV: &str = "STARTPAGE_DATA_DIR";

/// Keeps each collection as one pretty-printed JSON object in `<dir>/<collection>.json`.
///
/// Every write rewrites the whole file.
pub struct JsonFileStore {
    dir: PathBuf,
}

impl JsonFileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// `$STARTPAGE_DATA_DIR`, else `<config dir>/startpage`, else the working directory.
    pub fn default_dir() -> PathBuf {
        if let Some(dir) = std::env::var_os(DATA_DIR_ENV) {
            return PathBuf::from(dir);
        }
        dirs::config_dir()
            .map(|dir| dir.join("startpage"))
            .unwrap_or_else(|| PathBuf::from("."))
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn collection_path(&self, collection: Collection) -> PathBuf {
        self.dir.join(format!("{}.json", collection.name()))
    }

    async fn read_collection(&self, collection: Collection) -> Result<Map<String, Value>> {
        let path = self.collection_path(collection);
        if !tokio::fs::try_exists(&path).await.unwrap_or(false) {
            return Ok(Map::new());
        }

        let content = tokio::fs::read_to_string(&path)
            .await
            .with_context(|| format!("Failed to read {}", path.display()))?;

        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse {}", path.display()))
    }

    async fn write_collection(
        &self,
        collection: Collection,
        records: &Map<String, Value>,
    ) -> Result<()> {
        tokio::fs::create_dir_all(&self.dir)
            .await
            .context("Failed to create data directory")?;

        let content = serde_json::to_string_pretty(records)
            .context("Failed to serialize collection")?;

        let path = self.collection_path(collection);
        tokio::fs::write(&path, content)
            .await
            .with_context(|| format!("Failed to write {}", path.display()))?;

        tracing::debug!("Wrote {} record(s) to {}", records.len(), path.display());
        Ok(())
    }
}

#[async_trait]
impl KeyValueStore for JsonFileStore {
    async fn get(&self, collection: Collection, key: &str) -> Result<Option<Value>> {
        Ok(self.read_collection(collection).await?.remove(key))
    }

    async fn put(&self, collection: Collection, key: &str, value: Value) -> Result<()> {
        let mut records = self.read_collection(collection).await?;
        records.insert(key.to_string(), value);
        self.write_collection(collection, &records).await
    }

    async fn delete(&self, collection: Collection, key: &str) -> Result<()> {
        let mut records = self.read_collection(collection).await?;
        if records.remove(key).is_some() {
            self.write_collection(collection, &records).await?;
        }
        Ok(())
    }

    async fn clear(&self, collection: Collection) -> Result<()> {
        let path = self.collection_path(collection);
        match tokio::fs::remove_file(&path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e).with_context(|| format!("Failed to remove {}", path.display())),
        }
    }
}

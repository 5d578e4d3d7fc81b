use super::settings_operations::StoreUseCase;
use crate::domain::{
    entities::{ImageRole, ImageSource, StoredRecord},
    repositories::{Collection, KeyValueStore},
};
use anyhow::{Context, Result};
use std::sync::Arc;

pub struct LoadImage {
    use_case: StoreUseCase,
}

impl LoadImage {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            use_case: StoreUseCase::new(store),
        }
    }

    pub async fn execute(&self, role: ImageRole) -> Result<Option<String>> {
        let Some(value) = self.use_case.store().get(Collection::Images, role.key()).await? else {
            return Ok(None);
        };
        let record: StoredRecord = serde_json::from_value(value)
            .with_context(|| format!("Failed to parse {role} image record"))?;
        Ok(record.value.as_str().map(str::to_string))
    }
}

pub struct SaveImage {
    use_case: StoreUseCase,
}

impl SaveImage {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            use_case: StoreUseCase::new(store),
        }
    }

    /// `data` is a data URI or an external URL.
    pub async fn execute(&self, role: ImageRole, data: &str) -> Result<()> {
        let record = StoredRecord::new(role.key(), serde_json::Value::String(data.to_string()));
        let record = serde_json::to_value(record).context("Failed to serialize image record")?;
        self.use_case
            .store()
            .put(Collection::Images, role.key(), record)
            .await
            .with_context(|| format!("Failed to save {role} image"))?;
        tracing::info!(
            "Saved {} image ({:?}, {} bytes)",
            role,
            ImageSource::classify(data),
            data.len()
        );
        Ok(())
    }
}

pub struct ClearImage {
    use_case: StoreUseCase,
}

impl ClearImage {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            use_case: StoreUseCase::new(store),
        }
    }

    pub async fn execute(&self, role: ImageRole) -> Result<()> {
        self.use_case
            .store()
            .delete(Collection::Images, role.key())
            .await
            .with_context(|| format!("Failed to clear {role} image"))?;
        tracing::info!("Cleared {} image", role);
        Ok(())
    }
}

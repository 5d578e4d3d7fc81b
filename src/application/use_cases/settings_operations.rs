use crate::domain::{
    entities::{Settings, StoredRecord},
    repositories::{Collection, KeyValueStore, ThemeHost},
    services::settings_merge,
};
use anyhow::{Context, Result};
use chrono::Utc;
use std::sync::Arc;

/// Key of the single settings record.
pub const SETTINGS_KEY: &str = "config";

pub struct StoreUseCase {
    store: Arc<dyn KeyValueStore>,
}

impl StoreUseCase {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> Arc<dyn KeyValueStore> {
        Arc::clone(&self.store)
    }
}

pub struct LoadSettings {
    use_case: StoreUseCase,
    theme_host: Arc<dyn ThemeHost>,
}

impl LoadSettings {
    pub fn new(store: Arc<dyn KeyValueStore>, theme_host: Arc<dyn ThemeHost>) -> Self {
        Self {
            use_case: StoreUseCase::new(store),
            theme_host,
        }
    }

    /// Never fails: unreadable or unparseable records fall back to defaults.
    pub async fn execute(&self) -> Settings {
        let theme_defaults = self.theme_host.default_colors();
        let stored = match self.read_record().await {
            Ok(record) => record,
            Err(e) => {
                tracing::warn!("Failed to load settings, using defaults: {:#}", e);
                None
            }
        };

        if let Some(record) = &stored {
            tracing::info!(
                "Loaded settings record (saved at {})",
                record.saved_at.as_deref().unwrap_or("unknown")
            );
        }
        settings_merge::resolve(stored.as_ref().map(|record| &record.value), &theme_defaults)
    }

    async fn read_record(&self) -> Result<Option<StoredRecord>> {
        let Some(value) = self
            .use_case
            .store()
            .get(Collection::Settings, SETTINGS_KEY)
            .await?
        else {
            return Ok(None);
        };
        let record = serde_json::from_value(value).context("Failed to parse settings record")?;
        Ok(Some(record))
    }
}

pub struct SaveSettings {
    use_case: StoreUseCase,
}

impl SaveSettings {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            use_case: StoreUseCase::new(store),
        }
    }

    /// Overwrites the whole record.
    pub async fn execute(&self, settings: &Settings) -> Result<()> {
        let value = serde_json::to_value(settings).context("Failed to serialize settings")?;
        let record = StoredRecord::new(SETTINGS_KEY, value).with_saved_at(Utc::now().to_rfc3339());
        let record = serde_json::to_value(record).context("Failed to serialize settings record")?;

        self.use_case
            .store()
            .put(Collection::Settings, SETTINGS_KEY, record)
            .await
            .context("Failed to save settings")?;

        tracing::info!(
            "Saved settings with {} bookmark entries",
            settings.bookmarks.total_entries()
        );
        Ok(())
    }
}

pub struct ResetAll {
    use_case: StoreUseCase,
}

impl ResetAll {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            use_case: StoreUseCase::new(store),
        }
    }

    /// Clears every collection.
    pub async fn execute(&self) -> Result<()> {
        let store = self.use_case.store();
        for collection in Collection::ALL {
            store
                .clear(collection)
                .await
                .with_context(|| format!("Failed to clear {collection}"))?;
        }
        tracing::info!("Cleared all stored settings and images");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::use_cases::test_support::{FailingStore, theme_host};
    use crate::domain::entities::{Alignment, Link};
    use crate::infrastructure::MemoryStore;
    use serde_json::json;

    #[tokio::test]
    async fn first_load_uses_defaults_with_theme_colors() {
        let store = Arc::new(MemoryStore::new());
        let settings = LoadSettings::new(store, theme_host()).execute().await;

        assert_eq!(settings.colors, theme_host().default_colors());
        assert_eq!(settings.alignment, Alignment::Center);
    }

    #[tokio::test]
    async fn saved_settings_load_back() {
        let store = Arc::new(MemoryStore::new());
        let mut settings = Settings::default();
        settings.alignment = Alignment::Right;
        settings.colors = theme_host().default_colors();
        settings.colors.accent_color = "#abcdef".to_string();
        settings
            .bookmarks
            .add(Default::default(), Link::new("Docs", "https://docs.rs").into())
            .unwrap();

        SaveSettings::new(store.clone()).execute(&settings).await.unwrap();
        let loaded = LoadSettings::new(store.clone(), theme_host()).execute().await;

        assert_eq!(loaded, settings);
        let record = store.get(Collection::Settings, SETTINGS_KEY).await.unwrap().unwrap();
        assert_eq!(record["key"], json!("config"));
        assert!(record["savedAt"].is_string());
    }

    #[tokio::test]
    async fn records_without_a_save_time_still_load() {
        let store = Arc::new(MemoryStore::new());
        store
            .put(
                Collection::Settings,
                SETTINGS_KEY,
                json!({ "key": "config", "value": { "gridColumns": 9 } }),
            )
            .await
            .unwrap();

        let loaded = LoadSettings::new(store, theme_host()).execute().await;
        assert_eq!(loaded.grid_columns.get(), 9);
    }

    #[tokio::test]
    async fn storage_failure_falls_back_to_defaults() {
        let loaded = LoadSettings::new(Arc::new(FailingStore), theme_host()).execute().await;
        let mut expected = Settings::default();
        expected.colors = theme_host().default_colors();
        assert_eq!(loaded, expected);
    }

    #[tokio::test]
    async fn save_failure_is_propagated() {
        let result = SaveSettings::new(Arc::new(FailingStore)).execute(&Settings::default()).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn reset_clears_both_collections() {
        let store = Arc::new(MemoryStore::new());
        SaveSettings::new(store.clone()).execute(&Settings::default()).await.unwrap();
        store
            .put(Collection::Images, "logo", json!({ "key": "logo", "value": "x" }))
            .await
            .unwrap();

        ResetAll::new(store.clone()).execute().await.unwrap();

        assert_eq!(store.len(Collection::Settings).await, 0);
        assert_eq!(store.len(Collection::Images).await, 0);
    }
}

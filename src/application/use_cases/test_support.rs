use crate::domain::entities::ColorScheme;
use crate::domain::repositories::{Collection, KeyValueStore, ThemeHost};
use crate::infrastructure::StaticThemeHost;
use anyhow::{Result, bail};
use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;

/// A store whose every call fails.
pub struct FailingStore;

#[async_trait]
impl KeyValueStore for FailingStore {
    async fn get(&self, collection: Collection, _key: &str) -> Result<Option<Value>> {
        bail!("{collection} store unavailable")
    }

    async fn put(&self, collection: Collection, _key: &str, _value: Value) -> Result<()> {
        bail!("{collection} store unavailable")
    }

    async fn delete(&self, collection: Collection, _key: &str) -> Result<()> {
        bail!("{collection} store unavailable")
    }

    async fn clear(&self, collection: Collection) -> Result<()> {
        bail!("{collection} store unavailable")
    }
}

pub fn theme_host() -> Arc<dyn ThemeHost> {
    Arc::new(StaticThemeHost::new(ColorScheme::Light))
}

use crate::domain::entities::{DisplayColors, ImageRole};
use std::sync::{Arc, Mutex, MutexGuard};

type Listener = Box<dyn Fn(&AppEvent) + Send + Sync>;

#[derive(Debug, Clone, PartialEq)]
pub enum AppEvent {
    StatusUpdate(String),
    BookmarksChanged,
    ElementOrderChanged,
    ColorsChanged(DisplayColors),
    ImageChanged(ImageRole),
    SettingsSaved,
    SettingsReset,
}

pub struct EventBus {
    listeners: Arc<Mutex<Vec<Listener>>>,
}

impl EventBus {
    pub fn new() -> Self {
        Self {
            listeners: Arc::new(Mutex::new(Vec::new())),
        }
    }

    fn listeners(&self) -> MutexGuard<'_, Vec<Listener>> {
        self.listeners
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn publish(&self, event: AppEvent) {
        tracing::trace!("Publishing {:?}", event);
        for listener in self.listeners().iter() {
            listener(&event);
        }
    }

    pub fn subscribe<F>(&self, listener: F)
    where
        F: Fn(&AppEvent) + Send + Sync + 'static,
    {
        self.listeners().push(Box::new(listener));
    }
}

impl Clone for EventBus {
    fn clone(&self) -> Self {
        Self {
            listeners: Arc::clone(&self.listeners),
        }
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

use crate::application::use_cases::*;
use crate::domain::repositories::{KeyValueStore, ThemeHost};
use std::sync::Arc;

pub struct UseCaseContainer {
    pub load_settings: Arc<LoadSettings>,
    pub save_settings: Arc<SaveSettings>,
    pub reset_all: Arc<ResetAll>,
    pub load_image: Arc<LoadImage>,
    pub save_image: Arc<SaveImage>,
    pub clear_image: Arc<ClearImage>,
}

impl UseCaseContainer {
    pub fn new(store: Arc<dyn KeyValueStore>, theme_host: Arc<dyn ThemeHost>) -> Self {
        Self {
            load_settings: Arc::new(LoadSettings::new(Arc::clone(&store), theme_host)),
            save_settings: Arc::new(SaveSettings::new(Arc::clone(&store))),
            reset_all: Arc::new(ResetAll::new(Arc::clone(&store))),
            load_image: Arc::new(LoadImage::new(Arc::clone(&store))),
            save_image: Arc::new(SaveImage::new(Arc::clone(&store))),
            clear_image: Arc::new(ClearImage::new(Arc::clone(&store))),
        }
    }
}

use startpage::application::UseCaseContainer;
use startpage::domain::repositories::{KeyValueStore, ThemeHost};
use startpage::infrastructure::{JsonFileStore, StaticThemeHost};
use startpage::presentation::components::LogManager;
use startpage::presentation::editor::EditorController;
use startpage::presentation::services::{EventBus, init_log_capture};
use std::sync::Arc;

/// Loads the stored start page and prints what a renderer would draw.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let log_rx = init_log_capture();

    let store = JsonFileStore::new(JsonFileStore::default_dir());
    tracing::info!("Using data directory {}", store.dir().display());

    let store: Arc<dyn KeyValueStore> = Arc::new(store);
    let theme_host: Arc<dyn ThemeHost> = Arc::new(StaticThemeHost::from_env());
    let use_cases = Arc::new(UseCaseContainer::new(store, Arc::clone(&theme_host)));

    let controller = EditorController::load(use_cases, theme_host, EventBus::new()).await;
    println!("{}", serde_json::to_string_pretty(&controller.page_view())?);

    let mut log_manager = LogManager::new();
    log_manager.drain(&log_rx);
    for line in log_manager.all_logs() {
        eprintln!("{line}");
    }

    Ok(())
}

pub mod log_manager;
pub mod search_box;
pub mod settings_form;

pub use log_manager::LogManager;
pub use search_box::SearchBox;
pub use settings_form::SettingsForm;

pub mod search;
pub mod settings_merge;
pub mod validation;

pub use search::{CUSTOM_PROVIDER, build_search_url};
pub use validation::{BookmarkValidator, ColorValidator, ValidationError};

pub mod key_value_store;
pub mod theme_host;

pub use key_value_store::{Collection, KeyValueStore};
pub use theme_host::ThemeHost;

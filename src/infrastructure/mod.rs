pub mod store;
pub mod theme_host;

pub use store::{JsonFileStore, MemoryStore};
pub use theme_host::StaticThemeHost;

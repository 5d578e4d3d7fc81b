pub mod bookmark;
pub mod bookmark_tree;
pub mod element_order;
pub mod images;
pub mod record;
pub mod settings;
pub mod theme;

pub use bookmark::{BookmarkEntry, EntryEdit, Folder, IconEdit, Link};
pub use bookmark_tree::{ActiveContext, BookmarkError, BookmarkTree, FolderTarget};
pub use element_order::{ElementId, ElementOrder, ElementOrderError};
pub use images::{ImageRole, ImageSource};
pub use record::StoredRecord;
pub use settings::{Alignment, BookmarkDisplay, DEFAULT_SEARCH_PROVIDER, IconSize, Settings};
pub use theme::{ColorScheme, ColorSwapMode, DisplayColors, ThemeColors};

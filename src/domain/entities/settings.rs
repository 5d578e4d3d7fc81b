use super::bookmark_tree::BookmarkTree;
use super::element_order::ElementOrder;
use super::theme::{ColorSwapMode, ThemeColors};
use serde::{Deserialize, Serialize};
use std::num::NonZeroU32;

pub const DEFAULT_SEARCH_PROVIDER: &str = "https://www.google.com/search?q=";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    Left,
    #[default]
    Center,
    Right,
}

impl Alignment {
    pub fn as_str(self) -> &'static str {
        match self {
            Alignment::Left => "left",
            Alignment::Center => "center",
            Alignment::Right => "right",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookmarkDisplay {
    #[default]
    Both,
    Icon,
    Text,
}

impl BookmarkDisplay {
    pub fn shows_icon(self) -> bool {
        matches!(self, BookmarkDisplay::Both | BookmarkDisplay::Icon)
    }

    pub fn shows_text(self) -> bool {
        matches!(self, BookmarkDisplay::Both | BookmarkDisplay::Text)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IconSize {
    #[default]
    Favicon,
    Cover,
}

impl IconSize {
    pub fn as_str(self) -> &'static str {
        match self {
            IconSize::Favicon => "favicon",
            IconSize::Cover => "cover",
        }
    }
}

/// Everything the start page persists under the `config` key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
    /// A URL prefix, or `"custom"` to use `custom_search_url`.
    pub search_provider: String,
    pub custom_search_url: String,
    pub alignment: Alignment,
    pub element_order: ElementOrder,
    pub grid_columns: NonZeroU32,
    pub bookmark_display: BookmarkDisplay,
    pub bookmark_width: NonZeroU32,
    pub bookmark_height: NonZeroU32,
    pub icon_size: IconSize,
    pub bookmarks: BookmarkTree,
    #[serde(flatten)]
    pub colors: ThemeColors,
    pub custom_css: String,
    pub color_swap_mode: ColorSwapMode,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            search_provider: DEFAULT_SEARCH_PROVIDER.to_string(),
            custom_search_url: String::new(),
            alignment: Alignment::Center,
            element_order: ElementOrder::default(),
            grid_columns: NonZeroU32::new(4).unwrap_or(NonZeroU32::MIN),
            bookmark_display: BookmarkDisplay::Both,
            bookmark_width: NonZeroU32::new(120).unwrap_or(NonZeroU32::MIN),
            bookmark_height: NonZeroU32::new(120).unwrap_or(NonZeroU32::MIN),
            icon_size: IconSize::Favicon,
            bookmarks: BookmarkTree::new(),
            colors: ThemeColors::default(),
            custom_css: String::new(),
            color_swap_mode: ColorSwapMode::Never,
        }
    }
}

impl Settings {
    /// CSS `grid-template-columns` value for the bookmark grid.
    pub fn grid_template(&self) -> String {
        format!("repeat({}, {}px)", self.grid_columns, self.bookmark_width)
    }
}

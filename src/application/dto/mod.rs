use crate::domain::entities::{
    BookmarkEntry, ColorScheme, DisplayColors, ElementId, IconSize, Link, Settings, images,
};
use serde::Serialize;

pub const FOLDER_GLYPH: &str = "\u{1F5BF}";
pub const LINK_GLYPH: &str = "\u{2691}";

/// Everything a renderer needs to draw the page, derived from state only.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageView {
    pub container_class: String,
    pub elements: Vec<ElementId>,
    pub logo: Option<String>,
    pub background_image: Option<String>,
    pub grid_template: String,
    pub bookmarks: Vec<BookmarkCell>,
    pub colors: DisplayColors,
    pub custom_css: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookmarkCell {
    pub class: String,
    pub name: String,
    pub href: Option<String>,
    pub width: u32,
    pub height: u32,
    pub icon: Option<CellIcon>,
    pub show_text: bool,
    pub items: Vec<FolderItemCell>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase", tag = "kind")]
pub enum CellIcon {
    Image { src: String },
    Glyph { glyph: &'static str, font_px: u32 },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FolderItemCell {
    pub name: String,
    pub href: String,
    pub icon: Option<String>,
}

impl From<&Link> for FolderItemCell {
    fn from(link: &Link) -> Self {
        Self {
            name: link.name.clone(),
            href: link.url.clone(),
            icon: link.icon.clone(),
        }
    }
}

impl PageView {
    pub fn project(
        settings: &Settings,
        scheme: ColorScheme,
        logo: Option<&str>,
        background: Option<&str>,
    ) -> Self {
        Self {
            container_class: format!("container align-{}", settings.alignment.as_str()),
            elements: settings.element_order.as_slice().to_vec(),
            logo: logo.map(str::to_string),
            background_image: background.map(images::css_url),
            grid_template: settings.grid_template(),
            bookmarks: settings
                .bookmarks
                .entries()
                .iter()
                .map(|entry| BookmarkCell::project(entry, settings))
                .collect(),
            colors: DisplayColors::resolve(&settings.colors, settings.color_swap_mode, scheme),
            custom_css: settings.custom_css.clone(),
        }
    }
}

impl BookmarkCell {
    fn project(entry: &BookmarkEntry, settings: &Settings) -> Self {
        let (href, icon, items) = match entry {
            BookmarkEntry::Link(link) => (Some(link.url.clone()), link.icon.clone(), Vec::new()),
            BookmarkEntry::Folder(folder) => (
                None,
                None,
                folder.items.iter().map(FolderItemCell::from).collect(),
            ),
        };

        let icon = settings.bookmark_display.shows_icon().then(|| match icon {
            Some(src) => CellIcon::Image { src },
            None => CellIcon::Glyph {
                glyph: if entry.is_folder() { FOLDER_GLYPH } else { LINK_GLYPH },
                font_px: if settings.icon_size == IconSize::Cover { 48 } else { 32 },
            },
        });

        let kind = if entry.is_folder() { "bookmark folder" } else { "bookmark" };
        Self {
            class: format!("{kind} icon-{}", settings.icon_size.as_str()),
            name: entry.name().to_string(),
            href,
            width: settings.bookmark_width.get(),
            height: settings.bookmark_height.get(),
            icon,
            show_text: settings.bookmark_display.shows_text(),
            items,
        }
    }
}

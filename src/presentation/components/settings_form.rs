use crate::domain::entities::{
    Alignment, BookmarkDisplay, ColorSwapMode, IconSize, Settings, ThemeColors,
};
use crate::domain::services::{CUSTOM_PROVIDER, ColorValidator, ValidationError};
use std::num::NonZeroU32;

/// Editable copy of the settings panel fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingsForm {
    /// A provider URL prefix or `"custom"`.
    pub search_provider: String,
    pub custom_search_url: String,
    pub alignment: Alignment,
    pub grid_columns: u32,
    pub bookmark_display: BookmarkDisplay,
    pub bookmark_width: u32,
    pub bookmark_height: u32,
    pub icon_size: IconSize,
    pub colors: ThemeColors,
    pub custom_css: String,
    pub color_swap_mode: ColorSwapMode,
}

impl SettingsForm {
    pub fn from_settings(settings: &Settings) -> Self {
        let search_provider = if settings.search_provider == settings.custom_search_url {
            CUSTOM_PROVIDER.to_string()
        } else {
            settings.search_provider.clone()
        };

        Self {
            search_provider,
            custom_search_url: settings.custom_search_url.clone(),
            alignment: settings.alignment,
            grid_columns: settings.grid_columns.get(),
            bookmark_display: settings.bookmark_display,
            bookmark_width: settings.bookmark_width.get(),
            bookmark_height: settings.bookmark_height.get(),
            icon_size: settings.icon_size,
            colors: settings.colors.clone(),
            custom_css: settings.custom_css.clone(),
            color_swap_mode: settings.color_swap_mode,
        }
    }

    pub fn shows_custom_url_field(&self) -> bool {
        self.search_provider == CUSTOM_PROVIDER
    }

    /// Writes the form into `settings`. Nothing is written unless every field is valid.
    pub fn apply_to(&self, settings: &mut Settings) -> Result<(), ValidationError> {
        let grid_columns = positive(self.grid_columns, "Grid columns")?;
        let bookmark_width = positive(self.bookmark_width, "Bookmark width")?;
        let bookmark_height = positive(self.bookmark_height, "Bookmark height")?;
        for color in [
            &self.colors.accent_color,
            &self.colors.accent_hover_color,
            &self.colors.bg_color,
            &self.colors.text_color,
        ] {
            ColorValidator::validate(color)?;
        }

        settings.search_provider = if self.shows_custom_url_field() {
            self.custom_search_url.clone()
        } else {
            self.search_provider.clone()
        };
        settings.custom_search_url = self.custom_search_url.clone();
        settings.alignment = self.alignment;
        settings.grid_columns = grid_columns;
        settings.bookmark_display = self.bookmark_display;
        settings.bookmark_width = bookmark_width;
        settings.bookmark_height = bookmark_height;
        settings.icon_size = self.icon_size;
        settings.colors = self.colors.clone();
        settings.custom_css = self.custom_css.clone();
        settings.color_swap_mode = self.color_swap_mode;
        Ok(())
    }
}

fn positive(value: u32, field: &'static str) -> Result<NonZeroU32, ValidationError> {
    NonZeroU32::new(value).ok_or(ValidationError::NotPositive(field))
}

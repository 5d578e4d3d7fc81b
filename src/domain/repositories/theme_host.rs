use crate::domain::entities::{ColorScheme, ThemeColors};

/// What the host page knows about its visual theme.
pub trait ThemeHost: Send + Sync {
    /// Stylesheet colors for `scheme`, before any user override.
    fn default_colors_for(&self, scheme: ColorScheme) -> ThemeColors;

    fn color_scheme(&self) -> ColorScheme;

    /// Colors of the scheme the host is showing right now.
    fn default_colors(&self) -> ThemeColors {
        self.default_colors_for(self.color_scheme())
    }
}

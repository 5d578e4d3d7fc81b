use crate::domain::entities::{ColorScheme, ThemeColors};
use crate::domain::repositories::ThemeHost;
use std::sync::RwLock;

pub const COLOR_SCHEME_ENV: &str = "STARTPAGE_COLOR_SCHEME";

/// Built-in stylesheet palette for each scheme, with a settable current scheme.
pub struct StaticThemeHost {
    scheme: RwLock<ColorScheme>,
}

impl StaticThemeHost {
    pub fn new(scheme: ColorScheme) -> Self {
        Self {
            scheme: RwLock::new(scheme),
        }
    }

    /// Reads `STARTPAGE_COLOR_SCHEME` (`light` or `dark`), defaulting to light.
    pub fn from_env() -> Self {
        let scheme = match std::env::var(COLOR_SCHEME_ENV).as_deref() {
            Ok("dark") => ColorScheme::Dark,
            _ => ColorScheme::Light,
        };
        Self::new(scheme)
    }

    pub fn set_scheme(&self, scheme: ColorScheme) {
        match self.scheme.write() {
            Ok(mut guard) => *guard = scheme,
            Err(poisoned) => *poisoned.into_inner() = scheme,
        }
    }

    pub fn palette(scheme: ColorScheme) -> ThemeColors {
        match scheme {
            ColorScheme::Light => ThemeColors::new("#3b82f6", "#2563eb", "#f5f5f5", "#1a1a1a"),
            ColorScheme::Dark => ThemeColors::new("#60a5fa", "#3b82f6", "#121212", "#e5e5e5"),
        }
    }
}

impl ThemeHost for StaticThemeHost {
    fn default_colors_for(&self, scheme: ColorScheme) -> ThemeColors {
        Self::palette(scheme)
    }

    fn color_scheme(&self) -> ColorScheme {
        match self.scheme.read() {
            Ok(guard) => *guard,
            Err(poisoned) => *poisoned.into_inner(),
        }
    }
}

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorScheme {
    #[default]
    Light,
    Dark,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorSwapMode {
    #[default]
    Never,
    Light,
    Dark,
}

impl ColorSwapMode {
    /// Whether background and text trade places under `scheme`.
    pub fn should_swap(self, scheme: ColorScheme) -> bool {
        matches!(
            (self, scheme),
            (ColorSwapMode::Light, ColorScheme::Light) | (ColorSwapMode::Dark, ColorScheme::Dark)
        )
    }
}

/// The four user theme colors. These are always the base colors; swapping is
/// applied only in `DisplayColors`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ThemeColors {
    pub accent_color: String,
    pub accent_hover_color: String,
    pub bg_color: String,
    pub text_color: String,
}

impl ThemeColors {
    pub fn new(accent: &str, accent_hover: &str, background: &str, text: &str) -> Self {
        Self {
            accent_color: accent.to_string(),
            accent_hover_color: accent_hover.to_string(),
            bg_color: background.to_string(),
            text_color: text.to_string(),
        }
    }

    /// Replaces every empty color with the matching one from `defaults`.
    pub fn fill_empty_from(&mut self, defaults: &ThemeColors) {
        let pairs = [
            (&mut self.accent_color, &defaults.accent_color),
            (&mut self.accent_hover_color, &defaults.accent_hover_color),
            (&mut self.bg_color, &defaults.bg_color),
            (&mut self.text_color, &defaults.text_color),
        ];
        for (color, fallback) in pairs {
            if color.trim().is_empty() {
                color.clone_from(fallback);
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayColors {
    pub accent: String,
    pub accent_hover: String,
    pub background: String,
    pub text: String,
}

impl DisplayColors {
    pub fn resolve(colors: &ThemeColors, mode: ColorSwapMode, scheme: ColorScheme) -> Self {
        let (background, text) = if mode.should_swap(scheme) {
            (&colors.text_color, &colors.bg_color)
        } else {
            (&colors.bg_color, &colors.text_color)
        };
        Self {
            accent: colors.accent_color.clone(),
            accent_hover: colors.accent_hover_color.clone(),
            background: background.clone(),
            text: text.clone(),
        }
    }
}

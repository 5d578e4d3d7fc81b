use std::fmt;

/// The images the page keeps outside the settings record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImageRole {
    Logo,
    Background,
}

impl ImageRole {
    pub const ALL: [ImageRole; 2] = [ImageRole::Logo, ImageRole::Background];

    /// Key under the `images` collection.
    pub fn key(self) -> &'static str {
        match self {
            ImageRole::Logo => "logo",
            ImageRole::Background => "background",
        }
    }
}

impl fmt::Display for ImageRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageSource {
    DataUri,
    External,
}

impl ImageSource {
    pub fn classify(value: &str) -> Self {
        if value.trim_start().starts_with("data:") {
            ImageSource::DataUri
        } else {
            ImageSource::External
        }
    }
}

/// CSS `background-image` value for an image reference.
pub fn css_url(value: &str) -> String {
    format!("url({value})")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_data_uris_and_urls() {
        assert_eq!(ImageSource::classify("data:image/png;base64,AAAA"), ImageSource::DataUri);
        assert_eq!(ImageSource::classify("https://example.com/bg.jpg"), ImageSource::External);
    }

    #[test]
    fn roles_map_to_store_keys() {
        assert_eq!(ImageRole::Logo.key(), "logo");
        assert_eq!(ImageRole::Background.to_string(), "background");
    }
}

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please enter a name")]
    MissingName,
    #[error("Please enter a URL")]
    MissingUrl,
    #[error("'{0}' is not a #RRGGBB color")]
    InvalidColor(String),
    #[error("{0} must be a positive number")]
    NotPositive(&'static str),
}

pub struct BookmarkValidator;

impl BookmarkValidator {
    /// Returns the trimmed name, or an error when nothing is left.
    pub fn validate_name(name: &str) -> Result<String, ValidationError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ValidationError::MissingName);
        }
        Ok(name.to_string())
    }

    pub fn validate_url(url: &str) -> Result<String, ValidationError> {
        let url = url.trim();
        if url.is_empty() {
            return Err(ValidationError::MissingUrl);
        }
        Ok(url.to_string())
    }
}

pub struct ColorValidator;

impl ColorValidator {
    pub fn is_hex_color(value: &str) -> bool {
        value.len() == 7
            && value.starts_with('#')
            && value[1..].chars().all(|c| c.is_ascii_hexdigit())
    }

    pub fn validate(value: &str) -> Result<String, ValidationError> {
        if Self::is_hex_color(value) {
            Ok(value.to_string())
        } else {
            Err(ValidationError::InvalidColor(value.to_string()))
        }
    }
}

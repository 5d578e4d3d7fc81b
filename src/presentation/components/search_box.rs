use crate::domain::entities::Settings;

#[derive(Debug, Default)]
pub struct SearchBox {
    query: String,
}

impl SearchBox {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn query_mut(&mut self) -> &mut String {
        &mut self.query
    }

    /// URL to navigate to on Enter, or `None` for a blank query.
    pub fn submit(&self, settings: &Settings) -> Option<String> {
        let query = self.query.trim();
        if query.is_empty() {
            return None;
        }
        let url = settings.search_url(query);
        tracing::debug!("Search dispatched to {}", url);
        Some(url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_queries_do_nothing() {
        let mut search = SearchBox::new();
        *search.query_mut() = "   ".into();
        assert_eq!(search.submit(&Settings::default()), None);
    }

    #[test]
    fn queries_are_trimmed_before_encoding() {
        let mut search = SearchBox::new();
        search.query_mut().push_str("  a b ");
        assert_eq!(
            search.submit(&Settings::default()).as_deref(),
            Some("https://www.google.com/search?q=a%20b")
        );
    }
}

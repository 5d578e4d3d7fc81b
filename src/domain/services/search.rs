use crate::domain::entities::Settings;

/// Provider value that selects the custom URL template.
pub const CUSTOM_PROVIDER: &str = "custom";
pub const QUERY_PLACEHOLDER: &str = "{query}";

/// Builds the URL the search box navigates to.
///
/// The custom template is used when the provider is the `custom` sentinel or
/// equals the template itself; the settings form stores the template as the
/// provider when "custom" is selected, so both forms occur in stored data.
pub fn build_search_url(provider: &str, custom_search_url: &str, query: &str) -> String {
    let encoded = urlencoding::encode(query);
    if provider == CUSTOM_PROVIDER || provider == custom_search_url {
        custom_search_url.replacen(QUERY_PLACEHOLDER, &encoded, 1)
    } else {
        format!("{provider}{encoded}")
    }
}

impl Settings {
    pub fn search_url(&self, query: &str) -> String {
        build_search_url(&self.search_provider, &self.custom_search_url, query)
    }

    pub fn uses_custom_search(&self) -> bool {
        self.search_provider == CUSTOM_PROVIDER || self.search_provider == self.custom_search_url
    }
}

//! Build-time settings.
//!
//! The content API endpoint and the deployment base path are baked in at
//! compile time so the same bundle can be served from any prefix.

/// Content node holding the site root (title, logos, top-level pages).
pub const HOME_PATH: &str = "/1";

/// Offset from the top of the viewport used when scrolling to a section,
/// matching the height of the sticky sub-navigation.
pub const SECTION_SCROLL_OFFSET: f64 = 112.0;

/// Base URL of the content API.
pub fn api_url() -> &'static str {
    option_env!("TEMPLEMAP_API_URL").unwrap_or("/api")
}

/// Deployment prefix of the app (router basename).
pub fn base_path() -> &'static str {
    option_env!("TEMPLEMAP_BASE_PATH").unwrap_or("")
}

/// Interface language. Falls back to French, the language of the content.
pub fn locale() -> &'static str {
    option_env!("TEMPLEMAP_LOCALE").unwrap_or("fr")
}

/// Full API URL for a content path.
pub fn api_endpoint(path: &str) -> String {
    format!("{}{}", api_url().trim_end_matches('/'), path)
}

/// Content path requesting child nodes inline.
pub fn with_children(path: &str) -> String {
    format!("{path}?children=true")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_endpoint_joins_without_double_slash() {
        let url = api_endpoint("/temples/");
        assert!(url.ends_with("/temples/"));
        assert!(!url.contains("//temples"));
    }

    #[test]
    fn locale_has_translations() {
        assert!(rust_i18n::available_locales!().contains(&locale()));
    }

    #[test]
    fn with_children_appends_query() {
        assert_eq!(with_children("/temples/"), "/temples/?children=true");
    }
}

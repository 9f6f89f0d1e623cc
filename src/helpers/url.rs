//! URL helper functions

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};

use crate::config::SiteConfig;

/// Characters escaped inside a single path segment
const SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}')
    .add(b'%');

/// Generate a URL with the root path. Absolute URLs pass through.
///
/// # Examples
/// ```ignore
/// url_for(&config, "/logo.png") // -> "/site/logo.png"
/// ```
pub fn url_for(config: &SiteConfig, path: &str) -> String {
    if is_external(path) {
        return path.to_string();
    }

    let root = config.root.trim_end_matches('/');
    let path = path.trim_start_matches('/');

    if path.is_empty() {
        format!("{}/", root)
    } else {
        format!("{}/{}", root, encode_path(path))
    }
}

/// Absolute URL of the site's page, empty when no `url` is configured
pub fn canonical_url(config: &SiteConfig) -> String {
    let base = config.url.trim_end_matches('/');
    if base.is_empty() {
        return String::new();
    }
    format!("{}{}", base, url_for(config, ""))
}

/// Whether a link leaves the site
pub fn is_external(path: &str) -> bool {
    path.starts_with("http://") || path.starts_with("https://") || path.starts_with("//")
}

/// Percent-encode each segment of a relative path
pub fn encode_path(path: &str) -> String {
    path.split('/')
        .map(|segment| utf8_percent_encode(segment, SEGMENT).to_string())
        .collect::<Vec<_>>()
        .join("/")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> SiteConfig {
        let mut config = SiteConfig::default();
        config.root = "/site/".to_string();
        config
    }

    #[test]
    fn test_url_for() {
        let config = test_config();
        assert_eq!(url_for(&config, "/logo.png"), "/site/logo.png");
        assert_eq!(url_for(&config, "search.json"), "/site/search.json");
        assert_eq!(url_for(&config, ""), "/site/");
    }

    #[test]
    fn test_url_for_default_root() {
        let config = SiteConfig::default();
        assert_eq!(url_for(&config, "/logo.png"), "/logo.png");
    }

    #[test]
    fn test_external_passthrough() {
        let config = test_config();
        assert_eq!(
            url_for(&config, "https://cdn.example.com/logo.png"),
            "https://cdn.example.com/logo.png"
        );
    }

    #[test]
    fn test_canonical_url() {
        let mut config = test_config();
        config.url = "https://optimizing-sports.de/".to_string();
        assert_eq!(canonical_url(&config), "https://optimizing-sports.de/site/");

        config.url = String::new();
        assert_eq!(canonical_url(&config), "");
    }

    #[test]
    fn test_encode_path() {
        assert_eq!(encode_path("img/my logo.png"), "img/my%20logo.png");
        assert_eq!(encode_path("a/b#c"), "a/b%23c");
    }
}

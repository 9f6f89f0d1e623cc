//! Site configuration (_config.yml)

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::helpers::DEFAULT_DATE_FORMAT;

/// Main site configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    // Site
    pub title: String,
    pub tagline: String,
    pub description: String,
    pub author: String,
    pub language: String,
    pub timezone: String,

    // URL
    pub url: String,
    pub root: String,

    // Directory
    pub source_dir: String,
    pub public_dir: String,
    pub content_file: String,

    // Display
    pub date_format: String,
    pub logo: String,

    // Outbound links
    pub podcast_url: String,
    pub social: SocialConfig,
    pub contact_email: Option<String>,

    // Page copy
    pub hero: HeroConfig,
    pub podcast_topics: Vec<String>,

    // Store any additional fields
    #[serde(flatten)]
    pub extra: HashMap<String, serde_yaml::Value>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "Optimizing Sports".to_string(),
            tagline: "Podcast • Blog • Instagram".to_string(),
            description: String::new(),
            author: "Optimizing Sports".to_string(),
            language: "de".to_string(),
            timezone: "Europe/Berlin".to_string(),

            url: "http://example.com".to_string(),
            root: "/".to_string(),

            source_dir: "source".to_string(),
            public_dir: "public".to_string(),
            content_file: "posts.yml".to_string(),

            date_format: DEFAULT_DATE_FORMAT.to_string(),
            logo: "/logo.png".to_string(),

            podcast_url: "https://example.com/podcast".to_string(),
            social: SocialConfig::default(),
            contact_email: Some("hello@optimizing-sports.de".to_string()),

            hero: HeroConfig::default(),
            podcast_topics: vec![
                "Athletik & Fußball-Performance".to_string(),
                "Speed, Sprungkraft, Belastungssteuerung".to_string(),
                "Praxisnah, kurz & umsetzbar".to_string(),
            ],

            extra: HashMap::new(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {:?}", path))?;
        let config: SiteConfig = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse config {:?}", path))?;
        Ok(config)
    }
}

/// Social-media profile link
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SocialConfig {
    pub url: String,
    pub label: String,
}

impl Default for SocialConfig {
    fn default() -> Self {
        Self {
            url: "https://www.instagram.com/optimizingsports/".to_string(),
            label: "Instagram".to_string(),
        }
    }
}

/// Hero section copy
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HeroConfig {
    pub title: String,
    pub text: String,
}

impl Default for HeroConfig {
    fn default() -> Self {
        Self {
            title: "Schwarz. Klar. Performance.".to_string(),
            text: "Optimizing Sports bündelt Podcast, Blog und Socials an einem Ort – clean, \
                   modern und ohne Schnickschnack."
                .to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SiteConfig::default();
        assert_eq!(config.title, "Optimizing Sports");
        assert_eq!(config.date_format, "DD.MM.YYYY");
        assert_eq!(config.content_file, "posts.yml");
        assert_eq!(config.social.label, "Instagram");
    }

    #[test]
    fn test_parse_config() {
        let yaml = r#"
title: My Podcast
language: en
podcast_url: https://podcasts.example.org/show
social:
  url: https://social.example.org/me
  label: Mastodon
hero:
  title: Hello
"#;
        let config: SiteConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.title, "My Podcast");
        assert_eq!(config.language, "en");
        assert_eq!(config.podcast_url, "https://podcasts.example.org/show");
        assert_eq!(config.social.label, "Mastodon");
        assert_eq!(config.hero.title, "Hello");
        // Unset nested fields fall back to their defaults
        assert_eq!(config.hero.text, HeroConfig::default().text);
        assert_eq!(config.public_dir, "public");
    }

    #[test]
    fn test_load_accepts_literal_percent_in_date_format() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("_config.yml");
        fs::write(&path, "date_format: \"DD.MM.YYYY (100%)\"\n").unwrap();

        let config = SiteConfig::load(&path).unwrap();
        let date = chrono::NaiveDate::from_ymd_opt(2025, 1, 12).unwrap();
        assert_eq!(
            crate::helpers::format_date(&date, &config.date_format),
            "12.01.2025 (100%)"
        );
    }

    #[test]
    fn test_extra_fields_are_kept() {
        let yaml = "title: X\nanalytics_id: abc\n";
        let config: SiteConfig = serde_yaml::from_str(yaml).unwrap();
        assert!(config.extra.contains_key("analytics_id"));
    }
}

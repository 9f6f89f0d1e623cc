//! Initialize a new site

use anyhow::Result;
use std::fs;
use std::path::Path;

use crate::content::BUILTIN_POSTS;
use crate::CONFIG_FILE;

const DEFAULT_CONFIG: &str = r#"# Site
title: Optimizing Sports
tagline: Podcast • Blog • Instagram
description: ''
author: Optimizing Sports
language: de
timezone: Europe/Berlin

# URL
url: http://example.com
root: /

# Directory
source_dir: source
public_dir: public
content_file: posts.yml

# Display
date_format: DD.MM.YYYY
logo: /logo.png

# Links
podcast_url: https://example.com/podcast
social:
  url: https://www.instagram.com/optimizingsports/
  label: Instagram
contact_email: hello@optimizing-sports.de

# Page copy
hero:
  title: Schwarz. Klar. Performance.
  text: Optimizing Sports bündelt Podcast, Blog und Socials an einem Ort – clean, modern und ohne Schnickschnack.
podcast_topics:
  - Athletik & Fußball-Performance
  - Speed, Sprungkraft, Belastungssteuerung
  - Praxisnah, kurz & umsetzbar
"#;

/// Initialize a new site in the given directory
pub fn init_site(target_dir: &Path) -> Result<()> {
    let config_path = target_dir.join(CONFIG_FILE);
    if config_path.exists() {
        anyhow::bail!("Site already initialized: {:?} exists", config_path);
    }

    fs::create_dir_all(target_dir.join("source"))?;
    fs::write(&config_path, DEFAULT_CONFIG)?;

    let posts_path = target_dir.join("posts.yml");
    if !posts_path.exists() {
        fs::write(&posts_path, BUILTIN_POSTS)?;
    }

    tracing::debug!("Wrote {:?} and {:?}", config_path, posts_path);
    Ok(())
}

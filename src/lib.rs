//! onepager: a one-page podcast, blog and social site generator
//!
//! The library holds the page's domain: an immutable content store, a
//! free-text search filter, a single-select accordion and a restricted
//! inline markup renderer. The generator renders the page through
//! embedded Tera templates into a static `index.html`.

pub mod commands;
pub mod config;
pub mod content;
pub mod generator;
pub mod helpers;
pub mod i18n;
pub mod markup;
pub mod page;
pub mod search;
pub mod server;
pub mod templates;
pub mod watcher;

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use content::{BuiltinContent, ContentProvider, ContentStore, FileContent};

/// Name of the site configuration file
pub const CONFIG_FILE: &str = "_config.yml";

/// The main site application
#[derive(Debug, Clone)]
pub struct Site {
    /// Site configuration
    pub config: config::SiteConfig,
    /// Base directory
    pub base_dir: PathBuf,
    /// Static asset directory
    pub source_dir: PathBuf,
    /// Public (output) directory
    pub public_dir: PathBuf,
    /// Posts file
    pub content_path: PathBuf,
}

impl Site {
    /// Create a new site from a directory
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        let config_path = base_dir.join(CONFIG_FILE);

        let config = if config_path.exists() {
            config::SiteConfig::load(&config_path)?
        } else {
            config::SiteConfig::default()
        };

        Ok(Self::with_config(base_dir, config))
    }

    /// Create a site with an explicit configuration
    pub fn with_config(base_dir: PathBuf, config: config::SiteConfig) -> Self {
        let source_dir = base_dir.join(&config.source_dir);
        let public_dir = base_dir.join(&config.public_dir);
        let content_path = base_dir.join(&config.content_file);

        Self {
            config,
            base_dir,
            source_dir,
            public_dir,
            content_path,
        }
    }

    /// The content file when present, the builtin posts otherwise
    pub fn content_provider(&self) -> Box<dyn ContentProvider> {
        if self.content_path.exists() {
            Box::new(FileContent::new(&self.content_path))
        } else {
            tracing::debug!(
                "No content file at {:?}, using builtin posts",
                self.content_path
            );
            Box::new(BuiltinContent)
        }
    }

    /// Load and validate the posts
    pub fn load_store(&self) -> Result<ContentStore> {
        let provider = self.content_provider();
        ContentStore::load(provider.as_ref())
            .with_context(|| format!("Failed to load posts from {}", provider.describe()))
    }

    /// Load the UI copy for the configured language
    pub fn load_i18n(&self) -> Result<i18n::I18n> {
        let mut i18n = i18n::I18n::with_builtin(&self.config.language)?;
        i18n.load_languages(self.base_dir.join("languages"))?;
        Ok(i18n)
    }

    /// Generate the static site
    pub fn generate(&self) -> Result<()> {
        commands::generate::run(self)
    }

    /// Clean the public directory
    pub fn clean(&self) -> Result<()> {
        commands::clean::run(self)
    }
}

//! Generator module - renders the page and writes the static output

use anyhow::Result;
use serde::Serialize;
use std::fs;
use tera::Context;
use walkdir::WalkDir;

use crate::content::ContentStore;
use crate::helpers::{canonical_url, current_year, date_iso, is_external, url_for};
use crate::i18n::I18n;
use crate::page::PageState;
use crate::search;
use crate::templates::{SiteData, TemplateRenderer};
use crate::Site;

/// One entry of `search.json`
#[derive(Debug, Clone, Serialize)]
struct SearchEntry<'a> {
    id: &'a str,
    title: &'a str,
    date: String,
    tags: &'a [String],
    corpus: String,
}

/// Static site generator using Tera templates
pub struct Generator {
    site: Site,
    renderer: TemplateRenderer,
    i18n: I18n,
}

impl Generator {
    /// Create a new generator
    pub fn new(site: &Site) -> Result<Self> {
        Ok(Self {
            site: site.clone(),
            renderer: TemplateRenderer::new()?,
            i18n: site.load_i18n()?,
        })
    }

    /// Generate the entire site
    pub fn generate(&self, store: &ContentStore) -> Result<()> {
        fs::create_dir_all(&self.site.public_dir)?;

        self.copy_source_assets()?;
        self.check_logo();

        // The static page carries the initial state
        let state = PageState::new(store);
        let html = self.render_page(store, &state)?;
        let output_path = self.site.public_dir.join("index.html");
        fs::write(&output_path, html)?;
        tracing::debug!("Generated: {:?}", output_path);

        self.generate_search_index(store)?;

        Ok(())
    }

    /// Render the page for a given state
    pub fn render_page(&self, store: &ContentStore, state: &PageState) -> Result<String> {
        let snapshot = state.snapshot(store, &self.site.config, &self.i18n);

        let mut context = Context::new();
        context.insert("site", &self.build_site_data());
        context.insert("t", &self.i18n.tree());
        context.insert("page", &snapshot);
        context.insert(
            "count_labels",
            &serde_json::to_string(&self.count_labels(store.len()))?,
        );

        self.renderer.render("index.html", &context)
    }

    /// Build site data for templates
    fn build_site_data(&self) -> SiteData {
        let config = &self.site.config;
        SiteData {
            title: config.title.clone(),
            tagline: config.tagline.clone(),
            description: config.description.clone(),
            author: config.author.clone(),
            language: self.i18n.language().to_string(),
            canonical_url: canonical_url(config),
            version: env!("CARGO_PKG_VERSION").to_string(),
            logo_url: url_for(config, &config.logo),
            podcast_url: config.podcast_url.clone(),
            social_url: config.social.url.clone(),
            social_label: config.social.label.clone(),
            contact_email: config.contact_email.clone(),
            hero_title: config.hero.title.clone(),
            hero_text: config.hero.text.clone(),
            podcast_topics: config.podcast_topics.clone(),
            current_year: current_year(&config.timezone),
        }
    }

    /// Post count labels for every possible visible count, indexed by count
    fn count_labels(&self, total: usize) -> Vec<String> {
        (0..=total)
            .map(|n| self.i18n.get_plural("blog.count", n))
            .collect()
    }

    /// Generate search index (JSON)
    fn generate_search_index(&self, store: &ContentStore) -> Result<()> {
        let entries: Vec<SearchEntry> = store
            .posts()
            .iter()
            .map(|p| SearchEntry {
                id: &p.id,
                title: &p.title,
                date: date_iso(&p.date),
                tags: &p.tags,
                corpus: search::corpus(p),
            })
            .collect();

        let output_path = self.site.public_dir.join("search.json");
        let json = serde_json::to_string_pretty(&entries)?;
        fs::write(&output_path, json)?;
        tracing::info!("Generated search.json");

        Ok(())
    }

    /// Warn when a local logo is missing; the page hides it silently
    fn check_logo(&self) {
        let logo = &self.site.config.logo;
        if logo.is_empty() || is_external(logo) {
            return;
        }

        let path = self.site.source_dir.join(logo.trim_start_matches('/'));
        if !path.exists() {
            tracing::warn!("Logo {:?} not found, the page will hide it", path);
        }
    }

    /// Copy static assets (logo, images) to the public directory
    fn copy_source_assets(&self) -> Result<()> {
        let source_dir = &self.site.source_dir;
        if !source_dir.exists() {
            return Ok(());
        }

        for entry in WalkDir::new(source_dir)
            .follow_links(true)
            .into_iter()
            .filter_map(|e| e.ok())
        {
            let path = entry.path();
            if !path.is_file() {
                continue;
            }

            let relative = path.strip_prefix(source_dir)?;
            let dest = self.site.public_dir.join(relative);

            if let Some(parent) = dest.parent() {
                fs::create_dir_all(parent)?;
            }

            fs::copy(path, &dest)?;
            tracing::debug!("Copied: {:?}", relative);
        }

        Ok(())
    }
}

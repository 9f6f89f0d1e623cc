//! Built-in one-page templates using the Tera template engine
//!
//! Templates are embedded in the binary. Autoescaping is off; every
//! interpolation goes through `escape_text` or `escape_attr` explicitly.

use anyhow::Result;
use serde::Serialize;
use std::collections::HashMap;
use tera::{Context, Tera};

use crate::helpers::{escape_text, html_escape};

/// Template renderer with the embedded one-page theme
pub struct TemplateRenderer {
    tera: Tera,
}

impl TemplateRenderer {
    /// Create a new renderer with all templates loaded
    pub fn new() -> Result<Self> {
        let mut tera = Tera::default();
        tera.autoescape_on(vec![]);

        tera.add_raw_templates(vec![
            ("index.html", include_str!("onepager/index.html")),
            (
                "partials/style.html",
                include_str!("onepager/partials/style.html"),
            ),
            (
                "partials/header.html",
                include_str!("onepager/partials/header.html"),
            ),
            (
                "partials/hero.html",
                include_str!("onepager/partials/hero.html"),
            ),
            (
                "partials/podcast.html",
                include_str!("onepager/partials/podcast.html"),
            ),
            (
                "partials/blog.html",
                include_str!("onepager/partials/blog.html"),
            ),
            (
                "partials/social.html",
                include_str!("onepager/partials/social.html"),
            ),
            (
                "partials/footer.html",
                include_str!("onepager/partials/footer.html"),
            ),
            (
                "partials/script.html",
                include_str!("onepager/partials/script.html"),
            ),
        ])?;

        tera.register_filter("escape_text", escape_text_filter);
        tera.register_filter("escape_attr", escape_attr_filter);

        Ok(Self { tera })
    }

    /// Render a template with given context
    pub fn render(&self, template_name: &str, context: &Context) -> Result<String> {
        Ok(self.tera.render(template_name, context)?)
    }
}

/// Tera filter: escape `&`, `<`, `>` in text content
fn escape_text_filter(
    value: &tera::Value,
    _args: &HashMap<String, tera::Value>,
) -> tera::Result<tera::Value> {
    let s = value_to_string(value);
    Ok(tera::Value::String(escape_text(&s)))
}

/// Tera filter: escape for a double- or single-quoted attribute value
fn escape_attr_filter(
    value: &tera::Value,
    _args: &HashMap<String, tera::Value>,
) -> tera::Result<tera::Value> {
    let s = value_to_string(value);
    Ok(tera::Value::String(html_escape(&s)))
}

fn value_to_string(value: &tera::Value) -> String {
    match value {
        tera::Value::String(s) => s.clone(),
        tera::Value::Null => String::new(),
        other => other.to_string(),
    }
}

/// Site-wide data for the template context
#[derive(Debug, Clone, Serialize)]
pub struct SiteData {
    pub title: String,
    pub tagline: String,
    pub description: String,
    pub author: String,
    pub language: String,
    pub canonical_url: String,
    pub version: String,
    pub logo_url: String,
    pub podcast_url: String,
    pub social_url: String,
    pub social_label: String,
    pub contact_email: Option<String>,
    pub hero_title: String,
    pub hero_text: String,
    pub podcast_topics: Vec<String>,
    pub current_year: i32,
}

//! Add a new post to the content file

use anyhow::{Context, Result};
use chrono::Local;

use crate::content::{ContentDocument, ContentStore, FileContent, Post};
use crate::Site;

/// Options for a new post
#[derive(Debug, Clone, Default)]
pub struct NewPost {
    pub title: String,
    pub id: Option<String>,
    pub tags: Vec<String>,
    pub teaser: Option<String>,
    /// Body blocks in the inline markup
    pub content: Vec<String>,
}

/// Append a post dated today; the id defaults to the slugified title
pub fn create_post(site: &Site, options: &NewPost) -> Result<Post> {
    let file = FileContent::new(&site.content_path);
    let mut document = if site.content_path.exists() {
        file.read_document()?
    } else {
        ContentDocument::default()
    };

    let id = options
        .id
        .clone()
        .unwrap_or_else(|| slug::slugify(&options.title));

    let post = Post::new(id, options.title.clone(), Local::now().date_naive())
        .with_tags(options.tags.iter().cloned())
        .with_teaser(options.teaser.clone().unwrap_or_default())
        .with_content(options.content.iter().cloned());

    document.posts.push(post.clone());

    // Validate before touching the file
    ContentStore::new(document.posts.clone())
        .with_context(|| format!("Cannot add post {:?}", post.id))?;

    file.write_document(&document)?;
    tracing::info!("Added post {:?} to {:?}", post.id, site.content_path);

    Ok(post)
}

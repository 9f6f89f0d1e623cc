//! Search posts from the command line

use anyhow::Result;

use crate::helpers::{format_date, truncate};
use crate::search;
use crate::Site;

/// Print the posts matching `query`, in display order
pub fn run(site: &Site, query: &str) -> Result<()> {
    let store = site.load_store()?;
    let i18n = site.load_i18n()?;
    let results = search::filter(store.posts(), query);

    tracing::debug!("Query {:?} matched {} of {} posts", query, results.len(), store.len());

    println!("{}", i18n.get_plural("blog.count", results.len()));
    if results.is_empty() {
        println!("{}", i18n.get("blog.empty"));
        return Ok(());
    }

    for post in results {
        println!(
            "  {} - {} [{}]",
            format_date(&post.date, &site.config.date_format),
            post.title,
            post.id
        );
        if !post.teaser.is_empty() {
            println!("      {}", truncate(&post.teaser, 80, Some("…")));
        }
    }

    Ok(())
}

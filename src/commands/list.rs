//! List site content

use anyhow::Result;

use crate::helpers::format_date;
use crate::Site;

/// List site content by type
pub fn run(site: &Site, content_type: &str) -> Result<()> {
    let store = site.load_store()?;

    match content_type {
        "post" | "posts" => {
            println!("Posts ({}):", store.len());
            for post in store.posts() {
                println!(
                    "  {} - {} [{}]",
                    format_date(&post.date, &site.config.date_format),
                    post.title,
                    post.id
                );
            }
        }
        "tag" | "tags" => {
            let tags = store.tags();
            println!("Tags ({}):", tags.len());
            let mut tags: Vec<_> = tags.into_iter().collect();
            // Stable sort keeps first-seen order among equal counts
            tags.sort_by(|a, b| b.1.cmp(&a.1));
            for (tag, count) in tags {
                println!("  {} ({})", tag, count);
            }
        }
        _ => {
            anyhow::bail!("Unknown type: {}. Available: post, tag", content_type);
        }
    }

    Ok(())
}

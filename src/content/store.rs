//! The read-only content store

use indexmap::IndexMap;
use std::collections::HashSet;

use super::{ContentError, ContentProvider, Post};

/// Immutable, ordered collection of posts.
///
/// Ids are validated once on construction; afterwards the store only
/// hands out shared references.
#[derive(Debug, Clone, Default)]
pub struct ContentStore {
    posts: Vec<Post>,
}

impl ContentStore {
    /// Build a store, rejecting empty and duplicate ids
    pub fn new(posts: Vec<Post>) -> Result<Self, ContentError> {
        let mut seen = HashSet::with_capacity(posts.len());
        for post in &posts {
            if post.id.trim().is_empty() {
                return Err(ContentError::EmptyId {
                    title: post.title.clone(),
                });
            }
            if !seen.insert(post.id.as_str()) {
                return Err(ContentError::DuplicateId(post.id.clone()));
            }
        }

        Ok(Self { posts })
    }

    /// Load and validate posts from a provider
    pub fn load(provider: &dyn ContentProvider) -> Result<Self, ContentError> {
        let posts = provider.load()?;
        tracing::debug!("Loaded {} posts from {}", posts.len(), provider.describe());
        Self::new(posts)
    }

    /// All posts in authoring order
    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    pub fn len(&self) -> usize {
        self.posts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }

    pub fn first(&self) -> Option<&Post> {
        self.posts.first()
    }

    /// Look up a post by id
    pub fn get(&self, id: &str) -> Option<&Post> {
        self.posts.iter().find(|p| p.id == id)
    }

    /// Tag usage counts, in first-seen order
    pub fn tags(&self) -> IndexMap<&str, usize> {
        let mut tags = IndexMap::new();
        for tag in self.posts.iter().flat_map(|p| p.tags.iter()) {
            *tags.entry(tag.as_str()).or_insert(0) += 1;
        }
        tags
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::BuiltinContent;
    use chrono::NaiveDate;

    fn post(id: &str) -> Post {
        Post::new(id, id.to_uppercase(), NaiveDate::from_ymd_opt(2025, 1, 1).unwrap())
    }

    #[test]
    fn test_rejects_duplicate_ids() {
        let err = ContentStore::new(vec![post("a"), post("b"), post("a")]).unwrap_err();
        assert!(matches!(err, ContentError::DuplicateId(id) if id == "a"));
    }

    #[test]
    fn test_rejects_empty_id() {
        let err = ContentStore::new(vec![post(" ")]).unwrap_err();
        assert!(matches!(err, ContentError::EmptyId { .. }));
    }

    #[test]
    fn test_empty_store_is_valid() {
        let store = ContentStore::new(Vec::new()).unwrap();
        assert!(store.is_empty());
        assert!(store.first().is_none());
    }

    #[test]
    fn test_lookup_and_order() {
        let store = ContentStore::load(&BuiltinContent).unwrap();
        assert_eq!(store.len(), 3);
        assert_eq!(store.first().unwrap().id, "post-1");
        assert_eq!(store.get("post-2").unwrap().tags, vec!["Plyometrie", "Athletik"]);
        assert!(store.get("post-4").is_none());
    }

    #[test]
    fn test_tag_counts_keep_first_seen_order() {
        let store = ContentStore::new(vec![
            post("a").with_tags(["Speed", "Fußball"]),
            post("b").with_tags(["Athletik", "Speed"]),
        ])
        .unwrap();
        let tags: Vec<_> = store.tags().into_iter().collect();
        assert_eq!(tags, vec![("Speed", 2), ("Fußball", 1), ("Athletik", 1)]);
    }
}

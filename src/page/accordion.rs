//! Single-select accordion

use crate::content::Post;

/// Tracks which post, if any, is expanded. At most one is at a time.
///
/// State is keyed by post id, not by position, so it is unaffected by
/// filtering: a post hidden by the search stays expanded and shows up
/// expanded again once the query lets it through.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Accordion {
    open: Option<String>,
}

impl Accordion {
    /// Start with `first` expanded, or nothing
    pub fn new(first: Option<&str>) -> Self {
        Self {
            open: first.map(str::to_string),
        }
    }

    /// Initial state for a collection: its first post expanded
    pub fn for_posts(posts: &[Post]) -> Self {
        Self::new(posts.first().map(|p| p.id.as_str()))
    }

    /// Collapse `id` if it is the expanded post, otherwise expand it
    /// (implicitly collapsing whatever was open)
    pub fn toggle(&mut self, id: &str) {
        if self.is_open(id) {
            self.open = None;
        } else {
            self.open = Some(id.to_string());
        }
    }

    pub fn is_open(&self, id: &str) -> bool {
        self.open.as_deref() == Some(id)
    }

    pub fn open_id(&self) -> Option<&str> {
        self.open.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{BuiltinContent, ContentProvider};

    #[test]
    fn test_first_post_open_initially() {
        let posts = BuiltinContent.load().unwrap();
        let accordion = Accordion::for_posts(&posts);
        assert_eq!(accordion.open_id(), Some("post-1"));
    }

    #[test]
    fn test_empty_collection_opens_nothing() {
        assert_eq!(Accordion::for_posts(&[]).open_id(), None);
    }

    #[test]
    fn test_toggle_switches_open_post() {
        let mut accordion = Accordion::new(Some("post-1"));
        accordion.toggle("post-2");
        assert!(accordion.is_open("post-2"));
        assert!(!accordion.is_open("post-1"));
    }

    #[test]
    fn test_toggle_open_post_closes_it() {
        let mut accordion = Accordion::new(Some("post-1"));
        accordion.toggle("post-1");
        assert_eq!(accordion.open_id(), None);
    }

    #[test]
    fn test_toggle_twice_restores_target() {
        for start in [None, Some("post-1"), Some("post-2")] {
            for target in ["post-1", "post-2", "post-3"] {
                let before = Accordion::new(start);
                let mut accordion = before.clone();
                accordion.toggle(target);
                assert_ne!(accordion.is_open(target), before.is_open(target));
                accordion.toggle(target);
                assert_eq!(accordion.is_open(target), before.is_open(target));
            }
        }
    }

    #[test]
    fn test_toggle_twice_on_open_post_is_identity() {
        let before = Accordion::new(Some("post-2"));
        let mut accordion = before.clone();
        accordion.toggle("post-2");
        accordion.toggle("post-2");
        assert_eq!(accordion, before);
    }

    #[test]
    fn test_at_most_one_open() {
        let ids = ["post-1", "post-2", "post-3"];
        let mut accordion = Accordion::new(Some("post-1"));
        for step in 0..50 {
            accordion.toggle(ids[(step * 7 + step / 3) % ids.len()]);
            let open = ids.iter().filter(|id| accordion.is_open(id)).count();
            assert!(open <= 1);
        }
    }
}

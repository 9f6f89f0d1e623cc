//! Free-text search over the post collection

use crate::content::Post;

/// The searchable text of a post: title, teaser, tags and body blocks,
/// space-joined and lower-cased
pub fn corpus(post: &Post) -> String {
    format!(
        "{} {} {} {}",
        post.title,
        post.teaser,
        post.tags.join(" "),
        post.content.join(" ")
    )
    .to_lowercase()
}

/// Whether a post matches an already trimmed, lower-cased query
fn matches(post: &Post, needle: &str) -> bool {
    corpus(post).contains(needle)
}

/// Filter posts by a case-insensitive substring query.
///
/// A blank query returns every post. Otherwise the original relative order
/// is kept and posts whose corpus lacks the query are dropped.
pub fn filter<'a>(posts: &'a [Post], query: &str) -> Vec<&'a Post> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return posts.iter().collect();
    }

    posts.iter().filter(|p| matches(p, &needle)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{BuiltinContent, ContentProvider};
    use chrono::NaiveDate;

    fn posts() -> Vec<Post> {
        BuiltinContent.load().unwrap()
    }

    fn ids(result: &[&Post]) -> Vec<String> {
        result.iter().map(|p| p.id.clone()).collect()
    }

    #[test]
    fn test_blank_query_returns_everything() {
        let posts = posts();
        for query in ["", "   ", "\t\n"] {
            assert_eq!(ids(&filter(&posts, query)), vec!["post-1", "post-2", "post-3"]);
        }
    }

    #[test]
    fn test_speed_is_case_insensitive() {
        let posts = posts();
        let expected: Vec<String> = posts
            .iter()
            .filter(|p| corpus(p).contains("speed"))
            .map(|p| p.id.clone())
            .collect();

        assert_eq!(ids(&filter(&posts, "speed")), expected);
        assert_eq!(ids(&filter(&posts, "SPEED")), expected);
        assert_eq!(ids(&filter(&posts, "  Speed ")), vec!["post-1"]);
    }

    #[test]
    fn test_matches_body_and_tags() {
        let posts = posts();
        assert_eq!(ids(&filter(&posts, "pogos")), vec!["post-2"]);
        assert_eq!(ids(&filter(&posts, "lifestyle")), vec!["post-3"]);
        // Tags are joined with spaces, so a phrase spanning two tags matches
        assert_eq!(ids(&filter(&posts, "speed fußball")), vec!["post-1"]);
    }

    #[test]
    fn test_non_ascii_case_folding() {
        let posts = posts();
        assert_eq!(ids(&filter(&posts, "FUSSBALL")), Vec::<String>::new());
        assert_eq!(ids(&filter(&posts, "FUßBALL")), vec!["post-1", "post-2"]);
    }

    #[test]
    fn test_no_match_is_empty_not_error() {
        let posts = posts();
        assert!(filter(&posts, "basketball").is_empty());
    }

    #[test]
    fn test_every_result_contains_query() {
        let posts = posts();
        for query in ["pause", "Training", "3×", "–", "m "] {
            let needle = query.trim().to_lowercase();
            for post in filter(&posts, query) {
                assert!(corpus(post).contains(&needle), "{} / {}", post.id, query);
            }
        }
    }

    #[test]
    fn test_filter_is_idempotent() {
        let posts = posts();
        for query in ["speed", "athletik", "e", "nothing here"] {
            let once: Vec<Post> = filter(&posts, query).into_iter().cloned().collect();
            let twice = filter(&once, query);
            assert_eq!(ids(&twice), once.iter().map(|p| p.id.clone()).collect::<Vec<_>>());
        }
    }

    #[test]
    fn test_preserves_relative_order() {
        let date = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        let posts = vec![
            Post::new("c", "Sprint C", date),
            Post::new("a", "Jump A", date),
            Post::new("b", "Sprint B", date),
        ];
        assert_eq!(ids(&filter(&posts, "sprint")), vec!["c", "b"]);
    }
}

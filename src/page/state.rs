//! The page controller and the immutable snapshot handed to rendering

use serde::Serialize;
use std::collections::HashSet;

use super::Accordion;
use crate::config::SiteConfig;
use crate::content::{ContentStore, Post};
use crate::helpers::{date_iso, format_date};
use crate::i18n::I18n;
use crate::markup::{self, Segment};
use crate::search;

/// Session-local UI state of the page. Mutated only through
/// [`set_query`](Self::set_query) and [`toggle`](Self::toggle).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageState {
    query: String,
    accordion: Accordion,
}

impl PageState {
    /// Empty query, first post expanded
    pub fn new(store: &ContentStore) -> Self {
        Self {
            query: String::new(),
            accordion: Accordion::for_posts(store.posts()),
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn set_query(&mut self, query: &str) {
        self.query = query.to_string();
    }

    pub fn toggle(&mut self, id: &str) {
        self.accordion.toggle(id);
    }

    pub fn open_id(&self) -> Option<&str> {
        self.accordion.open_id()
    }

    /// Posts that pass the current query, in store order
    pub fn visible<'a>(&self, store: &'a ContentStore) -> Vec<&'a Post> {
        search::filter(store.posts(), &self.query)
    }

    /// Freeze the current state into a view for one render pass.
    ///
    /// Every post is included so a static page can re-filter client side;
    /// `visible` marks the ones that pass the current query.
    pub fn snapshot(&self, store: &ContentStore, config: &SiteConfig, i18n: &I18n) -> PageSnapshot {
        let visible: HashSet<&str> = self
            .visible(store)
            .into_iter()
            .map(|p| p.id.as_str())
            .collect();

        let posts: Vec<PostView> = store
            .posts()
            .iter()
            .map(|post| {
                PostView::new(
                    post,
                    visible.contains(post.id.as_str()),
                    self.accordion.is_open(&post.id),
                    config,
                )
            })
            .collect();

        let count = visible.len();
        PageSnapshot {
            query: self.query.clone(),
            open_id: self.open_id().map(str::to_string),
            count,
            count_label: i18n.get_plural("blog.count", count),
            is_empty: count == 0,
            posts,
        }
    }
}

/// Everything the blog section needs for one render
#[derive(Debug, Clone, Serialize)]
pub struct PageSnapshot {
    pub query: String,
    /// The expanded post id, which may belong to a hidden post
    pub open_id: Option<String>,
    /// All posts in store order
    pub posts: Vec<PostView>,
    /// Number of visible posts
    pub count: usize,
    pub count_label: String,
    /// Render the "no results" message instead of articles
    pub is_empty: bool,
}

impl PageSnapshot {
    /// Posts that pass the query
    pub fn visible(&self) -> impl Iterator<Item = &PostView> {
        self.posts.iter().filter(|p| p.visible)
    }

    /// The expanded post, if it is currently visible. A hidden expanded
    /// post renders nothing.
    pub fn expanded(&self) -> Option<&PostView> {
        self.visible().find(|p| p.is_open)
    }
}

/// A post prepared for display
#[derive(Debug, Clone, Serialize)]
pub struct PostView {
    pub id: String,
    pub title: String,
    /// Display date in the configured format
    pub date: String,
    pub date_iso: String,
    pub tags: Vec<String>,
    pub teaser: String,
    /// One segment list per body block
    pub blocks: Vec<Vec<Segment>>,
    /// Lower-cased search corpus, for client-side filtering
    pub corpus: String,
    pub visible: bool,
    pub is_open: bool,
}

impl PostView {
    fn new(post: &Post, visible: bool, is_open: bool, config: &SiteConfig) -> Self {
        Self {
            id: post.id.clone(),
            title: post.title.clone(),
            date: format_date(&post.date, &config.date_format),
            date_iso: date_iso(&post.date),
            tags: post.tags.clone(),
            teaser: post.teaser.clone(),
            blocks: post.content.iter().map(|b| markup::render(b)).collect(),
            corpus: search::corpus(post),
            visible,
            is_open,
        }
    }
}

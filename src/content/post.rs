//! Post model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::ContentError;

/// A blog post
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "PostRecord")]
pub struct Post {
    /// Stable unique identifier
    pub id: String,

    /// Post title
    pub title: String,

    /// Publication date (no time component)
    pub date: NaiveDate,

    /// Short labels, kept in authoring order
    pub tags: Vec<String>,

    /// Short summary shown while collapsed
    pub teaser: String,

    /// Body blocks, each written in the restricted inline markup
    pub content: Vec<String>,
}

impl Post {
    /// Create a new post with minimal required fields
    pub fn new(id: impl Into<String>, title: impl Into<String>, date: NaiveDate) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            date,
            tags: Vec::new(),
            teaser: String::new(),
            content: Vec::new(),
        }
    }

    /// Builder-style tag setter
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    /// Builder-style teaser setter
    pub fn with_teaser(mut self, teaser: impl Into<String>) -> Self {
        self.teaser = teaser.into();
        self
    }

    /// Builder-style body setter
    pub fn with_content<I, S>(mut self, content: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.content = content.into_iter().map(Into::into).collect();
        self
    }
}

/// On-disk shape of a post, before the date is validated
#[derive(Debug, Deserialize)]
struct PostRecord {
    id: String,
    title: String,
    date: RecordDate,
    #[serde(default)]
    tags: Vec<String>,
    #[serde(default)]
    teaser: String,
    #[serde(default)]
    content: Vec<String>,
}

/// A date written as a string, or as a native TOML date
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RecordDate {
    Text(String),
    Toml(toml::value::Datetime),
}

impl RecordDate {
    fn into_text(self) -> String {
        match self {
            Self::Text(text) => text,
            Self::Toml(datetime) => datetime.to_string(),
        }
    }
}

impl TryFrom<PostRecord> for Post {
    type Error = ContentError;

    fn try_from(record: PostRecord) -> Result<Self, Self::Error> {
        let text = record.date.into_text();
        let date = NaiveDate::parse_from_str(text.trim(), "%Y-%m-%d").map_err(|_| {
            ContentError::InvalidDate {
                id: record.id.clone(),
                date: text.clone(),
            }
        })?;

        Ok(Self {
            id: record.id,
            title: record.title,
            date,
            tags: record.tags,
            teaser: record.teaser,
            content: record.content,
        })
    }
}

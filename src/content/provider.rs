//! Content providers - where post records come from

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use super::{ContentError, Post};

/// Posts shipped with the binary, also written by `init` as the starter content file
pub const BUILTIN_POSTS: &str = include_str!("builtin_posts.yml");

/// A source of post records
pub trait ContentProvider {
    /// Load every post, in display order
    fn load(&self) -> Result<Vec<Post>, ContentError>;

    /// Human-readable origin, used in logs
    fn describe(&self) -> String;
}

/// Serialization formats accepted for content files
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentFormat {
    Yaml,
    Json,
    Toml,
}

impl ContentFormat {
    /// Pick the format from a file extension
    pub fn from_path(path: &Path) -> Result<Self, ContentError> {
        match path.extension().and_then(|e| e.to_str()) {
            Some("yml") | Some("yaml") => Ok(Self::Yaml),
            Some("json") => Ok(Self::Json),
            Some("toml") => Ok(Self::Toml),
            _ => Err(ContentError::UnsupportedFormat(path.to_path_buf())),
        }
    }
}

/// The document stored in a content file: `{ posts: [...] }`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContentDocument {
    #[serde(default)]
    pub posts: Vec<Post>,
}

impl ContentDocument {
    /// Parse a document; `origin` names the source in error messages
    pub fn parse(text: &str, format: ContentFormat, origin: &str) -> Result<Self, ContentError> {
        let parsed = match format {
            ContentFormat::Yaml => serde_yaml::from_str(text).map_err(|e| e.to_string()),
            ContentFormat::Json => serde_json::from_str(text).map_err(|e| e.to_string()),
            ContentFormat::Toml => toml::from_str(text).map_err(|e| e.to_string()),
        };

        parsed.map_err(|message| ContentError::Parse {
            origin: origin.to_string(),
            message,
        })
    }

    /// Serialize the document back into the given format
    pub fn render(&self, format: ContentFormat) -> Result<String, ContentError> {
        let rendered = match format {
            ContentFormat::Yaml => serde_yaml::to_string(self).map_err(|e| e.to_string()),
            ContentFormat::Json => serde_json::to_string_pretty(self).map_err(|e| e.to_string()),
            ContentFormat::Toml => toml::to_string_pretty(self).map_err(|e| e.to_string()),
        };
        rendered.map_err(ContentError::Serialize)
    }
}

/// The posts embedded in the binary
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinContent;

impl ContentProvider for BuiltinContent {
    fn load(&self) -> Result<Vec<Post>, ContentError> {
        let document = ContentDocument::parse(BUILTIN_POSTS, ContentFormat::Yaml, "builtin posts")?;
        Ok(document.posts)
    }

    fn describe(&self) -> String {
        "builtin posts".to_string()
    }
}

/// Posts read from a YAML, JSON or TOML file
#[derive(Debug, Clone)]
pub struct FileContent {
    path: PathBuf,
}

impl FileContent {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read and parse the whole document
    pub fn read_document(&self) -> Result<ContentDocument, ContentError> {
        let format = ContentFormat::from_path(&self.path)?;
        let text = fs::read_to_string(&self.path).map_err(|source| ContentError::Io {
            path: self.path.clone(),
            source,
        })?;
        ContentDocument::parse(&text, format, &self.path.to_string_lossy())
    }

    /// Replace the file with the given document
    pub fn write_document(&self, document: &ContentDocument) -> Result<(), ContentError> {
        let format = ContentFormat::from_path(&self.path)?;
        let text = document.render(format)?;
        fs::write(&self.path, text).map_err(|source| ContentError::Io {
            path: self.path.clone(),
            source,
        })
    }
}

impl ContentProvider for FileContent {
    fn load(&self) -> Result<Vec<Post>, ContentError> {
        Ok(self.read_document()?.posts)
    }

    fn describe(&self) -> String {
        format!("{:?}", self.path)
    }
}

//! Built-in fallback dataset.
//!
//! When the content API cannot be reached, the loader serves this fixed local
//! dataset so the page always has renderable content. The dataset is
//! consolidated here, constructed once at startup, and decoupled from the
//! fetch logic. Deployments may replace it with their own TOML file via
//! `content.fallback_path` in the configuration.

use crate::{Category, ContentSet, Error, Post, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Fixed local content served while the site is degraded.
///
/// Non-empty by construction: an override file with no posts or no categories
/// is rejected at load time, never at fetch time.
#[derive(Debug, Clone)]
pub struct Fallback {
    content: ContentSet,
}

#[derive(Debug, Deserialize)]
struct FallbackFile {
    #[serde(default)]
    posts: Vec<Post>,
    #[serde(default)]
    categories: Vec<Category>,
}

impl Fallback {
    /// The built-in dataset, mirroring the curated front page.
    pub fn builtin() -> Self {
        let posts = vec![
            Post::new(
                "1",
                "Pinjar",
                "A poignant novel set during the partition of India, capturing the tragic \
                 tale of Puro. It stands as a powerful commentary on the condition of women \
                 during chaotic times.",
                "pinjar",
                "Amrita Pritam",
            ),
            Post::new(
                "2",
                "Chitta Lahu",
                "A gripping tale of social reform and the struggles of the downtrodden in \
                 Punjabi society.",
                "chitta-lahu",
                "Nanak Singh",
            ),
            Post::new(
                "3",
                "Luna",
                "A modern retelling of the legend of Puran Bhagat, giving a voice to the \
                 stepmother Luna.",
                "luna",
                "Shiv Kumar Batalvi",
            ),
        ];

        let categories = vec![
            Category::new("Kahaniya", "kahaniya", 50),
            Category::new("Kavita", "kavita", 100),
            Category::new("Ikangi", "ikangi", 20),
            Category::new("Kitaba", "kitaba", 200),
        ];

        Self {
            content: ContentSet { posts, categories },
        }
    }

    /// Parse an override dataset from a TOML document.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the document is malformed or if either
    /// set is empty; the degraded-mode invariant requires non-empty content.
    pub fn from_toml_str(raw: &str) -> Result<Self> {
        let file: FallbackFile =
            toml::from_str(raw).map_err(|e| Error::Config(format!("invalid fallback dataset: {e}")))?;
        if file.posts.is_empty() {
            return Err(Error::Config(
                "fallback dataset must contain at least one post".to_string(),
            ));
        }
        if file.categories.is_empty() {
            return Err(Error::Config(
                "fallback dataset must contain at least one category".to_string(),
            ));
        }
        Ok(Self {
            content: ContentSet {
                posts: file.posts,
                categories: file.categories,
            },
        })
    }

    /// Load an override dataset from a TOML file.
    pub fn from_path(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)?;
        Self::from_toml_str(&raw)
    }

    /// The dataset served in degraded mode.
    #[must_use]
    pub fn content(&self) -> &ContentSet {
        &self.content
    }
}

impl Default for Fallback {
    fn default() -> Self {
        Self::builtin()
    }
}

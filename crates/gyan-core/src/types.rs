//! Core data types: posts, categories, load state, and the wire shapes
//! returned by the WPGraphQL content API.

use serde::{Deserialize, Serialize};

/// A single content item (article, poem, book summary) from the front page.
///
/// Produced by the content API or substituted from the built-in fallback
/// dataset. Immutable once loaded; each fetch replaces the full set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    /// Unique identifier assigned by the content backend.
    pub id: String,
    /// Display title.
    pub title: String,
    /// Short teaser text; may contain inline markup as returned by the API.
    pub excerpt: String,
    /// URL-safe identifier used to build the permalink.
    pub slug: String,
    /// Optional URL of the featured image.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub featured_image: Option<String>,
    /// Author display name.
    pub author: String,
}

impl Post {
    /// Creates a post with no featured image.
    pub fn new(id: &str, title: &str, excerpt: &str, slug: &str, author: &str) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            excerpt: excerpt.to_string(),
            slug: slug.to_string(),
            featured_image: None,
            author: author.to_string(),
        }
    }

    /// Sets the featured image URL.
    #[must_use]
    pub fn with_featured_image(mut self, url: &str) -> Self {
        self.featured_image = Some(url.to_string());
        self
    }

    /// Builds the outbound permalink by joining the site base URL and the slug.
    #[must_use]
    pub fn permalink(&self, site_url: &str) -> String {
        format!("{}/{}", site_url.trim_end_matches('/'), self.slug)
    }
}

/// A taxonomy entry grouping posts on the publishing site.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Display name.
    pub name: String,
    /// Unique URL-safe identifier.
    pub slug: String,
    /// Number of published items in this category.
    pub count: u32,
    /// Optional editorial description; the live API provides it, the fallback
    /// dataset does not.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Category {
    /// Creates a category without a description.
    pub fn new(name: &str, slug: &str, count: u32) -> Self {
        Self {
            name: name.to_string(),
            slug: slug.to_string(),
            count,
            description: None,
        }
    }

    /// Sets the editorial description.
    #[must_use]
    pub fn with_description(mut self, description: &str) -> Self {
        self.description = Some(description.to_string());
        self
    }

    /// Builds the category archive URL on the publishing site.
    #[must_use]
    pub fn archive_url(&self, site_url: &str) -> String {
        format!("{}/category/{}", site_url.trim_end_matches('/'), self.slug)
    }
}

/// A complete set of content produced by one fetch or by the fallback dataset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentSet {
    /// Posts in response order.
    pub posts: Vec<Post>,
    /// Categories in response order.
    pub categories: Vec<Category>,
}

impl ContentSet {
    /// Returns `true` when the set holds neither posts nor categories.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.posts.is_empty() && self.categories.is_empty()
    }
}

/// Classification of the failure that put the loader into degraded mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    /// Network unreachable, DNS/TLS failure, timeout, or a CORS-style block.
    Transport,
    /// The server answered with a non-success HTTP status.
    Server,
    /// The API answered successfully but reported an application-level error.
    Api,
}

impl FailureKind {
    /// Short human-readable description used in degraded-mode banners.
    #[must_use]
    pub const fn describe(self) -> &'static str {
        match self {
            Self::Transport => "network or CORS issue",
            Self::Server => "server error",
            Self::Api => "content API error",
        }
    }
}

/// Lifecycle state of the content loader.
///
/// A consumer never observes an empty-and-unexplained state: it is either
/// `Loading`, or a terminal state with non-empty content sets (live on `Ready`,
/// fallback on `Degraded`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum LoadState {
    /// A load is in progress (or none has been started yet).
    Loading,
    /// The last load succeeded and live content is held.
    Ready,
    /// The last load failed; the fallback dataset is active.
    Degraded {
        /// Which half of the failure taxonomy applied.
        kind: FailureKind,
        /// Human-readable reason retained for display.
        reason: String,
    },
}

impl LoadState {
    /// Returns `true` when the fallback dataset is active.
    #[must_use]
    pub const fn is_degraded(&self) -> bool {
        matches!(self, Self::Degraded { .. })
    }
}

pub(crate) mod wire {
    //! Shapes of the WPGraphQL response body. Kept separate from the domain
    //! types and converted after deserialization.

    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    pub(crate) struct Envelope {
        #[serde(default)]
        pub data: Option<Data>,
        #[serde(default)]
        pub errors: Vec<ApiError>,
    }

    #[derive(Debug, Deserialize)]
    pub(crate) struct ApiError {
        pub message: String,
    }

    #[derive(Debug, Deserialize)]
    pub(crate) struct Data {
        #[serde(default)]
        pub posts: Option<Connection<PostNode>>,
        #[serde(default)]
        pub categories: Option<Connection<CategoryNode>>,
    }

    #[derive(Debug, Deserialize)]
    pub(crate) struct Connection<T> {
        #[serde(default = "Vec::new")]
        pub nodes: Vec<T>,
    }

    #[derive(Debug, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub(crate) struct PostNode {
        pub id: String,
        pub title: String,
        #[serde(default)]
        pub excerpt: String,
        pub slug: String,
        #[serde(default)]
        pub featured_image: Option<NodeWrap<Image>>,
        #[serde(default)]
        pub author: Option<NodeWrap<AuthorName>>,
    }

    /// WPGraphQL wraps single relations in a `{ "node": ... }` object.
    #[derive(Debug, Deserialize)]
    pub(crate) struct NodeWrap<T> {
        pub node: T,
    }

    #[derive(Debug, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub(crate) struct Image {
        pub source_url: String,
    }

    #[derive(Debug, Deserialize)]
    pub(crate) struct AuthorName {
        pub name: String,
    }

    #[derive(Debug, Deserialize)]
    pub(crate) struct CategoryNode {
        pub name: String,
        pub slug: String,
        #[serde(default)]
        pub count: Option<u32>,
        #[serde(default)]
        pub description: Option<String>,
    }
}

/// Byline used when the API omits the author relation.
pub(crate) const DEFAULT_AUTHOR: &str = "Gyan Ladoo";

impl From<wire::PostNode> for Post {
    fn from(node: wire::PostNode) -> Self {
        Self {
            id: node.id,
            title: node.title,
            excerpt: node.excerpt,
            slug: node.slug,
            featured_image: node.featured_image.map(|w| w.node.source_url),
            author: node
                .author
                .map_or_else(|| DEFAULT_AUTHOR.to_string(), |w| w.node.name),
        }
    }
}

impl From<wire::CategoryNode> for Category {
    fn from(node: wire::CategoryNode) -> Self {
        Self {
            name: node.name,
            slug: node.slug,
            count: node.count.unwrap_or(0),
            description: node.description,
        }
    }
}

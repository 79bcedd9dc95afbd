//! HTTP client for the GraphQL content API.
//!
//! Issues the single fixed query the front page needs and classifies every
//! failure into the error taxonomy: transport failures, non-success statuses,
//! and application-level errors carried inside a 200 response.

use crate::types::wire;
use crate::{Category, Config, ContentSet, Error, Post, Result};
use reqwest::Client;
use serde_json::json;
use std::time::Duration;
use tracing::{debug, info};

/// Client for fetching front-page content from a WPGraphQL endpoint.
pub struct ApiClient {
    client: Client,
    endpoint: String,
    post_count: u32,
    category_count: u32,
}

impl ApiClient {
    /// Creates a client for `endpoint` with the default timeout and counts.
    pub fn new(endpoint: impl Into<String>) -> Result<Self> {
        Self::with_timeout(endpoint, Duration::from_secs(crate::config::DEFAULT_TIMEOUT_SECS))
    }

    /// Creates a client with a custom request timeout (primarily for tests).
    pub fn with_timeout(endpoint: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("gyanladoo-gyan/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(Error::Network)?;
        Ok(Self {
            client,
            endpoint: endpoint.into(),
            post_count: crate::config::DEFAULT_POST_COUNT,
            category_count: crate::config::DEFAULT_CATEGORY_COUNT,
        })
    }

    /// Creates a client from configuration.
    pub fn from_config(config: &Config) -> Result<Self> {
        let client = Self::with_timeout(
            config.api.endpoint.clone(),
            Duration::from_secs(config.api.timeout_secs),
        )?;
        Ok(client.with_counts(config.content.post_count, config.content.category_count))
    }

    /// Overrides how many posts and categories are requested per load.
    #[must_use]
    pub fn with_counts(mut self, posts: u32, categories: u32) -> Self {
        self.post_count = posts;
        self.category_count = categories;
        self
    }

    /// The endpoint this client talks to.
    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// The fixed front-page query, shaped for WPGraphQL.
    fn query(&self) -> String {
        format!(
            r"query GetFrontPage {{
  posts(first: {posts}) {{
    nodes {{
      id
      title
      excerpt
      slug
      featuredImage {{ node {{ sourceUrl }} }}
      author {{ node {{ name }} }}
    }}
  }}
  categories(first: {categories}, where: {{ hideEmpty: true }}) {{
    nodes {{
      name
      slug
      count
      description
    }}
  }}
}}",
            posts = self.post_count,
            categories = self.category_count,
        )
    }

    /// Fetches the front-page content with a single POST request.
    ///
    /// Response data is taken exactly as returned: no reordering and no
    /// truncation beyond the requested counts.
    ///
    /// # Errors
    ///
    /// - [`Error::Network`] when the request cannot be completed (connection
    ///   refused, DNS failure, timeout).
    /// - [`Error::Server`] for a non-2xx status.
    /// - [`Error::Serialization`] when the body is not the expected shape.
    /// - [`Error::Api`] when the endpoint reports a GraphQL-level error or
    ///   returns no usable data.
    pub async fn fetch_content(&self) -> Result<ContentSet> {
        let body = json!({ "query": self.query() });
        debug!("requesting front-page content from {}", self.endpoint);

        let response = self.client.post(&self.endpoint).json(&body).send().await?;
        let status = response.status();

        if !status.is_success() {
            return Err(Error::Server {
                status: status.as_u16(),
            });
        }

        let envelope: wire::Envelope = response
            .json()
            .await
            .map_err(|e| Error::Serialization(e.to_string()))?;

        if let Some(first) = envelope.errors.first() {
            return Err(Error::Api(first.message.clone()));
        }

        let data = envelope
            .data
            .ok_or_else(|| Error::Api("response contained no data".to_string()))?;

        let posts: Vec<Post> = data
            .posts
            .map(|c| c.nodes)
            .unwrap_or_default()
            .into_iter()
            .map(Post::from)
            .collect();
        let categories: Vec<Category> = data
            .categories
            .map(|c| c.nodes)
            .unwrap_or_default()
            .into_iter()
            .map(Category::from)
            .collect();

        let content = ContentSet { posts, categories };
        if content.posts.is_empty() || content.categories.is_empty() {
            // Every section of the page must have content; a structurally
            // valid payload with either set empty is an API failure.
            return Err(Error::Api(
                "response contained no posts or categories".to_string(),
            ));
        }

        info!(
            "fetched {} posts and {} categories from {}",
            content.posts.len(),
            content.categories.len(),
            self.endpoint
        );
        Ok(content)
    }
}

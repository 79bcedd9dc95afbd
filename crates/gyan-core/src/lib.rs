//! # gyan-core
//!
//! Core functionality for gyan - the content front-end for the Gyan Ladoo
//! literature publishing site.
//!
//! The crate retrieves a bounded set of posts and categories from a remote
//! WPGraphQL content API and, on any failure, substitutes a fixed fallback
//! dataset so the display layer always has renderable data. Rendering itself
//! is a pure projection of whatever the loader produces and lives in the CLI
//! crate.
//!
//! ## Architecture
//!
//! - **Configuration**: endpoint, counts, and link base URL with built-in
//!   defaults ([`Config`])
//! - **Client**: one fixed GraphQL query per load with failure classification
//!   ([`ApiClient`])
//! - **Fallback**: consolidated built-in dataset, optionally replaced from a
//!   TOML file ([`Fallback`])
//! - **Loader**: the fetch-with-graceful-degradation state machine
//!   ([`ContentLoader`])
//! - **Sanitization**: narrow tag-stripping for excerpts
//!   ([`sanitize::strip_tags`])
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use gyan_core::{ApiClient, Config, ContentLoader, Fallback};
//!
//! # async fn run() -> gyan_core::Result<()> {
//! let config = Config::load()?;
//! let client = ApiClient::from_config(&config)?;
//! let mut loader = ContentLoader::new(client, Fallback::builtin());
//!
//! loader.load().await;
//! // Ready or Degraded, the sets are always renderable
//! println!("{} posts, {} categories", loader.posts().len(), loader.categories().len());
//! # Ok(())
//! # }
//! ```

/// HTTP client for the GraphQL content API
pub mod client;
/// Configuration with built-in defaults
pub mod config;
/// Error types and result aliases
pub mod error;
/// Built-in fallback dataset served in degraded mode
pub mod fallback;
/// Fetch-with-graceful-degradation content loader
pub mod loader;
/// Excerpt tag-stripping utilities
pub mod sanitize;
/// Core data types and wire shapes
pub mod types;

// Re-export commonly used types
pub use client::ApiClient;
pub use config::{ApiConfig, Config, ContentConfig};
pub use error::{Error, Result};
pub use fallback::Fallback;
pub use loader::{ContentLoader, ContentSnapshot};
pub use sanitize::{clean_excerpt, strip_tags};
pub use types::{Category, ContentSet, FailureKind, LoadState, Post};

//! Command implementations.
//!
//! Every command runs one load cycle and projects the resulting snapshot into
//! the selected output format. The commands never fail because the API is
//! down; degraded mode is an ordinary, renderable outcome.

pub mod categories;
pub mod posts;
pub mod show;

use crate::cli::Cli;
use anyhow::{Context, Result};
use colored::Colorize;
use gyan_core::{
    ApiClient, Category, Config, ContentLoader, ContentSnapshot, Fallback, LoadState, Post,
    clean_excerpt,
};
use serde::Serialize;

/// Loaded page data plus the base URL used to build outbound links.
pub struct Page {
    /// Snapshot of the loader after one load cycle.
    pub snapshot: ContentSnapshot,
    /// Base URL of the publishing site.
    pub site_url: String,
}

/// Resolves configuration, runs one load cycle, and returns the page data.
///
/// Setup problems (unreadable config, invalid fallback override) are real
/// errors; fetch failures are not, they surface as a degraded snapshot.
pub async fn load_page(cli: &Cli) -> Result<Page> {
    let mut config = match &cli.config {
        Some(path) => Config::from_file(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => Config::load().context("loading configuration")?,
    };
    if let Some(endpoint) = &cli.endpoint {
        config.api.endpoint.clone_from(endpoint);
    }

    let fallback = match &config.content.fallback_path {
        Some(path) => Fallback::from_path(path)
            .with_context(|| format!("loading fallback dataset from {}", path.display()))?,
        None => Fallback::builtin(),
    };

    let client = ApiClient::from_config(&config).context("building content API client")?;
    let mut loader = ContentLoader::new(client, fallback);
    loader.load().await;

    Ok(Page {
        snapshot: loader.snapshot(),
        site_url: config.content.site_url,
    })
}

/// A post projected for display: excerpt sanitized, permalink resolved.
#[derive(Debug, Serialize)]
pub struct PostView {
    /// Backend identifier.
    pub id: String,
    /// Display title.
    pub title: String,
    /// Author display name.
    pub author: String,
    /// Plain-text excerpt with markup stripped.
    pub excerpt: String,
    /// URL-safe identifier.
    pub slug: String,
    /// Permalink on the publishing site.
    pub url: String,
    /// Featured image URL, when present.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub featured_image: Option<String>,
}

impl PostView {
    /// Projects a domain post for display.
    pub fn project(post: &Post, site_url: &str) -> Self {
        Self {
            id: post.id.clone(),
            title: post.title.clone(),
            author: post.author.clone(),
            excerpt: clean_excerpt(Some(&post.excerpt)),
            slug: post.slug.clone(),
            url: post.permalink(site_url),
            featured_image: post.featured_image.clone(),
        }
    }
}

/// A category projected for display with its archive URL resolved.
#[derive(Debug, Serialize)]
pub struct CategoryView {
    /// Display name.
    pub name: String,
    /// URL-safe identifier.
    pub slug: String,
    /// Number of published items.
    pub count: u32,
    /// Editorial description, when the API provided one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Archive URL on the publishing site.
    pub url: String,
}

impl CategoryView {
    /// Projects a domain category for display.
    pub fn project(category: &Category, site_url: &str) -> Self {
        Self {
            name: category.name.clone(),
            slug: category.slug.clone(),
            count: category.count,
            description: category.description.clone(),
            url: category.archive_url(site_url),
        }
    }
}

/// Prints the degraded-mode banner when the fallback dataset is active.
pub fn print_state_banner(state: &LoadState) {
    if let LoadState::Degraded { kind, reason } = state {
        println!(
            "{} {} ({})",
            "Offline preview:".yellow().bold(),
            kind.describe(),
            reason.bright_black()
        );
        println!(
            "{}",
            "Showing the built-in collection. Run the command again to retry.".bright_black()
        );
        println!();
    }
}

/// Serializes a value and tags it with a `type` discriminator for JSONL lines.
pub fn tagged_line<T: Serialize>(kind: &str, value: &T) -> Result<String> {
    let mut line = serde_json::to_value(value)?;
    if let Some(map) = line.as_object_mut() {
        map.insert(
            "type".to_string(),
            serde_json::Value::String(kind.to_string()),
        );
    }
    Ok(serde_json::to_string(&line)?)
}

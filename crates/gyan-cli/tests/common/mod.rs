#![allow(clippy::expect_used, clippy::unwrap_used)]

use assert_cmd::Command;
use serde_json::json;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use std::time::Duration;

#[allow(dead_code)]
pub const CMD_TIMEOUT: Duration = Duration::from_secs(15);

static ISOLATED_CONFIG: OnceLock<PathBuf> = OnceLock::new();

/// A default config file in a throwaway directory, shared by the whole test
/// process. Keeps the binary from reading the developer's real
/// `~/.config/gyan/config.toml`.
#[allow(dead_code, clippy::expect_used)]
fn isolated_config() -> &'static Path {
    ISOLATED_CONFIG.get_or_init(|| {
        let dir = tempfile::tempdir().expect("create isolated config dir");
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "").expect("write isolated config");
        // The directory must outlive every test in the process
        std::mem::forget(dir);
        path
    })
}

/// Create a configured `gyan` command suitable for integration tests.
///
/// Configuration is pinned to an empty file via `GYAN_CONFIG`, so every test
/// runs against the built-in defaults regardless of the host environment.
/// Tests that need their own config pass `--config`, which takes precedence.
#[allow(dead_code)]
pub fn gyan_cmd() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("gyan"));
    cmd.timeout(CMD_TIMEOUT);
    cmd.env("NO_COLOR", "1");
    cmd.env("GYAN_CONFIG", isolated_config());
    cmd
}

/// A well-formed WPGraphQL response with 2 posts and 4 categories.
#[allow(dead_code)]
pub fn live_front_page() -> serde_json::Value {
    json!({
        "data": {
            "posts": {
                "nodes": [
                    {
                        "id": "cG9zdDox",
                        "title": "Sadhu Te Kutta",
                        "excerpt": "<p>A satirical short story.</p>",
                        "slug": "sadhu-te-kutta",
                        "featuredImage": { "node": { "sourceUrl": "https://gyanladoo.com/img/1.jpg" } },
                        "author": { "node": { "name": "Gurbaksh Singh" } }
                    },
                    {
                        "id": "cG9zdDoy",
                        "title": "Marhi Da Deeva",
                        "excerpt": "<p>A landmark <b>rural</b> novel.</p>",
                        "slug": "marhi-da-deeva",
                        "featuredImage": null,
                        "author": { "node": { "name": "Gurdial Singh" } }
                    }
                ]
            },
            "categories": {
                "nodes": [
                    { "name": "Kahaniya", "slug": "kahaniya", "count": 51, "description": "Short stories" },
                    { "name": "Kavita", "slug": "kavita", "count": 98, "description": null },
                    { "name": "Ikangi", "slug": "ikangi", "count": 20, "description": null },
                    { "name": "Kitaba", "slug": "kitaba", "count": 203, "description": "Book summaries" }
                ]
            }
        }
    })
}

/// An endpoint nothing listens on; connections fail immediately.
#[allow(dead_code)]
pub const DEAD_ENDPOINT: &str = "http://127.0.0.1:9/graphql";

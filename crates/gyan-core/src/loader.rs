//! The content loader: fetch with graceful degradation.
//!
//! [`ContentLoader`] owns the three pieces of page state (posts, categories,
//! load state) and mutates them exactly once per [`ContentLoader::load`] call:
//! begin `Loading`, end `Ready` or `Degraded`. Every failure is absorbed and
//! converted into degraded mode backed by the fallback dataset, so callers
//! always have something to render.

use crate::{ApiClient, Category, ContentSet, Error, FailureKind, Fallback, LoadState, Post};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Loads front-page content and degrades to the fallback dataset on failure.
///
/// State is owned by the instance; there is no ambient singleton. Overlapping
/// `load` calls are not coordinated: each runs independently and the later
/// completion wins.
pub struct ContentLoader {
    client: ApiClient,
    fallback: Fallback,
    posts: Vec<Post>,
    categories: Vec<Category>,
    state: LoadState,
    fetched_at: Option<DateTime<Utc>>,
}

/// A point-in-time copy of the loader's state, suitable for rendering.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentSnapshot {
    /// Terminal or in-progress load state.
    pub state: LoadState,
    /// Posts currently held (live or fallback).
    pub posts: Vec<Post>,
    /// Categories currently held (live or fallback).
    pub categories: Vec<Category>,
    /// When the last load completed, if any.
    pub fetched_at: Option<DateTime<Utc>>,
}

impl ContentLoader {
    /// Creates a loader over `client`, degrading to `fallback` on failure.
    pub fn new(client: ApiClient, fallback: Fallback) -> Self {
        Self {
            client,
            fallback,
            posts: Vec::new(),
            categories: Vec::new(),
            state: LoadState::Loading,
            fetched_at: None,
        }
    }

    /// Performs one load cycle. Never fails: every error is converted into a
    /// degraded state plus a logged diagnostic.
    pub async fn load(&mut self) {
        self.state = LoadState::Loading;
        debug!("loading front-page content from {}", self.client.endpoint());

        match self.client.fetch_content().await {
            Ok(content) => {
                self.posts = content.posts;
                self.categories = content.categories;
                self.state = LoadState::Ready;
            },
            Err(err) => {
                let kind = classify(&err);
                warn!(
                    category = err.category(),
                    "content fetch failed, serving fallback dataset: {err}"
                );
                let ContentSet { posts, categories } = self.fallback.content().clone();
                self.posts = posts;
                self.categories = categories;
                self.state = LoadState::Degraded {
                    kind,
                    reason: err.to_string(),
                };
            },
        }
        self.fetched_at = Some(Utc::now());
    }

    /// Posts currently held.
    #[must_use]
    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    /// Categories currently held.
    #[must_use]
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Current load state.
    #[must_use]
    pub fn state(&self) -> &LoadState {
        &self.state
    }

    /// Completion time of the last load, if one has finished.
    #[must_use]
    pub fn fetched_at(&self) -> Option<DateTime<Utc>> {
        self.fetched_at
    }

    /// Copies the current state for rendering.
    #[must_use]
    pub fn snapshot(&self) -> ContentSnapshot {
        ContentSnapshot {
            state: self.state.clone(),
            posts: self.posts.clone(),
            categories: self.categories.clone(),
            fetched_at: self.fetched_at,
        }
    }
}

/// Maps an error onto the degraded-reason taxonomy.
const fn classify(err: &Error) -> FailureKind {
    match err {
        Error::Network(_) | Error::Io(_) => FailureKind::Transport,
        Error::Server { .. } => FailureKind::Server,
        Error::Api(_) | Error::Serialization(_) | Error::Config(_) => FailureKind::Api,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::time::Duration;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn test_client(uri: &str) -> ApiClient {
        ApiClient::with_timeout(format!("{uri}/graphql"), Duration::from_millis(500)).unwrap()
    }

    fn two_posts_four_categories() -> serde_json::Value {
        json!({
            "data": {
                "posts": {
                    "nodes": [
                        {
                            "id": "1", "title": "Ik Si Anita", "excerpt": "<p>A novel.</p>",
                            "slug": "ik-si-anita",
                            "author": { "node": { "name": "Nanak Singh" } }
                        },
                        {
                            "id": "2", "title": "Loona", "excerpt": "<p>An epic verse play.</p>",
                            "slug": "loona",
                            "author": { "node": { "name": "Shiv Kumar Batalvi" } }
                        }
                    ]
                },
                "categories": {
                    "nodes": [
                        { "name": "Kahaniya", "slug": "kahaniya", "count": 51 },
                        { "name": "Kavita", "slug": "kavita", "count": 98 },
                        { "name": "Ikangi", "slug": "ikangi", "count": 20 },
                        { "name": "Kitaba", "slug": "kitaba", "count": 203 }
                    ]
                }
            }
        })
    }

    #[tokio::test]
    async fn test_load_success_transitions_to_ready() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/graphql"))
            .respond_with(ResponseTemplate::new(200).set_body_json(two_posts_four_categories()))
            .mount(&server)
            .await;

        let mut loader = ContentLoader::new(test_client(&server.uri()), Fallback::builtin());
        assert_eq!(*loader.state(), LoadState::Loading);
        assert!(loader.fetched_at().is_none());

        loader.load().await;

        assert_eq!(*loader.state(), LoadState::Ready);
        assert_eq!(loader.posts().len(), 2);
        assert_eq!(loader.posts()[0].slug, "ik-si-anita");
        assert_eq!(loader.posts()[1].slug, "loona");
        assert_eq!(loader.categories().len(), 4);
        assert_eq!(loader.categories()[0].slug, "kahaniya");
        assert!(loader.fetched_at().is_some());
    }

    #[tokio::test]
    async fn test_load_unreachable_degrades_to_transport() {
        let client =
            ApiClient::with_timeout("http://127.0.0.1:9/graphql", Duration::from_millis(250))
                .unwrap();
        let mut loader = ContentLoader::new(client, Fallback::builtin());

        loader.load().await;

        match loader.state() {
            LoadState::Degraded { kind, reason } => {
                assert_eq!(*kind, FailureKind::Transport);
                assert!(!reason.is_empty());
            },
            other => panic!("Expected Degraded state, got: {other:?}"),
        }

        // Fallback dataset is active and non-empty
        let fallback = Fallback::builtin();
        assert_eq!(loader.posts(), fallback.content().posts.as_slice());
        assert_eq!(loader.categories(), fallback.content().categories.as_slice());
    }

    #[tokio::test]
    async fn test_load_server_error_degrades_with_fallback() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/graphql"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let mut loader = ContentLoader::new(test_client(&server.uri()), Fallback::builtin());
        loader.load().await;

        match loader.state() {
            LoadState::Degraded { kind, reason } => {
                assert_eq!(*kind, FailureKind::Server);
                assert!(reason.contains("500"));
            },
            other => panic!("Expected Degraded state, got: {other:?}"),
        }
        assert_eq!(loader.posts().len(), 3);
        assert_eq!(loader.categories().len(), 4);
    }

    #[tokio::test]
    async fn test_load_api_error_degrades_with_reason() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/graphql"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "errors": [{ "message": "Cannot query field \"posts\"" }]
            })))
            .mount(&server)
            .await;

        let mut loader = ContentLoader::new(test_client(&server.uri()), Fallback::builtin());
        loader.load().await;

        match loader.state() {
            LoadState::Degraded { kind, reason } => {
                assert_eq!(*kind, FailureKind::Api);
                assert!(reason.contains("Cannot query field"));
            },
            other => panic!("Expected Degraded state, got: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_retry_after_recovery_clears_degraded_reason() {
        let server = MockServer::start().await;

        // First load fails, manual retry succeeds
        Mock::given(method("POST"))
            .and(path("/graphql"))
            .respond_with(ResponseTemplate::new(503))
            .up_to_n_times(1)
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(path("/graphql"))
            .respond_with(ResponseTemplate::new(200).set_body_json(two_posts_four_categories()))
            .mount(&server)
            .await;

        let mut loader = ContentLoader::new(test_client(&server.uri()), Fallback::builtin());

        loader.load().await;
        assert!(loader.state().is_degraded());
        let degraded_at = loader.fetched_at().unwrap();

        loader.load().await;
        assert_eq!(*loader.state(), LoadState::Ready);
        assert_eq!(loader.posts().len(), 2);
        assert!(loader.fetched_at().unwrap() >= degraded_at);
    }

    #[tokio::test]
    async fn test_snapshot_matches_loader_state() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/graphql"))
            .respond_with(ResponseTemplate::new(200).set_body_json(two_posts_four_categories()))
            .mount(&server)
            .await;

        let mut loader = ContentLoader::new(test_client(&server.uri()), Fallback::builtin());
        loader.load().await;

        let snapshot = loader.snapshot();
        assert_eq!(snapshot.state, *loader.state());
        assert_eq!(snapshot.posts, loader.posts());
        assert_eq!(snapshot.categories, loader.categories());
        assert_eq!(snapshot.fetched_at, loader.fetched_at());

        // Snapshots serialize for machine-readable output
        let json = serde_json::to_value(&snapshot).unwrap();
        assert_eq!(json["state"]["state"], "ready");
        assert_eq!(json["posts"].as_array().unwrap().len(), 2);
    }

    #[test]
    fn test_classify_covers_taxonomy() {
        assert_eq!(
            classify(&Error::Server { status: 502 }),
            FailureKind::Server
        );
        assert_eq!(
            classify(&Error::Api("boom".to_string())),
            FailureKind::Api
        );
        assert_eq!(
            classify(&Error::Serialization("bad body".to_string())),
            FailureKind::Api
        );
        assert_eq!(
            classify(&Error::Io(std::io::Error::other("down"))),
            FailureKind::Transport
        );
    }
}

#![allow(missing_docs, clippy::expect_used, clippy::unwrap_used)]

mod common;

use common::{gyan_cmd, live_front_page};
use predicates::prelude::*;
use serde_json::Value;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn mock_endpoint(server: &MockServer) -> String {
    Mock::given(method("POST"))
        .and(path("/graphql"))
        .respond_with(ResponseTemplate::new(200).set_body_json(live_front_page()))
        .mount(server)
        .await;
    format!("{}/graphql", server.uri())
}

#[tokio::test]
async fn show_renders_live_content_as_json() -> anyhow::Result<()> {
    let server = MockServer::start().await;
    let endpoint = mock_endpoint(&server).await;

    let output = gyan_cmd()
        .args(["show", "--endpoint", &endpoint, "-f", "json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let json: Value = serde_json::from_slice(&output)?;
    assert_eq!(json["state"]["state"], "ready");

    let posts = json["posts"].as_array().unwrap();
    assert_eq!(posts.len(), 2, "posts are shown exactly as returned");
    assert_eq!(posts[0]["slug"], "sadhu-te-kutta");
    assert_eq!(posts[1]["slug"], "marhi-da-deeva");
    // Excerpts are sanitized in the projection
    assert_eq!(posts[0]["excerpt"], "A satirical short story.");
    assert_eq!(posts[1]["excerpt"], "A landmark rural novel.");
    assert!(
        posts[0]["url"]
            .as_str()
            .unwrap()
            .ends_with("/sadhu-te-kutta")
    );

    let categories = json["categories"].as_array().unwrap();
    assert_eq!(categories.len(), 4);
    assert_eq!(categories[0]["slug"], "kahaniya");
    assert!(
        categories[0]["url"]
            .as_str()
            .unwrap()
            .ends_with("/category/kahaniya")
    );

    Ok(())
}

#[tokio::test]
async fn show_renders_live_content_as_text() -> anyhow::Result<()> {
    let server = MockServer::start().await;
    let endpoint = mock_endpoint(&server).await;

    gyan_cmd()
        .args(["show", "--endpoint", &endpoint])
        .assert()
        .success()
        .stdout(predicate::str::contains("Work of the Week"))
        .stdout(predicate::str::contains("Sadhu Te Kutta"))
        .stdout(predicate::str::contains("by Gurbaksh Singh"))
        .stdout(predicate::str::contains("Literary Pillars"))
        .stdout(predicate::str::contains("Kavita"))
        // Markup never reaches the terminal
        .stdout(predicate::str::contains("<p>").not())
        // Live content shows no degraded banner
        .stdout(predicate::str::contains("Offline preview").not());

    Ok(())
}

#[tokio::test]
async fn posts_jsonl_emits_state_then_posts() -> anyhow::Result<()> {
    let server = MockServer::start().await;
    let endpoint = mock_endpoint(&server).await;

    let output = gyan_cmd()
        .args(["posts", "--endpoint", &endpoint, "-f", "jsonl"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let lines: Vec<Value> = String::from_utf8(output)?
        .lines()
        .map(|l| serde_json::from_str(l).unwrap())
        .collect();

    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0]["type"], "state");
    assert_eq!(lines[0]["state"], "ready");
    assert_eq!(lines[1]["type"], "post");
    assert_eq!(lines[1]["title"], "Sadhu Te Kutta");
    assert_eq!(lines[2]["type"], "post");

    Ok(())
}

#[tokio::test]
async fn categories_text_lists_counts() -> anyhow::Result<()> {
    let server = MockServer::start().await;
    let endpoint = mock_endpoint(&server).await;

    gyan_cmd()
        .args(["categories", "--endpoint", &endpoint])
        .assert()
        .success()
        .stdout(predicate::str::contains("Kahaniya"))
        .stdout(predicate::str::contains("51 works"))
        .stdout(predicate::str::contains("Short stories"))
        .stdout(predicate::str::contains("/category/kitaba"));

    Ok(())
}

#[tokio::test]
async fn default_command_is_show() -> anyhow::Result<()> {
    let server = MockServer::start().await;
    let endpoint = mock_endpoint(&server).await;

    gyan_cmd()
        .args(["--endpoint", &endpoint])
        .assert()
        .success()
        .stdout(predicate::str::contains("Work of the Week"));

    Ok(())
}

//! Posts command: only the post list.

use super::{Page, PostView, load_page, print_state_banner, tagged_line};
use crate::cli::Cli;
use crate::output::OutputFormat;
use anyhow::Result;
use colored::Colorize;
use serde_json::json;

/// Execute the posts command.
pub async fn execute(cli: &Cli) -> Result<()> {
    let page = load_page(cli).await?;
    render(&page, cli.format)
}

fn render(page: &Page, format: OutputFormat) -> Result<()> {
    let posts: Vec<PostView> = page
        .snapshot
        .posts
        .iter()
        .map(|p| PostView::project(p, &page.site_url))
        .collect();

    match format {
        OutputFormat::Text => {
            print_state_banner(&page.snapshot.state);
            for post in &posts {
                println!(
                    "{} {}",
                    post.title.bold(),
                    format!("by {}", post.author).bright_black()
                );
                if !post.excerpt.is_empty() {
                    println!("  {}", post.excerpt);
                }
                println!("  {}", post.url.bright_black());
                println!();
            }
        },
        OutputFormat::Json => {
            let doc = json!({ "state": page.snapshot.state, "posts": posts });
            println!("{}", serde_json::to_string_pretty(&doc)?);
        },
        OutputFormat::Jsonl => {
            println!("{}", tagged_line("state", &page.snapshot.state)?);
            for post in &posts {
                println!("{}", tagged_line("post", post)?);
            }
        },
    }
    Ok(())
}

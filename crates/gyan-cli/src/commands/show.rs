//! Show command: the full front page.

use super::{CategoryView, Page, PostView, load_page, print_state_banner, tagged_line};
use crate::cli::Cli;
use crate::output::OutputFormat;
use anyhow::Result;
use colored::Colorize;
use serde_json::json;

/// Execute the show command.
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
    let categories: Vec<CategoryView> = page
        .snapshot
        .categories
        .iter()
        .map(|c| CategoryView::project(c, &page.site_url))
        .collect();

    match format {
        OutputFormat::Text => print_text(page, &posts, &categories),
        OutputFormat::Json => {
            let doc = json!({
                "state": page.snapshot.state,
                "fetched_at": page.snapshot.fetched_at,
                "site_url": page.site_url,
                "posts": posts,
                "categories": categories,
            });
            println!("{}", serde_json::to_string_pretty(&doc)?);
        },
        OutputFormat::Jsonl => {
            println!("{}", tagged_line("state", &page.snapshot.state)?);
            for post in &posts {
                println!("{}", tagged_line("post", post)?);
            }
            for category in &categories {
                println!("{}", tagged_line("category", category)?);
            }
        },
    }
    Ok(())
}

fn print_text(page: &Page, posts: &[PostView], categories: &[CategoryView]) {
    print_state_banner(&page.snapshot.state);

    if let Some(featured) = posts.first() {
        println!("{}", "Work of the Week".bold());
        println!(
            "  {} {}",
            featured.title.bold(),
            format!("by {}", featured.author).bright_black()
        );
        if !featured.excerpt.is_empty() {
            println!("  {}", featured.excerpt);
        }
        println!("  {}", featured.url.underline());
        println!();
    }

    if posts.len() > 1 {
        println!("{}", "More from the archive".bold());
        for post in &posts[1..] {
            println!(
                "  {} {}",
                post.title,
                format!("by {}", post.author).bright_black()
            );
            println!("    {}", post.url.bright_black());
        }
        println!();
    }

    println!("{}", "Literary Pillars".bold());
    for category in categories {
        println!(
            "  {:<12} {:>4} works  {}",
            category.name,
            category.count,
            category.url.bright_black()
        );
    }
    println!();
    println!(
        "{}",
        format!("View the archive: {}", page.site_url).bright_black()
    );
    if let Some(fetched_at) = page.snapshot.fetched_at {
        println!("{}", format!("Loaded {}", fetched_at.to_rfc3339()).bright_black());
    }
}

//! Categories command: only the taxonomy list.

use super::{CategoryView, Page, load_page, print_state_banner, tagged_line};
use crate::cli::Cli;
use crate::output::OutputFormat;
use anyhow::Result;
use colored::Colorize;
use serde_json::json;

/// Execute the categories command.
pub async fn execute(cli: &Cli) -> Result<()> {
    let page = load_page(cli).await?;
    render(&page, cli.format)
}

fn render(page: &Page, format: OutputFormat) -> Result<()> {
    let categories: Vec<CategoryView> = page
        .snapshot
        .categories
        .iter()
        .map(|c| CategoryView::project(c, &page.site_url))
        .collect();

    match format {
        OutputFormat::Text => {
            print_state_banner(&page.snapshot.state);
            for category in &categories {
                println!(
                    "{:<12} {:>4} works  {}",
                    category.name.bold(),
                    category.count,
                    category.url.bright_black()
                );
                if let Some(description) = &category.description {
                    println!("{:<12} {}", "", description.bright_black());
                }
            }
        },
        OutputFormat::Json => {
            let doc = json!({ "state": page.snapshot.state, "categories": categories });
            println!("{}", serde_json::to_string_pretty(&doc)?);
        },
        OutputFormat::Jsonl => {
            println!("{}", tagged_line("state", &page.snapshot.state)?);
            for category in &categories {
                println!("{}", tagged_line("category", category)?);
            }
        },
    }
    Ok(())
}

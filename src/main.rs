use std::time::Instant;

use clap::{Parser, Subcommand};

use imdb_list_scraper::{fetcher, load_list_items, ListItem, ListParams};

#[derive(Parser)]
#[command(
    name = "imdb_list_scraper",
    about = "IMDb list page scraper, no API key required"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch a list page and dump the raw HTML to stdout
    Fetch {
        /// IMDb list URL, e.g. https://www.imdb.com/list/ls055592025/
        url: String,
    },
    /// Fetch a list page and print its extracted entries
    List {
        /// IMDb list URL, e.g. https://www.imdb.com/list/ls055592025/
        url: String,
        /// Emit records as JSON instead of a table
        #[arg(long)]
        json: bool,
        /// Max rows to display (extraction itself is never truncated)
        #[arg(short = 'n', long)]
        limit: Option<usize>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let t0 = Instant::now();
    let cli = Cli::parse();

    match cli.command {
        Commands::Fetch { url } => {
            let html = fetcher::fetch_list_page(&url).await?;
            println!("{}", html);
        }
        Commands::List { url, json, limit } => {
            let items = load_list_items(&ListParams { url }).await?;
            if json {
                println!("{}", serde_json::to_string_pretty(&items)?);
            } else {
                print_table(&items, limit);
            }
        }
    }

    let elapsed = t0.elapsed();
    if elapsed.as_secs() >= 1 {
        println!("\nDone in {:.1}s", elapsed.as_secs_f64());
    }

    Ok(())
}

fn print_table(items: &[ListItem], limit: Option<usize>) {
    if items.is_empty() {
        println!("No entries found.");
        return;
    }

    let shown = limit.unwrap_or(items.len()).min(items.len());

    println!("{:>3} | {:<10} | {:<6} | {:<44}", "#", "ID", "Year", "Title");
    println!("{}", "-".repeat(72));

    for (i, item) in items.iter().take(shown).enumerate() {
        println!(
            "{:>3} | {:<10} | {:<6} | {:<44}",
            i + 1,
            item.id,
            item.year,
            truncate(&item.title, 44),
        );
    }

    if shown < items.len() {
        println!("... {} more", items.len() - shown);
    }
    println!("\n{} entries | detail: https://www.imdb.com/title/<id>/", items.len());
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let truncated: String = s.chars().take(max).collect();
        format!("{}...", truncated)
    }
}

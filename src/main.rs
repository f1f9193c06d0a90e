mod catalog;
mod error;
mod fetcher;
mod parser;
mod scraper;
mod settings;

use std::path::PathBuf;
use std::time::Instant;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::info;

use crate::catalog::CatalogSummary;
use crate::fetcher::PageFetcher;
use crate::scraper::Scraper;
use crate::settings::Settings;

#[derive(Parser)]
#[command(name = "shop_ripper", about = "Rip a storefront's product catalog into JSON")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Crawl listing pages and write the catalog
    Run {
        /// Max listing pages to walk
        #[arg(short = 'n', long, value_parser = clap::value_parser!(u32).range(1..))]
        max_pages: Option<u32>,
        /// Output JSON file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Scrape a single product page and print its record
    Product { url: String },
    /// List the product URLs found on one listing page
    Listing {
        #[arg(short, long, default_value = "1")]
        page: u32,
    },
    /// Summarize a saved catalog
    Stats {
        /// Catalog JSON file (default: configured output path)
        #[arg(short, long)]
        input: Option<PathBuf>,
    },
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let t0 = Instant::now();
    let cli = Cli::parse();
    let mut settings = Settings::load()?;
    info!(?settings, "settings loaded");

    let result = match cli.command {
        Commands::Run { max_pages, output } => {
            if let Some(n) = max_pages {
                settings.max_pages = n;
            }
            if let Some(path) = output {
                settings.output_path = path;
            }
            let fetcher = PageFetcher::new(&settings.user_agent)?;
            let scraper = Scraper::new(settings.storefront()?, fetcher, settings.max_pages);
            let stats = scraper.run_to_file(&settings.output_path).await?;
            println!(
                "Done: {} pages, {} links, {} products ({} errors).",
                stats.pages, stats.discovered, stats.fetched, stats.errors
            );
            Ok(())
        }
        Commands::Product { url } => {
            let storefront = settings.storefront()?;
            let fetcher = PageFetcher::new(&settings.user_agent)?;
            let html = fetcher
                .try_fetch(&url)
                .await
                .with_context(|| format!("Failed to fetch {}", url))?;
            let record = parser::extract_product(&storefront, &url, &html);
            println!("{}", serde_json::to_string_pretty(&record)?);
            Ok(())
        }
        Commands::Listing { page } => {
            let storefront = settings.storefront()?;
            let fetcher = PageFetcher::new(&settings.user_agent)?;
            let url = storefront.listing_url(page);
            let html = fetcher
                .try_fetch(&url)
                .await
                .with_context(|| format!("Failed to fetch {}", url))?;
            let links = parser::extract_product_links(&storefront, &html);
            if links.is_empty() {
                println!("No products found on page {}.", page);
                return Ok(());
            }
            for link in &links {
                println!("{}", link);
            }
            println!("\n{} products on page {}", links.len(), page);
            Ok(())
        }
        Commands::Stats { input } => {
            let path = input.unwrap_or(settings.output_path);
            let records = catalog::load(&path)?;
            CatalogSummary::from_records(&records).print();
            Ok(())
        }
    };

    let elapsed = t0.elapsed();
    if elapsed.as_secs() >= 1 {
        println!("\nDone in {}", format_duration(elapsed));
    }

    result
}

fn format_duration(d: std::time::Duration) -> String {
    let secs = d.as_secs();
    if secs < 60 {
        format!("{:.1}s", d.as_secs_f64())
    } else {
        format!("{}m {}s", secs / 60, secs % 60)
    }
}

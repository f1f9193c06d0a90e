use std::collections::HashSet;
use std::path::Path;
use std::time::Duration;

use anyhow::Result;
use tracing::{debug, info};

use crate::catalog::{self, ProductRecord};
use crate::error::CrawlError;
use crate::fetcher::PageFetcher;
use crate::parser;
use crate::settings::Storefront;

/// Pause after every product fetch. Fixed, not exposed as a setting.
pub const PRODUCT_DELAY: Duration = Duration::from_millis(500);

/// Crawl stats returned after completion.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct CrawlStats {
    pub pages: usize,
    pub discovered: usize,
    pub fetched: usize,
    pub errors: usize,
}

pub struct Scraper {
    storefront: Storefront,
    fetcher: PageFetcher,
    max_pages: u32,
    delay: Duration,
}

impl Scraper {
    /// `max_pages` below 1 is raised to 1: the shop page is always fetched.
    pub fn new(storefront: Storefront, fetcher: PageFetcher, max_pages: u32) -> Self {
        Scraper {
            storefront,
            fetcher,
            max_pages: max_pages.max(1),
            delay: PRODUCT_DELAY,
        }
    }

    #[cfg(test)]
    fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Walk listing pages 1..=max_pages, fetching each product URL once per run.
    ///
    /// Stops early on an empty listing page or a failed fetch of page 2+.
    /// A failed fetch of page 1 aborts with `CrawlError::ShopUnavailable`.
    pub async fn run(&self) -> Result<(Vec<ProductRecord>, CrawlStats)> {
        let mut records: Vec<ProductRecord> = Vec::new();
        let mut recorded: HashSet<String> = HashSet::new();
        let mut stats = CrawlStats::default();

        for page in 1..=self.max_pages {
            let url = self.storefront.listing_url(page);
            println!("Scraping {}...", url);

            let Some(html) = self.fetcher.fetch(&url).await else {
                stats.errors += 1;
                if page == 1 {
                    println!("Failed to fetch shop page.");
                    return Err(CrawlError::ShopUnavailable { url }.into());
                }
                info!(page, "listing fetch failed, stopping pagination");
                break;
            };
            stats.pages += 1;

            let products = parser::extract_product_links(&self.storefront, &html);
            if products.is_empty() {
                println!("No products found on page {}. Stopping.", page);
                break;
            }
            println!("Found {} products on page {}", products.len(), page);
            stats.discovered += products.len();

            for product_url in products {
                if recorded.contains(&product_url) {
                    debug!(url = %product_url, "already scraped");
                    continue;
                }

                println!("  Fetching {}...", product_url);
                match self.fetcher.fetch(&product_url).await {
                    Some(product_html) => {
                        let record =
                            parser::extract_product(&self.storefront, &product_url, &product_html);
                        recorded.insert(product_url);
                        records.push(record);
                        stats.fetched += 1;
                    }
                    None => stats.errors += 1,
                }
                tokio::time::sleep(self.delay).await;
            }
        }

        println!("Total products scraped: {}", records.len());
        Ok((records, stats))
    }

    /// Crawl, then overwrite `output` with the catalog. Nothing is written if
    /// the crawl aborts.
    pub async fn run_to_file(&self, output: &Path) -> Result<CrawlStats> {
        let (records, stats) = self.run().await?;
        catalog::save(output, &records)?;
        println!("Done. Saved to {}", output.display());
        info!(
            "Crawled {} pages ({} products, {} errors)",
            stats.pages, stats.fetched, stats.errors
        );
        Ok(stats)
    }
}

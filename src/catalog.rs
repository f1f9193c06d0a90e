use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    Golf,
    Samurai,
    ShopAll,
}

impl Category {
    pub fn label(self) -> &'static str {
        match self {
            Category::Golf => "golf",
            Category::Samurai => "samurai",
            Category::ShopAll => "shop-all",
        }
    }
}

/// One product page. Absent fields are left out of the JSON entirely.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductRecord {
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_range: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub images: Vec<String>,
    pub category: Category,
}

/// Write the catalog as an indented JSON array, replacing any previous file.
pub fn save(path: &Path, records: &[ProductRecord]) -> Result<()> {
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        fs::create_dir_all(dir).with_context(|| format!("Failed to create {:?}", dir))?;
    }
    let mut json = serde_json::to_string_pretty(records)?;
    json.push('\n');
    fs::write(path, json).with_context(|| format!("Failed to write {:?}", path))?;
    Ok(())
}

pub fn load(path: &Path) -> Result<Vec<ProductRecord>> {
    let raw = fs::read_to_string(path).with_context(|| format!("Failed to read {:?}", path))?;
    serde_json::from_str(&raw).with_context(|| format!("Invalid catalog {:?}", path))
}

pub struct CatalogSummary {
    pub total: usize,
    pub by_category: BTreeMap<Category, usize>,
    pub missing_title: usize,
    pub missing_price: usize,
    pub zero_price: usize,
    pub missing_description: usize,
    pub missing_images: usize,
}

impl CatalogSummary {
    pub fn from_records(records: &[ProductRecord]) -> Self {
        let mut by_category = BTreeMap::new();
        for r in records {
            *by_category.entry(r.category).or_insert(0) += 1;
        }
        CatalogSummary {
            total: records.len(),
            by_category,
            missing_title: records.iter().filter(|r| r.title.is_none()).count(),
            missing_price: records.iter().filter(|r| r.price.is_none()).count(),
            zero_price: records
                .iter()
                .filter(|r| r.price.as_deref() == Some("0.00"))
                .count(),
            missing_description: records.iter().filter(|r| r.description.is_none()).count(),
            missing_images: records.iter().filter(|r| r.images.is_empty()).count(),
        }
    }

    pub fn print(&self) {
        println!("Total:       {}", self.total);
        for (category, count) in &self.by_category {
            println!("  {:<10} {}", category.label(), count);
        }
        println!("No title:    {}", self.missing_title);
        println!("No price:    {}", self.missing_price);
        println!("Zero price:  {}", self.zero_price);
        println!("No desc:     {}", self.missing_description);
        println!("No images:   {}", self.missing_images);
    }
}

use std::sync::LazyLock;

use regex::Regex;

use crate::parser::markup::strip_tags;

static PRICE_BLOCK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?s)<p class="price"[^>]*>(.*?)</p>"#).unwrap());
static AMOUNT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$?([\d,]+\.\d{2})").unwrap());

pub const ZERO_PRICE: &str = "0.00";

/// Displayed price text and the first amount found in it.
pub struct PriceFields {
    pub price_range: String,
    pub price: String,
}

pub fn extract(html: &str) -> Option<PriceFields> {
    let block = PRICE_BLOCK_RE.captures(html)?;
    let price_range = strip_tags(&block[1]);
    let price = first_amount(&price_range).unwrap_or_else(|| ZERO_PRICE.to_string());
    Some(PriceFields { price_range, price })
}

/// First `$1,234.56`-style token, thousands separators removed.
pub fn first_amount(text: &str) -> Option<String> {
    AMOUNT_RE
        .captures_iter(text)
        .map(|c| c[1].replace(',', ""))
        // a bare ",.00" leaves nothing before the point
        .find(|amount| !amount.starts_with('.'))
}

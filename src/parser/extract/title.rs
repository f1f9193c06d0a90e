use std::sync::LazyLock;

use regex::Regex;

use crate::parser::markup::strip_tags;

static PRODUCT_TITLE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?s)<h1[^>]*class="product_title[^"]*"[^>]*>(.*?)</h1>"#).unwrap()
});
static ANY_H1_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<h1[^>]*>(.*?)</h1>").unwrap());

/// `h1.product_title`, else the first `h1` on the page.
pub fn extract(html: &str) -> Option<String> {
    let inner = PRODUCT_TITLE_RE
        .captures(html)
        .or_else(|| ANY_H1_RE.captures(html))?;
    Some(strip_tags(&inner[1]))
}

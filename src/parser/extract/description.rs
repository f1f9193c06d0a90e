use std::sync::LazyLock;

use regex::Regex;

use crate::parser::markup::html_to_text;

// Non-greedy: stops at the first closing div, nested divs truncate the text.
static DESCRIPTION_TAB_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?s)<div[^>]*id="tab-description"[^>]*>(.*?)</div>"#).unwrap()
});

pub fn extract(html: &str) -> Option<String> {
    let block = DESCRIPTION_TAB_RE.captures(html)?;
    let text = html_to_text(&block[1]);
    if text.is_empty() {
        None
    } else {
        Some(text)
    }
}

use std::collections::BTreeSet;

use crate::settings::Storefront;

/// Filename fragments of scaled-down variants.
pub const THUMBNAIL_MARKERS: &[&str] = &["100x100", "150x150", "300x300"];

/// Full-size upload URLs referenced anywhere on the page, sorted and unique.
pub fn extract(storefront: &Storefront, html: &str) -> Vec<String> {
    storefront
        .upload_image_re()
        .find_iter(html)
        .map(|m| m.as_str())
        .filter(|url| !is_thumbnail(url))
        .map(str::to_string)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

pub fn is_thumbnail(url: &str) -> bool {
    THUMBNAIL_MARKERS.iter().any(|m| url.contains(m))
}

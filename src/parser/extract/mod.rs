pub mod category;
pub mod description;
pub mod images;
pub mod price;
pub mod title;

use crate::catalog::ProductRecord;
use crate::settings::Storefront;

/// Build a record from one product page. Each field is extracted on its own;
/// a miss leaves that field empty and never touches the others.
pub fn extract_product(storefront: &Storefront, url: &str, html: &str) -> ProductRecord {
    let title = title::extract(html);
    let (price_range, price) = match price::extract(html) {
        Some(p) => (Some(p.price_range), Some(p.price)),
        None => (None, None),
    };
    let description = description::extract(html);
    let images = images::extract(storefront, html);
    let category = category::classify(title.as_deref(), url);

    ProductRecord {
        url: url.to_string(),
        title,
        price_range,
        price,
        description,
        images,
        category,
    }
}

// ── Tests ──

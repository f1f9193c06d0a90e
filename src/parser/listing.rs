use std::collections::HashSet;

use crate::settings::Storefront;

/// Product-detail URLs linked from one listing page, first appearance order,
/// duplicates dropped.
pub fn extract_product_links(storefront: &Storefront, html: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut links = Vec::new();

    for caps in storefront.product_link_re().captures_iter(html) {
        let url = caps[1].to_string();
        if seen.insert(url.clone()) {
            links.push(url);
        }
    }

    links
}

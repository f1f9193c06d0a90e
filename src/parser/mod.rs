pub mod extract;
pub mod listing;
pub mod markup;

pub use extract::extract_product;
pub use listing::extract_product_links;

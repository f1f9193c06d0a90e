use crate::catalog::Category;

/// Evaluated top to bottom, first keyword hit wins.
pub const CATEGORY_RULES: &[(&str, Category)] = &[
    ("golf", Category::Golf),
    ("samurai", Category::Samurai),
];

pub const FALLBACK: Category = Category::ShopAll;

pub fn classify(title: Option<&str>, url: &str) -> Category {
    let title = title.unwrap_or_default().to_lowercase();
    let url = url.to_lowercase();

    CATEGORY_RULES
        .iter()
        .find(|(keyword, _)| title.contains(keyword) || url.contains(keyword))
        .map(|(_, category)| *category)
        .unwrap_or(FALLBACK)
}

use crate::models::MenuItem;

/// Filter value that shows the whole menu.
pub const ALL_CATEGORIES: &str = "all";

/// Distinct categories in first-seen order, as the filter options.
pub fn distinct_categories(items: &[MenuItem]) -> Vec<String> {
    let mut categories: Vec<String> = Vec::new();
    for item in items {
        if !categories.iter().any(|c| c == &item.category) {
            categories.push(item.category.clone());
        }
    }
    categories
}

/// Items whose category equals the filter, original order preserved.
/// The `all` filter returns the full list.
pub fn filter_by_category<'a>(items: &'a [MenuItem], category: &str) -> Vec<&'a MenuItem> {
    if category == ALL_CATEGORIES {
        return items.iter().collect();
    }
    items
        .iter()
        .filter(|item| item.category == category)
        .collect()
}

//! Page category constants.
//!
//! Every page declares an HTML `id` in the format `{entity}--{category}`
//! (e.g. `"a001_barang--list"`) and `data-page-category` with one of the
//! constants below, so the entity directory can be found from the DOM id.

/// List of records
pub const PAGE_CAT_LIST: &str = "list";

pub const ALL_CATEGORIES: &[&str] = &[PAGE_CAT_LIST];

/// Validate that a page id matches the `{entity}--{category}` format.
pub fn is_valid_page_id(id: &str) -> bool {
    match id.split_once("--") {
        Some((entity, category)) => !entity.is_empty() && is_known_category(category),
        None => false,
    }
}

pub fn is_known_category(cat: &str) -> bool {
    ALL_CATEGORIES.contains(&cat)
}

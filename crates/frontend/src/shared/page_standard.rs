//! Page category constants for tab pages.
//!
//! Every page rendered inside a tab declares an HTML `id` of the form
//! `{resource}--{category}` (e.g. `"a005_order--list"`) and a
//! `data-page-category` with one of the constants below.

/// Table of records with search/sort.
pub const PAGE_CAT_LIST: &str = "list";

/// Data-entry form (booking, staff tabs, requirement).
pub const PAGE_CAT_FORM: &str = "form";

/// Session pages such as login.
pub const PAGE_CAT_SYSTEM: &str = "system";

pub const ALL_CATEGORIES: &[&str] = &[PAGE_CAT_LIST, PAGE_CAT_FORM, PAGE_CAT_SYSTEM];

/// Validate that a page id matches the `{resource}--{category}` format.
pub fn is_valid_page_id(id: &str) -> bool {
    match id.split_once("--") {
        Some((resource, category)) => !resource.is_empty() && is_known_category(category),
        None => false,
    }
}

pub fn is_known_category(cat: &str) -> bool {
    ALL_CATEGORIES.contains(&cat)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_ids_name_resource_and_category() {
        assert!(is_valid_page_id("a005_order--list"));
        assert!(is_valid_page_id("sys_login--system"));
        assert!(!is_valid_page_id("a005_order"));
        assert!(!is_valid_page_id("--list"));
        assert!(!is_valid_page_id("a005_order--dashboard"));
    }
}

//! The fixed expense category catalog
//!
//! Categories and their subcategory option sets are fixed client-side; the
//! backend stores whatever string it is given. Matching against the catalog
//! is case-insensitive, and anything unrecognized falls back to the first
//! category.

/// A category and its fixed subcategory options
#[derive(Debug, Clone, Copy)]
pub struct CategoryOptions {
    /// Canonical category name
    pub name: &'static str,
    /// Subcategory choices, first entry is the default
    pub subcategories: &'static [&'static str],
}

/// The full catalog, in display order
pub const CATALOG: &[CategoryOptions] = &[
    CategoryOptions {
        name: "Groceries",
        subcategories: &["Food", "Meals", "Drinks", "Non-Food Items"],
    },
    CategoryOptions {
        name: "Gas",
        subcategories: &["Regular", "Premium", "Diesel"],
    },
    CategoryOptions {
        name: "Furniture",
        subcategories: &["Chairs", "Tables", "Beds"],
    },
    CategoryOptions {
        name: "Transportation",
        subcategories: &["Flight", "Taxi", "Train"],
    },
];

/// The fallback category when nothing matches
pub fn default_category() -> &'static str {
    CATALOG[0].name
}

/// All canonical category names, in display order
pub fn category_names() -> Vec<&'static str> {
    CATALOG.iter().map(|c| c.name).collect()
}

/// Look up a category's subcategory options by canonical or mixed-case name
pub fn subcategories(category: &str) -> Option<&'static [&'static str]> {
    CATALOG
        .iter()
        .find(|c| c.name.eq_ignore_ascii_case(category))
        .map(|c| c.subcategories)
}

/// The default subcategory for a category (first option)
pub fn default_subcategory(category: &str) -> &'static str {
    subcategories(category)
        .and_then(|subs| subs.first().copied())
        .unwrap_or(CATALOG[0].subcategories[0])
}

/// Match an extracted or user-supplied category against the catalog
///
/// Case-insensitive; absent or unmatched input falls back to the first
/// catalog category.
pub fn match_category(category: Option<&str>) -> &'static str {
    category
        .and_then(|c| CATALOG.iter().find(|opt| opt.name.eq_ignore_ascii_case(c)))
        .map(|opt| opt.name)
        .unwrap_or_else(default_category)
}

/// Check whether a subcategory belongs to a category's option set
pub fn is_valid_pair(category: &str, subcategory: &str) -> bool {
    subcategories(category)
        .map(|subs| subs.iter().any(|s| s.eq_ignore_ascii_case(subcategory)))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_match_category_case_insensitive() {
        assert_eq!(match_category(Some("groceries")), "Groceries");
        assert_eq!(match_category(Some("GAS")), "Gas");
        assert_eq!(match_category(Some("Transportation")), "Transportation");
    }

    #[test]
    fn test_match_category_defaults() {
        assert_eq!(match_category(Some("BOGUS")), "Groceries");
        assert_eq!(match_category(None), "Groceries");
        assert_eq!(match_category(Some("")), "Groceries");
    }

    #[test]
    fn test_subcategories() {
        assert_eq!(
            subcategories("Groceries").unwrap(),
            &["Food", "Meals", "Drinks", "Non-Food Items"]
        );
        assert!(subcategories("Lodging").is_none());
    }

    #[test]
    fn test_default_subcategory() {
        assert_eq!(default_subcategory("Groceries"), "Food");
        assert_eq!(default_subcategory("Gas"), "Regular");
        // Unknown categories fall back to the catalog default
        assert_eq!(default_subcategory("Lodging"), "Food");
    }

    #[test]
    fn test_is_valid_pair() {
        assert!(is_valid_pair("Groceries", "Drinks"));
        assert!(is_valid_pair("groceries", "drinks"));
        assert!(!is_valid_pair("Groceries", "Diesel"));
        assert!(!is_valid_pair("Lodging", "Food"));
    }
}

//! Expense draft and line items
//!
//! An `ExpenseDraft` is the in-progress expense entry owned by the active
//! form session: a category/subcategory pair from the fixed catalog, a store
//! name, and an ordered list of line items. It is never persisted locally;
//! a submitted or abandoned draft is simply dropped.

use serde::{Deserialize, Serialize};

use super::{amount, catalog};

/// One line item of an expense entry
///
/// The amount is kept as the raw string the user typed (or extraction
/// produced) so a half-edited value survives round trips to the screen;
/// it only has to parse when totals are computed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    /// Item name
    pub name: String,
    /// Raw amount string; empty or unparsable values count as zero
    pub amount: String,
}

impl LineItem {
    /// Create a line item from name and amount strings
    pub fn new(name: impl Into<String>, amount: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            amount: amount.into(),
        }
    }

    /// Whether both the name and the amount have been filled in
    pub fn is_complete(&self) -> bool {
        !self.name.is_empty() && !self.amount.is_empty()
    }

    /// The amount parsed leniently (zero when empty or unparsable)
    pub fn amount_value(&self) -> f64 {
        amount::parse_or_zero(&self.amount)
    }
}

/// An in-progress expense entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExpenseDraft {
    /// Category from the fixed catalog
    pub category: String,
    /// Subcategory belonging to the category's option set
    pub subcategory: String,
    /// Store name
    pub store: String,
    /// Ordered line items
    pub items: Vec<LineItem>,
}

impl ExpenseDraft {
    /// Create an empty draft on the catalog defaults
    pub fn new() -> Self {
        let category = catalog::default_category();
        Self {
            category: category.to_string(),
            subcategory: catalog::default_subcategory(category).to_string(),
            store: String::new(),
            items: Vec::new(),
        }
    }

    /// Change the category, resetting the subcategory to the new set's
    /// first option
    pub fn set_category(&mut self, category: &str) {
        let canonical = catalog::match_category(Some(category));
        self.category = canonical.to_string();
        self.subcategory = catalog::default_subcategory(canonical).to_string();
    }

    /// Set the subcategory; ignored unless it belongs to the current
    /// category's option set
    pub fn set_subcategory(&mut self, subcategory: &str) {
        if catalog::is_valid_pair(&self.category, subcategory) {
            self.subcategory = subcategory.to_string();
        }
    }

    /// Sum of all item amounts, rounded to 2 decimal places
    pub fn total(&self) -> f64 {
        amount::round2(self.items.iter().map(LineItem::amount_value).sum())
    }
}

impl Default for ExpenseDraft {
    fn default() -> Self {
        Self::new()
    }
}

//! Line-item ledger for the expense entry form
//!
//! The ledger owns the ordered item list of one expense entry and keeps the
//! running total current. The total is recomputed and cached after every
//! mutation rather than on every read, so the form can display it as often
//! as it repaints.

pub mod gate;

pub use gate::can_submit;

use crate::models::amount;
use crate::models::LineItem;

/// Which field of a line item an edit targets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemField {
    Name,
    Amount,
}

/// In-memory list of line items with a cached running total
#[derive(Debug, Clone, Default)]
pub struct LineItemLedger {
    items: Vec<LineItem>,
    total: f64,
}

impl LineItemLedger {
    /// Create an empty ledger
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a ledger from existing items (e.g. an ingested draft)
    pub fn from_items(items: Vec<LineItem>) -> Self {
        let mut ledger = Self { items, total: 0.0 };
        ledger.recompute_total();
        ledger
    }

    /// The current items, in order
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Number of items
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the ledger holds no items
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Replace one field of the item at `index`
    ///
    /// Out-of-range indices are a guarded no-op; the caller drives indices
    /// off this ledger's own item list.
    pub fn set_field(&mut self, index: usize, field: ItemField, value: impl Into<String>) {
        let Some(item) = self.items.get_mut(index) else {
            return;
        };

        match field {
            ItemField::Name => item.name = value.into(),
            ItemField::Amount => item.amount = value.into(),
        }
        self.recompute_total();
    }

    /// Append an item with empty name and empty amount
    pub fn add(&mut self) {
        self.items.push(LineItem::default());
    }

    /// Delete the item at `index` (guarded no-op when out of range)
    pub fn remove(&mut self, index: usize) {
        if index < self.items.len() {
            self.items.remove(index);
            self.recompute_total();
        }
    }

    /// The cached total, rounded to 2 decimal places
    pub fn total(&self) -> f64 {
        self.total
    }

    /// The total as a 2-decimal display string
    pub fn formatted_total(&self) -> String {
        amount::format(self.total)
    }

    /// Drain the items, leaving the ledger empty (used on submission)
    pub fn take_items(&mut self) -> Vec<LineItem> {
        self.total = 0.0;
        std::mem::take(&mut self.items)
    }

    fn recompute_total(&mut self) {
        self.total = amount::round2(self.items.iter().map(LineItem::amount_value).sum());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::LineItem;

    #[test]
    fn test_add_starts_empty() {
        let mut ledger = LineItemLedger::new();
        ledger.add();

        assert_eq!(ledger.len(), 1);
        assert_eq!(ledger.items()[0], LineItem::default());
        assert_eq!(ledger.total(), 0.0);
    }

    #[test]
    fn test_set_field_updates_total() {
        let mut ledger = LineItemLedger::new();
        ledger.add();
        ledger.add();

        ledger.set_field(0, ItemField::Name, "Milk");
        ledger.set_field(0, ItemField::Amount, "2.50");
        ledger.set_field(1, ItemField::Amount, "1.25");

        assert_eq!(ledger.total(), 3.75);
        assert_eq!(ledger.formatted_total(), "3.75");
    }

    #[test]
    fn test_unparsable_amounts_count_as_zero() {
        let mut ledger = LineItemLedger::new();
        ledger.add();
        ledger.add();
        ledger.set_field(0, ItemField::Amount, "2.50");
        ledger.set_field(1, ItemField::Amount, "not a number");

        assert_eq!(ledger.total(), 2.50);
        // The raw string is preserved for editing
        assert_eq!(ledger.items()[1].amount, "not a number");
    }

    #[test]
    fn test_out_of_range_edits_are_noops() {
        let mut ledger = LineItemLedger::new();
        ledger.add();
        ledger.set_field(0, ItemField::Amount, "2.00");

        ledger.set_field(5, ItemField::Amount, "99.00");
        ledger.remove(5);

        assert_eq!(ledger.len(), 1);
        assert_eq!(ledger.total(), 2.00);
    }

    #[test]
    fn test_remove_recomputes_total() {
        let mut ledger = LineItemLedger::from_items(vec![
            LineItem::new("Milk", "2.50"),
            LineItem::new("Bread", "1.50"),
        ]);
        assert_eq!(ledger.total(), 4.00);

        ledger.remove(0);
        assert_eq!(ledger.total(), 1.50);

        ledger.remove(0);
        assert_eq!(ledger.total(), 0.0);
        assert!(ledger.is_empty());
    }

    #[test]
    fn test_total_matches_sum_under_mixed_mutations() {
        let mut ledger = LineItemLedger::new();
        ledger.add();
        ledger.set_field(0, ItemField::Amount, "10");
        ledger.add();
        ledger.set_field(1, ItemField::Amount, "0.30");
        ledger.set_field(0, ItemField::Amount, "7");
        ledger.remove(1);
        ledger.add();
        ledger.set_field(1, ItemField::Amount, "$1.20");

        let expected: f64 = ledger.items().iter().map(LineItem::amount_value).sum();
        assert_eq!(ledger.total(), (expected * 100.0).round() / 100.0);
        assert_eq!(ledger.total(), 8.20);
    }

    #[test]
    fn test_take_items_resets() {
        let mut ledger = LineItemLedger::from_items(vec![LineItem::new("Milk", "2.50")]);
        let items = ledger.take_items();

        assert_eq!(items.len(), 1);
        assert!(ledger.is_empty());
        assert_eq!(ledger.total(), 0.0);
    }
}

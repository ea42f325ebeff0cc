//! Submission gate for expense entries
//!
//! A pure predicate deciding whether the current item list may be submitted.
//! The form re-evaluates it after every ledger mutation to enable or disable
//! its submit action; it never touches the network.

use crate::models::{amount, LineItem};

/// Whether an item list may be submitted
///
/// Allowed only when the list is non-empty, at least one item has both a
/// name and an amount, and the rounded total is strictly positive.
pub fn can_submit(items: &[LineItem]) -> bool {
    if items.is_empty() {
        return false;
    }

    if !items.iter().any(LineItem::is_complete) {
        return false;
    }

    let total = amount::round2(items.iter().map(LineItem::amount_value).sum());
    total > 0.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::LineItem;

    #[test]
    fn test_empty_list_rejected() {
        assert!(!can_submit(&[]));
    }

    #[test]
    fn test_incomplete_items_rejected() {
        let items = vec![LineItem::new("Milk", ""), LineItem::new("", "2.50")];
        assert!(!can_submit(&items));
    }

    #[test]
    fn test_zero_total_rejected() {
        let items = vec![LineItem::new("Coupon", "0")];
        assert!(!can_submit(&items));
    }

    #[test]
    fn test_negative_total_rejected() {
        let items = vec![
            LineItem::new("Milk", "2.50"),
            LineItem::new("Promotion", "-3.00"),
        ];
        assert!(!can_submit(&items));
    }

    #[test]
    fn test_single_complete_item_allowed() {
        let items = vec![LineItem::new("Milk", "2.50")];
        assert!(can_submit(&items));
    }

    #[test]
    fn test_one_complete_item_carries_the_list() {
        let items = vec![LineItem::new("Milk", "2.50"), LineItem::new("", "")];
        assert!(can_submit(&items));
    }

    #[test]
    fn test_total_below_display_precision_rejected() {
        // Rounds to 0.00, the same value the form displays
        let items = vec![LineItem::new("Rounding", "0.001")];
        assert!(!can_submit(&items));
    }
}

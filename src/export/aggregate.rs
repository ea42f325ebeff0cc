//! Category aggregation for the export chart

use std::collections::BTreeMap;

use crate::models::HistoryEntry;

/// Sum amounts per category across a history
///
/// The result is ordered by category name so chart bars and legends come
/// out the same on every run.
pub fn category_totals(entries: &[HistoryEntry]) -> BTreeMap<String, f64> {
    let mut totals: BTreeMap<String, f64> = BTreeMap::new();
    for entry in entries {
        *totals.entry(entry.category_name().to_string()).or_insert(0.0) += entry.amount;
    }
    totals
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ReceiptStatus;

    fn entry(category: Option<&str>, amount: f64) -> HistoryEntry {
        HistoryEntry {
            user_name: None,
            receipt_id: None,
            store_name: None,
            category: category.map(str::to_string),
            amount,
            status: ReceiptStatus::Pending,
            uploaded_at: "2025-04-01 10:00:00".to_string(),
        }
    }

    #[test]
    fn test_totals_sum_per_category() {
        let entries = vec![
            entry(Some("Groceries"), 10.0),
            entry(Some("Gas"), 20.0),
            entry(Some("Groceries"), 2.5),
        ];

        let totals = category_totals(&entries);
        assert_eq!(totals.len(), 2);
        assert_eq!(totals["Groceries"], 12.5);
        assert_eq!(totals["Gas"], 20.0);
    }

    #[test]
    fn test_absent_category_buckets_as_unknown() {
        let totals = category_totals(&[entry(None, 5.0), entry(None, 7.0)]);
        assert_eq!(totals["Unknown"], 12.0);
    }

    #[test]
    fn test_empty_history() {
        assert!(category_totals(&[]).is_empty());
    }
}

//! Statistics display formatting
//!
//! Renders the statistics payload: category totals for everyone, the
//! receipt status breakdown, and the store/user breakdowns elevated roles
//! receive.

use crate::api::types::StatisticsResponse;
use crate::models::amount;

/// Format the statistics report for terminal display
pub fn format_statistics(stats: &StatisticsResponse, currency_symbol: &str) -> String {
    let mut output = String::new();

    output.push_str("Spending by Category\n");
    output.push_str(&"=".repeat(50));
    output.push('\n');

    if stats.category_totals.is_empty() {
        output.push_str("No spending recorded.\n");
    } else {
        for (category, total) in &stats.category_totals {
            output.push_str(&format!(
                "  {:<25} {:>12}\n",
                category,
                format!("{}{}", currency_symbol, amount::format(*total))
            ));
        }
    }

    output.push_str("\nReceipt Status Breakdown\n");
    output.push_str(&"-".repeat(50));
    output.push('\n');

    let total = stats.approvals + stats.rejections + stats.pending;
    for (label, count) in [
        ("Approved", stats.approvals),
        ("Rejected", stats.rejections),
        ("Pending", stats.pending),
    ] {
        let percent = if total > 0 {
            count as f64 / total as f64 * 100.0
        } else {
            0.0
        };
        output.push_str(&format!("  {:<10} {:>6}  ({:.1}%)\n", label, count, percent));
    }

    if let (Some(store_totals), Some(main_categories)) =
        (&stats.store_totals, &stats.store_main_categories)
    {
        output.push_str("\nTotal Spending by Store\n");
        output.push_str(&"-".repeat(50));
        output.push('\n');
        for (store, total) in store_totals {
            let main = main_categories
                .get(store)
                .map(String::as_str)
                .unwrap_or("unknown");
            output.push_str(&format!(
                "  {:<25} {:>12}  ({})\n",
                store,
                format!("{}{}", currency_symbol, amount::format(*total)),
                main
            ));
        }
    }

    if let Some(user_totals) = &stats.user_totals {
        output.push_str("\nSpending by User\n");
        output.push_str(&"-".repeat(50));
        output.push('\n');
        for (user, total) in user_totals {
            output.push_str(&format!(
                "  {:<25} {:>12}\n",
                user,
                format!("{}{}", currency_symbol, amount::format(*total))
            ));
        }
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_employee_statistics() {
        let stats: StatisticsResponse = serde_json::from_str(
            r#"{
                "category_totals": {"Groceries": 52.5},
                "approvals": 1,
                "rejections": 1,
                "pending": 2
            }"#,
        )
        .unwrap();

        let output = format_statistics(&stats, "$");
        assert!(output.contains("Groceries"));
        assert!(output.contains("$52.50"));
        assert!(output.contains("Approved"));
        assert!(output.contains("(25.0%)"));
        assert!(!output.contains("by Store"));
    }

    #[test]
    fn test_elevated_statistics_include_breakdowns() {
        let stats: StatisticsResponse = serde_json::from_str(
            r#"{
                "category_totals": {"Gas": 18.0},
                "store_totals": {"Shell": 18.0},
                "store_main_categories": {"Shell": "Gas"},
                "user_totals": {"Jordan": 18.0},
                "approvals": 0,
                "rejections": 0,
                "pending": 1
            }"#,
        )
        .unwrap();

        let output = format_statistics(&stats, "$");
        assert!(output.contains("Total Spending by Store"));
        assert!(output.contains("Shell"));
        assert!(output.contains("(Gas)"));
        assert!(output.contains("Spending by User"));
        assert!(output.contains("Jordan"));
    }

    #[test]
    fn test_zero_counts_avoid_divide_by_zero() {
        let stats: StatisticsResponse = serde_json::from_str(r#"{"category_totals": {}}"#).unwrap();
        let output = format_statistics(&stats, "$");
        assert!(output.contains("(0.0%)"));
        assert!(output.contains("No spending recorded."));
    }
}

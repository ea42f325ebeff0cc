//! Receipt display formatting

use chrono::NaiveDateTime;
use tabled::{Table, Tabled};

use crate::api::types::{ReceiptDetailsResponse, ReceiptSummary};

#[derive(Tabled)]
struct ReceiptRow {
    #[tabled(rename = "ID")]
    id: i64,
    #[tabled(rename = "Uploaded")]
    uploaded: String,
    #[tabled(rename = "Store")]
    store: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Status")]
    status: String,
}

/// Format the receipt list as a table
pub fn format_receipts(receipts: &[ReceiptSummary], currency_symbol: &str) -> String {
    if receipts.is_empty() {
        return "No receipts found.".to_string();
    }

    let rows: Vec<ReceiptRow> = receipts
        .iter()
        .map(|r| ReceiptRow {
            id: r.id,
            uploaded: format_upload_date(&r.upload_date),
            store: r.store_name.clone(),
            category: r.category.clone(),
            amount: format!("{}{}", currency_symbol, r.amount),
            status: r.status.to_string(),
        })
        .collect();

    Table::new(rows).to_string()
}

/// Format one receipt's expanded details
pub fn format_receipt_details(
    receipt_id: i64,
    details: &ReceiptDetailsResponse,
    currency_symbol: &str,
) -> String {
    let mut output = String::new();

    output.push_str(&format!("Receipt #{}\n", receipt_id));
    output.push_str(&format!(
        "Submitted by: {}\n",
        details.user_name.as_deref().unwrap_or("Unknown User")
    ));

    if details.items.is_empty() {
        output.push_str("No line items recorded.\n");
    } else {
        output.push_str("Items:\n");
        for item in &details.items {
            output.push_str(&format!(
                "  {}: {}{}\n",
                item.item_name, currency_symbol, item.amount
            ));
        }
    }

    output
}

/// Render the backend's ISO upload timestamp as a date
///
/// `%.f` tolerates the microseconds the backend sometimes includes.
fn format_upload_date(raw: &str) -> String {
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .map(|dt| dt.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|_| raw.to_string())
}

//! CSV output for the history export
//!
//! Writes the same role-selected table the PDF carries, without the chart.

use std::path::Path;

use crate::error::{EerisError, EerisResult};

use super::pipeline::HistoryTable;

/// Write the history table as CSV
pub fn write_history_csv(table: &HistoryTable, output: &Path) -> EerisResult<()> {
    let mut writer = csv::Writer::from_path(output)
        .map_err(|e| EerisError::Export(format!("Failed to create {}: {}", output.display(), e)))?;

    writer
        .write_record(&table.columns)
        .map_err(|e| EerisError::Export(format!("Failed to write CSV header: {}", e)))?;

    for row in &table.rows {
        writer
            .write_record(row)
            .map_err(|e| EerisError::Export(format!("Failed to write CSV row: {}", e)))?;
    }

    writer
        .flush()
        .map_err(|e| EerisError::Export(format!("Failed to flush CSV: {}", e)))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{HistoryEntry, ReceiptStatus};
    use crate::session::Role;
    use tempfile::TempDir;

    #[test]
    fn test_csv_contains_headers_and_rows() {
        let temp = TempDir::new().unwrap();
        let output = temp.path().join("history.csv");

        let entries = vec![HistoryEntry {
            user_name: None,
            receipt_id: Some(1),
            store_name: Some("Corner Store, Inc.".to_string()),
            category: Some("Groceries".to_string()),
            amount: 12.3,
            status: ReceiptStatus::Approved,
            uploaded_at: "2025-04-01 10:00:00".to_string(),
        }];
        let table = HistoryTable::build(&entries, Role::Employee, "$");

        write_history_csv(&table, &output).unwrap();

        let content = std::fs::read_to_string(&output).unwrap();
        let mut lines = content.lines();
        assert_eq!(
            lines.next().unwrap(),
            "#,Store,Category,Amount,Status,Uploaded"
        );
        // Commas in cell values stay quoted
        assert!(lines.next().unwrap().contains("\"Corner Store, Inc.\""));
    }
}

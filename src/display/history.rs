//! Expense history display

use tabled::builder::Builder;

use crate::export::HistoryTable;

/// Format a role-selected history table for the terminal
///
/// Reuses the export pipeline's column selection so the screen and the
/// exported document always agree.
pub fn format_history(table: &HistoryTable) -> String {
    let mut builder = Builder::default();
    builder.push_record(table.columns.iter().copied());
    for row in &table.rows {
        builder.push_record(row.iter().cloned());
    }

    builder.build().to_string()
}

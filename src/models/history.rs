//! Expense history records
//!
//! History entries are sourced from the backend's expense-history endpoints
//! and are read-only on the client. Elevated roles receive entries for all
//! users (with `user_name` populated); employees receive only their own.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Review status of a submitted receipt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReceiptStatus {
    Pending,
    Approved,
    Rejected,
}

impl fmt::Display for ReceiptStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Pending => "Pending",
            Self::Approved => "Approved",
            Self::Rejected => "Rejected",
        };
        write!(f, "{}", s)
    }
}

/// One record of the expense history
///
/// `user_name` is only present in elevated-role payloads; the remaining
/// optional fields reflect columns the backend may leave unset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Submitting user; present only for supervisor/admin views
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_name: Option<String>,

    /// Backend receipt id
    #[serde(default)]
    pub receipt_id: Option<i64>,

    /// Store the expense was made at
    #[serde(default)]
    pub store_name: Option<String>,

    /// Expense category as stored by the backend
    #[serde(default)]
    pub category: Option<String>,

    /// Total amount of the receipt
    #[serde(default)]
    pub amount: f64,

    /// Review status
    pub status: ReceiptStatus,

    /// Upload timestamp, preformatted by the backend
    pub uploaded_at: String,
}

impl HistoryEntry {
    /// Store name with the backend's fallback for absent values
    pub fn store(&self) -> &str {
        self.store_name.as_deref().unwrap_or("Unknown Store")
    }

    /// Category with a fallback for absent values
    pub fn category_name(&self) -> &str {
        self.category.as_deref().unwrap_or("Unknown")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_elevated_entry() {
        let json = r#"{
            "user_name": "Jordan",
            "receipt_id": 12,
            "store_name": "Aldi",
            "category": "Groceries",
            "amount": 42.5,
            "status": "Approved",
            "uploaded_at": "2025-04-01 10:30:00"
        }"#;

        let entry: HistoryEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.user_name.as_deref(), Some("Jordan"));
        assert_eq!(entry.status, ReceiptStatus::Approved);
        assert_eq!(entry.store(), "Aldi");
    }

    #[test]
    fn test_deserialize_employee_entry_without_user() {
        let json = r#"{
            "store_name": null,
            "category": "Gas",
            "amount": 18.0,
            "status": "Pending",
            "uploaded_at": "2025-04-02 08:00:00"
        }"#;

        let entry: HistoryEntry = serde_json::from_str(json).unwrap();
        assert!(entry.user_name.is_none());
        assert_eq!(entry.store(), "Unknown Store");
        assert_eq!(entry.category_name(), "Gas");
    }

    #[test]
    fn test_status_display() {
        assert_eq!(ReceiptStatus::Pending.to_string(), "Pending");
        assert_eq!(ReceiptStatus::Rejected.to_string(), "Rejected");
    }
}

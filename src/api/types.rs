//! Request/response types for the EERIS backend
//!
//! Fields the backend may omit are explicit `Option`s (or defaulted
//! collections) so absent data is handled where the value is used instead
//! of by ad-hoc defaulting scattered across call sites. Totals maps are
//! `BTreeMap`s to keep display and chart ordering deterministic.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::models::{amount, HistoryEntry, ReceiptStatus};

// ============================================
// Requests
// ============================================

/// Login request
#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Registration request
#[derive(Debug, Clone, Serialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role_id: i64,
}

/// Password change request
#[derive(Debug, Clone, Serialize)]
pub struct ChangePasswordRequest {
    pub current_password: String,
    pub new_password: String,
}

/// Role update request (admin panel)
#[derive(Debug, Clone, Serialize)]
pub struct UpdateRoleRequest {
    pub role: String,
}

/// Receipt review request
#[derive(Debug, Clone, Serialize)]
pub struct UpdateStatusRequest {
    pub status: ReceiptStatus,
}

// ============================================
// Responses
// ============================================

/// Generic `{message}` / `{error}` envelope
#[derive(Debug, Clone, Deserialize)]
pub struct MessageResponse {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

/// Login response
#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub role: String,
}

/// One user record from the admin panel listing
#[derive(Debug, Clone, Deserialize)]
pub struct UserRecord {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub role: String,
}

/// `GET /all-users` response
#[derive(Debug, Clone, Deserialize)]
pub struct UsersResponse {
    #[serde(default)]
    pub users: Vec<UserRecord>,
}

/// One receipt tile from `GET /fetch-receipts`
#[derive(Debug, Clone, Deserialize)]
pub struct ReceiptSummary {
    pub id: i64,
    #[serde(default)]
    pub user: Option<i64>,
    #[serde(rename = "uploadDate")]
    pub upload_date: String,
    pub amount: String,
    pub category: String,
    #[serde(rename = "storeName")]
    pub store_name: String,
    pub status: ReceiptStatus,
}

/// `GET /fetch-receipts` response
#[derive(Debug, Clone, Deserialize)]
pub struct ReceiptsResponse {
    #[serde(default)]
    pub receipts: Vec<ReceiptSummary>,
    pub role: String,
    #[serde(default)]
    pub user_totals: Option<BTreeMap<String, f64>>,
}

/// `GET /statistics` response
///
/// The store and user breakdowns only appear for elevated roles.
#[derive(Debug, Clone, Deserialize)]
pub struct StatisticsResponse {
    #[serde(default)]
    pub category_totals: BTreeMap<String, f64>,
    #[serde(default)]
    pub store_totals: Option<BTreeMap<String, f64>>,
    #[serde(default)]
    pub store_main_categories: Option<BTreeMap<String, String>>,
    #[serde(default)]
    pub user_totals: Option<BTreeMap<String, f64>>,
    #[serde(default)]
    pub approvals: u64,
    #[serde(default)]
    pub rejections: u64,
    #[serde(default)]
    pub pending: u64,
}

/// One line item from `GET /receipt-details/:id`
#[derive(Debug, Clone, Deserialize)]
pub struct ReceiptItemDetail {
    pub item_name: String,
    pub amount: String,
}

/// `GET /receipt-details/:id` response
#[derive(Debug, Clone, Deserialize)]
pub struct ReceiptDetailsResponse {
    #[serde(default)]
    pub items: Vec<ReceiptItemDetail>,
    #[serde(default)]
    pub user_name: Option<String>,
}

/// One extracted line item from `POST /upload-receipt`
///
/// Extraction amounts arrive as JSON numbers, but a string (or nothing at
/// all) is tolerated; `amount_value` resolves whatever arrived to a float.
#[derive(Debug, Clone, Deserialize)]
pub struct ExtractedItem {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub amount: serde_json::Value,
}

impl ExtractedItem {
    /// The amount as a float; absent or malformed values are zero
    pub fn amount_value(&self) -> f64 {
        match &self.amount {
            serde_json::Value::Number(n) => n.as_f64().unwrap_or(0.0),
            serde_json::Value::String(s) => amount::parse_or_zero(s),
            _ => 0.0,
        }
    }
}

/// `POST /upload-receipt` response (OCR extraction result)
#[derive(Debug, Clone, Deserialize)]
pub struct ExtractionResponse {
    #[serde(default)]
    pub store_name: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub total_amount: Option<f64>,
    #[serde(default)]
    pub items: Vec<ExtractedItem>,
}

/// Expense history response (both history endpoints)
#[derive(Debug, Clone, Deserialize)]
pub struct HistoryResponse {
    #[serde(default)]
    pub history: Vec<HistoryEntry>,
}

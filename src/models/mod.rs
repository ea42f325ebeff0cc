//! Core data models
//!
//! Client-side models for expense drafts, the fixed category catalog,
//! and externally-sourced history records.

pub mod amount;
pub mod catalog;
pub mod draft;
pub mod history;

pub use draft::{ExpenseDraft, LineItem};
pub use history::{HistoryEntry, ReceiptStatus};

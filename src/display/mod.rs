//! Terminal display formatting
//!
//! Formatting utilities for receipts, users, statistics, and history,
//! plus the notice/confirmation helpers used by every command handler.

pub mod history;
pub mod notify;
pub mod receipts;
pub mod stats;
pub mod users;

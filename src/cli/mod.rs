//! CLI command handlers
//!
//! This module contains the implementation of CLI commands, bridging the
//! clap argument parsing with the API client and display layers.

pub mod account;
pub mod admin;
pub mod auth;
pub mod expense;
pub mod history;
pub mod receipts;
pub mod stats;

pub use account::{handle_account_command, AccountCommands};
pub use admin::{handle_admin_command, AdminCommands};
pub use auth::{handle_login, handle_logout, handle_register};
pub use expense::{handle_expense_command, ExpenseCommands};
pub use history::{handle_history_command, HistoryCommands};
pub use receipts::{handle_receipts_command, ReceiptCommands};
pub use stats::handle_stats;

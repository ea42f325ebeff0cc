//! Terminal user interface
//!
//! A ratatui form for interactive expense entry: category and subcategory
//! selectors, store input, and a dynamic line-item list backed by the
//! ledger. The form owns no network access; it hands the finished draft
//! back to its caller.

pub mod event;
pub mod form;
pub mod terminal;
pub mod widgets;

pub use form::ExpenseFormApp;
pub use terminal::run_expense_form;

//! EERIS CLI - Terminal client for the EERIS expense reporting service
//!
//! This library provides the client-side functionality of the EERIS
//! expense-tracking system: expense entry (interactive form or flags),
//! receipt upload with OCR extraction review, receipt listing and
//! supervisor review, spending statistics, history export to PDF/CSV,
//! and account administration. All business logic, persistence, OCR, and
//! authorization enforcement live in the backend service reached over
//! HTTP; this crate is presentation and request orchestration.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `session`: Authentication token and role, persisted between runs
//! - `models`: Client-side data models (drafts, catalog, history records)
//! - `ledger`: The expense form's line-item ledger and submission gate
//! - `ingest`: Normalization of OCR extraction results into drafts
//! - `api`: Backend HTTP client and wire types
//! - `export`: History export pipeline (chart render + document assembly)
//! - `display`: Terminal formatting and user notices
//! - `cli`: Command handlers
//! - `tui`: Interactive expense entry form

pub mod api;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod ingest;
pub mod ledger;
pub mod models;
pub mod session;
pub mod tui;

pub use error::EerisError;

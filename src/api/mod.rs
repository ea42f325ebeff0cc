//! Backend HTTP API
//!
//! Everything the client knows about the EERIS backend: the wire types and
//! the reqwest-based client. All requests except login/registration carry
//! `Authorization: Bearer <token>` from the session context.

pub mod client;
pub mod types;

pub use client::ApiClient;

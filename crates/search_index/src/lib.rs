#![forbid(unsafe_code)]
//! Read-only client for Elasticsearch-compatible search services
//!
//! Covers the handful of documented REST calls the assistant needs: list
//! indices, fetch an index mapping, pull a few sample documents, and run an
//! arbitrary caller-supplied query body. Nothing here mutates the index.

pub mod client;
pub mod config;
pub mod error;
pub mod models;

pub use client::IndexClient;
pub use config::SearchIndexConfig;
pub use error::IndexError;
pub use models::{IndexInfo, IndexSchema};

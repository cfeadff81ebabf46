//! Regintel: a regulatory intelligence dashboard written in Rust
//!
//! Presents a curated set of regulatory-update records to an analyst and
//! lets them narrow, search, and order that set interactively. The core is
//! the pure query engine in [`engine`]; the web layer is a thin rendering
//! of its output.

pub mod config;
pub mod engine;
pub mod insights;
pub mod query;
pub mod records;
pub mod web;

pub use config::Settings;
pub use engine::QueryEngine;
pub use insights::InsightResponder;
pub use query::{CriteriaError, QueryCriteria, SortKey};
pub use records::{RecordStore, UpdateRecord};

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

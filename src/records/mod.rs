//! Regulatory update records
//!
//! Types and storage for the record collection the dashboard operates on.

mod store;
mod types;

pub use store::RecordStore;
pub use types::{RecordError, UpdateRecord};

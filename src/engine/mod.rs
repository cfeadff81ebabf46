//! Query engine
//!
//! The core of the dashboard: filters and orders the record collection
//! according to one [`QueryCriteria`]. Pure and deterministic — the same
//! records and criteria always produce the same sequence, nothing is
//! mutated, and an empty result is an ordinary outcome.

use crate::query::{QueryCriteria, SortKey};
use crate::records::UpdateRecord;
use std::sync::Arc;
use tracing::debug;

/// Apply one criteria set to a record collection.
///
/// Pipeline: text filter, region filter, agency filter, then exactly one
/// stable sort. The filters are independent and commute; only the sort
/// depends on input order, and only to break ties.
pub fn run_query(records: &[UpdateRecord], criteria: &QueryCriteria) -> Vec<UpdateRecord> {
    let needle = criteria.search_text.to_lowercase();

    let mut matched: Vec<UpdateRecord> = records
        .iter()
        .filter(|r| needle.is_empty() || r.title.to_lowercase().contains(&needle))
        .filter(|r| criteria.regions.is_empty() || criteria.regions.contains(&r.region))
        .filter(|r| criteria.agencies.is_empty() || criteria.agencies.contains(&r.agency))
        .cloned()
        .collect();

    // sort_by / sort_by_key are stable: tied records keep input order
    match criteria.sort_key {
        SortKey::Newest => matched.sort_by(|a, b| b.date.cmp(&a.date)),
        SortKey::Oldest => matched.sort_by_key(|r| r.date),
        SortKey::HighestImpact => matched.sort_by(|a, b| b.impact_score.cmp(&a.impact_score)),
        SortKey::LowestImpact => matched.sort_by_key(|r| r.impact_score),
    }

    matched
}

/// Query engine holding the canonical record collection.
///
/// The collection is shared immutably; concurrent sessions may hold clones
/// of the engine without locking.
#[derive(Debug, Clone)]
pub struct QueryEngine {
    records: Arc<Vec<UpdateRecord>>,
}

impl QueryEngine {
    /// Create an engine over a record collection
    pub fn new(records: Vec<UpdateRecord>) -> Self {
        Self {
            records: Arc::new(records),
        }
    }

    /// Run one query and return the ordered sequence to display
    pub fn query(&self, criteria: &QueryCriteria) -> Vec<UpdateRecord> {
        let results = run_query(&self.records, criteria);
        debug!(
            matched = results.len(),
            total = self.records.len(),
            sort = %criteria.sort_key,
            "query executed"
        );
        results
    }

    /// The full collection, in load order
    pub fn records(&self) -> &[UpdateRecord] {
        &self.records
    }
}

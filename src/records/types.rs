//! Record type definitions

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single regulatory update entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateRecord {
    /// Issuing agency (FDA, EMA, MHRA, CDSCO, ...)
    pub agency: String,
    /// Update title
    pub title: String,
    /// Region the update applies to (US, EU, UK, India, ...)
    pub region: String,
    /// Impact score in [0, 100]
    pub impact_score: u8,
    /// Publication date (no time component)
    pub date: NaiveDate,
    /// Short summary text
    pub summary: String,
}

impl UpdateRecord {
    /// Create a new record
    pub fn new(
        agency: impl Into<String>,
        title: impl Into<String>,
        region: impl Into<String>,
        impact_score: u8,
        date: NaiveDate,
    ) -> Self {
        Self {
            agency: agency.into(),
            title: title.into(),
            region: region.into(),
            impact_score,
            date,
            summary: String::new(),
        }
    }

    /// Add summary text to the record
    pub fn with_summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = summary.into();
        self
    }

    /// Check the record against the data contract
    pub fn validate(&self) -> Result<(), RecordError> {
        if self.impact_score > 100 {
            return Err(RecordError::ScoreOutOfRange {
                title: self.title.clone(),
                score: self.impact_score,
            });
        }
        Ok(())
    }
}

/// Errors raised while loading a record collection
#[derive(Debug, thiserror::Error)]
pub enum RecordError {
    #[error("failed to read records file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse records file: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("record {title:?} has impact score {score}, expected 0-100")]
    ScoreOutOfRange { title: String, score: u8 },
}

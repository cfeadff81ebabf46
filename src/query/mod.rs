//! Query criteria
//!
//! User-selected filter, search, and sort parameters for one query.
//! Criteria are built fresh per interaction and validated at construction;
//! the engine never sees a malformed sort key.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Sort order applied after filtering
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    /// Most recent date first
    #[default]
    Newest,
    /// Earliest date first
    Oldest,
    /// Highest impact score first
    HighestImpact,
    /// Lowest impact score first
    LowestImpact,
}

impl SortKey {
    /// Parse a sort key from its UI label
    ///
    /// Accepts the dropdown labels ("Newest", "Highest Impact", ...) and
    /// their snake_case forms, case-insensitively. Anything else is a
    /// contract violation by the caller and is rejected here rather than
    /// inside the query pipeline.
    pub fn parse(label: &str) -> Result<Self, CriteriaError> {
        match label.trim().to_lowercase().as_str() {
            "newest" => Ok(Self::Newest),
            "oldest" => Ok(Self::Oldest),
            "highest impact" | "highest_impact" => Ok(Self::HighestImpact),
            "lowest impact" | "lowest_impact" => Ok(Self::LowestImpact),
            _ => Err(CriteriaError::InvalidSortKey(label.to_string())),
        }
    }

    /// Get the UI label for this sort key
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Newest => "Newest",
            Self::Oldest => "Oldest",
            Self::HighestImpact => "Highest Impact",
            Self::LowestImpact => "Lowest Impact",
        }
    }

    /// All sort keys, in dropdown order
    pub fn all() -> [Self; 4] {
        [Self::Newest, Self::Oldest, Self::HighestImpact, Self::LowestImpact]
    }
}

impl std::fmt::Display for SortKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Complete criteria for one query
///
/// An empty `search_text` means no text filter. Empty `regions` or
/// `agencies` mean "no filter", not "match nothing" — the multi-select
/// widgets report an empty selection when the user has not narrowed
/// anything. Filtering everything out is still expressible by selecting
/// values absent from the data.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct QueryCriteria {
    /// Case-insensitive title substring to match
    pub search_text: String,
    /// Regions to retain; empty retains all
    pub regions: HashSet<String>,
    /// Agencies to retain; empty retains all
    pub agencies: HashSet<String>,
    /// Sort order for the result sequence
    pub sort_key: SortKey,
}

impl QueryCriteria {
    /// Create criteria with no filters and the default sort
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the search text (trimmed)
    pub fn with_search(mut self, text: impl Into<String>) -> Self {
        self.search_text = text.into().trim().to_string();
        self
    }

    /// Set the region filter
    pub fn with_regions<I, S>(mut self, regions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.regions = regions.into_iter().map(Into::into).collect();
        self
    }

    /// Set the agency filter
    pub fn with_agencies<I, S>(mut self, agencies: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.agencies = agencies.into_iter().map(Into::into).collect();
        self
    }

    /// Set the sort order
    pub fn with_sort(mut self, sort_key: SortKey) -> Self {
        self.sort_key = sort_key;
        self
    }

    /// Check whether any narrowing is active
    pub fn is_unfiltered(&self) -> bool {
        self.search_text.is_empty() && self.regions.is_empty() && self.agencies.is_empty()
    }
}

/// Criteria construction errors
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum CriteriaError {
    #[error("unrecognized sort key: {0:?}")]
    InvalidSortKey(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_key_labels() {
        assert_eq!(SortKey::parse("Newest").unwrap(), SortKey::Newest);
        assert_eq!(SortKey::parse("oldest").unwrap(), SortKey::Oldest);
        assert_eq!(SortKey::parse("Highest Impact").unwrap(), SortKey::HighestImpact);
        assert_eq!(SortKey::parse("lowest_impact").unwrap(), SortKey::LowestImpact);
    }

    #[test]
    fn test_sort_key_rejects_unknown_label() {
        let err = SortKey::parse("Trending").unwrap_err();
        assert_eq!(err, CriteriaError::InvalidSortKey("Trending".to_string()));
    }

    #[test]
    fn test_label_round_trip() {
        for key in SortKey::all() {
            assert_eq!(SortKey::parse(key.as_str()).unwrap(), key);
        }
    }

    #[test]
    fn test_criteria_builder() {
        let criteria = QueryCriteria::new()
            .with_search("  oncology ")
            .with_regions(["US", "EU"])
            .with_sort(SortKey::HighestImpact);

        assert_eq!(criteria.search_text, "oncology");
        assert!(criteria.regions.contains("US"));
        assert!(criteria.agencies.is_empty());
        assert_eq!(criteria.sort_key, SortKey::HighestImpact);
        assert!(!criteria.is_unfiltered());
    }

    #[test]
    fn test_default_criteria_is_unfiltered() {
        assert!(QueryCriteria::new().is_unfiltered());
    }
}

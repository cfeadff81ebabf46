//! Record store: seed data, file loading, filter vocabularies

use super::types::{RecordError, UpdateRecord};
use chrono::NaiveDate;
use std::collections::BTreeSet;
use std::path::Path;

/// The record collection held for the lifetime of a session.
///
/// Loaded once at startup and never mutated afterwards; queries only
/// ever read from it.
#[derive(Debug, Clone, Default)]
pub struct RecordStore {
    records: Vec<UpdateRecord>,
}

impl RecordStore {
    /// Create a store from an already-validated collection
    pub fn new(records: Vec<UpdateRecord>) -> Self {
        Self { records }
    }

    /// The built-in seed collection used when no records file is configured
    pub fn seed() -> Self {
        let date = |y, m, d| NaiveDate::from_ymd_opt(y, m, d).expect("valid seed date");
        Self::new(vec![
            UpdateRecord::new("FDA", "New Guidance on Oncology Drug Safety", "US", 92, date(2025, 11, 21))
                .with_summary("This update impacts oncology drug post-market surveillance..."),
            UpdateRecord::new("EMA", "Manufacturing GMP Update", "EU", 75, date(2025, 11, 22))
                .with_summary("GMP clause update related to sterility and batch validation..."),
            UpdateRecord::new("MHRA", "Medical Device Alert Notice", "UK", 63, date(2025, 11, 19))
                .with_summary("Medical device reporting rules updated for recall notifications..."),
            UpdateRecord::new("CDSCO", "Clinical Trial Registry Revision", "India", 45, date(2025, 11, 20))
                .with_summary("Rules updated for site registration, sponsor transparency..."),
        ])
    }

    /// Load a record collection from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, RecordError> {
        let content = std::fs::read_to_string(path)?;
        let records: Vec<UpdateRecord> = serde_yaml::from_str(&content)?;
        for record in &records {
            record.validate()?;
        }
        Ok(Self::new(records))
    }

    /// All records, in load order
    pub fn records(&self) -> &[UpdateRecord] {
        &self.records
    }

    /// Number of records in the store
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check whether the store holds no records
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Distinct agencies present, sorted; the agency filter vocabulary
    pub fn agencies(&self) -> Vec<String> {
        self.distinct(|r| &r.agency)
    }

    /// Distinct regions present, sorted; the region filter vocabulary
    pub fn regions(&self) -> Vec<String> {
        self.distinct(|r| &r.region)
    }

    fn distinct<F>(&self, field: F) -> Vec<String>
    where
        F: Fn(&UpdateRecord) -> &String,
    {
        self.records
            .iter()
            .map(|r| field(r).clone())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_collection() {
        let store = RecordStore::seed();
        assert_eq!(store.len(), 4);
        assert_eq!(store.agencies(), vec!["CDSCO", "EMA", "FDA", "MHRA"]);
        assert_eq!(store.regions(), vec!["EU", "India", "UK", "US"]);
    }

    #[test]
    fn test_from_yaml() {
        let yaml = r#"
- agency: FDA
  title: Recall notice
  region: US
  impact_score: 80
  date: 2025-10-01
  summary: Device recall expanded.
"#;
        let dir = std::env::temp_dir().join("regintel-store-test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("records.yml");
        std::fs::write(&path, yaml).unwrap();

        let store = RecordStore::from_file(&path).unwrap();
        assert_eq!(store.len(), 1);
        assert_eq!(store.records()[0].agency, "FDA");
        assert_eq!(
            store.records()[0].date,
            NaiveDate::from_ymd_opt(2025, 10, 1).unwrap()
        );
    }

    #[test]
    fn test_from_yaml_rejects_bad_date() {
        let yaml = r#"
- agency: FDA
  title: Unparseable date
  region: US
  impact_score: 50
  date: not-a-date
  summary: ""
"#;
        let dir = std::env::temp_dir().join("regintel-store-test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("bad-date.yml");
        std::fs::write(&path, yaml).unwrap();

        assert!(matches!(
            RecordStore::from_file(&path),
            Err(RecordError::Parse(_))
        ));
    }

    #[test]
    fn test_from_yaml_rejects_bad_score() {
        let yaml = r#"
- agency: FDA
  title: Bad
  region: US
  impact_score: 250
  date: 2025-10-01
  summary: ""
"#;
        let dir = std::env::temp_dir().join("regintel-store-test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("bad.yml");
        std::fs::write(&path, yaml).unwrap();

        assert!(RecordStore::from_file(&path).is_err());
    }
}

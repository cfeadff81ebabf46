//! Application state shared across handlers

use crate::config::Settings;
use crate::engine::QueryEngine;
use crate::insights::InsightResponder;
use crate::records::RecordStore;
use std::sync::Arc;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Global settings
    pub settings: Arc<Settings>,
    /// Record store (filter vocabularies)
    pub store: Arc<RecordStore>,
    /// Query engine over the loaded collection
    pub engine: Arc<QueryEngine>,
    /// Sidebar insight responder
    pub insights: Arc<InsightResponder>,
    /// Template renderer
    pub templates: Arc<super::Templates>,
}

impl AppState {
    /// Create new application state
    pub fn new(settings: Settings, store: RecordStore) -> anyhow::Result<Self> {
        let engine = Arc::new(QueryEngine::new(store.records().to_vec()));
        let templates = Arc::new(super::Templates::new()?);

        Ok(Self {
            settings: Arc::new(settings),
            store: Arc::new(store),
            engine,
            insights: Arc::new(InsightResponder::new()),
            templates,
        })
    }

    /// Get instance name
    pub fn instance_name(&self) -> &str {
        &self.settings.general.instance_name
    }
}

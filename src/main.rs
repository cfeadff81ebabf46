//! Regintel: a regulatory intelligence dashboard written in Rust
//!
//! This is the main entry point for the application.

use anyhow::Result;
use regintel::{
    config::Settings,
    records::RecordStore,
    web::{create_router, AppState},
};
use std::net::SocketAddr;
use std::path::PathBuf;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_target(false)
        .init();

    info!("Starting Regintel v{}", regintel::VERSION);

    // Load configuration
    let settings = load_settings()?;
    info!("Loaded configuration for instance: {}", settings.general.instance_name);

    // Load the record collection, once per session
    let store = load_records(&settings)?;
    info!("Loaded {} regulatory update records", store.len());

    // Create application state
    let state = AppState::new(settings.clone(), store)?;
    info!("Application state initialized");

    // Create router
    let app = create_router(state);

    // Bind address
    let addr = SocketAddr::new(
        settings.server.bind_address.parse()?,
        settings.server.port,
    );

    info!("Starting server on http://{}", addr);

    // Start server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Load settings from file or use defaults
fn load_settings() -> Result<Settings> {
    // Check for settings file in various locations
    let paths = [
        PathBuf::from("settings.yml"),
        PathBuf::from("config/settings.yml"),
        PathBuf::from("/etc/regintel/settings.yml"),
        dirs::config_dir()
            .map(|p| p.join("regintel/settings.yml"))
            .unwrap_or_default(),
    ];

    // Check environment variable first
    if let Ok(path) = std::env::var("REGINTEL_SETTINGS_PATH") {
        let path = PathBuf::from(path);
        if path.exists() {
            info!("Loading settings from: {}", path.display());
            let mut settings = Settings::from_file(&path)?;
            settings.merge_env();
            return Ok(settings);
        }
    }

    // Try each default path
    for path in paths.iter() {
        if path.exists() {
            info!("Loading settings from: {}", path.display());
            let mut settings = Settings::from_file(path)?;
            settings.merge_env();
            return Ok(settings);
        }
    }

    // Use defaults
    info!("No settings file found, using defaults");
    let mut settings = Settings::default();
    settings.merge_env();
    Ok(settings)
}

/// Load the record collection from the configured file, or fall back to
/// the built-in seed data
fn load_records(settings: &Settings) -> Result<RecordStore> {
    match &settings.data.records_path {
        Some(path) => {
            info!("Loading records from: {}", path.display());
            Ok(RecordStore::from_file(path)?)
        }
        None => {
            info!("No records file configured, using seed data");
            Ok(RecordStore::seed())
        }
    }
}

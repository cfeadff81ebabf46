//! Settings structures for the dashboard configuration

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main settings structure matching settings.yml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub general: GeneralSettings,
    pub server: ServerSettings,
    pub data: DataSettings,
}

impl Settings {
    /// Load settings from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let settings: Settings = serde_yaml::from_str(&content)?;
        Ok(settings)
    }

    /// Merge with environment variables (REGINTEL_* prefix)
    pub fn merge_env(&mut self) {
        if let Ok(val) = std::env::var("REGINTEL_DEBUG") {
            self.general.debug = val.parse().unwrap_or(false);
        }
        if let Ok(val) = std::env::var("REGINTEL_PORT") {
            if let Ok(port) = val.parse() {
                self.server.port = port;
            }
        }
        if let Ok(val) = std::env::var("REGINTEL_BIND_ADDRESS") {
            self.server.bind_address = val;
        }
        if let Ok(val) = std::env::var("REGINTEL_RECORDS_PATH") {
            self.data.records_path = Some(PathBuf::from(val));
        }
    }
}

/// General settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralSettings {
    /// Enable debug mode
    pub debug: bool,
    /// Instance name displayed in UI
    pub instance_name: String,
}

impl Default for GeneralSettings {
    fn default() -> Self {
        Self {
            debug: false,
            instance_name: "Regulatory Intelligence Command Center".to_string(),
        }
    }
}

/// HTTP server settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    /// Address to bind to
    pub bind_address: String,
    /// Port to listen on
    pub port: u16,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            bind_address: "127.0.0.1".to_string(),
            port: 8080,
        }
    }
}

/// Record collection settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DataSettings {
    /// Optional YAML file to load records from; the built-in seed
    /// collection is used when unset
    pub records_path: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.server.port, 8080);
        assert_eq!(settings.server.bind_address, "127.0.0.1");
        assert!(settings.data.records_path.is_none());
        assert!(!settings.general.debug);
    }

    #[test]
    fn test_partial_yaml_uses_defaults() {
        let settings: Settings = serde_yaml::from_str("server:\n  port: 9090\n").unwrap();
        assert_eq!(settings.server.port, 9090);
        assert_eq!(settings.server.bind_address, "127.0.0.1");
    }

    #[test]
    fn test_records_path_parses() {
        let settings: Settings =
            serde_yaml::from_str("data:\n  records_path: /var/lib/regintel/records.yml\n").unwrap();
        assert_eq!(
            settings.data.records_path,
            Some(PathBuf::from("/var/lib/regintel/records.yml"))
        );
    }
}

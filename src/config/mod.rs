//! Configuration module
//!
//! Handles loading and validating settings from YAML files and environment
//! variables. Settings are threaded explicitly through the application;
//! there is no ambient global instance.

mod settings;

pub use settings::*;

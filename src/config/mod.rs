//! Configuration module for cube-utils.
//!
//! Handles the settings file read by the command-line tool.

mod settings;

pub use settings::{ExtractSettings, OutputFormat, OutputSettings, Settings, SettingsError};

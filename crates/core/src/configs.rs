//! Configuration parsing
//!
//! This module handles parsing of the workspace settings file that declares
//! the project tree, the marker plugins each project applies, and the
//! extensions each project requests.

pub mod settings;

pub use settings::{parse_settings_config, ProjectSettings, SettingsConfig};

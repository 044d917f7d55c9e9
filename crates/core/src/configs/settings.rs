use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::types::KraneResult;

/// The workspace settings file, `krane.yml`.
///
/// Declares the project tree and what gets applied to each project during
/// the configuration pass.
#[derive(Deserialize, Serialize, JsonSchema, Clone)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SettingsConfig {
    pub name: Option<String>,
    pub description: Option<String>,
    /// Projects included in the workspace, in configuration order.
    pub projects: Vec<ProjectSettings>,
}

#[derive(Deserialize, Serialize, JsonSchema, Clone)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ProjectSettings {
    /// Absolute project path, e.g. `:api` or `:sample:app`.
    pub path: String,
    /// Marker plugin ids applied to this project, in application order.
    pub plugins: Option<Vec<String>>,
    /// Keys of the extensions this project requests. Extensions are applied
    /// before the project's plugins, so their plugin actions see every
    /// application.
    pub extensions: Option<Vec<String>>,
}

pub fn parse_settings_config(yaml_str: &str) -> KraneResult<SettingsConfig> {
    let config: SettingsConfig = serde_yaml::from_str(yaml_str)?;
    Ok(config)
}

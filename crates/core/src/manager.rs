//! High-level build manager interface
//!
//! This module provides the [`BuildManager`] which serves as the primary
//! interface for driving a build configuration. It encapsulates settings
//! loading, the configuration pass, and dependency graph construction.
//!
//! The BuildManager abstracts away:
//! - Loading and validating the `krane.yml` settings file
//! - Building the project tree from the declared projects
//! - Applying the requested extensions and marker plugins in order
//! - Building the dependency graph from the recorded declarations
//!
//! ## Example
//!
//! ```rust,no_run
//! use krane_core::manager::{BuildManager, BuildManagerConfig};
//! use std::path::PathBuf;
//!
//! # fn example() -> krane_core::types::KraneResult<()> {
//! let manager = BuildManager::new(
//!     BuildManagerConfig {
//!         workspace_root: PathBuf::from("."),
//!     },
//!     Vec::new(),
//! )?;
//!
//! let projects = manager.list_projects();
//! let graph = manager.dependency_graph();
//! # Ok(())
//! # }
//! ```

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use krane_extension_protocol::{BuildExtension, PluginId, ProjectPath};

use crate::configs::settings::{parse_settings_config, SettingsConfig};
use crate::dependencies::{build_dependency_graph, DependencyDeclaration, DependencyGraph};
use crate::logger::{BuildLogger, ConsoleLogger};
use crate::project::ProjectTree;
use crate::results::{ProjectInfo, ProjectListResult};
use crate::session::ConfigurationSession;
use crate::types::{KraneError, KraneResult};

/// Name of the settings file at the workspace root.
pub const SETTINGS_FILE: &str = "krane.yml";

/// High-level build manager that encapsulates the configuration pass
pub struct BuildManager {
    session: ConfigurationSession,
    settings: SettingsConfig,
    graph: DependencyGraph,
}

/// Configuration for initializing a build manager
pub struct BuildManagerConfig {
    pub workspace_root: PathBuf,
}

impl BuildManager {
    /// Initialize a build manager from the given workspace root, running the
    /// configuration pass with the provided extensions.
    ///
    /// # Errors
    ///
    /// Returns an error if the settings file cannot be loaded, a requested
    /// extension key is unknown, or the pass itself fails. A pass failure is
    /// fatal: no partially configured manager is produced.
    pub fn new(
        config: BuildManagerConfig,
        extensions: Vec<Box<dyn BuildExtension>>,
    ) -> KraneResult<Self> {
        Self::with_logger(config, extensions, Box::new(ConsoleLogger))
    }

    /// Like [`BuildManager::new`], but with an explicit logging sink.
    pub fn with_logger(
        config: BuildManagerConfig,
        extensions: Vec<Box<dyn BuildExtension>>,
        logger: Box<dyn BuildLogger>,
    ) -> KraneResult<Self> {
        let settings = Self::load_settings(&config.workspace_root)?;
        let session = Self::run_configuration_pass(&settings, &extensions, logger)?;
        let graph = build_dependency_graph(session.tree(), session.dependencies())?;

        Ok(Self {
            session,
            settings,
            graph,
        })
    }

    /// List all projects in the workspace with their applied plugins and
    /// requested extensions.
    #[must_use]
    pub fn list_projects(&self) -> ProjectListResult {
        let projects = self
            .session
            .tree()
            .nodes()
            .filter(|node| !node.path.is_root())
            .map(|node| {
                let extensions = self
                    .settings
                    .projects
                    .iter()
                    .find(|p| p.path == node.path.as_str())
                    .and_then(|p| p.extensions.clone())
                    .unwrap_or_default();
                ProjectInfo {
                    path: node.path.clone(),
                    plugins: node
                        .applied_plugins()
                        .iter()
                        .map(|id| id.as_str().to_string())
                        .collect(),
                    extensions,
                }
            })
            .collect();

        ProjectListResult {
            projects,
            project_colors: self.project_colors(),
        }
    }

    /// The dependency graph built from the pass's declarations.
    #[must_use]
    pub fn dependency_graph(&self) -> &DependencyGraph {
        &self.graph
    }

    /// The raw dependency declarations in recording order.
    #[must_use]
    pub fn declarations(&self) -> &[DependencyDeclaration] {
        self.session.dependencies().declarations()
    }

    /// The parsed settings file.
    #[must_use]
    pub fn settings(&self) -> &SettingsConfig {
        &self.settings
    }

    // Private helper methods

    fn load_settings(workspace_root: &Path) -> KraneResult<SettingsConfig> {
        let settings_path = workspace_root.join(SETTINGS_FILE);
        let content = std::fs::read_to_string(&settings_path).map_err(|e| {
            KraneError::Config(format!(
                "Failed to read settings file {}: {}",
                settings_path.display(),
                e
            ))
        })?;

        parse_settings_config(&content).map_err(|e| {
            KraneError::Config(format!(
                "Failed to parse settings file {}: {}",
                settings_path.display(),
                e
            ))
        })
    }

    fn run_configuration_pass(
        settings: &SettingsConfig,
        extensions: &[Box<dyn BuildExtension>],
        logger: Box<dyn BuildLogger>,
    ) -> KraneResult<ConfigurationSession> {
        let mut registry: HashMap<&str, &dyn BuildExtension> = HashMap::new();
        for extension in extensions {
            if registry.insert(extension.key(), extension.as_ref()).is_some() {
                return Err(KraneError::Config(format!(
                    "Extension key '{}' is registered twice",
                    extension.key()
                )));
            }
        }

        let mut tree = ProjectTree::new();
        let mut paths = Vec::with_capacity(settings.projects.len());
        for project in &settings.projects {
            let path = ProjectPath::new(project.path.clone()).map_err(KraneError::Path)?;
            tree.register(path.clone())?;
            paths.push(path);
        }

        let mut session = ConfigurationSession::new(tree, logger);
        for (project, path) in settings.projects.iter().zip(&paths) {
            // Extensions first, so their plugin actions see every application
            for key in project.extensions.iter().flatten() {
                let extension = registry.get(key.as_str()).ok_or_else(|| {
                    KraneError::Config(format!(
                        "Unknown extension '{}' requested by project '{}'",
                        key, path
                    ))
                })?;
                session.apply_extension(*extension, path)?;
            }
            for plugin in project.plugins.iter().flatten() {
                let id = PluginId::new(plugin.clone()).map_err(KraneError::Config)?;
                session.apply_plugin(path, &id)?;
            }
        }

        Ok(session)
    }

    /// Generate consistent color mapping for projects
    fn project_colors(&self) -> HashMap<String, colored::Color> {
        let mut colors = HashMap::new();
        let available_colors = [
            colored::Color::Red,
            colored::Color::Green,
            colored::Color::Yellow,
            colored::Color::Blue,
            colored::Color::Magenta,
            colored::Color::Cyan,
            colored::Color::White,
            colored::Color::BrightRed,
            colored::Color::BrightGreen,
            colored::Color::BrightYellow,
            colored::Color::BrightBlue,
            colored::Color::BrightMagenta,
            colored::Color::BrightCyan,
        ];

        let mut all_projects: Vec<String> = self
            .session
            .tree()
            .nodes()
            .filter(|node| !node.path.is_root())
            .map(|node| node.path.as_str().to_string())
            .collect();
        all_projects.sort();

        for (i, project) in all_projects.iter().enumerate() {
            let color = available_colors[i % available_colors.len()];
            colors.insert(project.clone(), color);
        }

        colors
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logger::MemoryLogger;

    fn write_settings(dir: &Path, contents: &str) {
        std::fs::write(dir.join(SETTINGS_FILE), contents).unwrap();
    }

    fn manager_in(
        dir: &Path,
        extensions: Vec<Box<dyn BuildExtension>>,
    ) -> KraneResult<BuildManager> {
        BuildManager::with_logger(
            BuildManagerConfig {
                workspace_root: dir.to_path_buf(),
            },
            extensions,
            Box::new(MemoryLogger::new()),
        )
    }

    #[test]
    fn loads_settings_and_applies_plugins() {
        let temp_dir = tempfile::tempdir().unwrap();
        write_settings(
            temp_dir.path(),
            r#"
name: sample
projects:
  - path: ":api"
  - path: ":app"
    plugins:
      - "com.android.application"
"#,
        );

        let manager = manager_in(temp_dir.path(), Vec::new()).unwrap();
        let result = manager.list_projects();

        assert_eq!(result.projects.len(), 2);
        let app = result
            .projects
            .iter()
            .find(|p| p.path.as_str() == ":app")
            .unwrap();
        assert_eq!(app.plugins, vec!["com.android.application".to_string()]);
        assert!(manager.declarations().is_empty());
    }

    #[test]
    fn missing_settings_file_is_a_config_error() {
        let temp_dir = tempfile::tempdir().unwrap();
        let err = manager_in(temp_dir.path(), Vec::new())
            .map(|_| ())
            .unwrap_err();
        assert!(err.to_string().contains("Failed to read settings file"));
    }

    #[test]
    fn unknown_extension_key_is_a_config_error() {
        let temp_dir = tempfile::tempdir().unwrap();
        write_settings(
            temp_dir.path(),
            r#"
projects:
  - path: ":app"
    extensions:
      - "does-not-exist"
"#,
        );

        let err = manager_in(temp_dir.path(), Vec::new())
            .map(|_| ())
            .unwrap_err();
        assert!(err.to_string().contains("Unknown extension 'does-not-exist'"));
    }

    #[test]
    fn nested_projects_appear_in_listing() {
        let temp_dir = tempfile::tempdir().unwrap();
        write_settings(
            temp_dir.path(),
            r#"
projects:
  - path: ":sample:app"
"#,
        );

        let manager = manager_in(temp_dir.path(), Vec::new()).unwrap();
        let result = manager.list_projects();
        let paths: Vec<&str> = result.projects.iter().map(|p| p.path.as_str()).collect();
        assert_eq!(paths, vec![":sample", ":sample:app"]);
        assert!(result.project_colors.contains_key(":sample:app"));
    }
}

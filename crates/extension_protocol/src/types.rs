//! Core types for the Krane extension protocol.
//!
//! This module contains the data types that cross the engine/extension
//! boundary:
//! - [`ProjectPath`] - Hierarchical, colon-separated project identifier
//! - [`PluginId`] - Opaque marker-plugin identifier
//! - [`Configuration`] - Dependency configuration names
//! - [`ExtensionError`] - Errors an extension can raise during configuration

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Hierarchical path identifying a project within the build tree.
///
/// Paths are colon-separated and always absolute: `:` is the root project,
/// `:api` a direct child of the root, `:sample:app` a nested project.
///
/// **Requirements**:
/// - Must start with `:`
/// - No whitespace characters
/// - No empty interior segments (`::api` is invalid; the bare root `:` is valid)
///
/// # Examples
///
/// ```rust
/// # use krane_extension_protocol::ProjectPath;
/// let api = ProjectPath::new(":api").unwrap();
/// assert_eq!(api.name(), "api");
/// assert!(!api.is_root());
///
/// let root = ProjectPath::root();
/// assert!(root.is_root());
///
/// // Invalid paths
/// assert!(ProjectPath::new("api").is_err());
/// assert!(ProjectPath::new(":sample: app").is_err());
/// assert!(ProjectPath::new("::api").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProjectPath(String);

impl ProjectPath {
    /// Create a new `ProjectPath` from a string.
    ///
    /// # Errors
    ///
    /// Returns an error if the path does not start with `:`, contains
    /// whitespace, or contains an empty interior segment.
    pub fn new(path: impl Into<String>) -> Result<Self, String> {
        let path = path.into();
        if !path.starts_with(':') {
            return Err(format!("Project path '{}' must start with ':'", path));
        }
        if path.chars().any(char::is_whitespace) {
            return Err(format!(
                "Project path '{}' contains whitespace characters",
                path
            ));
        }
        if path.len() > 1 && path[1..].split(':').any(str::is_empty) {
            return Err(format!("Project path '{}' contains empty segments", path));
        }
        Ok(Self(path))
    }

    /// The root project path, `:`.
    #[must_use]
    pub fn root() -> Self {
        Self(":".to_string())
    }

    /// Whether this path identifies the root project.
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.0 == ":"
    }

    /// The final segment of the path, or `:` for the root project.
    ///
    /// For `:sample:app` this is `app`.
    #[must_use]
    pub fn name(&self) -> &str {
        if self.is_root() {
            ":"
        } else {
            self.0.rsplit(':').next().unwrap_or(&self.0)
        }
    }

    /// The parent path, or `None` for the root project.
    ///
    /// For `:sample:app` this is `:sample`; for `:api` it is `:`.
    #[must_use]
    pub fn parent(&self) -> Option<Self> {
        if self.is_root() {
            return None;
        }
        match self.0.rfind(':') {
            Some(0) => Some(Self::root()),
            Some(idx) => Some(Self(self.0[..idx].to_string())),
            None => None,
        }
    }

    /// Get the path as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for ProjectPath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ProjectPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Opaque identifier for a marker plugin applied to a project.
///
/// Krane never parses or interprets plugin ids; they are fixed strings used
/// only to match plugin applications against registered [`PluginAction`]s.
/// Reverse-DNS ids such as `com.android.application` are conventional.
///
/// [`PluginAction`]: crate::traits::PluginAction
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PluginId(String);

impl PluginId {
    /// Create a new `PluginId` from a string.
    ///
    /// # Errors
    ///
    /// Returns an error if the string is empty or contains whitespace.
    pub fn new(id: impl Into<String>) -> Result<Self, String> {
        let id = id.into();
        if id.is_empty() {
            return Err("Plugin id must not be empty".to_string());
        }
        if id.chars().any(char::is_whitespace) {
            return Err(format!("Plugin id '{}' contains whitespace characters", id));
        }
        Ok(Self(id))
    }

    /// Get the id as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for PluginId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PluginId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The dependency configuration a declaration is registered under.
///
/// `Implementation` is visible at compile and run time for the declaring
/// project but is not re-exported to that project's own consumers. `Api` is
/// re-exported. `CompileOnly` and `RuntimeOnly` restrict visibility to one
/// phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Configuration {
    Implementation,
    Api,
    CompileOnly,
    RuntimeOnly,
}

impl Configuration {
    /// The conventional configuration name as it appears in build files.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Implementation => "implementation",
            Self::Api => "api",
            Self::CompileOnly => "compileOnly",
            Self::RuntimeOnly => "runtimeOnly",
        }
    }
}

impl std::fmt::Display for Configuration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Errors raised by extensions during the configuration pass.
///
/// These are fatal: the engine does not recover from an extension error, it
/// aborts the entire configuration pass and surfaces the message to the user.
#[derive(Debug, Error)]
pub enum ExtensionError {
    /// A project the extension requires does not exist in the build tree.
    #[error("missing dependency target: {0}")]
    MissingDependencyTarget(String),
}

/// Result type alias for extension operations.
pub type ExtensionResult<T> = Result<T, ExtensionError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn project_path_accepts_absolute_paths() {
        let path = ProjectPath::new(":sample:app").unwrap();
        assert_eq!(path.as_str(), ":sample:app");
        assert_eq!(path.name(), "app");
        assert_eq!(path.parent(), Some(ProjectPath::new(":sample").unwrap()));
    }

    #[test]
    fn project_path_root_has_no_parent() {
        let root = ProjectPath::root();
        assert!(root.is_root());
        assert_eq!(root.name(), ":");
        assert_eq!(root.parent(), None);
    }

    #[test]
    fn direct_child_parent_is_root() {
        let api = ProjectPath::new(":api").unwrap();
        assert_eq!(api.parent(), Some(ProjectPath::root()));
    }

    #[test]
    fn project_path_rejects_relative_and_malformed_paths() {
        assert!(ProjectPath::new("api").is_err());
        assert!(ProjectPath::new("").is_err());
        assert!(ProjectPath::new("::api").is_err());
        assert!(ProjectPath::new(":sample:").is_err());
        assert!(ProjectPath::new(": api").is_err());
    }

    #[test]
    fn plugin_id_rejects_whitespace_and_empty() {
        assert!(PluginId::new("com.android.application").is_ok());
        assert!(PluginId::new("").is_err());
        assert!(PluginId::new("android application").is_err());
    }

    #[test]
    fn configuration_names_match_convention() {
        assert_eq!(Configuration::Implementation.as_str(), "implementation");
        assert_eq!(Configuration::Api.as_str(), "api");
        assert_eq!(Configuration::CompileOnly.as_str(), "compileOnly");
        assert_eq!(Configuration::RuntimeOnly.as_str(), "runtimeOnly");
    }
}

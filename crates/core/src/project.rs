//! Project tree and per-project plugin state.
//!
//! The tree is the engine's model of the workspace: the root project plus
//! every project registered from the settings file. Registering `:sample:app`
//! implicitly registers `:sample`, so the tree is always connected.

use std::collections::HashSet;

use krane_extension_protocol::{PluginId, ProjectPath};

use crate::types::{KraneError, KraneResult};

/// A single project in the build tree.
#[derive(Debug)]
pub struct ProjectNode {
    pub path: ProjectPath,
    applied_plugins: HashSet<PluginId>,
}

impl ProjectNode {
    fn new(path: ProjectPath) -> Self {
        Self {
            path,
            applied_plugins: HashSet::new(),
        }
    }

    /// Whether the given marker plugin has been applied to this project.
    #[must_use]
    pub fn has_plugin(&self, id: &PluginId) -> bool {
        self.applied_plugins.contains(id)
    }

    /// The marker plugins applied to this project, sorted for stable output.
    #[must_use]
    pub fn applied_plugins(&self) -> Vec<&PluginId> {
        let mut plugins: Vec<&PluginId> = self.applied_plugins.iter().collect();
        plugins.sort_by(|a, b| a.as_str().cmp(b.as_str()));
        plugins
    }
}

/// The hierarchy of projects in the workspace.
#[derive(Debug)]
pub struct ProjectTree {
    nodes: Vec<ProjectNode>,
}

impl ProjectTree {
    /// Create a tree containing only the root project.
    #[must_use]
    pub fn new() -> Self {
        Self {
            nodes: vec![ProjectNode::new(ProjectPath::root())],
        }
    }

    /// The root project path.
    #[must_use]
    pub fn root(&self) -> &ProjectPath {
        &self.nodes[0].path
    }

    /// Register a project at the given path.
    ///
    /// Missing intermediate projects are created implicitly, so registering
    /// `:sample:app` also registers `:sample`.
    ///
    /// # Errors
    ///
    /// Returns an error if a project is already registered at the path.
    pub fn register(&mut self, path: ProjectPath) -> KraneResult<()> {
        if path.is_root() {
            return Err(KraneError::Project(
                "The root project is always present and cannot be registered".to_string(),
            ));
        }
        if self.contains(&path) {
            return Err(KraneError::Project(format!(
                "Project '{}' is already registered",
                path
            )));
        }
        if let Some(parent) = path.parent() {
            if !parent.is_root() && !self.contains(&parent) {
                self.register(parent)?;
            }
        }
        self.nodes.push(ProjectNode::new(path));
        Ok(())
    }

    /// Look up a project by exact path.
    #[must_use]
    pub fn find(&self, path: &ProjectPath) -> Option<&ProjectNode> {
        self.nodes.iter().find(|node| &node.path == path)
    }

    /// Whether a project is registered at the given path.
    #[must_use]
    pub fn contains(&self, path: &ProjectPath) -> bool {
        self.find(path).is_some()
    }

    /// All projects in registration order, root first.
    pub fn nodes(&self) -> impl Iterator<Item = &ProjectNode> {
        self.nodes.iter()
    }

    /// Mark a marker plugin as applied to a project.
    ///
    /// Returns `true` if the plugin was newly applied and `false` if it was
    /// already present; a plugin applies at most once per project.
    ///
    /// # Errors
    ///
    /// Returns an error if no project is registered at the path.
    pub fn mark_plugin_applied(&mut self, path: &ProjectPath, id: &PluginId) -> KraneResult<bool> {
        let node = self
            .nodes
            .iter_mut()
            .find(|node| &node.path == path)
            .ok_or_else(|| {
                KraneError::Project(format!(
                    "Cannot apply plugin '{}': project '{}' not found",
                    id, path
                ))
            })?;
        Ok(node.applied_plugins.insert(id.clone()))
    }
}

impl Default for ProjectTree {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn path(p: &str) -> ProjectPath {
        ProjectPath::new(p).unwrap()
    }

    fn id(p: &str) -> PluginId {
        PluginId::new(p).unwrap()
    }

    #[test]
    fn new_tree_contains_only_root() {
        let tree = ProjectTree::new();
        assert!(tree.root().is_root());
        assert_eq!(tree.nodes().count(), 1);
    }

    #[test]
    fn register_and_find_projects() {
        let mut tree = ProjectTree::new();
        tree.register(path(":api")).unwrap();
        tree.register(path(":app")).unwrap();

        assert!(tree.contains(&path(":api")));
        assert!(tree.contains(&path(":app")));
        assert!(tree.find(&path(":processor")).is_none());
    }

    #[test]
    fn nested_registration_creates_intermediate_projects() {
        let mut tree = ProjectTree::new();
        tree.register(path(":sample:app")).unwrap();

        assert!(tree.contains(&path(":sample")));
        assert!(tree.contains(&path(":sample:app")));
    }

    #[test]
    fn duplicate_registration_is_an_error() {
        let mut tree = ProjectTree::new();
        tree.register(path(":api")).unwrap();
        let err = tree.register(path(":api")).unwrap_err();
        assert!(err.to_string().contains("already registered"));
    }

    #[test]
    fn plugin_applies_at_most_once() {
        let mut tree = ProjectTree::new();
        tree.register(path(":app")).unwrap();

        let marker = id("com.android.application");
        assert!(tree.mark_plugin_applied(&path(":app"), &marker).unwrap());
        assert!(!tree.mark_plugin_applied(&path(":app"), &marker).unwrap());
        assert!(tree.find(&path(":app")).unwrap().has_plugin(&marker));
    }

    #[test]
    fn applying_plugin_to_unknown_project_is_an_error() {
        let mut tree = ProjectTree::new();
        let err = tree
            .mark_plugin_applied(&path(":ghost"), &id("com.android.application"))
            .unwrap_err();
        assert!(err.to_string().contains("not found"));
    }
}

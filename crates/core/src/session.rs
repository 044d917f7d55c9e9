//! The configuration pass.
//!
//! A [`ConfigurationSession`] owns the engine state for a single pass: the
//! project tree, the dependency table, the deferred plugin actions, and the
//! logging sink. Extensions are applied to projects through the session,
//! register [`PluginAction`]s against marker plugins, and those actions fire
//! when the plugins are applied.
//!
//! The pass is single-threaded and synchronous. An error from an extension or
//! a fired action aborts the pass; there is no recovery or retry.

use std::collections::HashMap;

use krane_extension_protocol::{
    BuildExtension, BuildUnit, Configuration, ExtensionResult, PluginAction, PluginId, ProjectPath,
};

use crate::dependencies::DependencyTable;
use crate::logger::BuildLogger;
use crate::project::ProjectTree;
use crate::types::{KraneError, KraneResult};

/// Engine state for one configuration pass.
pub struct ConfigurationSession {
    tree: ProjectTree,
    dependencies: DependencyTable,
    deferred: HashMap<(ProjectPath, PluginId), Vec<PluginAction>>,
    logger: Box<dyn BuildLogger>,
}

impl ConfigurationSession {
    #[must_use]
    pub fn new(tree: ProjectTree, logger: Box<dyn BuildLogger>) -> Self {
        Self {
            tree,
            dependencies: DependencyTable::new(),
            deferred: HashMap::new(),
            logger,
        }
    }

    /// The project tree as configured so far.
    #[must_use]
    pub fn tree(&self) -> &ProjectTree {
        &self.tree
    }

    /// The dependency declarations recorded so far.
    #[must_use]
    pub fn dependencies(&self) -> &DependencyTable {
        &self.dependencies
    }

    /// Apply an extension to the project at `path`.
    ///
    /// The extension receives a handle to the live session state. Most
    /// extensions only register plugin actions here; any direct mutation is
    /// recorded immediately.
    ///
    /// # Errors
    ///
    /// Returns an error if the project does not exist or the extension fails.
    /// Extension failures are fatal for the pass.
    pub fn apply_extension(
        &mut self,
        extension: &dyn BuildExtension,
        path: &ProjectPath,
    ) -> KraneResult<()> {
        if !self.tree.contains(path) {
            return Err(KraneError::Project(format!(
                "Cannot apply extension '{}': project '{}' not found",
                extension.key(),
                path
            )));
        }
        let mut handle = ProjectHandle {
            path: path.clone(),
            session: self,
        };
        extension.apply(&mut handle)?;
        Ok(())
    }

    /// Apply a marker plugin to the project at `path`, firing any actions
    /// registered against it.
    ///
    /// Re-applying an already-applied plugin is a no-op; actions fire once
    /// per registration.
    ///
    /// # Errors
    ///
    /// Returns an error if the project does not exist or a fired action
    /// fails. Action failures are fatal for the pass.
    pub fn apply_plugin(&mut self, path: &ProjectPath, id: &PluginId) -> KraneResult<()> {
        let newly_applied = self.tree.mark_plugin_applied(path, id)?;
        if !newly_applied {
            return Ok(());
        }

        let actions = self
            .deferred
            .remove(&(path.clone(), id.clone()))
            .unwrap_or_default();
        for action in actions {
            let mut handle = ProjectHandle {
                path: path.clone(),
                session: self,
            };
            action(&mut handle)?;
        }
        Ok(())
    }
}

/// The [`BuildUnit`] implementation handed to extensions.
///
/// Borrows the session mutably for the duration of one extension or action
/// invocation; every call goes against the session's live state.
struct ProjectHandle<'a> {
    path: ProjectPath,
    session: &'a mut ConfigurationSession,
}

impl BuildUnit for ProjectHandle<'_> {
    fn path(&self) -> &ProjectPath {
        &self.path
    }

    fn when_plugin_applied(&mut self, id: PluginId, action: PluginAction) -> ExtensionResult<()> {
        let already_applied = self
            .session
            .tree
            .find(&self.path)
            .is_some_and(|node| node.has_plugin(&id));
        if already_applied {
            return action(self);
        }
        self.session
            .deferred
            .entry((self.path.clone(), id))
            .or_default()
            .push(action);
        Ok(())
    }

    fn find_project(&self, path: &ProjectPath) -> Option<ProjectPath> {
        self.session.tree.find(path).map(|node| node.path.clone())
    }

    fn add_dependency(&mut self, configuration: Configuration, target: &ProjectPath) {
        self.session
            .dependencies
            .declare(self.path.clone(), configuration, target.clone());
    }

    fn log_info(&self, message: &str) {
        self.session.logger.info(message);
    }
}

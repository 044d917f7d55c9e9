//! Core traits for implementing Krane extensions.
//!
//! This module defines the two sides of the extension boundary:
//! - [`BuildExtension`] - The extension point the engine invokes once per
//!   project during the configuration pass
//! - [`BuildUnit`] - The handle through which an extension observes and
//!   mutates the project being configured

use crate::types::{Configuration, ExtensionResult, PluginId, ProjectPath};
use serde_json::Value as JsonValue;

/// A deferred action fired when a marker plugin is applied to a project.
///
/// Each registered action runs at most once. Actions receive the same
/// [`BuildUnit`] handle the extension was applied with, so they can query the
/// project tree and declare dependencies when they fire.
pub type PluginAction = Box<dyn FnOnce(&mut dyn BuildUnit) -> ExtensionResult<()>>;

/// Handle to the project currently being configured.
///
/// The engine owns the project tree, the plugin state, and the dependency
/// table; a `BuildUnit` is an extension's only window into them. Every call
/// queries or mutates the engine's live state - handles never cache or
/// snapshot it.
///
/// # Example
///
/// ```rust
/// # use krane_extension_protocol::{BuildUnit, Configuration, ExtensionResult, ProjectPath};
/// fn link_shared(unit: &mut dyn BuildUnit) -> ExtensionResult<()> {
///     let shared = ProjectPath::new(":shared").expect("valid path");
///     if let Some(target) = unit.find_project(&shared) {
///         unit.add_dependency(Configuration::Implementation, &target);
///     }
///     Ok(())
/// }
/// ```
pub trait BuildUnit {
    /// The path of the project this handle configures.
    fn path(&self) -> &ProjectPath;

    /// Register an action to run when the given marker plugin is applied to
    /// this project.
    ///
    /// This is a registration, not a check: if the plugin is already applied
    /// the action fires immediately, otherwise it is held until the plugin is
    /// applied later in the pass. A plugin applies at most once per project,
    /// so each registered action fires at most once. If the plugin is never
    /// applied the action is silently discarded at the end of the pass.
    ///
    /// # Errors
    ///
    /// Returns an error if the action fires immediately and fails.
    fn when_plugin_applied(&mut self, id: PluginId, action: PluginAction) -> ExtensionResult<()>;

    /// Look up a project by exact path against the live build tree.
    ///
    /// Returns the canonical path of the project if it exists, `None`
    /// otherwise. The two cases are the only branches an extension should
    /// distinguish; there is no partial match.
    fn find_project(&self, path: &ProjectPath) -> Option<ProjectPath>;

    /// Declare a dependency from this project on `target` under the given
    /// configuration.
    ///
    /// Declarations are recorded as-is: declaring the same edge twice records
    /// it twice. Whether duplicates are collapsed is decided when the engine
    /// builds the dependency graph, not here.
    fn add_dependency(&mut self, configuration: Configuration, target: &ProjectPath);

    /// Emit an informational trace to the engine's logging sink.
    ///
    /// Purely advisory; has no effect on control flow and may be a no-op
    /// depending on the sink the engine was configured with.
    fn log_info(&self, message: &str);
}

/// The extension point invoked by the engine during the configuration pass.
///
/// Extensions are registered with the engine by key and applied to the
/// projects that request them. `apply` runs during configuration, before
/// dependency resolution, and is the only entry point an extension has.
///
/// # Example
///
/// ```rust
/// use krane_extension_protocol::{
///     BuildExtension, BuildUnit, Configuration, ExtensionResult, PluginId, ProjectPath,
/// };
///
/// pub struct SharedLinkExtension;
///
/// impl BuildExtension for SharedLinkExtension {
///     fn name(&self) -> &str {
///         "Shared Library Link Extension"
///     }
///
///     fn key(&self) -> &str {
///         "shared-link"
///     }
///
///     fn apply(&self, unit: &mut dyn BuildUnit) -> ExtensionResult<()> {
///         let marker = PluginId::new("com.example.library").expect("valid id");
///         unit.when_plugin_applied(
///             marker,
///             Box::new(|unit| {
///                 let shared = ProjectPath::new(":shared").expect("valid path");
///                 if let Some(target) = unit.find_project(&shared) {
///                     unit.add_dependency(Configuration::Implementation, &target);
///                 }
///                 Ok(())
///             }),
///         )
///     }
/// }
/// ```
pub trait BuildExtension {
    /// Human-readable name, shown in logs and error messages.
    fn name(&self) -> &str;

    /// Unique registry identifier for this extension.
    ///
    /// Used in `krane.yml` to request the extension for a project. Must not
    /// contain whitespace; kebab-case by convention.
    fn key(&self) -> &str;

    /// Configure the given project.
    ///
    /// Called once per project that requests this extension, during the
    /// configuration pass. Most extensions register [`PluginAction`]s here
    /// rather than mutating the project directly, so their behavior is
    /// conditional on which marker plugins the project applies.
    ///
    /// # Errors
    ///
    /// Any error aborts the entire configuration pass.
    fn apply(&self, unit: &mut dyn BuildUnit) -> ExtensionResult<()>;

    /// JSON Schema describing the configuration options this extension
    /// accepts, if any.
    fn configuration_options(&self) -> Option<JsonValue> {
        None
    }
}

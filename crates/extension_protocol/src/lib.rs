//! Protocol definitions for Krane build extensions.
//!
//! This crate defines the surface between the Krane configuration engine and
//! the extensions that plug into it:
//!
//! - [`types`] - Path, plugin-id, and configuration types shared across the boundary
//! - [`traits`] - The [`BuildExtension`] extension point and the [`BuildUnit`]
//!   handle extensions configure projects through
//!
//! Extensions never touch the engine's internal state directly. Everything an
//! extension can observe or mutate goes through a [`BuildUnit`] handle supplied
//! by the engine during the configuration pass.

pub mod traits;
pub mod types;

pub use traits::{BuildExtension, BuildUnit, PluginAction};
pub use types::{Configuration, ExtensionError, ExtensionResult, PluginId, ProjectPath};

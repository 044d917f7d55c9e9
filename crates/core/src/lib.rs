//! Krane Core Library
//!
//! This is the core library for the Krane build-configuration tool. It
//! provides the project model, the configuration engine that hosts build
//! extensions, and the dependency table those extensions declare edges into.
//!
//! ## Architecture
//!
//! The core library is organized into several modules:
//!
//! - [`manager`] - High-level build manager interface
//! - [`session`] - The configuration pass: extension application and plugin events
//! - [`project`] - Project tree and per-project plugin state
//! - [`dependencies`] - Dependency declarations and graph construction
//! - [`logger`] - Logging sinks for configuration traces
//! - [`configs`] - Settings file parsing (`krane.yml`)
//! - [`results`] - Result types for build manager operations
//! - [`types`] - Common error types and type aliases
//!
//! ## Usage
//!
//! The primary entry point is the [`BuildManager`], which loads the workspace
//! settings, runs the configuration pass with the registered extensions, and
//! exposes the resulting project list and dependency graph:
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
//! # Ok(())
//! # }
//! ```

pub mod configs;
pub mod dependencies;
pub mod logger;
pub mod manager;
pub mod project;
pub mod results;
pub mod session;
pub mod types;

// Re-export the main types for easier usage
pub use manager::{BuildManager, BuildManagerConfig};
pub use types::{KraneError, KraneResult};

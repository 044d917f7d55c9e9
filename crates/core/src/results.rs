//! Result types for build manager operations
//!
//! This module contains the result types returned by build manager
//! operations, providing a centralized location for output structures.

use std::collections::HashMap;

use colored::Color;

use krane_extension_protocol::ProjectPath;

/// Information about a configured project
#[derive(Debug, Clone)]
pub struct ProjectInfo {
    pub path: ProjectPath,
    /// Marker plugin ids applied during the pass, sorted.
    pub plugins: Vec<String>,
    /// Extension keys the project requested in the settings file.
    pub extensions: Vec<String>,
}

/// Result of listing projects in the workspace
#[derive(Debug)]
pub struct ProjectListResult {
    pub projects: Vec<ProjectInfo>,
    pub project_colors: HashMap<String, Color>,
}

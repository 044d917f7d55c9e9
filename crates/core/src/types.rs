use krane_extension_protocol::ExtensionError;
use thiserror::Error;

/// The main error type for Krane operations
#[derive(Debug, Error)]
pub enum KraneError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Project error: {0}")]
    Project(String),

    #[error("Path error: {0}")]
    Path(String),

    #[error("Extension error: {0}")]
    Extension(#[from] ExtensionError),
}

/// Result type alias for Krane operations
pub type KraneResult<T> = Result<T, KraneError>;

//! Error types for logbook

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using LogbookError
pub type Result<T> = std::result::Result<T, LogbookError>;

/// Main error type for logbook operations
#[derive(Debug, Error)]
pub enum LogbookError {
    /// Configuration-related errors
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Git-related errors
    #[error(transparent)]
    Git(#[from] GitError),

    /// Changelog-related errors
    #[error(transparent)]
    Changelog(#[from] ChangelogError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Invalid configuration value
    #[error("Invalid configuration: {field} - {message}")]
    InvalidValue { field: String, message: String },

    /// YAML parsing error
    #[error("YAML parsing error: {0}")]
    YamlError(#[from] serde_yaml::Error),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    /// TOML serialization error
    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    /// IO error
    #[error("IO error reading config: {0}")]
    Io(#[from] std::io::Error),
}

/// Git-related errors
#[derive(Debug, Error)]
pub enum GitError {
    /// Repository not found
    #[error("Git repository not found at {0}")]
    RepositoryNotFound(PathBuf),

    /// Failed to open repository
    #[error("Failed to open repository: {0}")]
    OpenFailed(String),

    /// Remote not found
    #[error("Remote not found: {0}")]
    RemoteNotFound(String),

    /// Git2 library error
    #[error("Git error: {0}")]
    Git2(#[from] git2::Error),
}

/// Changelog-related errors
///
/// Every variant is a domain outcome the caller is expected to report;
/// none of them indicate a broken process.
#[derive(Debug, Error)]
pub enum ChangelogError {
    /// The document could not be decoded
    #[error("decoding YAML: {0}")]
    Decode(#[source] serde_yaml::Error),

    /// The model could not be encoded
    #[error("encoding YAML: {0}")]
    Encode(#[source] serde_yaml::Error),

    /// The decoded document broke one or more rules
    #[error("validation failed:\n  {}", .0.join("\n  "))]
    ValidationFailed(Vec<String>),

    /// No version matches the requested identifier
    #[error("version {0:?} not found")]
    VersionNotFound(String),

    /// The named category bucket does not exist
    #[error("category {0:?} not found")]
    CategoryNotFound(String),

    /// No entry in the category matches the requested text
    #[error("entry {text:?} not found in {category}")]
    EntryNotFound { category: String, text: String },

    /// A substring removal matched more than one entry
    #[error("multiple entries match {text:?} in {category}")]
    AmbiguousMatch {
        category: String,
        text: String,
        matches: Vec<String>,
    },

    /// Release attempted without a pending version
    #[error("no unreleased version found")]
    NoUnreleased,

    /// Release attempted on an empty pending version
    #[error("unreleased version has no entries")]
    EmptyUnreleased,

    /// Release identifier collides with an existing version
    #[error("version {0:?} already exists")]
    VersionExists(String),

    /// Changelog file not found
    #[error("Changelog file not found at {0}")]
    FileNotFound(PathBuf),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

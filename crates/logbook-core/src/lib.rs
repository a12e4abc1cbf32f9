//! Logbook Core - Core library for changelog management
//!
//! This crate provides the error taxonomy and the configuration system
//! shared by the logbook crates.

pub mod config;
pub mod error;

pub use config::{Config, DEFAULT_CATEGORIES};
pub use error::{ChangelogError, ConfigError, GitError, LogbookError, Result};

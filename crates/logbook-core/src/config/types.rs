//! Configuration types

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::defaults::{default_categories, DEFAULT_INTERNAL_FILE, DEFAULT_PUBLIC_FILE};

/// Project-level logbook configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Repository URL used for comparison links
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repo_url: Option<String>,

    /// Whether rendering includes internal entries by default
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub include_internal: bool,

    /// Rendered public changelog path
    #[serde(skip_serializing_if = "Option::is_none")]
    pub public_file: Option<PathBuf>,

    /// Rendered internal changelog path
    #[serde(skip_serializing_if = "Option::is_none")]
    pub internal_file: Option<PathBuf>,

    /// Category allow-list overriding the defaults
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub categories: Vec<String>,

    /// Category strictness; unset means strict
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strict_categories: Option<bool>,
}

impl Config {
    /// The category allow-list used during validation.
    ///
    /// Returns `None` when strictness is explicitly disabled, the custom
    /// list when one is configured, and the six canonical categories
    /// otherwise.
    pub fn allowed_categories(&self) -> Option<Vec<String>> {
        if self.strict_categories == Some(false) {
            return None;
        }
        if !self.categories.is_empty() {
            return Some(self.categories.clone());
        }
        Some(default_categories())
    }

    /// Public changelog path, falling back to the default
    pub fn public_file_path(&self) -> PathBuf {
        self.public_file
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_PUBLIC_FILE))
    }

    /// Internal changelog path, falling back to the default
    pub fn internal_file_path(&self) -> PathBuf {
        self.internal_file
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_INTERNAL_FILE))
    }

    /// Set the repository URL
    pub fn with_repo_url(mut self, url: impl Into<String>) -> Self {
        self.repo_url = Some(url.into());
        self
    }
}

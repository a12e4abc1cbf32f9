//! Changelog formatters

mod markdown;
mod terminal;

pub use markdown::MarkdownFormatter;
pub use terminal::{CategoryStyle, CategoryStyles, TerminalFormatter};

use crate::types::{Changelog, Scope, Version};

/// Trait for changelog formatters
pub trait ChangelogFormatter: Send + Sync {
    /// Format a whole changelog
    fn format(&self, changelog: &Changelog, options: &RenderOptions) -> String;

    /// Format a single version
    fn format_version(&self, version: &Version, options: &RenderOptions) -> String;

    /// Get the file extension for this format
    fn extension(&self) -> &'static str;
}

/// Options shared by every formatter
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderOptions {
    /// Merge internal entries into the output
    pub include_internal: bool,
    /// Repository URL used for comparison links
    pub repo_url: Option<String>,
}

impl RenderOptions {
    /// Create default options (public entries, no links)
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether internal entries are included
    pub fn with_internal(mut self, include_internal: bool) -> Self {
        self.include_internal = include_internal;
        self
    }

    /// Set repository URL for links
    pub fn with_repo_url(mut self, url: impl Into<String>) -> Self {
        self.repo_url = Some(url.into());
        self
    }

    /// The entry scope these options select
    pub fn scope(&self) -> Scope {
        Scope::from_include_internal(self.include_internal)
    }
}

/// `[Unreleased]` for the pending version, `[id] - date` otherwise
pub(crate) fn version_heading(version: &Version) -> String {
    if version.is_unreleased() {
        "[Unreleased]".to_string()
    } else {
        format!("[{}] - {}", version.identifier, version.date_str())
    }
}

/// Uppercase the first letter of a category name
pub(crate) fn title_case(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

//! Changelog types

use serde::Serialize;

use crate::changes::Changes;
use crate::query::normalize_version;

/// Identifier of the pending version, compared after normalization
pub const UNRELEASED: &str = "unreleased";

/// Which entries a query or rendering covers
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Scope {
    /// Public entries only
    #[default]
    Public,
    /// Public entries with internal entries merged in
    All,
}

impl Scope {
    /// Scope for an "include internal" flag
    pub fn from_include_internal(include_internal: bool) -> Self {
        if include_internal {
            Self::All
        } else {
            Self::Public
        }
    }
}

/// One release, or the pending "unreleased" bucket
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Version {
    /// Version identifier (e.g. "1.2.0" or "unreleased")
    pub identifier: String,
    /// Release date (YYYY-MM-DD), absent for the pending version
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    /// Entries meant for public consumption
    pub public: Changes,
    /// Entries meant for internal audiences only
    pub internal: Changes,
}

impl Version {
    /// Create a new, empty version
    pub fn new(identifier: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            ..Default::default()
        }
    }

    /// Create an empty pending version
    pub fn unreleased() -> Self {
        Self::new(UNRELEASED)
    }

    /// Set the date
    pub fn with_date(mut self, date: impl Into<String>) -> Self {
        self.date = Some(date.into());
        self
    }

    /// Check if this is the pending version; `Unreleased` and
    /// `vUnreleased` both qualify
    pub fn is_unreleased(&self) -> bool {
        normalize_version(&self.identifier) == UNRELEASED
    }

    /// The date, or an empty string when absent
    pub fn date_str(&self) -> &str {
        self.date.as_deref().unwrap_or("")
    }

    /// Check if there are no public and no internal entries
    pub fn is_empty(&self) -> bool {
        self.public.is_empty() && self.internal.is_empty()
    }

    /// Total number of entries, public and internal
    pub fn count(&self) -> usize {
        self.public.count() + self.internal.count()
    }

    /// Public entries followed by internal ones, without touching either
    pub fn merged_changes(&self) -> Changes {
        self.public.merged_with(&self.internal)
    }

    /// The entries visible under a scope
    pub fn changes(&self, scope: Scope) -> Changes {
        match scope {
            Scope::Public => self.public.clone(),
            Scope::All => self.merged_changes(),
        }
    }
}

/// The root document: a project and its versions, newest first
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Changelog {
    /// Project display name
    pub project: String,
    /// Versions in document order
    pub versions: Vec<Version>,
}

impl Changelog {
    /// Create an empty changelog for a project
    pub fn new(project: impl Into<String>) -> Self {
        Self {
            project: project.into(),
            versions: Vec::new(),
        }
    }

    /// Add a version at the end of the list
    pub fn with_version(mut self, version: Version) -> Self {
        self.versions.push(version);
        self
    }
}

/// A flattened view of a single entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Entry {
    /// Entry text
    pub text: String,
    /// Category the entry belongs to
    pub category: String,
    /// Identifier of the owning version
    pub version: String,
}

//! Classifier input and output types

use serde::Serialize;

/// Who a changelog entry is written for
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Audience {
    #[default]
    Public,
    Internal,
}

/// The changelog placement of one commit
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Classification {
    /// Target category (e.g. "added")
    pub category: String,
    /// Cleaned, first-sentence description
    pub description: String,
    /// Whether the commit was marked breaking
    pub breaking: bool,
    /// Which set of changes the entry goes into
    pub audience: Audience,
}

impl Classification {
    /// Check if the entry is internal-only
    pub fn is_internal(&self) -> bool {
        self.audience == Audience::Internal
    }
}

/// A commit as handed over by the source-control collaborator
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitRecord {
    /// Commit hash
    pub hash: String,
    /// First line of the commit message
    pub subject: String,
}

impl CommitRecord {
    /// Create a new commit record
    pub fn new(hash: impl Into<String>, subject: impl Into<String>) -> Self {
        Self {
            hash: hash.into(),
            subject: subject.into(),
        }
    }
}

//! Commit classification

mod conventional;
mod types;

pub use conventional::ConventionalParser;
pub use types::*;

/// Trait for commit classifiers
pub trait CommitParser: Send + Sync {
    /// Classify a commit subject, or `None` when it does not belong in a
    /// changelog.
    ///
    /// A subject that maps to a category is still skipped when its cleaned
    /// description comes out empty (e.g. `feat: ...`), so no blank entry is
    /// ever produced.
    fn classify(&self, subject: &str) -> Option<Classification>;

    /// Classify a commit record
    fn classify_commit(&self, commit: &CommitRecord) -> Option<Classification> {
        self.classify(&commit.subject)
    }
}

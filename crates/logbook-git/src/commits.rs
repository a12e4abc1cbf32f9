//! Commit history operations

use chrono::{TimeZone, Utc};
use git2::Sort;
use tracing::{debug, instrument};

use crate::repository::{GitRepo, Result};
use crate::types::CommitInfo;

impl GitRepo {
    /// Commits in `since..HEAD`, newest first.
    ///
    /// `since` is any revision git can resolve (usually a tag); `None` walks
    /// the whole history. A repository without commits yields nothing.
    #[instrument(skip(self))]
    pub fn commits_since(&self, since: Option<&str>) -> Result<Vec<CommitInfo>> {
        let Some(head) = self.head_commit()? else {
            debug!("repository has no commits");
            return Ok(Vec::new());
        };

        let mut revwalk = self.repo.revwalk()?;
        revwalk.set_sorting(Sort::TOPOLOGICAL | Sort::TIME)?;
        revwalk.push(head.id())?;

        if let Some(since) = since {
            let boundary = self.repo.revparse_single(since)?.peel_to_commit()?;
            revwalk.hide(boundary.id())?;
        }

        let mut commits = Vec::new();
        for oid in revwalk {
            let commit = self.repo.find_commit(oid?)?;
            commits.push(commit_to_info(&commit));
        }

        debug!(count = commits.len(), "collected commits");
        Ok(commits)
    }
}

/// Convert a git2 Commit to CommitInfo
fn commit_to_info(commit: &git2::Commit<'_>) -> CommitInfo {
    let author = commit.author();

    let timestamp = Utc
        .timestamp_opt(commit.time().seconds(), 0)
        .single()
        .unwrap_or_else(Utc::now);

    CommitInfo::new(
        commit.id().to_string(),
        commit.summary().unwrap_or_default(),
        author.name().unwrap_or("Unknown"),
        timestamp,
    )
    .with_body(commit.body().unwrap_or_default())
}

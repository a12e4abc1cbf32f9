//! Remote lookups

use tracing::{debug, instrument};

use crate::repository::{GitRepo, Result};
use logbook_core::error::GitError;

const ORIGIN: &str = "origin";

impl GitRepo {
    /// Get the URL for a remote
    pub fn remote_url(&self, name: &str) -> Result<Option<String>> {
        match self.repo.find_remote(name) {
            Ok(remote) => Ok(remote.url().map(|s| s.to_string())),
            Err(e) if e.code() == git2::ErrorCode::NotFound => {
                Err(GitError::RemoteNotFound(name.to_string()))
            }
            Err(e) => Err(GitError::Git2(e)),
        }
    }

    /// The `origin` URL as a browsable HTTPS address, if there is one
    #[instrument(skip(self))]
    pub fn detect_repo_url(&self) -> Result<Option<String>> {
        match self.remote_url(ORIGIN) {
            Ok(url) => {
                let url = url.map(|u| normalize_git_url(&u));
                debug!(url = ?url, "detected repository URL");
                Ok(url)
            }
            Err(GitError::RemoteNotFound(_)) => Ok(None),
            Err(e) => Err(e),
        }
    }
}

/// Normalise a git remote URL to HTTPS without a `.git` suffix.
///
/// `git@host:org/repo.git` and `ssh://git@host/org/repo.git` both become
/// `https://host/org/repo`.
pub fn normalize_git_url(url: &str) -> String {
    let url = url.trim();

    let url = if let Some(rest) = url.strip_prefix("git@") {
        format!("https://{}", rest.replacen(':', "/", 1))
    } else if let Some(rest) = url.strip_prefix("ssh://git@") {
        format!("https://{rest}")
    } else {
        url.to_string()
    };

    url.strip_suffix(".git").unwrap_or(&url).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;

    #[test]
    fn test_normalize_git_url() {
        assert_eq!(
            normalize_git_url("git@github.com:acme/widget.git"),
            "https://github.com/acme/widget"
        );
        assert_eq!(
            normalize_git_url("ssh://git@gitlab.com/acme/widget.git"),
            "https://gitlab.com/acme/widget"
        );
        assert_eq!(
            normalize_git_url("https://github.com/acme/widget.git\n"),
            "https://github.com/acme/widget"
        );
        assert_eq!(
            normalize_git_url("https://github.com/acme/widget"),
            "https://github.com/acme/widget"
        );
    }

    #[test]
    fn test_remote_not_found() {
        let (_temp, repo) = fixtures::repo_with_commits(&["feat: first"]);
        let result = repo.remote_url("upstream");
        assert!(matches!(result, Err(GitError::RemoteNotFound(ref r)) if r == "upstream"));
    }

    #[test]
    fn test_detect_repo_url() {
        let (_temp, repo) = fixtures::repo_with_commits(&["feat: first"]);
        assert_eq!(repo.detect_repo_url().unwrap(), None);

        repo.repo
            .remote("origin", "git@github.com:acme/widget.git")
            .unwrap();
        assert_eq!(
            repo.detect_repo_url().unwrap().as_deref(),
            Some("https://github.com/acme/widget")
        );
        assert_eq!(
            repo.remote_url("origin").unwrap().as_deref(),
            Some("git@github.com:acme/widget.git")
        );
    }
}

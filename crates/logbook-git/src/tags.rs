//! Tag lookups

use git2::{DescribeFormatOptions, DescribeOptions};
use tracing::{debug, instrument};

use crate::repository::{GitRepo, Result};

impl GitRepo {
    /// The nearest tag reachable from HEAD, or `None` when there is none
    #[instrument(skip(self))]
    pub fn latest_tag(&self) -> Result<Option<String>> {
        if self.head_commit()?.is_none() {
            return Ok(None);
        }

        let mut options = DescribeOptions::new();
        options.describe_tags();

        let describe = match self.repo.describe(&options) {
            Ok(describe) => describe,
            Err(e) => {
                debug!(error = %e, "no tag reachable from HEAD");
                return Ok(None);
            }
        };

        let mut format = DescribeFormatOptions::new();
        format.abbreviated_size(0);
        let tag = describe.format(Some(&format))?;

        debug!(tag = %tag, "found latest tag");
        Ok(Some(tag))
    }
}

#[cfg(test)]
mod tests {
    use crate::fixtures;
    use crate::repository::GitRepo;
    use git2::Repository;
    use tempfile::TempDir;

    #[test]
    fn test_no_tags() {
        let (_temp, repo) = fixtures::repo_with_commits(&["feat: first"]);
        assert_eq!(repo.latest_tag().unwrap(), None);
    }

    #[test]
    fn test_unborn_has_no_tag() {
        let temp = TempDir::new().unwrap();
        Repository::init(temp.path()).unwrap();
        let repo = GitRepo::open(temp.path()).unwrap();
        assert_eq!(repo.latest_tag().unwrap(), None);
    }

    #[test]
    fn test_latest_reachable_tag() {
        let temp = TempDir::new().unwrap();
        let raw = Repository::init(temp.path()).unwrap();
        fixtures::commit(&raw, "feat: first");
        fixtures::tag_head(&raw, "v1.0.0");
        fixtures::commit(&raw, "feat: second");
        fixtures::tag_head(&raw, "v1.1.0");
        fixtures::commit(&raw, "fix: third");

        let repo = GitRepo::open(temp.path()).unwrap();
        assert_eq!(repo.latest_tag().unwrap().as_deref(), Some("v1.1.0"));
    }

    #[test]
    fn test_tag_on_head() {
        let temp = TempDir::new().unwrap();
        let raw = Repository::init(temp.path()).unwrap();
        fixtures::commit(&raw, "feat: first");
        fixtures::tag_head(&raw, "2.0.0");

        let repo = GitRepo::open(temp.path()).unwrap();
        assert_eq!(repo.latest_tag().unwrap().as_deref(), Some("2.0.0"));
    }
}

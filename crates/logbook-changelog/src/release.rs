//! Promotion of the pending version to a dated release

use crate::types::{Changelog, Version};
use crate::Result;
use logbook_core::ChangelogError;

impl Changelog {
    /// Stamp the pending version with `version` and `date`, then put a
    /// fresh, empty pending version at the front.
    ///
    /// The promoted version keeps its entries and its position. Fails when
    /// there is no pending version, when it has no entries, or when
    /// `version` already names an existing version.
    pub fn release(&mut self, version: &str, date: &str) -> Result<()> {
        let pending = self
            .versions
            .iter()
            .position(|v| v.is_unreleased())
            .ok_or(ChangelogError::NoUnreleased)?;

        if self.versions[pending].is_empty() {
            return Err(ChangelogError::EmptyUnreleased);
        }

        if self.get_version(version).is_ok() {
            return Err(ChangelogError::VersionExists(version.to_string()));
        }

        let promoted = &mut self.versions[pending];
        promoted.identifier = version.to_string();
        promoted.date = Some(date.to_string());

        self.versions.insert(0, Version::unreleased());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pending_with(entry: &str) -> Version {
        let mut version = Version::unreleased();
        version.public.append("added", entry);
        version
    }

    #[test]
    fn test_release_promotes_pending() {
        let mut changelog = Changelog::new("widget").with_version(pending_with("New feature"));

        changelog.release("2.0.0", "2024-06-01").unwrap();

        assert_eq!(changelog.version_count(), 2);
        let fresh = &changelog.versions[0];
        assert!(fresh.is_unreleased());
        assert!(fresh.is_empty());
        assert!(fresh.date.is_none());

        let released = &changelog.versions[1];
        assert_eq!(released.identifier, "2.0.0");
        assert_eq!(released.date.as_deref(), Some("2024-06-01"));
        assert_eq!(released.public.entries("added"), ["New feature"]);
    }

    #[test]
    fn test_release_keeps_position_and_internal_entries() {
        let mut pending = Version::unreleased();
        pending.internal.append("changed", "Refactor");
        let older = {
            let mut v = Version::new("1.0.0").with_date("2024-01-01");
            v.public.append("added", "Initial");
            v
        };
        let mut changelog = Changelog::new("widget")
            .with_version(pending)
            .with_version(older);

        changelog.release("1.1.0", "2024-02-01").unwrap();

        assert_eq!(
            changelog.list_versions(),
            vec!["unreleased", "1.1.0", "1.0.0"]
        );
        assert_eq!(changelog.versions[1].internal.entries("changed"), ["Refactor"]);
    }

    #[test]
    fn test_release_without_pending() {
        let mut changelog = Changelog::new("widget")
            .with_version(Version::new("1.0.0").with_date("2024-01-01"));

        let err = changelog.release("2.0.0", "2024-06-01").unwrap_err();
        assert!(matches!(err, ChangelogError::NoUnreleased));
        assert_eq!(err.to_string(), "no unreleased version found");
    }

    #[test]
    fn test_release_with_empty_pending() {
        let mut changelog = Changelog::new("widget").with_version(Version::unreleased());

        let err = changelog.release("2.0.0", "2024-06-01").unwrap_err();
        assert_eq!(err.to_string(), "unreleased version has no entries");
        assert_eq!(changelog.version_count(), 1);
    }

    #[test]
    fn test_release_with_existing_version() {
        let mut existing = Version::new("v1.0.0").with_date("2024-01-01");
        existing.public.append("added", "Initial");
        let mut changelog = Changelog::new("widget")
            .with_version(pending_with("Feature"))
            .with_version(existing);

        let err = changelog.release("1.0.0", "2024-06-01").unwrap_err();
        assert_eq!(err.to_string(), "version \"1.0.0\" already exists");
        assert!(changelog.versions[0].is_unreleased());
        assert_eq!(changelog.version_count(), 2);
    }

    #[test]
    fn test_release_twice() {
        let mut changelog = Changelog::new("widget").with_version(pending_with("First"));
        changelog.release("1.0.0", "2024-01-01").unwrap();

        changelog.ensure_unreleased().public.append("fixed", "Second");
        changelog.release("1.0.1", "2024-01-02").unwrap();

        assert_eq!(
            changelog.list_versions(),
            vec!["unreleased", "1.0.1", "1.0.0"]
        );
    }
}

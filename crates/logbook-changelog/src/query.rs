//! Read-only navigation over a changelog

use crate::types::{Changelog, Entry, Scope, Version};
use crate::Result;
use logbook_core::ChangelogError;

/// Lowercase a version identifier and strip one leading "v"
pub fn normalize_version(version: &str) -> String {
    let lower = version.to_lowercase();
    match lower.strip_prefix('v') {
        Some(rest) => rest.to_string(),
        None => lower,
    }
}

impl Changelog {
    /// Find a version by identifier, ignoring case and a leading "v"
    pub fn get_version(&self, version: &str) -> Result<&Version> {
        let index = self.position(version)?;
        Ok(&self.versions[index])
    }

    /// Mutable variant of [`Changelog::get_version`]
    pub fn get_version_mut(&mut self, version: &str) -> Result<&mut Version> {
        let index = self.position(version)?;
        Ok(&mut self.versions[index])
    }

    fn position(&self, version: &str) -> Result<usize> {
        let normalized = normalize_version(version);
        self.versions
            .iter()
            .position(|v| normalize_version(&v.identifier) == normalized)
            .ok_or_else(|| ChangelogError::VersionNotFound(version.to_string()))
    }

    /// The pending version, if any
    pub fn unreleased(&self) -> Option<&Version> {
        self.versions.iter().find(|v| v.is_unreleased())
    }

    /// Check if a pending version exists
    pub fn has_unreleased(&self) -> bool {
        self.unreleased().is_some()
    }

    /// The pending version, created empty at the front when missing
    pub fn ensure_unreleased(&mut self) -> &mut Version {
        let index = match self.versions.iter().position(|v| v.is_unreleased()) {
            Some(index) => index,
            None => {
                self.versions.insert(0, Version::unreleased());
                0
            }
        };
        &mut self.versions[index]
    }

    /// The first released version in document order
    pub fn latest_release(&self) -> Option<&Version> {
        self.versions.iter().find(|v| !v.is_unreleased())
    }

    /// Version identifiers in document order
    pub fn list_versions(&self) -> Vec<&str> {
        self.versions.iter().map(|v| v.identifier.as_str()).collect()
    }

    /// Every entry, across versions in document order, each version in its
    /// stored category order
    pub fn all_entries(&self, scope: Scope) -> Vec<Entry> {
        self.versions
            .iter()
            .flat_map(|v| flatten_version(v, scope))
            .collect()
    }

    /// The first `n` entries of [`Changelog::all_entries`]
    pub fn last_n(&self, n: usize, scope: Scope) -> Vec<Entry> {
        let mut entries = self.all_entries(scope);
        entries.truncate(n);
        entries
    }

    /// Number of versions
    pub fn version_count(&self) -> usize {
        self.versions.len()
    }

    /// Number of entries visible under a scope
    pub fn entry_count(&self, scope: Scope) -> usize {
        self.versions.iter().map(|v| v.changes(scope).count()).sum()
    }
}

/// Flatten one version's entries under a scope
pub fn flatten_version(version: &Version, scope: Scope) -> Vec<Entry> {
    version
        .changes(scope)
        .categories()
        .iter()
        .flat_map(|category| {
            category.entries.iter().map(|text| Entry {
                text: text.clone(),
                category: category.name.clone(),
                version: version.identifier.clone(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Changelog {
        let mut unreleased = Version::unreleased();
        unreleased.public.append("added", "Dark mode");
        unreleased.internal.append("changed", "Refactor router");

        let mut v2 = Version::new("2.0.0").with_date("2024-06-01");
        v2.public.append("fixed", "Fix crash");
        v2.public.append("added", "Export");
        v2.public.append("fixed", "Fix typo");

        let mut v1 = Version::new("v1.0.0").with_date("2024-01-01");
        v1.public.append("added", "Initial release");

        Changelog::new("widget")
            .with_version(unreleased)
            .with_version(v2)
            .with_version(v1)
    }

    #[test]
    fn test_normalize_version() {
        assert_eq!(normalize_version("V1.0.0"), "1.0.0");
        assert_eq!(normalize_version("v1.0.0"), "1.0.0");
        assert_eq!(normalize_version("1.0.0"), "1.0.0");
        assert_eq!(normalize_version("vv2"), "v2");
        assert_eq!(normalize_version("Unreleased"), "unreleased");
        assert_eq!(normalize_version(""), "");
    }

    #[test]
    fn test_normalize_is_idempotent_for_single_prefix() {
        for input in ["V1.0.0", "1.0.0", "unreleased", "Beta", ""] {
            let once = normalize_version(input);
            assert_eq!(normalize_version(&once), once, "input {input:?}");
        }
    }

    #[test]
    fn test_get_version_normalizes() {
        let changelog = sample();
        assert_eq!(changelog.get_version("v2.0.0").unwrap().identifier, "2.0.0");
        assert_eq!(changelog.get_version("1.0.0").unwrap().identifier, "v1.0.0");
        assert!(changelog.get_version("UNRELEASED").unwrap().is_unreleased());
    }

    #[test]
    fn test_get_version_not_found_names_input() {
        let changelog = sample();
        let err = changelog.get_version("V9.9").unwrap_err();
        assert!(matches!(err, ChangelogError::VersionNotFound(ref v) if v == "V9.9"));
        assert_eq!(err.to_string(), "version \"V9.9\" not found");
    }

    #[test]
    fn test_unreleased_and_latest_release() {
        let changelog = sample();
        assert!(changelog.has_unreleased());
        assert_eq!(changelog.latest_release().unwrap().identifier, "2.0.0");

        let empty = Changelog::new("widget");
        assert!(empty.unreleased().is_none());
        assert!(empty.latest_release().is_none());
    }

    #[test]
    fn test_latest_release_uses_document_order() {
        let changelog = Changelog::new("widget")
            .with_version(Version::new("1.0.0").with_date("2024-01-01"))
            .with_version(Version::new("2.0.0").with_date("2024-06-01"));
        assert_eq!(changelog.latest_release().unwrap().identifier, "1.0.0");
    }

    #[test]
    fn test_ensure_unreleased_creates_at_front() {
        let mut changelog = Changelog::new("widget")
            .with_version(Version::new("1.0.0").with_date("2024-01-01"));

        changelog.ensure_unreleased().public.append("added", "New");
        assert_eq!(changelog.list_versions(), vec!["unreleased", "1.0.0"]);

        changelog.ensure_unreleased().public.append("added", "Another");
        assert_eq!(changelog.version_count(), 2);
        assert_eq!(changelog.versions[0].public.count(), 2);
    }

    #[test]
    fn test_all_entries_preserves_stored_order() {
        let changelog = sample();
        let entries = changelog.all_entries(Scope::Public);
        let texts: Vec<&str> = entries.iter().map(|e| e.text.as_str()).collect();
        assert_eq!(
            texts,
            vec!["Dark mode", "Fix crash", "Fix typo", "Export", "Initial release"]
        );
        assert_eq!(entries[1].category, "fixed");
        assert_eq!(entries[1].version, "2.0.0");
    }

    #[test]
    fn test_all_entries_with_internal() {
        let changelog = sample();
        let entries = changelog.all_entries(Scope::All);
        assert_eq!(entries.len(), 6);
        assert_eq!(entries[1].text, "Refactor router");
        assert_eq!(entries[1].category, "changed");
    }

    #[test]
    fn test_last_n() {
        let changelog = sample();
        let entries = changelog.last_n(2, Scope::Public);
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[1].text, "Fix crash");

        assert_eq!(changelog.last_n(100, Scope::Public).len(), 5);
        assert!(changelog.last_n(0, Scope::Public).is_empty());
    }

    #[test]
    fn test_counts() {
        let changelog = sample();
        assert_eq!(changelog.version_count(), 3);
        assert_eq!(changelog.entry_count(Scope::Public), 5);
        assert_eq!(changelog.entry_count(Scope::All), 6);
        assert_eq!(changelog.versions[0].public.count(), 1);
    }
}

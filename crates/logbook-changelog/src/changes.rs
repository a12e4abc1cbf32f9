//! Ordered category buckets and their mutation operations

use serde::Serialize;

use crate::Result;
use logbook_core::ChangelogError;

/// A named, ordered list of entries
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Category {
    /// Category name (e.g. "added")
    pub name: String,
    /// Entries in insertion order
    pub entries: Vec<String>,
}

impl Category {
    /// Create an empty category
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            entries: Vec::new(),
        }
    }

    /// Set the entries
    pub fn with_entries<I, S>(mut self, entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.entries = entries.into_iter().map(Into::into).collect();
        self
    }
}

/// Change descriptions grouped into ordered category buckets.
///
/// Unlike a map, the order in which categories were first appended (or
/// decoded) is kept and is part of the encoded document. A category name
/// appears at most once, and a bucket is dropped as soon as it empties.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Changes {
    categories: Vec<Category>,
}

impl Changes {
    /// Create an empty set of changes
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from already-ordered categories, folding repeated names together
    pub fn from_categories(categories: impl IntoIterator<Item = Category>) -> Self {
        let mut changes = Self::new();
        for category in categories {
            for entry in category.entries {
                changes.append(&category.name, entry);
            }
        }
        changes
    }

    /// Categories in stored order
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Category names in stored order
    pub fn category_names(&self) -> Vec<&str> {
        self.categories.iter().map(|c| c.name.as_str()).collect()
    }

    /// Entries of a category, empty when the category is absent
    pub fn entries(&self, category: &str) -> &[String] {
        self.find(category)
            .map(|c| c.entries.as_slice())
            .unwrap_or(&[])
    }

    /// Look up a category bucket by name
    pub fn find(&self, category: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.name == category)
    }

    /// Total number of entries across all categories
    pub fn count(&self) -> usize {
        self.categories.iter().map(|c| c.entries.len()).sum()
    }

    /// Check if there are no entries at all
    pub fn is_empty(&self) -> bool {
        self.count() == 0
    }

    /// Append an entry, creating the category at the end of the order if
    /// needed.
    ///
    /// The text is not checked here; empty entries are a validation concern.
    pub fn append(&mut self, category: &str, text: impl Into<String>) {
        let text = text.into();
        match self.categories.iter_mut().find(|c| c.name == category) {
            Some(bucket) => bucket.entries.push(text),
            None => self.categories.push(Category {
                name: category.to_string(),
                entries: vec![text],
            }),
        }
    }

    /// Remove one entry from a category and return its text.
    ///
    /// With `use_substring` the text is matched case-insensitively as a
    /// substring. More than one match fails with
    /// [`ChangelogError::AmbiguousMatch`] and leaves the changes untouched.
    pub fn remove(&mut self, category: &str, text: &str, use_substring: bool) -> Result<String> {
        let bucket = self
            .find(category)
            .ok_or_else(|| ChangelogError::CategoryNotFound(category.to_string()))?;

        if !use_substring {
            return self.remove_exact(category, text);
        }

        let needle = text.to_lowercase();
        let matches: Vec<String> = bucket
            .entries
            .iter()
            .filter(|e| e.to_lowercase().contains(&needle))
            .cloned()
            .collect();

        match matches.len() {
            0 => Err(ChangelogError::EntryNotFound {
                category: category.to_string(),
                text: text.to_string(),
            }),
            1 => self.remove_exact(category, &matches[0]),
            _ => Err(ChangelogError::AmbiguousMatch {
                category: category.to_string(),
                text: text.to_string(),
                matches,
            }),
        }
    }

    fn remove_exact(&mut self, category: &str, text: &str) -> Result<String> {
        let index = self
            .categories
            .iter()
            .position(|c| c.name == category)
            .ok_or_else(|| ChangelogError::CategoryNotFound(category.to_string()))?;

        let bucket = &mut self.categories[index];
        let position = bucket
            .entries
            .iter()
            .position(|e| e == text)
            .ok_or_else(|| ChangelogError::EntryNotFound {
                category: category.to_string(),
                text: text.to_string(),
            })?;

        let removed = bucket.entries.remove(position);
        if bucket.entries.is_empty() {
            self.categories.remove(index);
        }
        Ok(removed)
    }

    /// Append every entry of `other`, category by category, after the
    /// existing content
    pub fn merge(&mut self, other: &Changes) {
        for category in &other.categories {
            for entry in &category.entries {
                self.append(&category.name, entry.clone());
            }
        }
    }

    /// A new value holding `self` followed by `other`, leaving both intact
    pub fn merged_with(&self, other: &Changes) -> Changes {
        let mut merged = self.clone();
        merged.merge(other);
        merged
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn login_fixes() -> Changes {
        let mut changes = Changes::new();
        changes.append("fixed", "Fix login timeout");
        changes.append("fixed", "Fix login redirect");
        changes
    }

    #[test]
    fn test_append_creates_category_at_end() {
        let mut changes = Changes::new();
        changes.append("fixed", "Fix crash");
        changes.append("added", "Dark mode");
        changes.append("fixed", "Fix typo");

        assert_eq!(changes.category_names(), vec!["fixed", "added"]);
        assert_eq!(changes.entries("fixed"), ["Fix crash", "Fix typo"]);
        assert_eq!(changes.count(), 3);
    }

    #[test]
    fn test_append_does_not_validate_text() {
        let mut changes = Changes::new();
        changes.append("added", "");
        assert_eq!(changes.entries("added"), [""]);
    }

    #[test]
    fn test_entries_of_missing_category() {
        let changes = Changes::new();
        assert!(changes.entries("security").is_empty());
        assert!(changes.is_empty());
    }

    #[test]
    fn test_append_then_remove_restores_empty_state() {
        let mut changes = Changes::new();
        changes.append("added", "Only entry");

        let removed = changes.remove("added", "Only entry", false).unwrap();
        assert_eq!(removed, "Only entry");
        assert_eq!(changes, Changes::new());
        assert!(changes.categories().is_empty());
    }

    #[test]
    fn test_remove_exact_first_match_only() {
        let mut changes = Changes::new();
        changes.append("added", "Same");
        changes.append("added", "Other");
        changes.append("added", "Same");

        changes.remove("added", "Same", false).unwrap();
        assert_eq!(changes.entries("added"), ["Other", "Same"]);
    }

    #[test]
    fn test_remove_keeps_remaining_category_order() {
        let mut changes = Changes::new();
        changes.append("added", "Feature");
        changes.append("fixed", "Bug");
        changes.append("security", "CVE");

        changes.remove("fixed", "Bug", false).unwrap();
        assert_eq!(changes.category_names(), vec!["added", "security"]);
    }

    #[test]
    fn test_remove_missing_category() {
        let mut changes = login_fixes();
        let err = changes.remove("added", "anything", false).unwrap_err();
        assert!(matches!(err, ChangelogError::CategoryNotFound(ref c) if c == "added"));
    }

    #[test]
    fn test_remove_missing_entry() {
        let mut changes = login_fixes();
        let err = changes.remove("fixed", "Fix signup", false).unwrap_err();
        assert!(matches!(err, ChangelogError::EntryNotFound { .. }));

        let err = changes.remove("fixed", "signup", true).unwrap_err();
        assert!(matches!(err, ChangelogError::EntryNotFound { .. }));
    }

    #[test]
    fn test_remove_exact_is_case_sensitive() {
        let mut changes = login_fixes();
        assert!(changes.remove("fixed", "fix login timeout", false).is_err());
    }

    #[test]
    fn test_remove_substring_single_match() {
        let mut changes = login_fixes();
        changes.append("fixed", "Fix signup error");

        let removed = changes.remove("fixed", "SIGNUP", true).unwrap();
        assert_eq!(removed, "Fix signup error");
        assert_eq!(
            changes.entries("fixed"),
            ["Fix login timeout", "Fix login redirect"]
        );
    }

    #[test]
    fn test_remove_substring_drops_emptied_category() {
        let mut changes = Changes::new();
        changes.append("added", "Dark mode");
        changes.append("fixed", "Crash");

        changes.remove("added", "dark", true).unwrap();
        assert_eq!(changes.category_names(), vec!["fixed"]);
    }

    #[test]
    fn test_ambiguous_removal_is_non_mutating() {
        let mut changes = login_fixes();
        let before = changes.clone();

        let err = changes.remove("fixed", "login", true).unwrap_err();
        match err {
            ChangelogError::AmbiguousMatch {
                category,
                text,
                matches,
            } => {
                assert_eq!(category, "fixed");
                assert_eq!(text, "login");
                assert_eq!(matches, vec!["Fix login timeout", "Fix login redirect"]);
            }
            other => panic!("unexpected error: {other}"),
        }
        assert_eq!(changes, before);
        assert_eq!(
            changes.entries("fixed"),
            ["Fix login timeout", "Fix login redirect"]
        );
    }

    #[test]
    fn test_merge_interleaves_after_existing() {
        let mut dest = Changes::new();
        dest.append("fixed", "Existing fix");
        dest.append("added", "Existing feature");

        let mut source = Changes::new();
        source.append("added", "New feature");
        source.append("security", "Patch CVE");
        source.append("fixed", "New fix");

        dest.merge(&source);
        assert_eq!(dest.category_names(), vec!["fixed", "added", "security"]);
        assert_eq!(dest.entries("fixed"), ["Existing fix", "New fix"]);
        assert_eq!(dest.entries("added"), ["Existing feature", "New feature"]);
        assert_eq!(source.count(), 3);
    }

    #[test]
    fn test_clone_is_independent() {
        let original = login_fixes();
        let mut copy = original.clone();

        copy.append("fixed", "Fix another thing");
        copy.append("added", "Feature");
        copy.remove("fixed", "Fix login timeout", false).unwrap();

        assert_eq!(original.category_names(), vec!["fixed"]);
        assert_eq!(
            original.entries("fixed"),
            ["Fix login timeout", "Fix login redirect"]
        );
    }

    #[test]
    fn test_merged_with_leaves_inputs_untouched() {
        let public = login_fixes();
        let mut internal = Changes::new();
        internal.append("changed", "Refactor auth");

        let merged = public.merged_with(&internal);
        assert_eq!(merged.count(), 3);
        assert_eq!(public.count(), 2);
        assert_eq!(internal.count(), 1);
    }

    #[test]
    fn test_from_categories_folds_duplicates() {
        let changes = Changes::from_categories(vec![
            Category::new("added").with_entries(["A"]),
            Category::new("fixed").with_entries(["B"]),
            Category::new("added").with_entries(["C"]),
        ]);
        assert_eq!(changes.category_names(), vec!["added", "fixed"]);
        assert_eq!(changes.entries("added"), ["A", "C"]);
    }
}

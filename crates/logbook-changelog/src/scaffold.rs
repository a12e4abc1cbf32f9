//! Building a version from commit history

use crate::parser::{CommitParser, CommitRecord, ConventionalParser};
use crate::types::{Version, UNRELEASED};

/// Options for [`Scaffolder::scaffold`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldOptions {
    /// Identifier of the version to build
    pub version: String,
}

impl Default for ScaffoldOptions {
    fn default() -> Self {
        Self {
            version: UNRELEASED.to_string(),
        }
    }
}

impl ScaffoldOptions {
    /// Options targeting a specific version; an empty identifier means
    /// the pending version
    pub fn for_version(version: impl Into<String>) -> Self {
        let version = version.into();
        if version.trim().is_empty() {
            Self::default()
        } else {
            Self { version }
        }
    }
}

/// Turns a list of commits into a fresh, unmerged [`Version`]
pub struct Scaffolder {
    parser: Box<dyn CommitParser>,
}

impl Scaffolder {
    /// Create a scaffolder using the Conventional Commits classifier
    pub fn new() -> Self {
        Self {
            parser: Box::new(ConventionalParser::new()),
        }
    }

    /// Use a custom classifier
    pub fn with_parser<P: CommitParser + 'static>(mut self, parser: P) -> Self {
        self.parser = Box::new(parser);
        self
    }

    /// Classify each commit in order and append the actionable ones to a
    /// new version's public or internal changes.
    ///
    /// The result is not merged into any changelog.
    pub fn scaffold(&self, commits: &[CommitRecord], options: &ScaffoldOptions) -> Version {
        let mut version = Version::new(options.version.clone());

        for classification in commits.iter().filter_map(|c| self.parser.classify_commit(c)) {
            let changes = if classification.is_internal() {
                &mut version.internal
            } else {
                &mut version.public
            };
            changes.append(&classification.category, classification.description);
        }

        version
    }
}

impl Default for Scaffolder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::Classification;

    fn commits(subjects: &[&str]) -> Vec<CommitRecord> {
        subjects
            .iter()
            .enumerate()
            .map(|(i, s)| CommitRecord::new(format!("{i:07}"), *s))
            .collect()
    }

    #[test]
    fn test_scaffold_routes_by_audience() {
        let records = commits(&[
            "feat: add dark mode",
            "chore: update deps",
            "refactor: simplify handler",
            "fix: crash on start",
            "refactor!: new config format",
            "feat: export to csv",
        ]);

        let version = Scaffolder::new().scaffold(&records, &ScaffoldOptions::default());

        assert!(version.is_unreleased());
        assert!(version.date.is_none());
        assert_eq!(version.public.category_names(), vec!["added", "fixed", "changed"]);
        assert_eq!(version.public.entries("added"), ["Add dark mode", "Export to csv"]);
        assert_eq!(
            version.public.entries("changed"),
            ["BREAKING: New config format"]
        );
        assert_eq!(version.internal.entries("changed"), ["Simplify handler"]);
        assert_eq!(version.count(), 5);
    }

    #[test]
    fn test_scaffold_target_version() {
        let records = commits(&["fix: typo"]);
        let version = Scaffolder::new().scaffold(&records, &ScaffoldOptions::for_version("2.1.0"));
        assert_eq!(version.identifier, "2.1.0");

        assert_eq!(ScaffoldOptions::for_version("").version, UNRELEASED);
    }

    #[test]
    fn test_scaffold_nothing_actionable() {
        let records = commits(&["docs: readme", "Initial commit"]);
        let version = Scaffolder::new().scaffold(&records, &ScaffoldOptions::default());
        assert!(version.is_empty());
    }

    struct EverythingIsAFix;

    impl CommitParser for EverythingIsAFix {
        fn classify(&self, subject: &str) -> Option<Classification> {
            Some(Classification {
                category: "fixed".to_string(),
                description: subject.to_string(),
                breaking: false,
                audience: Default::default(),
            })
        }
    }

    #[test]
    fn test_scaffold_with_custom_parser() {
        let records = commits(&["whatever", "anything"]);
        let version = Scaffolder::new()
            .with_parser(EverythingIsAFix)
            .scaffold(&records, &ScaffoldOptions::default());
        assert_eq!(version.public.entries("fixed"), ["whatever", "anything"]);
    }
}

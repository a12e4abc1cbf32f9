//! Structural and semantic checks over a decoded changelog

use std::collections::HashSet;
use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::changes::Changes;
use crate::query::normalize_version;
use crate::types::Changelog;

static DATE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").expect("Invalid regex"));

/// A single rule violation, keyed by the offending field
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationIssue {
    /// Path of the field (e.g. "versions[1].date")
    pub field: String,
    /// What is wrong with it
    pub message: String,
}

impl ValidationIssue {
    fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Check a changelog and return every violation found.
///
/// `allowed` is the category allow-list; `None` accepts any category name.
pub fn validate(changelog: &Changelog, allowed: Option<&[String]>) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();

    if changelog.project.trim().is_empty() {
        issues.push(ValidationIssue::new("project", "must not be empty"));
    }

    let mut seen = HashSet::new();
    let mut unreleased_count = 0;

    for (i, version) in changelog.versions.iter().enumerate() {
        let prefix = format!("versions[{}]", i);

        if version.identifier.trim().is_empty() {
            issues.push(ValidationIssue::new(
                format!("{prefix}.version"),
                "must not be empty",
            ));
            continue;
        }

        if version.is_unreleased() {
            unreleased_count += 1;
            if unreleased_count > 1 {
                issues.push(ValidationIssue::new(
                    format!("{prefix}.version"),
                    "only one unreleased version allowed",
                ));
            }
        } else {
            if !seen.insert(normalize_version(&version.identifier)) {
                issues.push(ValidationIssue::new(
                    format!("{prefix}.version"),
                    format!("duplicate version {:?}", version.identifier),
                ));
            }

            match version.date.as_deref() {
                None | Some("") => issues.push(ValidationIssue::new(
                    format!("{prefix}.date"),
                    "date required for released versions",
                )),
                Some(date) if !DATE_REGEX.is_match(date) => issues.push(ValidationIssue::new(
                    format!("{prefix}.date"),
                    format!("invalid date format {:?}, expected YYYY-MM-DD", date),
                )),
                Some(_) => {}
            }

            if version.is_empty() {
                issues.push(ValidationIssue::new(
                    format!("{prefix}.changes"),
                    "must have at least one entry",
                ));
            }
        }

        check_entries(&mut issues, &format!("{prefix}.changes"), &version.public);
        check_entries(&mut issues, &format!("{prefix}.internal"), &version.internal);

        if let Some(allowed) = allowed {
            check_categories(&mut issues, &format!("{prefix}.changes"), &version.public, allowed);
            check_categories(&mut issues, &format!("{prefix}.internal"), &version.internal, allowed);
        }
    }

    issues
}

fn check_entries(issues: &mut Vec<ValidationIssue>, prefix: &str, changes: &Changes) {
    for category in changes.categories() {
        for (j, entry) in category.entries.iter().enumerate() {
            if entry.trim().is_empty() {
                issues.push(ValidationIssue::new(
                    format!("{prefix}.{}[{}]", category.name, j),
                    "entry must not be empty",
                ));
            }
        }
    }
}

fn check_categories(
    issues: &mut Vec<ValidationIssue>,
    prefix: &str,
    changes: &Changes,
    allowed: &[String],
) {
    for name in changes.category_names() {
        if !allowed.iter().any(|a| a == name) {
            issues.push(ValidationIssue::new(
                format!("{prefix}.{name}"),
                format!(
                    "unknown category {:?} (allowed: {})",
                    name,
                    allowed.join(", ")
                ),
            ));
        }
    }
}

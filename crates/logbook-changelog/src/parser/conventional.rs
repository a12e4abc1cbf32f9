//! Conventional Commits classifier
//!
//! Maps subjects following https://www.conventionalcommits.org/ onto
//! changelog categories.

use regex::Regex;
use std::sync::LazyLock;

use super::{Audience, Classification, CommitParser};

/// Regex for parsing conventional commit subjects
static CONVENTIONAL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<type>\w+)(?:\((?P<scope>[\w-]+)\))?(?P<breaking>!)?\s*:\s*(?P<description>.+)$")
        .expect("Invalid regex")
});

/// Commit types that never reach a changelog unless marked breaking
const SKIPPED_TYPES: &[&str] = &["chore", "docs", "style", "test", "ci", "build"];

/// Commit type to category
const TYPE_CATEGORIES: &[(&str, &str)] = &[
    ("feat", "added"),
    ("fix", "fixed"),
    ("refactor", "changed"),
    ("perf", "changed"),
    ("deprecate", "deprecated"),
    ("remove", "removed"),
];

/// Commit types routed to the internal changes
const INTERNAL_TYPES: &[&str] = &["refactor", "perf"];

const BREAKING_CATEGORY: &str = "changed";
const BREAKING_PREFIX: &str = "BREAKING: ";

/// Classifier for Conventional Commits subjects.
///
/// The subject must start with the type; a scope is limited to word
/// characters and dashes. Commits whose first sentence is empty are skipped.
#[derive(Debug, Clone, Default)]
pub struct ConventionalParser;

impl ConventionalParser {
    /// Create a new classifier
    pub fn new() -> Self {
        Self
    }
}

impl CommitParser for ConventionalParser {
    fn classify(&self, subject: &str) -> Option<Classification> {
        let caps = CONVENTIONAL_REGEX.captures(subject)?;

        let commit_type = caps.name("type")?.as_str().to_lowercase();
        let breaking = caps.name("breaking").is_some();
        let description = clean_description(caps.name("description")?.as_str());

        if SKIPPED_TYPES.contains(&commit_type.as_str()) && !breaking {
            return None;
        }

        let mapped = TYPE_CATEGORIES
            .iter()
            .find(|(t, _)| *t == commit_type)
            .map(|(_, category)| *category);

        let classification = if breaking {
            Classification {
                category: BREAKING_CATEGORY.to_string(),
                description: format!("{BREAKING_PREFIX}{description}"),
                breaking,
                audience: Audience::Public,
            }
        } else {
            let audience = if INTERNAL_TYPES.contains(&commit_type.as_str()) {
                Audience::Internal
            } else {
                Audience::Public
            };
            Classification {
                category: mapped?.to_string(),
                description,
                breaking,
                audience,
            }
        };

        if description_is_empty(&classification) {
            return None;
        }

        Some(classification)
    }
}

fn description_is_empty(classification: &Classification) -> bool {
    let text = classification
        .description
        .strip_prefix(BREAKING_PREFIX)
        .unwrap_or(&classification.description);
    text.trim().is_empty()
}

/// Keep the first sentence and capitalize it
fn clean_description(description: &str) -> String {
    let trimmed = description.trim();
    let sentence = match trimmed.find(['.', '!', '?']) {
        Some(index) => &trimmed[..index],
        None => trimmed,
    };
    capitalize(sentence.trim())
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

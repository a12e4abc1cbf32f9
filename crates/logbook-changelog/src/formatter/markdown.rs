//! Markdown changelog formatter
//!
//! Produces a Keep a Changelog document: https://keepachangelog.com/

use tracing::{debug, instrument};

use super::{title_case, version_heading, ChangelogFormatter, RenderOptions};
use crate::types::{Changelog, Version};

/// Markdown changelog formatter
#[derive(Debug, Clone, Default)]
pub struct MarkdownFormatter;

impl MarkdownFormatter {
    /// Create a new markdown formatter
    pub fn new() -> Self {
        Self
    }

    fn compare_links(&self, changelog: &Changelog, repo_url: &str) -> String {
        let repo_url = repo_url.trim_end_matches('/');
        let compare = if repo_url.contains("gitlab") {
            "/-/compare/"
        } else {
            "/compare/"
        };

        let mut output = String::new();
        for (i, version) in changelog.versions.iter().enumerate() {
            let Some(previous) = changelog.versions.get(i + 1) else {
                break;
            };

            if version.is_unreleased() {
                output.push_str(&format!(
                    "[Unreleased]: {}{}{}...HEAD\n",
                    repo_url,
                    compare,
                    tag_name(&previous.identifier)
                ));
            } else if !previous.is_unreleased() {
                output.push_str(&format!(
                    "[{}]: {}{}{}...{}\n",
                    version.identifier,
                    repo_url,
                    compare,
                    tag_name(&previous.identifier),
                    tag_name(&version.identifier)
                ));
            }
        }
        output
    }
}

/// Tag name for a version identifier, adding a `v` unless one is present
fn tag_name(identifier: &str) -> String {
    if identifier.starts_with(['v', 'V']) {
        identifier.to_string()
    } else {
        format!("v{identifier}")
    }
}

impl ChangelogFormatter for MarkdownFormatter {
    #[instrument(skip_all, fields(project = %changelog.project, version_count = changelog.versions.len()))]
    fn format(&self, changelog: &Changelog, options: &RenderOptions) -> String {
        let mut output = String::new();

        output.push_str("# Changelog\n\n");
        output.push_str(&format!(
            "All notable changes to {} will be documented in this file.\n\n",
            changelog.project
        ));
        output.push_str(
            "The format is based on [Keep a Changelog](https://keepachangelog.com/en/1.1.0/).\n\n",
        );

        for version in &changelog.versions {
            output.push_str(&self.format_version(version, options));
        }

        if let Some(repo_url) = options.repo_url.as_deref().filter(|u| !u.is_empty()) {
            output.push_str(&self.compare_links(changelog, repo_url));
        }

        debug!(output_len = output.len(), "markdown changelog formatted");
        output
    }

    fn format_version(&self, version: &Version, options: &RenderOptions) -> String {
        let mut output = format!("## {}\n\n", version_heading(version));

        for category in version.changes(options.scope()).categories() {
            if category.entries.is_empty() {
                continue;
            }

            output.push_str(&format!("### {}\n\n", title_case(&category.name)));
            for entry in &category.entries {
                output.push_str(&format!("- {}\n", entry));
            }
            output.push('\n');
        }

        output
    }

    fn extension(&self) -> &'static str {
        "md"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Changelog {
        let mut unreleased = Version::unreleased();
        unreleased.public.append("fixed", "Fix crash");
        unreleased.public.append("added", "Dark mode");
        unreleased.internal.append("changed", "Refactor router");

        let mut v2 = Version::new("2.0.0").with_date("2024-06-01");
        v2.public.append("performance", "Faster startup");

        let mut v1 = Version::new("v1.0.0").with_date("2024-01-01");
        v1.public.append("added", "Initial release");

        Changelog::new("widget")
            .with_version(unreleased)
            .with_version(v2)
            .with_version(v1)
    }

    #[test]
    fn test_format_document() {
        let output = MarkdownFormatter::new().format(&sample(), &RenderOptions::new());

        assert!(output.starts_with("# Changelog\n\nAll notable changes to widget will be documented"));
        assert!(output.contains("[Keep a Changelog](https://keepachangelog.com/en/1.1.0/)"));
        assert!(output.contains("## [Unreleased]\n\n### Fixed\n\n- Fix crash\n\n### Added\n\n- Dark mode\n\n"));
        assert!(output.contains("## [2.0.0] - 2024-06-01\n\n### Performance\n\n- Faster startup\n"));
        assert!(output.contains("## [v1.0.0] - 2024-01-01"));
        assert!(!output.contains("Refactor router"));
        assert!(!output.contains("compare"));
    }

    #[test]
    fn test_format_keeps_version_order() {
        let output = MarkdownFormatter::new().format(&sample(), &RenderOptions::new());
        let unreleased = output.find("[Unreleased]").unwrap();
        let v2 = output.find("[2.0.0]").unwrap();
        let v1 = output.find("[v1.0.0]").unwrap();
        assert!(unreleased < v2 && v2 < v1);
    }

    #[test]
    fn test_format_version_with_internal() {
        let changelog = sample();
        let formatter = MarkdownFormatter::new();

        let output = formatter.format_version(
            &changelog.versions[0],
            &RenderOptions::new().with_internal(true),
        );
        assert!(output.contains("### Changed\n\n- Refactor router\n"));
        assert!(output.find("### Added").unwrap() < output.find("### Changed").unwrap());
    }

    #[test]
    fn test_format_empty_version() {
        let output = MarkdownFormatter::new().format_version(&Version::unreleased(), &RenderOptions::new());
        assert_eq!(output, "## [Unreleased]\n\n");
    }

    #[test]
    fn test_compare_links() {
        let options = RenderOptions::new().with_repo_url("https://github.com/acme/widget/");
        let output = MarkdownFormatter::new().format(&sample(), &options);

        assert!(output.contains(
            "[Unreleased]: https://github.com/acme/widget/compare/v2.0.0...HEAD\n"
        ));
        assert!(output.contains(
            "[2.0.0]: https://github.com/acme/widget/compare/v1.0.0...v2.0.0\n"
        ));
        assert!(!output.contains("[v1.0.0]:"));
        assert!(!output.contains("vv1.0.0"));
    }

    #[test]
    fn test_gitlab_compare_links() {
        let options = RenderOptions::new().with_repo_url("https://gitlab.com/acme/widget");
        let output = MarkdownFormatter::new().format(&sample(), &options);
        assert!(output.contains("https://gitlab.com/acme/widget/-/compare/v2.0.0...HEAD"));
    }

    #[test]
    fn test_no_links_for_single_version() {
        let changelog = Changelog::new("widget").with_version(Version::unreleased());
        let options = RenderOptions::new().with_repo_url("https://github.com/acme/widget");
        let output = MarkdownFormatter::new().format(&changelog, &options);
        assert!(!output.contains("compare"));
    }

    #[test]
    fn test_tag_name() {
        assert_eq!(tag_name("1.0.0"), "v1.0.0");
        assert_eq!(tag_name("v1.0.0"), "v1.0.0");
        assert_eq!(tag_name("V2"), "V2");
    }

    #[test]
    fn test_extension() {
        assert_eq!(MarkdownFormatter::new().extension(), "md");
    }
}

//! Remove command

use clap::Args;
use tracing::info;

use logbook_changelog::UNRELEASED;
use logbook_core::ChangelogError;

use super::add::normalize_category;
use crate::cli::output;
use crate::cli::Cli;

/// Remove an entry from a category
#[derive(Debug, Args)]
#[command(after_help = "Examples:
  logbook remove -c added \"Support dark mode\"
  logbook remove -c added --match \"dark mode\"
  logbook remove -c fixed --version 1.2.0 \"Fix login timeout\"
  logbook remove -c changed --internal \"Refactor auth\"")]
pub struct RemoveCommand {
    /// Entry text (or a fragment of it with --match)
    pub entry: String,

    /// Category (e.g. added, fixed, changed)
    #[arg(short, long)]
    pub category: String,

    /// Target version
    #[arg(long, default_value = UNRELEASED)]
    pub version: String,

    /// Remove from internal entries
    #[arg(short, long)]
    pub internal: bool,

    /// Use case-insensitive substring matching
    #[arg(short, long = "match")]
    pub substring: bool,
}

impl RemoveCommand {
    /// Execute the remove command
    pub fn execute(&self, cli: &Cli) -> anyhow::Result<()> {
        info!(
            category = %self.category,
            version = %self.version,
            internal = self.internal,
            substring = self.substring,
            "executing remove command"
        );
        let category = normalize_category(&self.category);
        if self.entry.trim().is_empty() {
            anyhow::bail!("entry text must not be empty");
        }

        let config = cli.load_config()?;
        let mut changelog = cli.load_changelog(&config)?;
        let version = changelog.get_version_mut(&self.version)?;
        let identifier = version.identifier.clone();

        let changes = if self.internal {
            &mut version.internal
        } else {
            &mut version.public
        };
        let removed = changes
            .remove(&category, &self.entry, self.substring)
            .map_err(describe_remove_error)?;

        cli.save_changelog(&changelog)?;

        if !cli.quiet {
            let audience = if self.internal { "internal" } else { "public" };
            output::success(&format!(
                "Removed {} {} entry from {}: {}",
                audience,
                output::category_style().apply_to(&category),
                output::version_style().apply_to(&identifier),
                removed
            ));
        }

        Ok(())
    }
}

/// Spell out every candidate of an ambiguous match
fn describe_remove_error(err: ChangelogError) -> anyhow::Error {
    match err {
        ChangelogError::AmbiguousMatch {
            category,
            text,
            matches,
        } => {
            let mut message = format!("multiple entries match {:?} in {}:\n", text, category);
            for candidate in &matches {
                message.push_str(&format!("  - {}\n", candidate));
            }
            message.push_str("use the exact text to remove a specific entry");
            anyhow::anyhow!(message)
        }
        other => other.into(),
    }
}

//! Add command

use clap::Args;
use tracing::info;

use logbook_changelog::{normalize_version, Changelog, Version, UNRELEASED};
use logbook_core::Config;

use crate::cli::output;
use crate::cli::Cli;

/// Add entries to a category
#[derive(Debug, Args)]
#[command(after_help = "Examples:
  logbook add added \"Support dark mode\"
  logbook add fixed --version 1.2.0 \"Fix login timeout\"
  logbook add changed --internal \"Refactor auth middleware\"
  logbook add added \"Feature A\" \"Feature B\"")]
pub struct AddCommand {
    /// Category (e.g. added, fixed, changed)
    pub category: String,

    /// Entry text, one argument per entry
    #[arg(required = true)]
    pub entries: Vec<String>,

    /// Target version
    #[arg(long, default_value = UNRELEASED)]
    pub version: String,

    /// Add as internal entries
    #[arg(short, long)]
    pub internal: bool,
}

impl AddCommand {
    /// Execute the add command
    pub fn execute(&self, cli: &Cli) -> anyhow::Result<()> {
        info!(
            category = %self.category,
            count = self.entries.len(),
            version = %self.version,
            internal = self.internal,
            "executing add command"
        );
        let config = cli.load_config()?;
        let category = normalize_category(&self.category);
        check_category(&config, &category)?;

        if self.entries.iter().any(|e| e.trim().is_empty()) {
            anyhow::bail!("entry text must not be empty");
        }

        let mut changelog = cli.load_changelog(&config)?;
        let version = target_version(&mut changelog, &self.version)?;
        let identifier = version.identifier.clone();

        let changes = if self.internal {
            &mut version.internal
        } else {
            &mut version.public
        };
        for entry in &self.entries {
            changes.append(&category, entry.clone());
        }

        cli.save_changelog(&changelog)?;

        if !cli.quiet {
            let audience = if self.internal { "internal" } else { "public" };
            output::success(&format!(
                "Added {} {} {} {} to {}",
                self.entries.len(),
                audience,
                output::category_style().apply_to(&category),
                output::entries_noun(self.entries.len()),
                output::version_style().apply_to(&identifier)
            ));
        }

        Ok(())
    }
}

/// Lowercase and trim a category name
pub(crate) fn normalize_category(category: &str) -> String {
    category.trim().to_lowercase()
}

/// Reject a category the configured allow-list does not contain
pub(crate) fn check_category(config: &Config, category: &str) -> anyhow::Result<()> {
    let Some(allowed) = config.allowed_categories() else {
        return Ok(());
    };

    if allowed.iter().any(|a| a == category) {
        Ok(())
    } else {
        anyhow::bail!(
            "unknown category {:?} (allowed: {})",
            category,
            allowed.join(", ")
        )
    }
}

/// The version entries are added to; the pending version is created on demand,
/// any other version must already exist
fn target_version<'a>(changelog: &'a mut Changelog, version: &str) -> anyhow::Result<&'a mut Version> {
    if normalize_version(version) == UNRELEASED {
        return Ok(changelog.ensure_unreleased());
    }

    changelog.get_version_mut(version).map_err(|_| {
        anyhow::anyhow!(
            "version {:?} not found, entries can only be added to existing versions",
            version
        )
    })
}

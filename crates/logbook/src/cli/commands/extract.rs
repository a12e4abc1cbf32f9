//! Extract command

use clap::Args;
use tracing::info;

use logbook_changelog::{ChangelogFormatter, MarkdownFormatter, RenderOptions};

use crate::cli::Cli;

/// Print a single version as Markdown, e.g. for release notes
#[derive(Debug, Args)]
#[command(after_help = "Examples:
  logbook extract 1.2.0
  logbook extract 1.2.0 > notes.md
  logbook extract unreleased --internal")]
pub struct ExtractCommand {
    /// Version to extract
    pub version: String,

    /// Include internal entries
    #[arg(long)]
    pub internal: bool,
}

impl ExtractCommand {
    /// Execute the extract command
    pub fn execute(&self, cli: &Cli) -> anyhow::Result<()> {
        info!(version = %self.version, internal = self.internal, "executing extract command");
        let config = cli.load_config()?;
        let changelog = cli.load_changelog(&config)?;
        let version = changelog.get_version(&self.version)?;

        let options = RenderOptions::new().with_internal(self.internal || config.include_internal);
        print!("{}", MarkdownFormatter::new().format_version(version, &options));
        Ok(())
    }
}

//! Sync command

use std::path::PathBuf;

use clap::Args;
use tracing::{debug, info};

use logbook_core::Config;

use crate::cli::output;
use crate::cli::{render_markdown, Cli};

/// Render the Markdown changelog file(s)
#[derive(Debug, Args)]
#[command(after_help = "Examples:
  logbook sync
  logbook sync --internal
  logbook sync --split")]
pub struct SyncCommand {
    /// Include internal entries in the rendered file
    #[arg(long, conflicts_with = "split")]
    pub internal: bool,

    /// Write a public file and a separate internal file
    #[arg(long)]
    pub split: bool,
}

impl SyncCommand {
    /// Execute the sync command
    pub fn execute(&self, cli: &Cli) -> anyhow::Result<()> {
        info!(internal = self.internal, split = self.split, "executing sync command");
        let config = cli.load_config()?;
        let changelog = cli.load_changelog(&config)?;

        for (path, include_internal) in render_targets(&config, self.internal, self.split) {
            let rendered = render_markdown(&changelog, &config, include_internal);
            let current = std::fs::read_to_string(&path).ok();

            if current.as_deref() == Some(rendered.as_str()) {
                debug!(path = %path.display(), "rendered file unchanged");
                if !cli.quiet {
                    output::info(&format!(
                        "{} is up to date",
                        output::path_style().apply_to(path.display())
                    ));
                }
                continue;
            }

            std::fs::write(&path, &rendered)
                .map_err(|e| anyhow::anyhow!("writing {}: {}", path.display(), e))?;
            if !cli.quiet {
                output::success(&format!(
                    "Generated {}",
                    output::path_style().apply_to(path.display())
                ));
            }
        }

        Ok(())
    }
}

/// Files to render, each paired with whether it carries internal entries.
///
/// A single file follows `--internal` or the configured default; a split
/// render always produces a public file and a full internal one.
pub(crate) fn render_targets(config: &Config, internal: bool, split: bool) -> Vec<(PathBuf, bool)> {
    if split {
        vec![
            (config.public_file_path(), false),
            (config.internal_file_path(), true),
        ]
    } else {
        vec![(config.public_file_path(), internal || config.include_internal)]
    }
}

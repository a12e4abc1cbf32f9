//! Check command

use clap::Args;
use tracing::{info, warn};

use super::sync::render_targets;
use crate::cli::output;
use crate::cli::{render_markdown, Cli};
use crate::exit_codes;

/// Verify the Markdown changelog file(s) are up to date
#[derive(Debug, Args)]
#[command(after_help = "Exit codes:
  0  rendered files are up to date
  1  a rendered file is missing or out of date
  2  the changelog document is invalid")]
pub struct CheckCommand {
    /// Check a file rendered with internal entries
    #[arg(long, conflicts_with = "split")]
    pub internal: bool,

    /// Check both the public and the internal file
    #[arg(long)]
    pub split: bool,
}

/// Result of comparing one rendered file with its expected content
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FileState {
    InSync,
    Missing,
    OutOfDate,
}

impl CheckCommand {
    /// Execute the check command
    pub fn execute(&self, cli: &Cli) -> anyhow::Result<()> {
        info!(internal = self.internal, split = self.split, "executing check command");
        let config = cli.load_config()?;
        let changelog = match cli.load_changelog(&config) {
            Ok(changelog) => changelog,
            Err(e) => {
                output::error(&format!("validation error: {}", e));
                std::process::exit(exit_codes::VALIDATION_ERROR);
            }
        };

        let mut stale = false;
        for (path, include_internal) in render_targets(&config, self.internal, self.split) {
            let expected = render_markdown(&changelog, &config, include_internal);
            let state = compare(std::fs::read_to_string(&path).ok().as_deref(), &expected);
            let shown = output::path_style().apply_to(path.display());

            match state {
                FileState::InSync => {
                    if !cli.quiet {
                        output::success(&format!("{} is in sync", shown));
                    }
                }
                FileState::Missing => {
                    warn!(path = %path.display(), "rendered file missing");
                    output::error(&format!("{} is missing, run 'logbook sync'", shown));
                    stale = true;
                }
                FileState::OutOfDate => {
                    warn!(path = %path.display(), "rendered file out of date");
                    output::error(&format!("{} is out of date, run 'logbook sync'", shown));
                    stale = true;
                }
            }
        }

        if stale {
            std::process::exit(exit_codes::OUT_OF_SYNC);
        }

        Ok(())
    }
}

fn compare(current: Option<&str>, expected: &str) -> FileState {
    match current {
        None => FileState::Missing,
        Some(content) if content == expected => FileState::InSync,
        Some(_) => FileState::OutOfDate,
    }
}

//! Release command

use chrono::{Local, NaiveDate};
use clap::Args;
use tracing::info;

use crate::cli::output;
use crate::cli::Cli;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Promote unreleased changes to a versioned release
#[derive(Debug, Args)]
#[command(
    long_about = "Stamps the unreleased block with the given version and date, then creates a fresh unreleased block."
)]
pub struct ReleaseCommand {
    /// Version identifier for the release
    pub version: String,

    /// Release date in YYYY-MM-DD format (default: today)
    #[arg(long)]
    pub date: Option<String>,
}

impl ReleaseCommand {
    /// Execute the release command
    pub fn execute(&self, cli: &Cli) -> anyhow::Result<()> {
        info!(version = %self.version, date = ?self.date, "executing release command");
        let version = self.version.trim();
        if version.is_empty() {
            anyhow::bail!("version must not be empty");
        }
        let date = release_date(self.date.as_deref())?;

        let config = cli.load_config()?;
        let mut changelog = cli.load_changelog(&config)?;
        changelog.release(version, &date)?;
        cli.save_changelog(&changelog)?;

        if !cli.quiet {
            output::success(&format!(
                "Released {} ({}), unreleased block reset",
                output::version_style().apply_to(version),
                date
            ));
        }

        Ok(())
    }
}

/// The given date checked against YYYY-MM-DD, or today
fn release_date(date: Option<&str>) -> anyhow::Result<String> {
    match date {
        Some(date) => {
            NaiveDate::parse_from_str(date, DATE_FORMAT).map_err(|_| {
                anyhow::anyhow!("invalid date {:?}, expected YYYY-MM-DD", date)
            })?;
            Ok(date.to_string())
        }
        None => Ok(Local::now().format(DATE_FORMAT).to_string()),
    }
}

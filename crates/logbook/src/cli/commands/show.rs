//! Show command

use clap::Args;
use serde_json::{json, Value};
use tracing::info;

use logbook_changelog::{
    Changelog, ChangelogFormatter, Entry, RenderOptions, Scope, TerminalFormatter, Version,
};

use crate::cli::output;
use crate::cli::{Cli, OutputFormat};

/// Display the changelog in the terminal
#[derive(Debug, Args)]
#[command(after_help = "Examples:
  logbook show
  logbook show 1.2.0
  logbook show -n 5
  logbook show --internal --plain")]
pub struct ShowCommand {
    /// Only show this version
    #[arg(conflicts_with = "last")]
    pub version: Option<String>,

    /// Show the N most recent entries
    #[arg(short = 'n', long, value_name = "N")]
    pub last: Option<usize>,

    /// Disable colours
    #[arg(long)]
    pub plain: bool,

    /// Include internal entries
    #[arg(long)]
    pub internal: bool,
}

impl ShowCommand {
    /// Execute the show command
    pub fn execute(&self, cli: &Cli) -> anyhow::Result<()> {
        info!(
            version = ?self.version,
            last = ?self.last,
            internal = self.internal,
            "executing show command"
        );
        let config = cli.load_config()?;
        let changelog = cli.load_changelog(&config)?;
        let options = RenderOptions::new().with_internal(self.internal || config.include_internal);
        let scope = options.scope();

        if let Some(n) = self.last {
            let entries = changelog.last_n(n, scope);
            match cli.format {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&entries)?),
                OutputFormat::Text => {
                    if entries.is_empty() && !cli.quiet {
                        output::info("No entries yet");
                    }
                    for entry in &entries {
                        println!("{}", entry_line(entry));
                    }
                }
            }
            return Ok(());
        }

        let formatter = TerminalFormatter::new().with_plain(self.plain);
        match &self.version {
            Some(id) => {
                let version = changelog.get_version(id)?;
                match cli.format {
                    OutputFormat::Json => {
                        println!("{}", serde_json::to_string_pretty(&version_json(version, scope))?)
                    }
                    OutputFormat::Text => print!("{}", formatter.format_version(version, &options)),
                }
            }
            None => match cli.format {
                OutputFormat::Json => {
                    println!("{}", serde_json::to_string_pretty(&changelog_json(&changelog, scope))?)
                }
                OutputFormat::Text => print!("{}", formatter.format(&changelog, &options)),
            },
        }

        Ok(())
    }
}

/// `[version] category: text`
fn entry_line(entry: &Entry) -> String {
    format!("[{}] {}: {}", entry.version, entry.category, entry.text)
}

/// A version with only the entries visible under `scope`
fn version_json(version: &Version, scope: Scope) -> Value {
    json!({
        "version": version.identifier,
        "date": version.date,
        "changes": version.changes(scope),
    })
}

fn changelog_json(changelog: &Changelog, scope: Scope) -> Value {
    json!({
        "project": changelog.project,
        "versions": changelog
            .versions
            .iter()
            .map(|v| version_json(v, scope))
            .collect::<Vec<_>>(),
    })
}

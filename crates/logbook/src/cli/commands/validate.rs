//! Validate command

use clap::Args;
use console::style;
use serde::Serialize;
use tracing::info;

use logbook_changelog::store;
use logbook_core::ChangelogError;

use crate::cli::{Cli, OutputFormat};
use crate::exit_codes;

/// Validate the changelog document
#[derive(Debug, Args)]
pub struct ValidateCommand {}

/// Machine-readable validation result
#[derive(Debug, Serialize)]
struct ValidationReport {
    valid: bool,
    file: String,
    errors: Vec<String>,
}

impl ValidateCommand {
    /// Execute the validate command
    pub fn execute(&self, cli: &Cli) -> anyhow::Result<()> {
        info!("executing validate command");
        let config = cli.load_config()?;
        let path = cli.changelog_path();
        let allowed = config.allowed_categories();

        let errors = validation_errors(store::load(path, allowed.as_deref()).err());
        let passed = errors.is_empty();

        match cli.format {
            OutputFormat::Json => {
                let report = ValidationReport {
                    valid: passed,
                    file: path.display().to_string(),
                    errors,
                };
                println!("{}", serde_json::to_string_pretty(&report)?);
            }
            OutputFormat::Text => {
                if passed {
                    if !cli.quiet {
                        println!(
                            "{} {} is valid",
                            style("✓").green().bold(),
                            style(path.display()).cyan()
                        );
                    }
                } else {
                    eprintln!("{}", style("Errors:").red().bold());
                    for error in &errors {
                        eprintln!("  {} {}", style("✗").red(), error);
                    }
                    eprintln!(
                        "{} with {} error(s)",
                        style("✗ Validation failed").red().bold(),
                        errors.len()
                    );
                }
            }
        }

        if !passed {
            std::process::exit(exit_codes::VALIDATION_ERROR);
        }

        Ok(())
    }
}

/// Every problem a load reported, one message per rule violation
fn validation_errors(err: Option<ChangelogError>) -> Vec<String> {
    match err {
        None => Vec::new(),
        Some(ChangelogError::ValidationFailed(messages)) => messages,
        Some(other) => vec![other.to_string()],
    }
}

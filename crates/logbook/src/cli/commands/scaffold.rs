//! Scaffold command

use chrono::Local;
use clap::Args;
use console::style;
use tracing::{debug, info};

use logbook_changelog::{
    encode_version_entry, validate, Changelog, CommitRecord, ScaffoldOptions, Scaffolder, Version,
};
use logbook_core::Config;
use logbook_git::{CommitInfo, GitRepo};

use crate::cli::output;
use crate::cli::{Cli, OutputFormat};

/// Generate entries from conventional commits
#[derive(Debug, Args)]
#[command(after_help = "Examples:
  logbook scaffold
  logbook scaffold --version 1.3.0
  logbook scaffold --write")]
pub struct ScaffoldCommand {
    /// Version to scaffold (default: unreleased)
    #[arg(long)]
    pub version: Option<String>,

    /// Merge the scaffolded entries into the changelog instead of printing them
    #[arg(short, long)]
    pub write: bool,
}

impl ScaffoldCommand {
    /// Execute the scaffold command
    pub fn execute(&self, cli: &Cli) -> anyhow::Result<()> {
        info!(version = ?self.version, write = self.write, "executing scaffold command");
        let cwd = std::env::current_dir()?;
        let repo = GitRepo::discover(&cwd)?;

        let latest_tag = repo.latest_tag()?;
        debug!(tag = ?latest_tag, "scaffolding since tag");
        let commits = repo.commits_since(latest_tag.as_deref())?;

        if commits.is_empty() {
            if !cli.quiet {
                output::warning(&match &latest_tag {
                    Some(tag) => format!("No commits found since {}", tag),
                    None => "No commits found".to_string(),
                });
            }
            return Ok(());
        }

        let options = ScaffoldOptions::for_version(self.version.clone().unwrap_or_default());
        let version = Scaffolder::new().scaffold(&commit_records(&commits), &options);

        if version.is_empty() {
            if !cli.quiet {
                output::warning(&format!(
                    "None of the {} commit(s) follow the conventional commit format",
                    commits.len()
                ));
            }
            return Ok(());
        }

        if !self.write {
            match cli.format {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&version)?),
                OutputFormat::Text => print!("{}", encode_version_entry(&version)?),
            }
            return Ok(());
        }

        let config = cli.load_config()?;
        check_scaffolded_categories(&config, &version)?;
        let mut changelog = cli.load_changelog(&config)?;
        let today = Local::now().format("%Y-%m-%d").to_string();
        let count = version.count();
        let identifier = merge_scaffolded(&mut changelog, version, &today);

        let issues = validate(&changelog, config.allowed_categories().as_deref());
        if !issues.is_empty() {
            let details: Vec<String> = issues.iter().map(ToString::to_string).collect();
            anyhow::bail!(
                "scaffolded changes would leave the changelog invalid, nothing written:\n  {}",
                details.join("\n  ")
            );
        }
        cli.save_changelog(&changelog)?;

        if !cli.quiet {
            output::success(&format!(
                "Scaffolded {} {} from {} commit(s) into {}",
                count,
                output::entries_noun(count),
                commits.len(),
                output::version_style().apply_to(&identifier)
            ));
            if let Some(tag) = latest_tag {
                println!("  {} since {}", style("→").dim(), style(tag).cyan());
            }
        }

        Ok(())
    }
}

fn commit_records(commits: &[CommitInfo]) -> Vec<CommitRecord> {
    commits
        .iter()
        .map(|c| CommitRecord::new(c.hash.clone(), c.subject.clone()))
        .collect()
}

/// Reject scaffolded categories outside the configured allow-list
fn check_scaffolded_categories(config: &Config, version: &Version) -> anyhow::Result<()> {
    let Some(allowed) = config.allowed_categories() else {
        return Ok(());
    };

    let mut rejected: Vec<&str> = Vec::new();
    for name in version
        .public
        .category_names()
        .into_iter()
        .chain(version.internal.category_names())
    {
        if !allowed.iter().any(|a| a == name) && !rejected.contains(&name) {
            rejected.push(name);
        }
    }

    if rejected.is_empty() {
        return Ok(());
    }

    anyhow::bail!(
        "scaffolded categories not allowed by the configuration: {} (allowed: {}); \
         add them to `categories` or set `strict_categories: false`",
        rejected.join(", "),
        allowed.join(", ")
    )
}

/// Merge a scaffolded version into the changelog and return the identifier
/// that received the entries.
///
/// Entries are appended to a matching version when one exists. Otherwise the
/// version is inserted as the newest release (after the pending version),
/// dated `today` so the document stays valid.
fn merge_scaffolded(changelog: &mut Changelog, scaffolded: Version, today: &str) -> String {
    let existing = if scaffolded.is_unreleased() {
        Some(changelog.ensure_unreleased())
    } else {
        changelog.get_version_mut(&scaffolded.identifier).ok()
    };

    if let Some(target) = existing {
        target.public.merge(&scaffolded.public);
        target.internal.merge(&scaffolded.internal);
        return target.identifier.clone();
    }

    let identifier = scaffolded.identifier.clone();
    let position = usize::from(changelog.versions.first().is_some_and(Version::is_unreleased));
    changelog
        .versions
        .insert(position, scaffolded.with_date(today));
    identifier
}

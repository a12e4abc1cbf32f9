//! CLI definition and command handling

pub mod commands;
pub mod output;

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use tracing::debug;

use logbook_changelog::{
    store, Changelog, ChangelogFormatter, MarkdownFormatter, RenderOptions,
};
use logbook_core::config::{
    load_config, load_config_or_default, Config, DEFAULT_CHANGELOG_FILE,
};
use logbook_core::ChangelogError;
use logbook_git::GitRepo;

use commands::{
    AddCommand, CheckCommand, CompletionsCommand, ExtractCommand, InitCommand, ReleaseCommand,
    RemoveCommand, ScaffoldCommand, ShowCommand, SyncCommand, ValidateCommand,
};

/// Logbook - YAML-first changelog management
#[derive(Debug, Parser)]
#[command(name = "logbook")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to the changelog document
    #[arg(short, long, global = true, default_value = DEFAULT_CHANGELOG_FILE)]
    pub file: PathBuf,

    /// Path to the config file (default: search from the working directory)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output format
    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,

    /// Working directory
    #[arg(short = 'C', long, global = true)]
    pub directory: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format for CLI
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text output
    #[default]
    Text,
    /// JSON output
    Json,
}

/// Available commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Create a new changelog document
    Init(InitCommand),

    /// Add entries to a category
    Add(AddCommand),

    /// Remove an entry from a category
    Remove(RemoveCommand),

    /// Promote unreleased changes to a versioned release
    Release(ReleaseCommand),

    /// Generate entries from conventional commits
    Scaffold(ScaffoldCommand),

    /// Display the changelog in the terminal
    Show(ShowCommand),

    /// Print a single version as Markdown
    Extract(ExtractCommand),

    /// Render the Markdown changelog file(s)
    Sync(SyncCommand),

    /// Verify the Markdown changelog file(s) are up to date
    Check(CheckCommand),

    /// Validate the changelog document
    Validate(ValidateCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}

impl Cli {
    /// Execute the CLI command
    pub fn execute(self) -> anyhow::Result<()> {
        // Change to specified directory if provided
        if let Some(dir) = &self.directory {
            std::env::set_current_dir(dir)?;
        }

        match self.command {
            Commands::Init(ref cmd) => cmd.execute(&self),
            Commands::Add(ref cmd) => cmd.execute(&self),
            Commands::Remove(ref cmd) => cmd.execute(&self),
            Commands::Release(ref cmd) => cmd.execute(&self),
            Commands::Scaffold(ref cmd) => cmd.execute(&self),
            Commands::Show(ref cmd) => cmd.execute(&self),
            Commands::Extract(ref cmd) => cmd.execute(&self),
            Commands::Sync(ref cmd) => cmd.execute(&self),
            Commands::Check(ref cmd) => cmd.execute(&self),
            Commands::Validate(ref cmd) => cmd.execute(&self),
            Commands::Completions(ref cmd) => cmd.execute(&self),
        }
    }

    /// Load the configuration named by `--config`, or the nearest one found
    /// from the working directory
    pub fn load_config(&self) -> anyhow::Result<Config> {
        let cwd = std::env::current_dir()?;
        resolve_config(self.config.as_deref(), &cwd)
    }

    /// Path of the changelog document
    pub fn changelog_path(&self) -> &Path {
        &self.file
    }

    /// Load and validate the changelog document against the configured
    /// category allow-list
    pub fn load_changelog(&self, config: &Config) -> anyhow::Result<Changelog> {
        let allowed = config.allowed_categories();
        match store::load(self.changelog_path(), allowed.as_deref()) {
            Ok(changelog) => Ok(changelog),
            Err(ChangelogError::FileNotFound(path)) => anyhow::bail!(
                "{} not found, run 'logbook init' first",
                path.display()
            ),
            Err(e) => Err(e.into()),
        }
    }

    /// Save the changelog document
    pub fn save_changelog(&self, changelog: &Changelog) -> anyhow::Result<()> {
        store::save(changelog, self.changelog_path()).map_err(|e| {
            anyhow::anyhow!("saving {}: {}", self.changelog_path().display(), e)
        })
    }
}

/// An explicit config path, else the nearest config file above `dir`.
///
/// Only a missing file falls back to the defaults; a config that exists but
/// does not load is reported.
fn resolve_config(explicit: Option<&Path>, dir: &Path) -> anyhow::Result<Config> {
    match explicit {
        Some(path) => load_config(path)
            .map_err(|e| anyhow::anyhow!("loading {}: {}", path.display(), e)),
        None => {
            let (config, path) = load_config_or_default(dir)
                .map_err(|e| anyhow::anyhow!("loading config: {}", e))?;
            debug!(path = ?path, "resolved config");
            Ok(config)
        }
    }
}

/// The configured repository URL, falling back to the git `origin` remote
pub fn resolve_repo_url(config: &Config) -> Option<String> {
    if let Some(url) = config.repo_url.as_deref().filter(|u| !u.is_empty()) {
        return Some(url.to_string());
    }

    let cwd = std::env::current_dir().ok()?;
    let repo = GitRepo::discover(&cwd).ok()?;
    repo.detect_repo_url().ok().flatten()
}

/// Render the full Markdown changelog with the given scope
pub fn render_markdown(changelog: &Changelog, config: &Config, include_internal: bool) -> String {
    let mut options = RenderOptions::new().with_internal(include_internal);
    if let Some(url) = resolve_repo_url(config) {
        options = options.with_repo_url(url);
    }
    MarkdownFormatter::new().format(changelog, &options)
}

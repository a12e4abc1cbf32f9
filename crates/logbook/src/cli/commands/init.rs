//! Init command

use std::path::Path;

use clap::Args;
use console::{style, Term};
use dialoguer::Input;
use tracing::{debug, info};

use logbook_changelog::{Changelog, Version};
use logbook_core::config::{find_config, save_config, Config, DEFAULT_CONFIG_YAML};
use logbook_git::GitRepo;

use crate::cli::output;
use crate::cli::Cli;

const INITIAL_ENTRY: &str = "Initial project setup";
const FALLBACK_PROJECT_NAME: &str = "project";

/// Create a new changelog document
#[derive(Debug, Args)]
pub struct InitCommand {
    /// Project name (default: directory name)
    #[arg(long)]
    pub project: Option<String>,

    /// Use defaults without prompting
    #[arg(short = 'y', long)]
    pub yes: bool,
}

impl InitCommand {
    /// Execute the init command
    pub fn execute(&self, cli: &Cli) -> anyhow::Result<()> {
        info!(project = ?self.project, yes = self.yes, "executing init command");
        let cwd = std::env::current_dir()?;
        let path = cli.changelog_path();

        if path.exists() {
            anyhow::bail!("{} already exists", path.display());
        }

        let project = self.project_name(&cwd)?;
        let changelog = initial_changelog(&project);
        cli.save_changelog(&changelog)?;

        if !cli.quiet {
            output::success(&format!(
                "Created {} for project {:?}",
                output::path_style().apply_to(path.display()),
                project
            ));
        }

        self.create_config(cli, &cwd)
    }

    fn project_name(&self, cwd: &Path) -> anyhow::Result<String> {
        if let Some(name) = self.project.as_deref().map(str::trim).filter(|n| !n.is_empty()) {
            return Ok(name.to_string());
        }

        let default = default_project_name(cwd);
        if self.yes || !Term::stderr().is_term() {
            return Ok(default);
        }

        let name: String = Input::new()
            .with_prompt("Project name")
            .default(default)
            .interact_text()?;
        Ok(name.trim().to_string())
    }

    /// Write a config file with the detected repository URL unless one exists
    fn create_config(&self, cli: &Cli, cwd: &Path) -> anyhow::Result<()> {
        let existing = cli.config.clone().filter(|p| p.exists()).or_else(|| find_config(cwd));
        if let Some(path) = existing {
            debug!(path = %path.display(), "config already present");
            if !cli.quiet {
                output::info(&format!(
                    "{} already exists, skipping config creation",
                    path.display()
                ));
            }
            return Ok(());
        }

        let config_path = cli
            .config
            .clone()
            .unwrap_or_else(|| cwd.join(DEFAULT_CONFIG_YAML));

        let mut config = Config::default();
        if let Some(url) = GitRepo::discover(cwd)
            .ok()
            .and_then(|repo| repo.detect_repo_url().ok().flatten())
        {
            if !cli.quiet {
                output::info(&format!("Detected repo URL: {}", style(&url).cyan()));
            }
            config = config.with_repo_url(url);
        }

        save_config(&config, &config_path)?;
        if !cli.quiet {
            output::success(&format!(
                "Created {}",
                output::path_style().apply_to(config_path.display())
            ));
        }
        Ok(())
    }
}

/// A new document holding a pending version with one starter entry
fn initial_changelog(project: &str) -> Changelog {
    let mut unreleased = Version::unreleased();
    unreleased.public.append("added", INITIAL_ENTRY);
    Changelog::new(project).with_version(unreleased)
}

fn default_project_name(dir: &Path) -> String {
    dir.file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| FALLBACK_PROJECT_NAME.to_string())
}

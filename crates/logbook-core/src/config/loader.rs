//! Configuration loading

use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::error::{ConfigError, Result};

use super::defaults::config_file_names;
use super::types::Config;
use super::validation::validate_config;

fn is_toml(path: &Path) -> bool {
    path.extension().is_some_and(|e| e == "toml")
}

/// Load configuration from a file.
///
/// A missing file is not an error: the default configuration is returned.
pub fn load_config(path: &Path) -> Result<Config> {
    if !path.exists() {
        debug!(path = %path.display(), "config file absent, using defaults");
        return Ok(Config::default());
    }

    let format = if is_toml(path) { "TOML" } else { "YAML" };
    info!(path = %path.display(), format, "loading config");

    let content = std::fs::read_to_string(path).map_err(ConfigError::Io)?;

    let config: Config = if content.trim().is_empty() {
        Config::default()
    } else if format == "TOML" {
        toml::from_str(&content).map_err(ConfigError::TomlError)?
    } else {
        serde_yaml::from_str(&content).map_err(ConfigError::YamlError)?
    };

    validate_config(&config)?;
    debug!(path = %path.display(), "config loaded and validated");
    Ok(config)
}

/// Find configuration file in directory or parent directories.
///
/// The first match wins. Parents are walked until the filesystem root.
pub fn find_config(start_dir: &Path) -> Option<PathBuf> {
    debug!(start_dir = %start_dir.display(), "searching for config file");
    let mut current = start_dir.to_path_buf();

    loop {
        for name in config_file_names() {
            let config_path = current.join(name);
            if config_path.exists() {
                info!(path = %config_path.display(), "found config file");
                return Some(config_path);
            }
        }

        if !current.pop() {
            break;
        }
    }

    debug!("no config file found");
    None
}

/// Load the nearest configuration file above `dir`, or the defaults when
/// there is none.
///
/// A file that is found but cannot be read, parsed or validated is an error.
pub fn load_config_or_default(dir: &Path) -> Result<(Config, Option<PathBuf>)> {
    match find_config(dir) {
        Some(path) => {
            let config = load_config(&path)?;
            Ok((config, Some(path)))
        }
        None => {
            debug!(dir = %dir.display(), "no config found, using defaults");
            Ok((Config::default(), None))
        }
    }
}

/// Write configuration to a file, YAML unless the path ends in `.toml`
pub fn save_config(config: &Config, path: &Path) -> Result<()> {
    let content = if is_toml(path) {
        toml::to_string_pretty(config).map_err(ConfigError::TomlSerialize)?
    } else {
        serde_yaml::to_string(config).map_err(ConfigError::YamlError)?
    };

    std::fs::write(path, content).map_err(ConfigError::Io)?;
    info!(path = %path.display(), "config written");
    Ok(())
}

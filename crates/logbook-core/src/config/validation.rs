//! Configuration validation

use std::collections::HashSet;

use tracing::debug;

use crate::error::{ConfigError, Result};

use super::types::Config;

/// Validate configuration
pub fn validate_config(config: &Config) -> Result<()> {
    debug!("validating configuration");
    validate_categories(config)?;
    validate_output_files(config)?;
    debug!("configuration validation passed");
    Ok(())
}

fn validate_categories(config: &Config) -> Result<()> {
    let mut seen = HashSet::new();

    for (i, category) in config.categories.iter().enumerate() {
        let field = format!("categories[{}]", i);

        if category.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field,
                message: "category name cannot be empty".to_string(),
            }
            .into());
        }

        if category != &category.to_lowercase() {
            return Err(ConfigError::InvalidValue {
                field,
                message: format!("category {:?} must be lowercase", category),
            }
            .into());
        }

        if !seen.insert(category.as_str()) {
            return Err(ConfigError::InvalidValue {
                field,
                message: format!("duplicate category {:?}", category),
            }
            .into());
        }
    }

    Ok(())
}

fn validate_output_files(config: &Config) -> Result<()> {
    if let (Some(public), Some(internal)) = (&config.public_file, &config.internal_file) {
        if public == internal {
            return Err(ConfigError::InvalidValue {
                field: "internal_file".to_string(),
                message: "must differ from public_file".to_string(),
            }
            .into());
        }
    }

    Ok(())
}

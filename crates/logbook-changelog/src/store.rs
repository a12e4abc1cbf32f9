//! Loading and saving changelog documents

use std::fs;
use std::io::Read;
use std::path::Path;

use tracing::{debug, info, instrument};

use crate::codec::{decode, encode};
use crate::types::Changelog;
use crate::validation::validate;
use crate::Result;
use logbook_core::ChangelogError;

/// Load, decode and validate a changelog file.
///
/// Any validation issue fails the load with every message attached.
#[instrument(skip(allowed), fields(path = %path.display()))]
pub fn load(path: &Path, allowed: Option<&[String]>) -> Result<Changelog> {
    if !path.exists() {
        return Err(ChangelogError::FileNotFound(path.to_path_buf()));
    }

    let content = fs::read_to_string(path)?;
    let changelog = load_from_str(&content, allowed)?;
    info!(
        project = %changelog.project,
        versions = changelog.versions.len(),
        "changelog loaded"
    );
    Ok(changelog)
}

/// Decode and validate changelog text
pub fn load_from_str(content: &str, allowed: Option<&[String]>) -> Result<Changelog> {
    let changelog = decode(content)?;

    let issues = validate(&changelog, allowed);
    if !issues.is_empty() {
        debug!(issue_count = issues.len(), "changelog failed validation");
        return Err(ChangelogError::ValidationFailed(
            issues.iter().map(ToString::to_string).collect(),
        ));
    }

    Ok(changelog)
}

/// Decode and validate a changelog from any reader
pub fn load_from_reader<R: Read>(mut reader: R, allowed: Option<&[String]>) -> Result<Changelog> {
    let mut content = String::new();
    reader.read_to_string(&mut content)?;
    load_from_str(&content, allowed)
}

/// Encode a changelog and write it to `path`
#[instrument(skip(changelog), fields(path = %path.display()))]
pub fn save(changelog: &Changelog, path: &Path) -> Result<()> {
    let content = encode(changelog)?;
    fs::write(path, content)?;
    info!(versions = changelog.versions.len(), "changelog saved");
    Ok(())
}

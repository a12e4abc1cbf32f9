//! Default configuration values

/// Default configuration file name (YAML)
pub const DEFAULT_CONFIG_YAML: &str = ".logbook.yaml";

/// Default configuration file name (TOML)
pub const DEFAULT_CONFIG_TOML: &str = ".logbook.toml";

/// Default structured changelog document
pub const DEFAULT_CHANGELOG_FILE: &str = "CHANGELOG.yaml";

/// Default rendered public changelog
pub const DEFAULT_PUBLIC_FILE: &str = "CHANGELOG.md";

/// Default rendered internal changelog
pub const DEFAULT_INTERNAL_FILE: &str = "CHANGELOG-internal.md";

/// Canonical category names, in Keep a Changelog order
pub const DEFAULT_CATEGORIES: [&str; 6] =
    ["added", "changed", "deprecated", "removed", "fixed", "security"];

/// Get list of config file names to search for
pub fn config_file_names() -> Vec<&'static str> {
    vec![
        DEFAULT_CONFIG_YAML,
        ".logbook.yml",
        DEFAULT_CONFIG_TOML,
        "logbook.yaml",
        "logbook.toml",
    ]
}

/// Default categories as owned strings
pub fn default_categories() -> Vec<String> {
    DEFAULT_CATEGORIES.iter().map(|c| c.to_string()).collect()
}

//! Logbook Changelog - structured changelog documents
//!
//! This crate holds the changelog model and everything that operates on it:
//! the YAML codec, validation, queries, entry mutation, the release
//! lifecycle, conventional-commit scaffolding and the renderers.

pub mod changes;
pub mod codec;
pub mod formatter;
pub mod parser;
pub mod query;
pub mod release;
pub mod scaffold;
pub mod store;
pub mod types;
pub mod validation;

pub use changes::{Category, Changes};
pub use codec::{decode, encode, encode_version_entry};
pub use formatter::{ChangelogFormatter, MarkdownFormatter, RenderOptions, TerminalFormatter};
pub use parser::{Audience, Classification, CommitParser, CommitRecord, ConventionalParser};
pub use query::normalize_version;
pub use scaffold::{ScaffoldOptions, Scaffolder};
pub use types::{Changelog, Entry, Scope, Version, UNRELEASED};
pub use validation::{validate, ValidationIssue};

/// Result type for changelog operations
pub type Result<T> = std::result::Result<T, logbook_core::ChangelogError>;

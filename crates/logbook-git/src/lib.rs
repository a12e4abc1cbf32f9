//! Logbook Git - source-control lookups for changelog scaffolding
//!
//! This crate reads commit history, the latest reachable tag and the
//! remote URL of a repository.

mod commits;
mod remote;
mod repository;
mod tags;
pub mod types;

pub use remote::normalize_git_url;
pub use repository::{GitRepo, Result};
pub use types::CommitInfo;

#[cfg(test)]
mod fixtures;

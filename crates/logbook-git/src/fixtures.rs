//! Repository fixtures shared by the unit tests

use std::path::Path;

use git2::{Oid, Repository, Signature};
use tempfile::TempDir;

use crate::repository::GitRepo;

/// Commit a file change with the given message on HEAD
pub fn commit(repo: &Repository, message: &str) -> Oid {
    let workdir = repo.workdir().unwrap().to_path_buf();
    let file = workdir.join("file.txt");
    let previous = std::fs::read_to_string(&file).unwrap_or_default();
    std::fs::write(&file, format!("{previous}{message}\n")).unwrap();

    let mut index = repo.index().unwrap();
    index.add_path(Path::new("file.txt")).unwrap();
    index.write().unwrap();

    let tree_id = index.write_tree().unwrap();
    let tree = repo.find_tree(tree_id).unwrap();
    let sig = Signature::now("Test", "test@example.com").unwrap();

    let parents = match repo.head() {
        Ok(head) => vec![head.peel_to_commit().unwrap()],
        Err(_) => Vec::new(),
    };
    let parent_refs: Vec<&git2::Commit<'_>> = parents.iter().collect();

    repo.commit(Some("HEAD"), &sig, &sig, message, &tree, &parent_refs)
        .unwrap()
}

/// Create a lightweight tag on HEAD
pub fn tag_head(repo: &Repository, name: &str) {
    let head = repo.head().unwrap().peel_to_commit().unwrap();
    repo.tag_lightweight(name, head.as_object(), false).unwrap();
}

/// A fresh repository with one commit per message, oldest first
pub fn repo_with_commits(messages: &[&str]) -> (TempDir, GitRepo) {
    let temp = TempDir::new().unwrap();
    let repo = Repository::init(temp.path()).unwrap();
    for message in messages {
        commit(&repo, message);
    }
    let git_repo = GitRepo::open(temp.path()).unwrap();
    (temp, git_repo)
}

//! Throwaway repositories for tests that exercise real git plumbing.

use std::fs;
use std::path::Path;
use std::process::Command;

use git2::Repository;

pub fn has_git() -> bool {
    Command::new("git").arg("--version").output().is_ok()
}

pub fn create_test_repo() -> (tempfile::TempDir, Repository) {
    let dir = tempfile::tempdir().unwrap();
    let repo = Repository::init(dir.path()).unwrap();

    let mut config = repo.config().unwrap();
    config.set_str("user.name", "Test").unwrap();
    config.set_str("user.email", "test@test.com").unwrap();

    (dir, repo)
}

/// Write `files` into the work tree and commit them with distinct author
/// and committer names.
pub fn commit_as(
    repo: &Repository,
    author: &str,
    committer: &str,
    files: &[(&str, &[u8])],
    message: &str,
    epoch: i64,
) -> git2::Oid {
    let time = git2::Time::new(epoch, 0);
    let author_sig = git2::Signature::new(author, "author@test.com", &time).unwrap();
    let committer_sig = git2::Signature::new(committer, "committer@test.com", &time).unwrap();
    let mut index = repo.index().unwrap();

    for (path, content) in files {
        let full_path = repo.workdir().unwrap().join(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&full_path, content).unwrap();
        index.add_path(Path::new(path)).unwrap();
    }

    index.write().unwrap();
    let tree_oid = index.write_tree().unwrap();
    let tree = repo.find_tree(tree_oid).unwrap();

    let parent = repo.head().ok().and_then(|h| h.peel_to_commit().ok());
    let parents: Vec<&git2::Commit> = parent.iter().collect();

    repo.commit(
        Some("HEAD"),
        &author_sig,
        &committer_sig,
        message,
        &tree,
        &parents,
    )
    .unwrap()
}

pub fn make_commit(repo: &Repository, author: &str, files: &[(&str, &str)], message: &str) {
    let files: Vec<(&str, &[u8])> = files.iter().map(|(p, c)| (*p, c.as_bytes())).collect();
    commit_as(repo, author, author, &files, message, 1_700_000_000);
}

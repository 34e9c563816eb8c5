mod source;

use std::path::{Path, PathBuf};

use git2::{ObjectType, Repository, TreeWalkMode, TreeWalkResult};

use crate::error::{FameError, Result};

pub use source::{BlameSource, GitCli};

#[cfg(test)]
pub use source::FakeSource;

pub struct GitRepo {
    repo: Repository,
    root: PathBuf,
}

impl GitRepo {
    pub fn open(path: &Path) -> Result<Self> {
        let repo = Repository::discover(path).map_err(FameError::NotARepository)?;
        let root = repo.workdir().unwrap_or_else(|| repo.path()).to_path_buf();
        Ok(Self { repo, root })
    }

    /// Directory the `git` binary is run from.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Every blob path in the tree at `revision`, repository-relative with
    /// `/` separators. Submodule entries and non-UTF-8 names are skipped.
    pub fn list_files(&self, revision: &str) -> Result<Vec<String>> {
        let enumeration = |source: git2::Error| FameError::Enumeration {
            revision: revision.to_string(),
            source,
        };

        let tree = self
            .repo
            .revparse_single(revision)
            .and_then(|obj| obj.peel_to_tree())
            .map_err(enumeration)?;

        let mut files = Vec::new();
        tree.walk(TreeWalkMode::PreOrder, |dir, entry| {
            if entry.kind() == Some(ObjectType::Blob)
                && let Some(name) = entry.name()
            {
                files.push(format!("{dir}{name}"));
            }
            TreeWalkResult::Ok
        })
        .map_err(enumeration)?;

        Ok(files)
    }
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;

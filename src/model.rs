use std::collections::{HashMap, hash_map};

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Which signature of a commit a line is credited to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum IdentityMode {
    #[default]
    Author,
    Committer,
}

/// Cumulative contribution of one identity across the processed file set.
///
/// Identities are compared as raw strings: two spellings of the same
/// person stay two entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AuthorStat {
    pub name: String,
    pub lines: u64,
    pub commits: u64,
    pub files: u64,
}

impl AuthorStat {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            lines: 0,
            commits: 0,
            files: 0,
        }
    }
}

/// Lines and commits one identity owns inside a single file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Contribution {
    pub lines: u64,
    pub commits: u64,
}

/// Per-file parse result, merged exactly once into the global tally.
/// Every identity present implicitly owns one file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileBlame {
    contributions: HashMap<String, Contribution>,
}

impl FileBlame {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_lines(&mut self, identity: &str, lines: u64) {
        self.entry(identity).lines += lines;
    }

    pub fn add_commit(&mut self, identity: &str) {
        self.entry(identity).commits += 1;
    }

    #[cfg(test)]
    pub fn get(&self, identity: &str) -> Option<&Contribution> {
        self.contributions.get(identity)
    }

    pub fn is_empty(&self) -> bool {
        self.contributions.is_empty()
    }

    pub fn len(&self) -> usize {
        self.contributions.len()
    }

    pub fn total_lines(&self) -> u64 {
        self.contributions.values().map(|c| c.lines).sum()
    }

    fn entry(&mut self, identity: &str) -> &mut Contribution {
        self.contributions
            .entry(identity.to_string())
            .or_default()
    }
}

impl IntoIterator for FileBlame {
    type Item = (String, Contribution);
    type IntoIter = hash_map::IntoIter<String, Contribution>;

    fn into_iter(self) -> Self::IntoIter {
        self.contributions.into_iter()
    }
}

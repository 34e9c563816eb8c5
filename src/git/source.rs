use std::path::{Path, PathBuf};
use std::process::Command;

use tracing::trace;

use crate::blame::fallback::log_format;
use crate::error::{FameError, Result};

/// Raw per-file text consumed by the blame parsers.
pub trait BlameSource: Sync {
    /// `git blame --incremental` output for `path`.
    fn blame(&self, path: &str) -> Result<String>;

    /// Log records for `path`, most recent first, in the quoted
    /// `"<sha>SEP<author>SEP<committer>"` format.
    fn last_commit(&self, path: &str) -> Result<String>;
}

/// Shells out to the `git` binary inside the repository work tree.
pub struct GitCli {
    root: PathBuf,
    revision: String,
}

impl GitCli {
    pub fn new(root: &Path, revision: &str) -> Self {
        Self {
            root: root.to_path_buf(),
            revision: revision.to_string(),
        }
    }

    fn run(&self, command: &'static str, args: &[&str], path: &str) -> Result<String> {
        let retrieval = |message: String| FameError::Retrieval {
            command,
            path: path.to_string(),
            message,
        };

        trace!(command, path, "running git");
        let output = Command::new("git")
            .arg(command)
            .args(args)
            .arg(&self.revision)
            .arg("--")
            .arg(path)
            .current_dir(&self.root)
            .output()
            .map_err(|e| retrieval(e.to_string()))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(retrieval(stderr.trim().to_string()));
        }
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

impl BlameSource for GitCli {
    fn blame(&self, path: &str) -> Result<String> {
        self.run("blame", &["--incremental"], path)
    }

    fn last_commit(&self, path: &str) -> Result<String> {
        self.run("log", &[log_format().as_str()], path)
    }
}

/// In-memory source keyed by path; a missing path behaves like a failed
/// `git` invocation.
#[cfg(test)]
#[derive(Default)]
pub struct FakeSource {
    pub blames: std::collections::HashMap<String, String>,
    pub logs: std::collections::HashMap<String, String>,
}

#[cfg(test)]
impl FakeSource {
    pub fn with_blame(mut self, path: &str, raw: &str) -> Self {
        self.blames.insert(path.to_string(), raw.to_string());
        self
    }

    pub fn with_log(mut self, path: &str, raw: &str) -> Self {
        self.logs.insert(path.to_string(), raw.to_string());
        self
    }

    fn lookup(
        map: &std::collections::HashMap<String, String>,
        command: &'static str,
        path: &str,
    ) -> Result<String> {
        map.get(path).cloned().ok_or_else(|| FameError::Retrieval {
            command,
            path: path.to_string(),
            message: "exit status: 128".to_string(),
        })
    }
}

#[cfg(test)]
impl BlameSource for FakeSource {
    fn blame(&self, path: &str) -> Result<String> {
        Self::lookup(&self.blames, "blame", path)
    }

    fn last_commit(&self, path: &str) -> Result<String> {
        Self::lookup(&self.logs, "log", path)
    }
}

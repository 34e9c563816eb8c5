//! Layered settings: built-in defaults, then the TOML config file, then
//! command-line flags.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::debug;

use crate::cli::Cli;
use crate::error::{FameError, Result};
use crate::git::GitRepo;
use crate::model::IdentityMode;
use crate::rank::SortKey;
use crate::render::OutputFormat;

/// Config file looked up in the repository when `--config` is not given.
pub const CONFIG_FILE_NAME: &str = ".gitfame.toml";

/// The file-selection predicates; an empty list does not restrict.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterSettings {
    pub extensions: Vec<String>,
    pub languages: Vec<String>,
    pub exclude: Vec<String>,
    pub restrict_to: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub repository: PathBuf,
    pub revision: String,
    pub identity: IdentityMode,
    pub order_by: SortKey,
    pub format: OutputFormat,
    pub filter: FilterSettings,
    /// `None` sizes the worker pool to the number of CPUs.
    pub jobs: Option<usize>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            repository: PathBuf::from("."),
            revision: "HEAD".to_string(),
            identity: IdentityMode::Author,
            order_by: SortKey::Lines,
            format: OutputFormat::Tabular,
            filter: FilterSettings::default(),
            jobs: None,
        }
    }
}

/// Contents of a `.gitfame.toml` file; every key is optional.
#[derive(Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub revision: Option<String>,
    pub use_committer: Option<bool>,
    pub order_by: Option<SortKey>,
    pub format: Option<OutputFormat>,
    pub extensions: Option<Vec<String>>,
    pub languages: Option<Vec<String>>,
    pub exclude: Option<Vec<String>>,
    pub restrict_to: Option<Vec<String>>,
    pub jobs: Option<usize>,
}

impl FileConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|source| FameError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&text).map_err(|source| FameError::ConfigParse {
            path: path.to_path_buf(),
            source: Box::new(source),
        })
    }
}

fn override_with<T>(slot: &mut T, value: Option<T>) {
    if let Some(value) = value {
        *slot = value;
    }
}

impl Settings {
    /// Resolve the effective settings for one run.
    pub fn resolve(cli: &Cli) -> Result<Self> {
        let mut settings = Settings {
            repository: cli.repository.clone(),
            ..Settings::default()
        };

        let file = match &cli.config {
            Some(path) => Some(FileConfig::load(path)?),
            None => {
                let path = config_dir(&cli.repository).join(CONFIG_FILE_NAME);
                if path.is_file() {
                    Some(FileConfig::load(&path)?)
                } else {
                    None
                }
            }
        };
        if let Some(file) = file {
            debug!(?file, "applying config file");
            settings.apply_file(file);
        }

        settings.apply_cli(cli);
        Ok(settings)
    }

    pub fn apply_file(&mut self, file: FileConfig) {
        override_with(&mut self.revision, file.revision);
        if let Some(use_committer) = file.use_committer {
            self.identity = identity_for(use_committer);
        }
        override_with(&mut self.order_by, file.order_by);
        override_with(&mut self.format, file.format);
        override_with(&mut self.filter.extensions, file.extensions);
        override_with(&mut self.filter.languages, file.languages);
        override_with(&mut self.filter.exclude, file.exclude);
        override_with(&mut self.filter.restrict_to, file.restrict_to);
        if file.jobs.is_some() {
            self.jobs = file.jobs;
        }
    }

    pub fn apply_cli(&mut self, cli: &Cli) {
        override_with(&mut self.revision, cli.revision.clone());
        if cli.use_committer {
            self.identity = IdentityMode::Committer;
        }
        override_with(&mut self.order_by, cli.order_by);
        override_with(&mut self.format, cli.format);
        override_with(&mut self.filter.extensions, cli.extensions.clone());
        override_with(&mut self.filter.languages, cli.languages.clone());
        override_with(&mut self.filter.exclude, cli.exclude.clone());
        override_with(&mut self.filter.restrict_to, cli.restrict_to.clone());
        if cli.jobs.is_some() {
            self.jobs = cli.jobs;
        }
    }
}

/// The work-tree root of the repository containing `repository`, or
/// `repository` itself outside of git.
fn config_dir(repository: &Path) -> PathBuf {
    match GitRepo::open(repository) {
        Ok(repo) => repo.root().to_path_buf(),
        Err(err) => {
            debug!(%err, "no repository root for config lookup");
            repository.to_path_buf()
        }
    }
}

fn identity_for(use_committer: bool) -> IdentityMode {
    if use_committer {
        IdentityMode::Committer
    } else {
        IdentityMode::Author
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;

use std::io;
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, FameError>;

#[derive(Error, Debug)]
pub enum FameError {
    #[error("not a git repository (or any parent): {0}")]
    NotARepository(#[source] git2::Error),
    #[error("cannot list files at revision {revision}: {source}")]
    Enumeration {
        revision: String,
        #[source]
        source: git2::Error,
    },
    #[error("git {command} failed for {path}: {message}")]
    Retrieval {
        command: &'static str,
        path: String,
        message: String,
    },
    #[error("invalid glob pattern: {0}")]
    Glob(#[from] globset::Error),
    #[error("cannot read config {}: {source}", path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid config {}: {source}", path.display())]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: Box<toml::de::Error>,
    },
    #[error("cannot start worker pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

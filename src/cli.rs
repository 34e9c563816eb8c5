//! CLI argument definitions for the `gitfame` command.
//!
//! Every option that also exists in the config file is optional here, so
//! an absent flag falls through to the file value or the default.
use std::path::PathBuf;

use clap::Parser;
use clap_complete::Shell;

use crate::rank::SortKey;
use crate::render::OutputFormat;

#[derive(Parser, Debug)]
#[command(
    name = "gitfame",
    version,
    about = "Per-author code ownership statistics from git blame",
    long_about = "\
Compute per-author code ownership statistics for a git repository at a
fixed revision.

For every tracked file the tool runs `git blame --incremental` and credits
each line to the author (or committer) of the commit that last touched it.
Files with no blame output (binary or empty files) are credited to the
last commit touching them, with zero lines.

Columns:
  Lines    -- lines currently owned
  Commits  -- distinct commits owning lines, summed over files
  Files    -- files with at least one owned line or commit

Identities are compared as raw names: different spellings of the same
person are reported separately.

Options may also be set in a TOML file (`.gitfame.toml` in the repository
or --config <PATH>); command-line flags win.

Examples:
  gitfame                                   # current repository, by lines
  gitfame --order-by commits --format csv
  gitfame --extensions .go,.md --exclude 'vendor/*'
  gitfame --languages rust --use-committer --format json-lines"
)]
pub struct Cli {
    /// Path to the git repository (default: current directory)
    #[arg(long, default_value = ".")]
    pub repository: PathBuf,

    /// Commit to analyze (default: HEAD)
    #[arg(long)]
    pub revision: Option<String>,

    /// Sort key: lines, commits, or files (default: lines)
    #[arg(long, value_enum)]
    pub order_by: Option<SortKey>,

    /// Output format: tabular, csv, json, or json-lines (default: tabular)
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Credit lines to the committer instead of the author
    #[arg(long)]
    pub use_committer: bool,

    /// Only count files ending with one of these suffixes (e.g. '.go,.md')
    #[arg(long, value_delimiter = ',')]
    pub extensions: Option<Vec<String>>,

    /// Only count files in these languages (e.g. 'go,markdown')
    #[arg(long, value_delimiter = ',')]
    pub languages: Option<Vec<String>>,

    /// Glob patterns excluding files (e.g. 'foo/*,bar/*')
    #[arg(long, value_delimiter = ',')]
    pub exclude: Option<Vec<String>>,

    /// Glob patterns a file must match at least one of
    #[arg(long, value_delimiter = ',')]
    pub restrict_to: Option<Vec<String>>,

    /// Number of files blamed in parallel (default: number of CPUs)
    #[arg(long)]
    pub jobs: Option<usize>,

    /// Read options from this TOML file instead of .gitfame.toml at the
    /// repository root
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Increase log verbosity on stderr (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Print a shell completion script and exit
    #[arg(long, value_name = "SHELL")]
    pub completions: Option<Shell>,
}

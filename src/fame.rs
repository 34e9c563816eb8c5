//! The batch run: enumerate, filter, blame in parallel, tally, rank, render.

use std::io::Write;

use rayon::prelude::*;
use tracing::{debug, info};

use crate::aggregate::AuthorAggregator;
use crate::blame::blame_file;
use crate::config::Settings;
use crate::error::Result;
use crate::filter::FileFilter;
use crate::git::{BlameSource, GitCli, GitRepo};
use crate::model::{AuthorStat, IdentityMode};
use crate::rank::rank;
use crate::render::render;

pub fn run(settings: &Settings, out: &mut dyn Write) -> Result<()> {
    let repo = GitRepo::open(&settings.repository)?;
    let filter = FileFilter::new(&settings.filter)?;

    let files: Vec<String> = repo
        .list_files(&settings.revision)?
        .into_iter()
        .filter(|f| filter.is_suitable(f))
        .collect();
    info!(
        files = files.len(),
        revision = settings.revision.as_str(),
        "blaming files"
    );

    let source = GitCli::new(repo.root(), &settings.revision);
    let mut stats = collect(&source, &files, settings.identity, settings.jobs)?;

    rank(&mut stats, settings.order_by);
    render(settings.format, &stats, out)?;
    out.flush()?;
    Ok(())
}

/// Blame every file on a pool of `jobs` workers (all CPUs when `None`)
/// and tally the results. A file whose retrieval fails contributes nothing.
pub fn collect(
    source: &(impl BlameSource + ?Sized),
    files: &[String],
    mode: IdentityMode,
    jobs: Option<usize>,
) -> Result<Vec<AuthorStat>> {
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(jobs.unwrap_or(0))
        .build()?;
    let aggregator = AuthorAggregator::new();

    pool.install(|| {
        files.par_iter().for_each(|file| match blame_file(source, file, mode) {
            Ok(blame) => aggregator.merge(blame),
            Err(err) => debug!(file = file.as_str(), %err, "file skipped"),
        });
    });

    info!(authors = aggregator.len(), "tally complete");
    Ok(aggregator.into_stats())
}

#[cfg(test)]
#[path = "fame_test.rs"]
mod tests;

use std::collections::HashMap;

use parking_lot::Mutex;

use crate::model::{AuthorStat, FileBlame};

/// Global identity → statistics tally shared by all file workers.
///
/// Entries are created on first contribution and only ever incremented.
#[derive(Default)]
pub struct AuthorAggregator {
    authors: Mutex<HashMap<String, AuthorStat>>,
}

impl AuthorAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one file's result into the tally. The lock covers only the map
    /// update; callers retrieve and parse before calling this.
    pub fn merge(&self, blame: FileBlame) {
        if blame.is_empty() {
            return;
        }

        let mut authors = self.authors.lock();
        for (name, contribution) in blame {
            let stat = authors
                .entry(name)
                .or_insert_with_key(|name| AuthorStat::new(name.as_str()));
            stat.lines += contribution.lines;
            stat.commits += contribution.commits;
            stat.files += 1;
        }
    }

    pub fn len(&self) -> usize {
        self.authors.lock().len()
    }

    /// Final statistics, in no particular order.
    pub fn into_stats(self) -> Vec<AuthorStat> {
        self.authors.into_inner().into_values().collect()
    }
}

#[cfg(test)]
#[path = "aggregate_test.rs"]
mod tests;

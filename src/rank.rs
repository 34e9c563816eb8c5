use std::cmp::Ordering;

use clap::ValueEnum;
use serde::Deserialize;

use crate::model::AuthorStat;

/// Primary ordering key for the final table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    #[default]
    Lines,
    Commits,
    Files,
}

impl SortKey {
    /// Descending on the primary key, then on the remaining counters, then
    /// ascending by name. Distinct identities never compare equal.
    pub fn compare(self, a: &AuthorStat, b: &AuthorStat) -> Ordering {
        let desc = |x: u64, y: u64| y.cmp(&x);
        let counters = match self {
            SortKey::Lines => desc(a.lines, b.lines)
                .then_with(|| desc(a.commits, b.commits))
                .then_with(|| desc(a.files, b.files)),
            SortKey::Commits => desc(a.commits, b.commits)
                .then_with(|| desc(a.lines, b.lines))
                .then_with(|| desc(a.files, b.files)),
            SortKey::Files => desc(a.files, b.files)
                .then_with(|| desc(a.lines, b.lines))
                .then_with(|| desc(a.commits, b.commits)),
        };
        counters.then_with(|| a.name.cmp(&b.name))
    }
}

pub fn rank(stats: &mut [AuthorStat], key: SortKey) {
    stats.sort_by(|a, b| key.compare(a, b));
}

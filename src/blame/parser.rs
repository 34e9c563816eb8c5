use std::collections::{HashMap, HashSet};

use tracing::trace;

use crate::model::{FileBlame, IdentityMode};

const SHA_LEN: usize = 40;

/// Distance from a hunk header to the `committer` line of the metadata
/// block that follows it: author, author-mail, author-time, author-tz,
/// then committer.
const COMMITTER_OFFSET: usize = 5;

const AUTHOR_MARKER: &str = "author ";
const COMMITTER_MARKER: &str = "committer ";

/// A `<sha> <orig-line> <final-line> <line-count>` hunk header.
#[derive(Debug, PartialEq, Eq)]
struct Header<'a> {
    sha: &'a str,
    /// `None` when the trailing field is not a non-negative integer.
    line_count: Option<u64>,
}

impl<'a> Header<'a> {
    fn parse(line: &'a str) -> Option<Self> {
        let mut fields = line.split(' ');
        let sha = fields.next()?;
        if !is_sha(sha) {
            return None;
        }
        let rest: Vec<&str> = fields.collect();
        let line_count = match rest.as_slice() {
            [_orig, _final, count] => count.parse().ok(),
            _ => None,
        };
        Some(Self { sha, line_count })
    }
}

fn is_sha(s: &str) -> bool {
    s.len() == SHA_LEN && s.bytes().all(|b| b.is_ascii_hexdigit())
}

/// What follows a header: a fresh metadata block naming the identity, a
/// block that does not have the expected layout, or nothing new.
enum Metadata<'a> {
    Fresh(&'a str),
    Malformed,
    Reused,
}

fn metadata_after<'a>(lines: &[&'a str], index: usize, mode: IdentityMode) -> Metadata<'a> {
    let Some(author) = lines
        .get(index + 1)
        .and_then(|l| l.strip_prefix(AUTHOR_MARKER))
    else {
        return Metadata::Reused;
    };

    match mode {
        IdentityMode::Author => Metadata::Fresh(author),
        IdentityMode::Committer => match lines
            .get(index + COMMITTER_OFFSET)
            .and_then(|l| l.strip_prefix(COMMITTER_MARKER))
        {
            Some(committer) => Metadata::Fresh(committer),
            None => Metadata::Malformed,
        },
    }
}

/// Parse one file's `git blame --incremental` stream.
///
/// The first hunk of each commit carries its metadata block; later hunks
/// of the same commit carry none and are credited to the identity already
/// recorded for that SHA. Should a header arrive whose SHA was never
/// described, it falls back to the most recently seen identity.
///
/// A commit is counted once, where its metadata block appears, even if
/// that hunk's line count is unparsable. Headers without a metadata block
/// only add lines.
pub fn parse_incremental(raw: &str, mode: IdentityMode) -> FileBlame {
    let lines: Vec<&str> = raw.lines().map(|l| l.trim_end_matches('\r')).collect();

    let mut blame = FileBlame::new();
    let mut identities: HashMap<&str, &str> = HashMap::new();
    let mut counted: HashSet<&str> = HashSet::new();
    let mut current: Option<&str> = None;

    for (index, line) in lines.iter().enumerate() {
        let Some(header) = Header::parse(line) else {
            continue;
        };

        let identity = match metadata_after(&lines, index, mode) {
            Metadata::Fresh(name) => {
                identities.insert(header.sha, name);
                if counted.insert(header.sha) {
                    blame.add_commit(name);
                }
                name
            }
            Metadata::Malformed => {
                trace!(sha = header.sha, "metadata block without committer line");
                continue;
            }
            Metadata::Reused => match identities.get(header.sha).copied().or(current) {
                Some(name) => name,
                None => {
                    trace!(sha = header.sha, "hunk before any metadata block");
                    continue;
                }
            },
        };
        current = Some(identity);

        let Some(count) = header.line_count else {
            trace!(line = *line, "dropping header with malformed line count");
            continue;
        };

        blame.add_lines(identity, count);
    }

    blame
}

#[cfg(test)]
#[path = "parser_test.rs"]
mod tests;

use crate::model::{FileBlame, IdentityMode};

/// Separator between the fields of the log record; chosen to never occur
/// in a name.
pub const FIELD_SEPARATOR: &str = "$^!~&";

/// `git log` pretty format producing `"<sha>SEP<author>SEP<committer>"`.
pub fn log_format() -> String {
    format!("--pretty=format:\"%H{FIELD_SEPARATOR}%an{FIELD_SEPARATOR}%cn\"")
}

/// Attribute a file that produced no blame output (binary, empty, or
/// absent at the revision) to the identity of its most recent commit.
///
/// The result holds one identity with no lines and one commit, or nothing
/// when the file has no history.
pub fn parse_last_commit(raw: &str, mode: IdentityMode) -> FileBlame {
    let mut blame = FileBlame::new();

    let Some(record) = raw.lines().next().map(str::trim) else {
        return blame;
    };
    let record = record
        .strip_prefix('"')
        .and_then(|r| r.strip_suffix('"'))
        .unwrap_or(record);

    let fields: Vec<&str> = record.split(FIELD_SEPARATOR).collect();
    let [_sha, author, committer] = fields.as_slice() else {
        return blame;
    };

    let identity = match mode {
        IdentityMode::Author => author,
        IdentityMode::Committer => committer,
    };
    blame.add_commit(identity);
    blame
}

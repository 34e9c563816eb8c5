use super::*;

const SHA_A: &str = "1111111111111111111111111111111111111111";
const SHA_B: &str = "2222222222222222222222222222222222222222";
const SHA_C: &str = "abcdefabcdefabcdefabcdefabcdefabcdef0123";

fn metadata(author: &str, committer: &str) -> String {
    format!(
        "author {author}\n\
         author-mail <{author}@example.com>\n\
         author-time 1700000000\n\
         author-tz +0000\n\
         committer {committer}\n\
         committer-mail <{committer}@example.com>\n\
         committer-time 1700000100\n\
         committer-tz +0000\n\
         summary some change\n"
    )
}

fn fresh_hunk(sha: &str, final_line: u64, count: &str, author: &str, committer: &str) -> String {
    format!(
        "{sha} {final_line} {final_line} {count}\n{}filename src/lib.rs\n",
        metadata(author, committer)
    )
}

fn reused_hunk(sha: &str, final_line: u64, count: &str) -> String {
    format!("{sha} {final_line} {final_line} {count}\nfilename src/lib.rs\n")
}

#[test]
fn header_parse_valid() {
    let line = format!("{SHA_A} 1 2 3");
    assert_eq!(
        Header::parse(&line),
        Some(Header {
            sha: SHA_A,
            line_count: Some(3)
        })
    );
}

#[test]
fn header_parse_rejects_non_sha() {
    assert!(Header::parse("author Alice").is_none());
    assert!(Header::parse("previous 1111 src/lib.rs").is_none());
    assert!(Header::parse("zzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzz 1 1 1").is_none());
    assert!(Header::parse("").is_none());
}

#[test]
fn header_parse_bad_count() {
    let line = format!("{SHA_A} 1 1 -4");
    assert_eq!(Header::parse(&line).unwrap().line_count, None);
    let line = format!("{SHA_A} 1 1");
    assert_eq!(Header::parse(&line).unwrap().line_count, None);
}

#[test]
fn single_commit_single_author() {
    let raw = fresh_hunk(SHA_A, 1, "100", "Alice", "Carol");
    let blame = parse_incremental(&raw, IdentityMode::Author);
    assert_eq!(blame.len(), 1);
    let alice = blame.get("Alice").unwrap();
    assert_eq!(alice.lines, 100);
    assert_eq!(alice.commits, 1);
}

#[test]
fn reused_hunks_keep_identity_and_count_commit_once() {
    let raw = [
        fresh_hunk(SHA_A, 1, "3", "Alice", "Alice"),
        fresh_hunk(SHA_B, 4, "2", "Bob", "Bob"),
        reused_hunk(SHA_A, 6, "5"),
        format!("{SHA_A} 11 11 1\nprevious {SHA_B} src/old.rs\nfilename src/lib.rs\n"),
    ]
    .concat();

    let blame = parse_incremental(&raw, IdentityMode::Author);
    let alice = blame.get("Alice").unwrap();
    assert_eq!(alice.lines, 9);
    assert_eq!(alice.commits, 1);
    let bob = blame.get("Bob").unwrap();
    assert_eq!(bob.lines, 2);
    assert_eq!(bob.commits, 1);
}

#[test]
fn two_commits_same_author_count_twice() {
    let raw = [
        fresh_hunk(SHA_A, 1, "30", "Alice", "Alice"),
        fresh_hunk(SHA_B, 31, "70", "Alice", "Alice"),
    ]
    .concat();
    let blame = parse_incremental(&raw, IdentityMode::Author);
    let alice = blame.get("Alice").unwrap();
    assert_eq!(alice.lines, 100);
    assert_eq!(alice.commits, 2);
}

#[test]
fn committer_mode_reads_committer_line() {
    let raw = [
        fresh_hunk(SHA_A, 1, "4", "Alice", "Carol"),
        fresh_hunk(SHA_B, 5, "6", "Bob", "Carol"),
    ]
    .concat();
    let blame = parse_incremental(&raw, IdentityMode::Committer);
    assert_eq!(blame.len(), 1);
    let carol = blame.get("Carol").unwrap();
    assert_eq!(carol.lines, 10);
    assert_eq!(carol.commits, 2);
    assert!(blame.get("Alice").is_none());
}

#[test]
fn committer_mode_skips_block_without_committer_at_offset() {
    let raw = format!("{SHA_A} 1 1 4\nauthor Alice\nsummary short block\nfilename a.rs\n");
    let blame = parse_incremental(&raw, IdentityMode::Committer);
    assert!(blame.is_empty());
}

#[test]
fn malformed_count_is_dropped_and_parsing_continues() {
    let raw = [
        fresh_hunk(SHA_A, 1, "x7", "Alice", "Alice"),
        reused_hunk(SHA_A, 2, "5"),
        fresh_hunk(SHA_B, 7, "2", "Bob", "Bob"),
    ]
    .concat();
    let blame = parse_incremental(&raw, IdentityMode::Author);
    assert_eq!(blame.total_lines(), 7);
    let alice = blame.get("Alice").unwrap();
    assert_eq!(alice.lines, 5);
    assert_eq!(alice.commits, 1);
    assert_eq!(blame.get("Bob").unwrap().lines, 2);
}

#[test]
fn malformed_count_on_only_hunk_still_counts_commit() {
    let raw = fresh_hunk(SHA_A, 1, "x", "Alice", "Alice");
    let blame = parse_incremental(&raw, IdentityMode::Author);
    let alice = blame.get("Alice").unwrap();
    assert_eq!(alice.lines, 0);
    assert_eq!(alice.commits, 1);
}

#[test]
fn committer_mode_reused_hunk_goes_to_its_committer() {
    let raw = [
        fresh_hunk(SHA_A, 1, "2", "Alice", "Carol"),
        fresh_hunk(SHA_B, 3, "1", "Bob", "Dave"),
        reused_hunk(SHA_A, 4, "6"),
    ]
    .concat();
    let blame = parse_incremental(&raw, IdentityMode::Committer);
    let carol = blame.get("Carol").unwrap();
    assert_eq!(carol.lines, 8);
    assert_eq!(carol.commits, 1);
    let dave = blame.get("Dave").unwrap();
    assert_eq!(dave.lines, 1);
    assert_eq!(dave.commits, 1);
    assert!(blame.get("Alice").is_none());
}

#[test]
fn identity_is_resolved_by_sha_not_only_by_order() {
    // Reused hunk of A arrives after B's metadata block.
    let raw = [
        fresh_hunk(SHA_A, 1, "1", "Alice", "Alice"),
        fresh_hunk(SHA_B, 2, "1", "Bob", "Bob"),
        reused_hunk(SHA_A, 3, "4"),
    ]
    .concat();
    let blame = parse_incremental(&raw, IdentityMode::Author);
    assert_eq!(blame.get("Alice").unwrap().lines, 5);
    assert_eq!(blame.get("Bob").unwrap().lines, 1);
}

#[test]
fn unknown_sha_falls_back_to_last_identity() {
    let raw = [
        fresh_hunk(SHA_A, 1, "2", "Alice", "Alice"),
        reused_hunk(SHA_C, 3, "3"),
    ]
    .concat();
    let blame = parse_incremental(&raw, IdentityMode::Author);
    let alice = blame.get("Alice").unwrap();
    assert_eq!(alice.lines, 5);
    assert_eq!(alice.commits, 1);
}

#[test]
fn hunk_before_any_metadata_is_ignored() {
    let raw = reused_hunk(SHA_A, 1, "9");
    let blame = parse_incremental(&raw, IdentityMode::Author);
    assert!(blame.is_empty());
}

#[test]
fn crlf_line_endings() {
    let raw = fresh_hunk(SHA_A, 1, "12", "Alice", "Alice").replace('\n', "\r\n");
    let blame = parse_incremental(&raw, IdentityMode::Author);
    assert_eq!(blame.get("Alice").unwrap().lines, 12);
}

#[test]
fn names_with_spaces_and_unicode() {
    let raw = fresh_hunk(SHA_A, 1, "8", "Анна Каренина", "Jean Luc");
    let blame = parse_incremental(&raw, IdentityMode::Author);
    assert_eq!(blame.get("Анна Каренина").unwrap().lines, 8);
    let blame = parse_incremental(&raw, IdentityMode::Committer);
    assert_eq!(blame.get("Jean Luc").unwrap().lines, 8);
}

#[test]
fn lines_preserved_across_identities() {
    let counts = ["13", "1", "40", "7", "2"];
    let authors = ["a", "b", "a", "c", "b"];
    let shas = [SHA_A, SHA_B, SHA_C, "3333333333333333333333333333333333333333", SHA_A];
    let mut raw = String::new();
    for (i, ((count, author), sha)) in counts.iter().zip(authors).zip(shas).enumerate() {
        if i == 4 {
            raw.push_str(&reused_hunk(sha, 100, count));
        } else {
            raw.push_str(&fresh_hunk(sha, i as u64 * 10 + 1, count, author, author));
        }
    }
    let blame = parse_incremental(&raw, IdentityMode::Author);
    assert_eq!(blame.total_lines(), 63);
}

#[test]
fn empty_input() {
    assert!(parse_incremental("", IdentityMode::Author).is_empty());
}

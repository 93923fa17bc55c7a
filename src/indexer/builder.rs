//! Export loading: archive entries → parsed record lists → [`TweetIndex`].
//!
//! # Error Handling Strategy
//!
//! - **Archive-level failures**: A missing account or posts entry, or a corrupt
//!   container, fails the whole load with `ArchiveRead`. There is no partial index.
//! - **Entry-level failures**: A payload that is not valid JSON fails with
//!   `MalformedExport`.
//! - **Record-level failures**: Records missing required fields are skipped and
//!   counted; see [`TweetIndex::skipped_count`].

use std::path::Path;

use chrono::{Local, TimeZone};
use tracing::info;

use crate::archive::{
    ACCOUNT_ENTRY_CANDIDATES, ArchiveReader, POSTS_ENTRY_CANDIDATES, open_export, resolve_entry,
};
use crate::error::Result;
use crate::models::Account;
use crate::parsers::{BasicEntities, EntityDecoder, parse_export_payload, parse_record_list};

use super::tweet_index::TweetIndex;

/// Build an index from an export's archive entries in the local timezone
///
/// # Examples
///
/// ```
/// use memento::archive::MemoryArchive;
/// use memento::build_index;
///
/// let archive = MemoryArchive::new()
///     .with_entry("account.js", r#"window.YTD.account.part0 = [{"account":{"username":"alice"}}]"#)
///     .with_entry(
///         "tweet.js",
///         r#"window.YTD.tweet.part0 = [{"id_str":"1","full_text":"hi","created_at":"Mon Jul 01 12:00:00 +0000 2019"}]"#,
///     );
/// let index = build_index(&archive)?;
/// assert_eq!(index.count(), 1);
/// # Ok::<(), memento::MementoError>(())
/// ```
pub fn build_index<A: ArchiveReader + ?Sized>(archive: &A) -> Result<TweetIndex> {
    build_index_in(archive, &BasicEntities, &Local)
}

/// Build an index from an export with an explicit entity decoder and timezone
pub fn build_index_in<A, D, Tz>(archive: &A, decoder: &D, tz: &Tz) -> Result<TweetIndex>
where
    A: ArchiveReader + ?Sized,
    D: EntityDecoder + ?Sized,
    Tz: TimeZone,
{
    let account_entry = resolve_entry(archive, ACCOUNT_ENTRY_CANDIDATES)?;
    let posts_entry = resolve_entry(archive, POSTS_ENTRY_CANDIDATES)?;

    let account_text = archive.read_text(&account_entry)?;
    let posts_text = archive.read_text(&posts_entry)?;

    let account = Account::from_export(&parse_export_payload(&account_entry, &account_text)?);
    let raw_records = parse_record_list(&posts_entry, &posts_text)?;

    info!(
        account = account.username.as_deref().unwrap_or("<unknown>"),
        entry = %posts_entry,
        raw_records = raw_records.len(),
        "parsed export"
    );

    Ok(TweetIndex::build_in(account, &raw_records, decoder, tz))
}

/// Open an export from disk (zip file or extracted directory) and index it
pub fn load_export(path: &Path) -> Result<TweetIndex> {
    let archive = open_export(path)?;
    build_index(archive.as_ref())
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;
    use crate::archive::MemoryArchive;
    use crate::error::MementoError;

    const ACCOUNT: &str =
        r#"window.YTD.account.part0 = [{"account":{"username":"alice","accountId":"1"}}]"#;

    fn build(archive: &MemoryArchive) -> Result<TweetIndex> {
        build_index_in(archive, &BasicEntities, &Utc)
    }

    #[test]
    fn test_build_from_archive() {
        let archive = MemoryArchive::new().with_entry("account.js", ACCOUNT).with_entry(
            "tweet.js",
            r#"window.YTD.tweet.part0 = [
                {"id_str":"1","full_text":"old","created_at":"Mon Jul 01 12:00:00 +0000 2019"},
                {"id_str":"2","full_text":"new","created_at":"Wed Jul 01 12:00:00 +0000 2020"}
            ]"#,
        );

        let index = build(&archive).unwrap();
        assert_eq!(index.account().username.as_deref(), Some("alice"));
        assert_eq!(index.records()[0].id, "2");
        assert_eq!(index.records()[0].permalink_url, "https://twitter.com/alice/status/2");
    }

    #[test]
    fn test_missing_posts_entry() {
        let archive = MemoryArchive::new().with_entry("account.js", ACCOUNT);
        assert!(matches!(build(&archive), Err(MementoError::ArchiveRead { .. })));
    }

    #[test]
    fn test_missing_account_entry() {
        let archive = MemoryArchive::new().with_entry("tweet.js", "[]");
        assert!(matches!(build(&archive), Err(MementoError::ArchiveRead { .. })));
    }

    #[test]
    fn test_malformed_posts_entry() {
        let archive = MemoryArchive::new()
            .with_entry("account.js", ACCOUNT)
            .with_entry("tweet.js", "window.YTD.tweet.part0 = [{\"id_str\": ");
        assert!(matches!(build(&archive), Err(MementoError::MalformedExport { .. })));
    }

    #[test]
    fn test_account_without_username() {
        let archive = MemoryArchive::new()
            .with_entry("account.js", "window.YTD.account.part0 = [{}]")
            .with_entry(
                "tweet.js",
                r#"[{"id_str":"5","full_text":"x","created_at":"Mon Jul 01 12:00:00 +0000 2019"}]"#,
            );

        let index = build(&archive).unwrap();
        assert_eq!(index.records()[0].permalink_url, "https://twitter.com/i/web/status/5");
    }
}

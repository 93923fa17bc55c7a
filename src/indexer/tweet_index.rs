//! Immutable, newest-first index of normalized posts

use chrono::{Local, TimeZone};
use tracing::{info, warn};

use crate::models::{Account, CanonicalRecord, RawRecord, SearchResult};
use crate::parsers::{BasicEntities, EntityDecoder};

use super::normalizer::normalize;

/// Searchable in-memory index of one export.
///
/// Records are sorted newest first when the index is built and never reordered
/// or mutated afterwards; every derived view relies on that order.
#[derive(Debug, Clone)]
pub struct TweetIndex {
    account: Account,
    records: Vec<CanonicalRecord>,
    skipped: usize,
}

impl TweetIndex {
    /// Build an index with the default entity decoder and the local timezone
    pub fn build(account: Account, raw_records: &[RawRecord]) -> Self {
        Self::build_in(account, raw_records, &BasicEntities, &Local)
    }

    /// Build an index with an explicit entity decoder and timezone.
    ///
    /// Records missing an id, text or creation timestamp are skipped and counted
    /// in [`TweetIndex::skipped_count`] rather than failing the build.
    pub fn build_in<D, Tz>(account: Account, raw_records: &[RawRecord], decoder: &D, tz: &Tz) -> Self
    where
        D: EntityDecoder + ?Sized,
        Tz: TimeZone,
    {
        let mut records = Vec::with_capacity(raw_records.len());
        let mut skipped = 0;

        for (position, raw) in raw_records.iter().enumerate() {
            match normalize(raw, &account, decoder, tz) {
                Ok(record) => records.push(record),
                Err(e) => {
                    warn!(position, error = %e, "skipping export record");
                    skipped += 1;
                }
            }
        }

        // Stable sort: records with equal timestamps keep their export order
        records.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        info!(records = records.len(), skipped, "built tweet index");

        Self { account, records, skipped }
    }

    /// O(1)
    pub fn count(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Number of raw records dropped during normalization
    pub fn skipped_count(&self) -> usize {
        self.skipped
    }

    pub fn account(&self) -> &Account {
        &self.account
    }

    /// All records, newest first
    pub fn records(&self) -> &[CanonicalRecord] {
        &self.records
    }

    pub fn newest(&self) -> Option<&CanonicalRecord> {
        self.records.first()
    }

    pub fn oldest(&self) -> Option<&CanonicalRecord> {
        self.records.last()
    }

    /// Look up a record by id (linear scan)
    pub fn get(&self, id: &str) -> Option<&CanonicalRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    /// Records whose text contains `query`, in index order.
    ///
    /// Matching is a case-sensitive substring test with no Unicode
    /// normalization; an empty query matches every record.
    pub fn search(&self, query: &str) -> Vec<SearchResult> {
        self.matching(query).map(SearchResult::from_record).collect()
    }

    /// Borrowing form of [`TweetIndex::search`]
    pub fn matching<'a>(&'a self, query: &'a str) -> impl Iterator<Item = &'a CanonicalRecord> + 'a {
        self.records.iter().filter(move |r| query.is_empty() || r.display_text.contains(query))
    }
}

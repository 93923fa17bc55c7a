use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A post as decoded from the export. Its shape belongs to the export format;
/// the normalizer only reads the handful of fields it needs.
pub type RawRecord = Value;

/// Anything that belongs to a local calendar year
pub trait Dated {
    fn local_year(&self) -> i32;
}

/// Normalized post held by a [`crate::TweetIndex`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CanonicalRecord {
    pub id: String,
    pub display_text: String,
    pub created_at: DateTime<Utc>,
    pub local_year: i32,
    pub local_date: NaiveDate,
    pub permalink_url: String,
    pub media_urls: Vec<String>,
    /// The record exactly as exported, kept for raw inspection
    pub raw_form: RawRecord,
}

impl Dated for CanonicalRecord {
    fn local_year(&self) -> i32 {
        self.local_year
    }
}

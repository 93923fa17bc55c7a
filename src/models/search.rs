use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::record::{CanonicalRecord, Dated};

/// Per-query view of a single record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    pub id: String,
    pub text: String,
    pub created_at: DateTime<Utc>,
    pub local_year: i32,
    pub local_date: String,
    pub url: String,
    pub media_urls: Vec<String>,
    /// Pretty-printed raw record
    pub raw: String,
}

impl SearchResult {
    pub fn from_record(record: &CanonicalRecord) -> Self {
        let raw = serde_json::to_string_pretty(&record.raw_form)
            .unwrap_or_else(|_| record.raw_form.to_string());

        Self {
            id: record.id.clone(),
            text: record.display_text.clone(),
            created_at: record.created_at,
            local_year: record.local_year,
            // "Dec 3, 2024"
            local_date: record.local_date.format("%b %-d, %Y").to_string(),
            url: record.permalink_url.clone(),
            media_urls: record.media_urls.clone(),
            raw,
        }
    }
}

impl Dated for SearchResult {
    fn local_year(&self) -> i32 {
        self.local_year
    }
}

/// Number of results falling in one local calendar year
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearBucket {
    pub year: i32,
    pub count: usize,
}

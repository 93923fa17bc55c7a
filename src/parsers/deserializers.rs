use chrono::{DateTime, Utc};

/// Timestamp layout used by post exports, e.g. `Wed Oct 10 20:19:24 +0000 2018`
const EXPORT_TIMESTAMP_FORMAT: &str = "%a %b %d %H:%M:%S %z %Y";

/// Parse a record's `created_at` value.
///
/// Accepts the export's own layout and RFC 3339; anything else is `None`.
pub fn parse_created_at(value: &str) -> Option<DateTime<Utc>> {
    let value = value.trim();
    DateTime::parse_from_str(value, EXPORT_TIMESTAMP_FORMAT)
        .or_else(|_| DateTime::parse_from_rfc3339(value))
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}

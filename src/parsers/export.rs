use serde_json::Value;

use crate::error::{MementoError, Result};
use crate::models::RawRecord;

/// Separator between the pseudo-assignment target and its JSON payload,
/// e.g. `window.YTD.tweet.part0 = [...]`
pub const ASSIGNMENT_SEPARATOR: &str = " = ";

/// Return the JSON payload of an export entry.
///
/// Everything after the first `" = "` is the payload; text without the
/// separator is returned unchanged.
pub fn strip_assignment(text: &str) -> &str {
    match text.find(ASSIGNMENT_SEPARATOR) {
        Some(pos) => &text[pos + ASSIGNMENT_SEPARATOR.len()..],
        None => text,
    }
}

/// Decode an export entry into JSON, tolerating the assignment prefix
pub fn parse_export_payload(entry: &str, text: &str) -> Result<Value> {
    serde_json::from_str(strip_assignment(text))
        .map_err(|source| MementoError::MalformedExport { entry: entry.to_string(), source })
}

/// Decode an export entry that must hold a list of records
pub fn parse_record_list(entry: &str, text: &str) -> Result<Vec<RawRecord>> {
    match parse_export_payload(entry, text)? {
        Value::Array(records) => Ok(records),
        _ => Err(MementoError::NotARecordList { entry: entry.to_string() }),
    }
}

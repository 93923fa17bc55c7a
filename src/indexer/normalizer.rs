//! Flattens raw export records into [`CanonicalRecord`]s

use chrono::{Datelike, TimeZone};
use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};
use serde_json::Value;

use crate::error::{MementoError, Result};
use crate::models::{Account, CanonicalRecord, RawRecord};
use crate::parsers::{EntityDecoder, parse_created_at};

/// Base of every permalink
pub const PERMALINK_BASE: &str = "https://twitter.com/";

/// Path used in place of `{handle}` when the account has none
const FALLBACK_PERMALINK_PATH: &str = "i/web";

// Characters escaped when a handle is placed in a URL path segment
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'<')
    .add(b'>')
    .add(b'`')
    .add(b'?')
    .add(b'{')
    .add(b'}')
    .add(b'/');

/// Build the public URL of a post
pub fn permalink(account: &Account, id: &str) -> String {
    match account.username.as_deref() {
        Some(handle) => {
            format!("{}{}/status/{}", PERMALINK_BASE, utf8_percent_encode(handle, PATH_SEGMENT), id)
        }
        None => format!("{}{}/status/{}", PERMALINK_BASE, FALLBACK_PERMALINK_PATH, id),
    }
}

/// Normalize one raw record.
///
/// Newer exports wrap each post in `{"tweet": {...}}`; the envelope is unwrapped
/// for field lookup but `raw_form` keeps the record as exported. Calendar fields
/// are derived in `tz`.
///
/// # Errors
///
/// [`MementoError::MissingRequiredField`] when the id, text or creation
/// timestamp is absent or unparsable. Missing media or handle never fail.
pub fn normalize<D, Tz>(
    raw: &RawRecord,
    account: &Account,
    decoder: &D,
    tz: &Tz,
) -> Result<CanonicalRecord>
where
    D: EntityDecoder + ?Sized,
    Tz: TimeZone,
{
    let body = raw.get("tweet").filter(|v| v.is_object()).unwrap_or(raw);

    let id = extract_id(body)
        .ok_or(MementoError::MissingRequiredField { field: "id_str", id: None })?;

    let text = body
        .get("full_text")
        .or_else(|| body.get("text"))
        .and_then(Value::as_str)
        .ok_or_else(|| MementoError::MissingRequiredField { field: "full_text", id: Some(id.clone()) })?;

    let created_at = body
        .get("created_at")
        .and_then(Value::as_str)
        .and_then(parse_created_at)
        .ok_or_else(|| MementoError::MissingRequiredField { field: "created_at", id: Some(id.clone()) })?;

    let local = created_at.with_timezone(tz);

    Ok(CanonicalRecord {
        permalink_url: permalink(account, &id),
        display_text: decoder.decode(text).into_owned(),
        created_at,
        local_year: local.year(),
        local_date: local.date_naive(),
        media_urls: extract_media_urls(body),
        raw_form: raw.clone(),
        id,
    })
}

fn extract_id(body: &Value) -> Option<String> {
    let id = match body.get("id_str").or_else(|| body.get("id"))? {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        _ => return None,
    };
    if id.is_empty() { None } else { Some(id) }
}

/// Attachment URLs in export order; `extended_entities` carries every
/// attachment while `entities` only has the first
fn extract_media_urls(body: &Value) -> Vec<String> {
    let media = ["extended_entities", "entities"]
        .iter()
        .filter_map(|key| body.get(key)?.get("media")?.as_array())
        .find(|items| !items.is_empty());

    media
        .map(|items| {
            items
                .iter()
                .filter_map(|m| {
                    m.get("media_url_https").or_else(|| m.get("media_url")).and_then(Value::as_str)
                })
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

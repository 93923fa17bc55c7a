//! Shared test utilities for integration tests
#![allow(dead_code)]

use std::fs;
use std::io::{Cursor, Write};
use std::path::{Path, PathBuf};

use chrono::{DateTime, Datelike, TimeZone, Utc};
use memento::archive::MemoryArchive;
use tempfile::TempDir;
use zip::ZipWriter;
use zip::write::SimpleFileOptions;

/// Timestamp layout used in post exports
pub const EXPORT_TIMESTAMP_FORMAT: &str = "%a %b %d %H:%M:%S %z %Y";

/// Builder for a single exported post
#[derive(Clone)]
pub struct TweetBuilder {
    id: String,
    text: Option<String>,
    created_at: Option<String>,
    media: Vec<String>,
    wrapped: bool,
}

impl TweetBuilder {
    pub fn new(id: &str) -> Self {
        Self {
            id: id.to_string(),
            text: Some(format!("Post number {}", id)),
            created_at: Some(export_timestamp(Utc.with_ymd_and_hms(2020, 6, 15, 12, 0, 0).unwrap())),
            media: Vec::new(),
            wrapped: false,
        }
    }

    pub fn text(mut self, text: &str) -> Self {
        self.text = Some(text.to_string());
        self
    }

    pub fn at(mut self, timestamp: DateTime<Utc>) -> Self {
        self.created_at = Some(export_timestamp(timestamp));
        self
    }

    /// Mid-year timestamp, so the local year matches in any timezone
    pub fn year(self, year: i32) -> Self {
        self.at(Utc.with_ymd_and_hms(year, 7, 1, 12, 0, 0).unwrap())
    }

    pub fn raw_created_at(mut self, value: &str) -> Self {
        self.created_at = Some(value.to_string());
        self
    }

    pub fn without_created_at(mut self) -> Self {
        self.created_at = None;
        self
    }

    pub fn without_text(mut self) -> Self {
        self.text = None;
        self
    }

    pub fn media(mut self, url: &str) -> Self {
        self.media.push(url.to_string());
        self
    }

    /// Use the `{"tweet": {...}}` envelope of newer exports
    pub fn wrapped(mut self) -> Self {
        self.wrapped = true;
        self
    }

    pub fn to_json(&self) -> serde_json::Value {
        let mut body = serde_json::json!({ "id_str": self.id });
        if let Some(text) = &self.text {
            body["full_text"] = text.clone().into();
        }
        if let Some(created_at) = &self.created_at {
            body["created_at"] = created_at.clone().into();
        }
        if !self.media.is_empty() {
            let media: Vec<_> =
                self.media.iter().map(|m| serde_json::json!({ "media_url_https": m })).collect();
            body["entities"] = serde_json::json!({ "media": media.clone() });
            body["extended_entities"] = serde_json::json!({ "media": media });
        }

        if self.wrapped { serde_json::json!({ "tweet": body }) } else { body }
    }
}

pub fn export_timestamp(timestamp: DateTime<Utc>) -> String {
    timestamp.format(EXPORT_TIMESTAMP_FORMAT).to_string()
}

/// Builder for a whole export: account entry plus posts entry
pub struct ExportBuilder {
    username: Option<String>,
    tweets: Vec<TweetBuilder>,
    posts_entry: String,
    account_entry: String,
    posts_override: Option<String>,
}

impl ExportBuilder {
    pub fn new() -> Self {
        Self {
            username: Some("alice".to_string()),
            tweets: Vec::new(),
            posts_entry: "tweet.js".to_string(),
            account_entry: "account.js".to_string(),
            posts_override: None,
        }
    }

    pub fn username(mut self, username: Option<&str>) -> Self {
        self.username = username.map(str::to_string);
        self
    }

    pub fn tweet(mut self, tweet: TweetBuilder) -> Self {
        self.tweets.push(tweet);
        self
    }

    pub fn tweets(mut self, tweets: impl IntoIterator<Item = TweetBuilder>) -> Self {
        self.tweets.extend(tweets);
        self
    }

    /// Lay entries out like newer exports: `data/account.js`, `data/tweets.js`
    pub fn data_layout(mut self) -> Self {
        self.posts_entry = "data/tweets.js".to_string();
        self.account_entry = "data/account.js".to_string();
        self
    }

    /// Replace the posts entry text verbatim
    pub fn posts_text(mut self, text: &str) -> Self {
        self.posts_override = Some(text.to_string());
        self
    }

    pub fn account_text(&self) -> String {
        let account = match &self.username {
            Some(username) => serde_json::json!([{ "account": {
                "username": username,
                "accountId": "1000",
                "accountDisplayName": "Test Account"
            }}]),
            None => serde_json::json!([{ "account": { "accountId": "1000" } }]),
        };
        format!("window.YTD.account.part0 = {}", account)
    }

    pub fn posts_text_value(&self) -> String {
        if let Some(text) = &self.posts_override {
            return text.clone();
        }
        let tweets: Vec<_> = self.tweets.iter().map(TweetBuilder::to_json).collect();
        format!("window.YTD.tweet.part0 = {}", serde_json::Value::Array(tweets))
    }

    fn entries(&self) -> Vec<(String, String)> {
        vec![
            (self.account_entry.clone(), self.account_text()),
            (self.posts_entry.clone(), self.posts_text_value()),
        ]
    }

    pub fn to_memory(&self) -> MemoryArchive {
        let mut archive = MemoryArchive::new();
        for (name, text) in self.entries() {
            archive.insert(name, text);
        }
        archive
    }

    pub fn to_zip_bytes(&self) -> Vec<u8> {
        let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
        let options = SimpleFileOptions::default();
        for (name, text) in self.entries() {
            writer.start_file(name, options).expect("Failed to start zip entry");
            writer.write_all(text.as_bytes()).expect("Failed to write zip entry");
        }
        writer.finish().expect("Failed to finish zip").into_inner()
    }

    /// Write the export as a zip file inside `dir`
    pub fn write_zip(&self, dir: &Path) -> PathBuf {
        let path = dir.join("twitter-export.zip");
        fs::write(&path, self.to_zip_bytes()).expect("Failed to write zip");
        path
    }

    /// Extract the export into `dir`
    pub fn write_dir(&self, dir: &Path) -> PathBuf {
        let root = dir.join("twitter-export");
        for (name, text) in self.entries() {
            let path = root.join(&name);
            fs::create_dir_all(path.parent().expect("Entry has a parent"))
                .expect("Failed to create entry directory");
            fs::write(path, text).expect("Failed to write entry");
        }
        root
    }

    /// Write a zip export into a fresh temp directory
    pub fn build_zip(&self) -> (TempDir, PathBuf) {
        let temp = TempDir::new().expect("Failed to create temp dir");
        let path = self.write_zip(temp.path());
        (temp, path)
    }
}

impl Default for ExportBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// `count` posts spread evenly from `newest_year` down to `oldest_year`,
/// listed oldest first the way exports often are
pub fn synthetic_tweets(count: usize, newest_year: i32, oldest_year: i32) -> Vec<TweetBuilder> {
    let span = (newest_year - oldest_year + 1) as usize;
    let per_year = count.div_ceil(span);

    (0..count)
        .map(|i| {
            let year = newest_year - (i / per_year) as i32;
            let offset = (i % per_year) as i64;
            let ts = Utc.with_ymd_and_hms(year, 11, 30, 0, 0, 0).unwrap()
                - chrono::Duration::hours(offset);
            debug_assert_eq!(ts.year(), year);
            TweetBuilder::new(&(i + 1).to_string())
                .text(&format!("synthetic post {} in {}", i + 1, year))
                .at(ts)
        })
        .rev()
        .collect()
}

//! Tweet Memento - Search and browse a personal Twitter data export
//!
//! This library loads the archive a platform hands out as a "download your
//! data" export and provides:
//!
//! - Parsing of the export's `window.YTD.* = [...]` wrapped JSON entries
//! - Normalization of raw posts into immutable, newest-first records
//! - Case-sensitive substring search and per-year histograms of matches
//! - A bounded view window anchored at a focus year, so renderers only
//!   materialize a fixed number of results
//!
//! # Example
//!
//! ```no_run
//! use memento::{ViewConfig, ViewSnapshot, load_export};
//! use std::path::Path;
//!
//! let index = load_export(Path::new("twitter-2024-01-01.zip"))?;
//! let view = ViewSnapshot::capture(&index, "rust", &ViewConfig::default())?;
//! println!("{} of {} posts match", view.matched_count, index.count());
//! # Ok::<(), memento::MementoError>(())
//! ```

pub mod archive;
pub mod cli;
pub mod config;
pub mod error;
pub mod indexer;
pub mod models;
pub mod parsers;
pub mod session;
pub mod utils;
pub mod views;

// Re-export commonly used types
pub use config::ViewConfig;
pub use error::{MementoError, Result};
pub use indexer::{TweetIndex, build_index, load_export};
pub use models::{Account, CanonicalRecord, SearchResult, ViewWindow, YearBucket};
pub use parsers::{parse_export_payload, parse_record_list};
pub use session::{LoadOutcome, Session};
pub use views::{ViewSnapshot, compute_window, year_histogram};

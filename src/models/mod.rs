//! Data models for a loaded social-media export.
//!
//! - [`Account`] - Export owner metadata, used to build permalinks
//! - [`RawRecord`] - A post exactly as decoded from the export
//! - [`CanonicalRecord`] - The normalized, immutable form held by the index
//! - [`SearchResult`] - The per-query view of one record handed to presentation code
//! - [`YearBucket`] / [`ViewWindow`] - Derived aggregation and windowing values

pub mod account;
pub mod record;
pub mod search;
pub mod window;

pub use account::Account;
pub use record::{CanonicalRecord, Dated, RawRecord};
pub use search::{SearchResult, YearBucket};
pub use window::ViewWindow;

//! Derived views over search results
//!
//! Everything here is a pure function of its inputs and is meant to be
//! recomputed whenever the query, focus year or index changes.

pub mod histogram;
pub mod snapshot;
pub mod window;

pub use histogram::year_histogram;
pub use snapshot::ViewSnapshot;
pub use window::{compute_window, compute_window_for_year};

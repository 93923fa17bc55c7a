//! Index building for post exports
//!
//! - [`normalizer`] turns one raw record into a [`crate::models::CanonicalRecord`]
//! - [`tweet_index`] holds the sorted, immutable record collection and its search
//! - [`builder`] wires archive entries through parsing into an index

pub mod builder;
pub mod normalizer;
pub mod tweet_index;

pub use builder::{build_index, build_index_in, load_export};
pub use normalizer::{normalize, permalink};
pub use tweet_index::TweetIndex;

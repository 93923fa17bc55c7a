use serde::Serialize;

use super::histogram::year_histogram;
use super::window::compute_window;
use crate::config::ViewConfig;
use crate::error::Result;
use crate::indexer::TweetIndex;
use crate::models::{SearchResult, ViewWindow, YearBucket};

/// Everything presentation code needs for one query: counts, the year
/// histogram of the matches, and the bounded slice of matches to render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ViewSnapshot {
    pub query: String,
    pub total_count: usize,
    pub matched_count: usize,
    pub years: Vec<YearBucket>,
    pub window: ViewWindow,
    pub visible: Vec<SearchResult>,
}

impl ViewSnapshot {
    pub fn capture(index: &TweetIndex, query: &str, config: &ViewConfig) -> Result<Self> {
        let mut matches = index.search(query);
        let years = year_histogram(&matches);
        let window = compute_window(&matches, config.focus_year, config.max_visible)?;

        let matched_count = matches.len();
        matches.truncate(window.end);
        let visible = matches.split_off(window.begin);

        Ok(Self {
            query: query.to_string(),
            total_count: index.count(),
            matched_count,
            years,
            window,
            visible,
        })
    }
}

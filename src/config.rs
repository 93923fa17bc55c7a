//! View configuration

use serde::{Deserialize, Serialize};

use crate::error::{MementoError, Result};

/// Upper bound on materialized results when none is configured
pub const DEFAULT_MAX_VISIBLE: usize = 1000;

/// Environment variable overriding [`ViewConfig::max_visible`] in the CLI
pub const MAX_VISIBLE_ENV: &str = "MEMENTO_MAX_VISIBLE";

/// Environment variable setting [`ViewConfig::focus_year`] in the CLI
pub const FOCUS_YEAR_ENV: &str = "MEMENTO_FOCUS_YEAR";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewConfig {
    pub max_visible: usize,
    /// Year to anchor the window at; the current local year when unset
    pub focus_year: Option<i32>,
}

impl ViewConfig {
    pub fn new(max_visible: usize, focus_year: Option<i32>) -> Result<Self> {
        if max_visible == 0 {
            return Err(MementoError::InvalidWindowConfig { max_visible });
        }
        Ok(Self { max_visible, focus_year })
    }

    pub fn with_focus_year(self, focus_year: Option<i32>) -> Self {
        Self { focus_year, ..self }
    }
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self { max_visible: DEFAULT_MAX_VISIBLE, focus_year: None }
    }
}

use chrono::{Datelike, Local};
use tracing::debug;

use crate::error::{MementoError, Result};
use crate::models::{Dated, ViewWindow};

/// Window into `filtered` anchored at `focus_year`, or at the current local
/// year when none is given. See [`compute_window_for_year`].
pub fn compute_window<T: Dated>(
    filtered: &[T],
    focus_year: Option<i32>,
    max_visible: usize,
) -> Result<ViewWindow> {
    let target = focus_year.unwrap_or_else(|| Local::now().year());
    compute_window_for_year(filtered, target, max_visible)
}

/// Choose at most `max_visible` consecutive results of `filtered` to materialize.
///
/// `filtered` must be newest first. When everything fits, the whole sequence is
/// the window. Otherwise the window opens a quarter window before the first
/// (most recent) result of `target_year`, or at the start when that year has no
/// results.
///
/// # Errors
///
/// [`MementoError::InvalidWindowConfig`] when `max_visible` is zero.
pub fn compute_window_for_year<T: Dated>(
    filtered: &[T],
    target_year: i32,
    max_visible: usize,
) -> Result<ViewWindow> {
    if max_visible == 0 {
        return Err(MementoError::InvalidWindowConfig { max_visible });
    }

    let total = filtered.len();
    if total <= max_visible {
        return Ok(ViewWindow { begin: 0, end: total, truncated_before: 0, truncated_after: 0 });
    }

    let anchor = filtered.iter().position(|r| r.local_year() == target_year).unwrap_or(0);
    let begin = anchor.saturating_sub(max_visible / 4);
    let end = total.min(begin + max_visible);

    debug!(total, target_year, anchor, begin, end, "computed view window");

    Ok(ViewWindow { begin, end, truncated_before: begin, truncated_after: total - end })
}

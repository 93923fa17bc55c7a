use serde::{Deserialize, Serialize};

/// Contiguous slice `[begin, end)` of a filtered result sequence that is
/// actually materialized, plus how many results were left out on either side.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewWindow {
    pub begin: usize,
    pub end: usize,
    pub truncated_before: usize,
    pub truncated_after: usize,
}

impl ViewWindow {
    pub fn len(&self) -> usize {
        self.end - self.begin
    }

    pub fn is_empty(&self) -> bool {
        self.begin == self.end
    }

    /// Materialized part of `filtered`. `filtered` must be the sequence the
    /// window was computed from.
    pub fn slice<'a, T>(&self, filtered: &'a [T]) -> &'a [T] {
        let end = self.end.min(filtered.len());
        let begin = self.begin.min(end);
        &filtered[begin..end]
    }
}

//! Terminal formatting helpers for the CLI

/// Collapse whitespace runs (including newlines) into single spaces and cap the
/// result at `max_chars` characters, marking cut text with `…`
pub fn single_line(text: &str, max_chars: usize) -> String {
    let collapsed = text.split_whitespace().collect::<Vec<_>>().join(" ");
    if collapsed.chars().count() <= max_chars {
        return collapsed;
    }

    let mut out: String = collapsed.chars().take(max_chars.saturating_sub(1)).collect();
    out.push('…');
    out
}

/// Histogram bar scaled so `max_count` spans `width` cells
pub fn format_year_bar(count: usize, max_count: usize, width: usize) -> String {
    if max_count == 0 || count == 0 {
        return String::new();
    }
    let cells = ((count * width) / max_count).max(1);
    "█".repeat(cells)
}

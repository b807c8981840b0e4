// src/domain/text/services.rs
use super::value_objects::{Slug, Summary, SummaryLimit};

/// Marker appended to truncated summaries.
pub const ELLIPSIS: &str = "...";

/// Lowercase `input`, strip leading and trailing ASCII spaces and turn every
/// remaining space into a hyphen.
///
/// Only `' '` is trimmed and replaced. Tabs and newlines pass through, so
/// `"\tA B"` becomes `"\ta-b"`.
pub fn slugify(input: &str) -> Slug {
    let lowered = input.to_lowercase();
    let trimmed = lowered.trim_matches(' ');
    Slug::from_normalized(trimmed.replace(' ', "-"))
}

/// Truncate `text` to [`crate::domain::text::DEFAULT_SUMMARY_LIMIT`] characters.
pub fn summarize(text: &str) -> Summary {
    summarize_with_limit(text, SummaryLimit::default())
}

/// Keep `text` as-is when it has at most `limit` characters, otherwise keep the
/// first `limit` characters and append [`ELLIPSIS`].
///
/// Characters are Unicode scalar values. A truncated summary is `limit + 3`
/// characters long, so feeding it back in truncates it again.
pub fn summarize_with_limit(text: &str, limit: SummaryLimit) -> Summary {
    match text.char_indices().nth(limit.get()) {
        None => Summary::new(text.to_owned(), false),
        Some((cut, _)) => {
            let mut out = String::with_capacity(cut + ELLIPSIS.len());
            out.push_str(&text[..cut]);
            out.push_str(ELLIPSIS);
            Summary::new(out, true)
        }
    }
}

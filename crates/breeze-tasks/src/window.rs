//! Context windowing for small-context backends.
//!
//! Lengths are counted in characters, never bytes, so truncation cannot split
//! a UTF-8 code point.

/// Inserted between the retained head and tail of truncated page text
pub const TRUNCATION_MARKER: &str = "\n\n[... content truncated ...]\n\n";

/// Appended to blog summaries cut to the head window
pub const SUMMARY_TRUNCATION_MARKER: &str = "\n[... summary truncated ...]";

/// Appended to summaries cut for keyword and social post generation
pub const SHORT_TRUNCATION_MARKER: &str = "\n[... truncated ...]";

/// Tenths of `max_length` kept from the start of the content
const HEAD_TENTHS: usize = 6;

/// Tenths of `max_length` kept from the end of the content
const TAIL_TENTHS: usize = 3;

/// Truncate `content` to fit `max_length`, keeping its head and tail.
///
/// Content within the limit is returned unchanged. Otherwise the first
/// `floor(0.6 * max_length)` and last `floor(0.3 * max_length)` characters are
/// joined by [`TRUNCATION_MARKER`]. The retained parts add up to 90% of
/// `max_length`, not 100%; callers rely on that output length.
pub fn truncate(content: &str, max_length: usize) -> String {
    let len = content.chars().count();
    if len <= max_length {
        return content.to_string();
    }

    let keep_start = floor_tenths(max_length, HEAD_TENTHS);
    let keep_end = floor_tenths(max_length, TAIL_TENTHS);

    let head: String = content.chars().take(keep_start).collect();
    let tail: String = content.chars().skip(len - keep_end).collect();

    tracing::debug!(
        original_chars = len,
        max_length,
        keep_start,
        keep_end,
        "content truncated"
    );

    format!("{}{}{}", head, TRUNCATION_MARKER, tail)
}

/// `floor(n * tenths / 10)` without overflow or float rounding
fn floor_tenths(n: usize, tenths: usize) -> usize {
    n / 10 * tenths + (n % 10) * tenths / 10
}

/// Keep only the first `max_length` characters, appending `marker` when
/// anything was cut.
pub fn truncate_head(content: &str, max_length: usize, marker: &str) -> String {
    match content.char_indices().nth(max_length) {
        None => content.to_string(),
        Some((byte_idx, _)) => format!("{}{}", &content[..byte_idx], marker),
    }
}

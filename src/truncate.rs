//! Word-safe length enforcement for generated text fields.
//!
//! Lengths are counted in `char`s. The truncation marker is reserved inside the
//! limit, so a truncated value never exceeds the limit it was cut to and
//! truncating twice is the same as truncating once.

/// Marker appended to text that was cut short.
pub const TRUNCATION_MARKER: &str = "...";

/// Trim `text` to at most `limit` characters without cutting a word in half.
///
/// Returns `text` unchanged when it already fits. Otherwise the result is the
/// longest run of complete words that fits in `limit` minus the marker, followed
/// by [`TRUNCATION_MARKER`]. A single word longer than the available room is cut
/// at the character budget. Limits too small to hold any text next to the
/// marker yield an empty string.
pub fn enforce_char_limit(text: &str, limit: usize) -> String {
    truncate_with_marker(text, limit, TRUNCATION_MARKER)
}

/// [`enforce_char_limit`] with a caller-supplied marker.
pub fn truncate_with_marker(text: &str, limit: usize, marker: &str) -> String {
    if text.chars().count() <= limit {
        return text.to_string();
    }

    let marker_len = marker.chars().count();
    if limit <= marker_len {
        return String::new();
    }

    let budget = limit - marker_len;
    let cut = text
        .char_indices()
        .nth(budget)
        .map(|(idx, _)| idx)
        .unwrap_or(text.len());
    let prefix = &text[..cut];

    let on_boundary = text[cut..].chars().next().map_or(true, char::is_whitespace);
    let kept = if on_boundary {
        prefix
    } else {
        match prefix.rfind(char::is_whitespace) {
            Some(idx) => &prefix[..idx],
            None => prefix,
        }
    };

    let mut kept = kept.trim_end();
    if kept.is_empty() {
        // Nothing but a partial first word fits; keep the raw cut.
        kept = prefix.trim();
    }

    format!("{}{}", kept, marker)
}

//! Shared utility functions.

/// Normalizes a locale tag as typed by a user or an environment variable.
///
/// Trims surrounding whitespace and turns POSIX-style separators into
/// BCP-47 hyphens, so `" en_US "` becomes `"en-US"`. Case is left alone.
pub fn normalize_locale_tag(input: &str) -> String {
    input.trim().replace('_', "-")
}

/// Truncates a string to at most `max_chars` characters, appending an ellipsis.
///
/// Counts characters rather than bytes so multi-byte text never splits.
pub fn truncate_string(input: &str, max_chars: usize) -> String {
    if input.chars().count() <= max_chars {
        input.to_string()
    } else {
        let kept: String = input.chars().take(max_chars.saturating_sub(3)).collect();
        format!("{kept}...")
    }
}

//! Text helpers for bounding collaborator-supplied output.

use std::borrow::Cow;

/// Default number of lines kept from the tail of raw build output.
pub const DEFAULT_OUTPUT_TAIL_LINES: usize = 50;

/// Return the last `max_lines` lines of `output`.
///
/// The input is returned unchanged when it has no more lines than the limit.
/// A trailing newline counts as starting a final empty line, matching a
/// plain split on `'\n'`.
pub fn tail_lines(output: &str, max_lines: usize) -> &str {
    let total = output.split('\n').count();
    if total <= max_lines {
        return output;
    }

    let mut rest = output;
    for _ in 0..total - max_lines {
        match rest.find('\n') {
            Some(idx) => rest = &rest[idx + 1..],
            None => return "",
        }
    }
    rest
}

/// Truncate `text` to at most `max_chars` characters, appending `"..."` when
/// content was dropped. A limit of 0 disables clipping.
pub fn clip_chars(text: &str, max_chars: usize) -> Cow<'_, str> {
    if max_chars == 0 {
        return Cow::Borrowed(text);
    }
    let mut indices = text.char_indices();
    match indices.nth(max_chars) {
        None => Cow::Borrowed(text),
        Some((idx, _)) => Cow::Owned(format!("{}...", &text[..idx])),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tail_lines_short_input_unchanged() {
        assert_eq!(tail_lines("a\nb\nc", 5), "a\nb\nc");
        assert_eq!(tail_lines("a\nb\nc", 3), "a\nb\nc");
    }

    #[test]
    fn test_tail_lines_keeps_last_lines() {
        assert_eq!(tail_lines("a\nb\nc\nd", 2), "c\nd");
        assert_eq!(tail_lines("a\nb\nc\nd", 1), "d");
    }

    #[test]
    fn test_tail_lines_zero_returns_empty() {
        assert_eq!(tail_lines("a\nb", 0), "");
    }

    #[test]
    fn test_tail_lines_counts_trailing_newline() {
        // "a\nb\n" splits into ["a", "b", ""] so the last two lines are "b\n"
        assert_eq!(tail_lines("a\nb\n", 2), "b\n");
    }

    #[test]
    fn test_clip_chars_short_input_borrowed() {
        let clipped = clip_chars("hello", 10);
        assert_eq!(clipped, "hello");
        assert!(matches!(clipped, Cow::Borrowed(_)));
    }

    #[test]
    fn test_clip_chars_truncates_with_ellipsis() {
        assert_eq!(clip_chars("hello world", 5), "hello...");
    }

    #[test]
    fn test_clip_chars_exact_limit_unchanged() {
        assert_eq!(clip_chars("hello", 5), "hello");
    }

    #[test]
    fn test_clip_chars_zero_disables_limit() {
        assert_eq!(clip_chars("hello world", 0), "hello world");
    }

    #[test]
    fn test_clip_chars_respects_char_boundaries() {
        assert_eq!(clip_chars("héllo wörld", 6), "héllo ...");
    }
}

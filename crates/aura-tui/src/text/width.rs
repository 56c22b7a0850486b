//! Text width and truncation utilities.
//!
//! Used to fit file names on attachment chips and profile lines into the
//! sidebar.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Width of `s` in terminal cells. Wide characters count as 2.
pub fn visual_width(s: &str) -> usize {
    UnicodeWidthStr::width(s)
}

const ELLIPSIS: &str = "...";

/// Shorten `s` to at most `max_width` cells, ending in `...` when cut.
///
/// Wide characters are never split.
pub fn truncate_to_width(s: &str, max_width: usize) -> String {
    if visual_width(s) <= max_width {
        return s.to_string();
    }

    let budget = max_width.saturating_sub(ELLIPSIS.len());
    let mut used = 0;
    let end = s
        .char_indices()
        .find_map(|(idx, ch)| {
            used += UnicodeWidthChar::width(ch).unwrap_or(0);
            (used > budget).then_some(idx)
        })
        .unwrap_or(s.len());

    format!("{}{ELLIPSIS}", &s[..end])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visual_width_ascii() {
        assert_eq!(visual_width("hello"), 5);
        assert_eq!(visual_width(""), 0);
    }

    #[test]
    fn test_visual_width_wide_chars() {
        // CJK characters are 2 cells wide
        assert_eq!(visual_width("\u{4f60}\u{597d}"), 4);
    }

    #[test]
    fn test_truncate_no_truncation_needed() {
        assert_eq!(truncate_to_width("photo.png", 12), "photo.png");
        assert_eq!(truncate_to_width("hello", 5), "hello");
    }

    #[test]
    fn test_truncate_long_file_name() {
        assert_eq!(
            truncate_to_width("holiday-video-final.mp4", 12),
            "holiday-v..."
        );
    }

    #[test]
    fn test_truncate_wide_chars_not_split() {
        let result = truncate_to_width("\u{4f60}\u{597d}\u{4e16}\u{754c}", 5);
        assert_eq!(result, "\u{4f60}...");
    }

    #[test]
    fn test_truncate_very_short() {
        assert_eq!(truncate_to_width("hello", 3), "...");
        assert_eq!(truncate_to_width("hello", 0), "...");
    }
}

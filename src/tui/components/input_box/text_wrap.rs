//! Pure text wrapping helpers and dimensional constants for the InputBox.
//!
//! The input box renders pre-wrapped lines, so the same functions decide
//! what is drawn, how tall the box is and where the cursor lands.

use unicode_width::UnicodeWidthStr;

/// Border (2) + padding (2) consumed horizontally by the bordered block
pub(super) const HORIZONTAL_OVERHEAD: u16 = 4;
/// Top + bottom borders consumed vertically
pub(super) const VERTICAL_OVERHEAD: u16 = 2;
/// Maximum visible content lines before internal scrolling kicks in
pub(super) const MAX_VISIBLE_LINES: u16 = 4;
/// Offset from area edge to content (border + left padding)
pub(super) const CONTENT_OFFSET: u16 = 2;

fn wrap_options(width: u16) -> textwrap::Options<'static> {
    textwrap::Options::new(width as usize)
        .break_words(true)
        .word_separator(textwrap::WordSeparator::AsciiSpace)
}

/// Inner content width after subtracting border/padding overhead.
pub(super) fn inner_width(area_width: u16) -> u16 {
    area_width.saturating_sub(HORIZONTAL_OVERHEAD)
}

/// Wrap `text` into display lines. Explicit newlines always start a new line.
pub(super) fn wrap_lines(text: &str, width: u16) -> Vec<String> {
    if width == 0 {
        return vec![String::new()];
    }
    text.split('\n')
        .flat_map(|line| {
            let wrapped = textwrap::wrap(line, wrap_options(width));
            if wrapped.is_empty() {
                vec![String::new()]
            } else {
                wrapped.into_iter().map(|l| l.into_owned()).collect()
            }
        })
        .collect()
}

/// Number of display lines `text` occupies at `width`, saturating at `u16::MAX`.
pub(super) fn line_count(text: &str, width: u16) -> u16 {
    u16::try_from(wrap_lines(text, width).len().max(1)).unwrap_or(u16::MAX)
}

/// (column, row) of the end of `text_before_cursor` within the wrapped layout.
pub(super) fn cursor_position(text_before_cursor: &str, width: u16) -> (u16, u16) {
    if width == 0 {
        return (0, 0);
    }

    let rows = line_count(text_before_cursor, width);
    let last_logical = text_before_cursor
        .rsplit('\n')
        .next()
        .unwrap_or_default();

    // Segments are contiguous slices of the line; the whitespace textwrap
    // drops between them is skipped by searching forward.
    let mut last_start = 0;
    let mut search_from = 0;
    for segment in textwrap::wrap(last_logical, wrap_options(width)) {
        if let Some(i) = last_logical[search_from..].find(segment.as_ref()) {
            last_start = search_from + i;
            search_from = last_start + segment.len();
        }
    }
    let tail = &last_logical[last_start..];
    let col = u16::try_from(tail.width()).unwrap_or(u16::MAX).min(width);

    (col, rows.saturating_sub(1))
}

/// Byte offset of the previous character boundary before `pos`.
pub(super) fn prev_char_boundary(text: &str, pos: usize) -> usize {
    text[..pos]
        .char_indices()
        .next_back()
        .map(|(i, _)| i)
        .unwrap_or(0)
}

/// Byte offset of the next character boundary after `pos`.
pub(super) fn next_char_boundary(text: &str, pos: usize) -> usize {
    text[pos..]
        .char_indices()
        .nth(1)
        .map(|(i, _)| pos + i)
        .unwrap_or(text.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_lines_respects_newlines() {
        assert_eq!(wrap_lines("ab\ncd", 10), vec!["ab", "cd"]);
        assert_eq!(wrap_lines("ab\n", 10), vec!["ab", ""]);
        assert_eq!(wrap_lines("", 10), vec![""]);
    }

    #[test]
    fn test_wrap_lines_breaks_at_width() {
        assert_eq!(wrap_lines("hello world", 5), vec!["hello", "world"]);
    }

    #[test]
    fn test_line_count_minimum_one() {
        assert_eq!(line_count("", 10), 1);
        assert_eq!(line_count("a\nb\nc", 10), 3);
    }

    #[test]
    fn test_cursor_position_single_line() {
        assert_eq!(cursor_position("", 10), (0, 0));
        assert_eq!(cursor_position("abc", 10), (3, 0));
        // Trailing spaces still move the cursor
        assert_eq!(cursor_position("ab  ", 10), (4, 0));
    }

    #[test]
    fn test_cursor_position_after_newline() {
        assert_eq!(cursor_position("abc\n", 10), (0, 1));
        assert_eq!(cursor_position("abc\nde", 10), (2, 1));
    }

    #[test]
    fn test_cursor_position_wrapped() {
        assert_eq!(cursor_position("hello wor", 5), (3, 1));
    }

    #[test]
    fn test_cursor_position_third_wrapped_row() {
        assert_eq!(cursor_position("hello world foo", 5), (3, 2));
    }

    #[test]
    fn test_cursor_position_skips_repeated_spaces() {
        // "ab" | "cd": the run of spaces is dropped at the wrap point
        assert_eq!(cursor_position("ab   cd", 3), (2, 1));
        assert_eq!(cursor_position("one  two  six", 4), (3, 2));
    }

    #[test]
    fn test_line_count_saturates() {
        let text = "\n".repeat(70_000);
        assert_eq!(line_count(&text, 10), u16::MAX);
    }

    #[test]
    fn test_cursor_position_huge_draft() {
        let text = "\n".repeat(65_535);
        assert_eq!(cursor_position(&text, 10), (0, u16::MAX - 1));
    }

    #[test]
    fn test_char_boundaries_multibyte() {
        let text = "aé💧";
        assert_eq!(next_char_boundary(text, 0), 1);
        assert_eq!(next_char_boundary(text, 1), 3);
        assert_eq!(next_char_boundary(text, 3), text.len());
        assert_eq!(prev_char_boundary(text, text.len()), 3);
        assert_eq!(prev_char_boundary(text, 1), 0);
    }
}

use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// Display width in terminal cells.
pub fn display_width(s: &str) -> usize {
    UnicodeWidthStr::width(s)
}

/// Truncate a string to fit within `max_cells` terminal cells, appending `…` if truncated.
pub fn truncate_to_width(s: &str, max_cells: usize) -> String {
    if display_width(s) <= max_cells {
        return s.to_string();
    }
    if max_cells == 0 {
        return String::new();
    }
    let budget = max_cells - 1;
    let mut width = 0;
    let mut result = String::new();
    for grapheme in s.graphemes(true) {
        let gw = display_width(grapheme);
        if width + gw > budget {
            break;
        }
        width += gw;
        result.push_str(grapheme);
    }
    result.push('\u{2026}');
    result
}

/// Byte offset reached by stepping `delta` graphemes from `byte_offset`,
/// stopping at either end of the string.
pub fn step_graphemes(s: &str, byte_offset: usize, delta: isize) -> usize {
    let mut offset = byte_offset.min(s.len());
    if delta >= 0 {
        for _ in 0..delta {
            match next_grapheme_boundary(s, offset) {
                Some(next) => offset = next,
                None => break,
            }
        }
    } else {
        for _ in 0..delta.unsigned_abs() {
            match prev_grapheme_boundary(s, offset) {
                Some(prev) => offset = prev,
                None => break,
            }
        }
    }
    offset
}

/// Next grapheme boundary after `byte_offset`. Returns None if at end.
pub fn next_grapheme_boundary(s: &str, byte_offset: usize) -> Option<usize> {
    if byte_offset >= s.len() {
        return None;
    }
    let len = s[byte_offset..].graphemes(true).next().map_or(0, str::len);
    Some(byte_offset + len)
}

/// Previous grapheme boundary before `byte_offset`. Returns None if at start.
pub fn prev_grapheme_boundary(s: &str, byte_offset: usize) -> Option<usize> {
    if byte_offset == 0 {
        return None;
    }
    s[..byte_offset]
        .grapheme_indices(true)
        .next_back()
        .map(|(i, _)| i)
}

/// Convert byte offset to display column (terminal cells).
pub fn byte_offset_to_display_col(s: &str, byte_offset: usize) -> usize {
    display_width(&s[..byte_offset.min(s.len())])
}

/// Start of the whitespace-delimited word left of `byte_offset`.
pub fn word_boundary_left(s: &str, byte_offset: usize) -> usize {
    let prefix = &s[..byte_offset.min(s.len())];
    let trimmed = prefix.trim_end();
    trimmed
        .grapheme_indices(true)
        .rev()
        .take_while(|(_, g)| !is_blank(g))
        .last()
        .map_or(0, |(i, _)| i)
}

/// Start of the next word right of `byte_offset`, or the end of the string.
pub fn word_boundary_right(s: &str, byte_offset: usize) -> usize {
    let start = byte_offset.min(s.len());
    let mut seen_blank = false;
    for (i, g) in s[start..].grapheme_indices(true) {
        if is_blank(g) {
            seen_blank = true;
        } else if seen_blank {
            return start + i;
        }
    }
    s.len()
}

fn is_blank(g: &str) -> bool {
    g.chars().all(char::is_whitespace)
}

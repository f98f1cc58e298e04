//! Byte-length padding and truncation helpers.
//!
//! Widths here are measured with `str::len`, the same unit the table engine
//! uses, so wide or multi-byte characters are not treated specially.

/// Pads a string on the left (right-aligns) to reach the target width.
///
/// ```rust
/// use cktools_render::pad_left;
///
/// assert_eq!(pad_left("42", 5), "   42");
/// assert_eq!(pad_left("hello", 3), "hello"); // no truncation
/// ```
pub fn pad_left(s: &str, width: usize) -> String {
    let fill = width.saturating_sub(s.len());
    format!("{}{}", " ".repeat(fill), s)
}

/// Pads a string on the right (left-aligns) to reach the target width.
///
/// ```rust
/// use cktools_render::pad_right;
///
/// assert_eq!(pad_right("42", 5), "42   ");
/// ```
pub fn pad_right(s: &str, width: usize) -> String {
    let fill = width.saturating_sub(s.len());
    format!("{}{}", s, " ".repeat(fill))
}

/// Pads a string on both sides to reach the target width.
///
/// When the remaining space is odd, the extra space goes on the right.
///
/// ```rust
/// use cktools_render::pad_center;
///
/// assert_eq!(pad_center("hi", 6), "  hi  ");
/// assert_eq!(pad_center("hi", 5), " hi  ");
/// ```
pub fn pad_center(s: &str, width: usize) -> String {
    let fill = width.saturating_sub(s.len());
    let left = fill / 2;
    format!("{}{}{}", " ".repeat(left), s, " ".repeat(fill - left))
}

/// Cuts a string to at most `max_len` bytes, ending it with `marker`.
///
/// The cut never splits a UTF-8 sequence, so the result may be a few bytes
/// shorter than `max_len`.
///
/// ```rust
/// use cktools_render::truncate_end;
///
/// assert_eq!(truncate_end("Hello World", 8, "..."), "Hello...");
/// assert_eq!(truncate_end("Hello", 8, "..."), "Hello");
/// ```
pub fn truncate_end(s: &str, max_len: usize, marker: &str) -> String {
    if s.len() <= max_len {
        return s.to_string();
    }
    if max_len <= marker.len() {
        return marker[..floor_char_boundary(marker, max_len)].to_string();
    }
    let keep = floor_char_boundary(s, max_len - marker.len());
    format!("{}{}", &s[..keep], marker)
}

fn floor_char_boundary(s: &str, mut index: usize) -> usize {
    while index > 0 && !s.is_char_boundary(index) {
        index -= 1;
    }
    index
}

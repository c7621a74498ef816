//! Trailing line-comment removal.

const COMMENT_MARKER: &str = "//";

/// Truncates the line at its first `//` line comment.
///
/// A `//` that belongs to a URL scheme marker (`https://`, `ftp://`, …) is
/// not a comment: it is skipped and the search continues after it, so a
/// quoted URL followed by a real comment keeps the URL and loses the comment.
///
/// Protocol-relative URLs (`'//cdn.example.com'`) are indistinguishable from
/// comments here and get truncated.
///
/// # Examples
///
/// ```
/// use ukrscan::core::comment::strip_line_comment;
///
/// assert_eq!(strip_line_comment("foo(); // переклад"), "foo(); ");
/// assert_eq!(
///     strip_line_comment("const u = 'https://a.b'; // зберегти"),
///     "const u = 'https://a.b'; "
/// );
/// ```
pub fn strip_line_comment(line: &str) -> &str {
    let mut from = 0;
    while let Some(found) = line[from..].find(COMMENT_MARKER) {
        let index = from + found;
        if is_scheme_marker(line, index) {
            from = index + COMMENT_MARKER.len();
            continue;
        }
        return &line[..index];
    }
    line
}

/// `//` at `index` is preceded by `:` (the tail of `://`).
fn is_scheme_marker(line: &str, index: usize) -> bool {
    index > 0 && line.as_bytes()[index - 1] == b':'
}

//! Span scanning.
//!
//! Finds `**`-delimited bold spans and `---` divider lines with linear-time
//! regular expressions. Spans never nest: once a span closes, scanning
//! resumes right after its closing marker.

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

/// Delimiter framing a bold span on both ends.
pub const MARKER: &str = "**";

static BOLD_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*\*(.+?)\*\*").expect("bold pattern compiles"));

static DIVIDER_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*---\s*$").expect("divider pattern compiles"));

/// A bold region, delimiters included, as half-open char offsets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }
}

/// Find every bold span in `text`, in document order.
///
/// Offsets are in chars. A span's body is non-empty and never crosses a
/// line break.
pub fn find_spans(text: &str) -> Vec<Span> {
    let mut spans = Vec::new();
    let mut byte_pos = 0;
    let mut char_pos = 0;
    for m in BOLD_PATTERN.find_iter(text) {
        char_pos += text[byte_pos..m.start()].chars().count();
        let start = char_pos;
        char_pos += m.as_str().chars().count();
        byte_pos = m.end();
        spans.push(Span::new(start, char_pos));
    }
    spans
}

/// Remove the markers of every bold span in a single pass.
///
/// Returns the new text and the number of spans stripped. Uses the same
/// matching rule as [`find_spans`].
pub fn strip_spans(text: &str) -> (String, usize) {
    let mut out = String::with_capacity(text.len());
    let mut last = 0;
    let mut count = 0;
    for caps in BOLD_PATTERN.captures_iter(text) {
        let (Some(whole), Some(body)) = (caps.get(0), caps.get(1)) else {
            continue;
        };
        out.push_str(&text[last..whole.start()]);
        out.push_str(body.as_str());
        last = whole.end();
        count += 1;
    }
    out.push_str(&text[last..]);
    (out, count)
}

/// Whether a line is a `---` divider with optional surrounding whitespace.
pub fn is_divider(line: &str) -> bool {
    DIVIDER_PATTERN.is_match(line)
}

/// Indices of divider lines.
pub fn find_dividers<'a>(lines: impl IntoIterator<Item = &'a str>) -> Vec<usize> {
    lines
        .into_iter()
        .enumerate()
        .filter_map(|(idx, line)| is_divider(line).then_some(idx))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_spans_in_document_order() {
        let spans = find_spans("**a** text **b**");
        assert_eq!(spans, vec![Span::new(0, 5), Span::new(11, 16)]);
    }

    #[test]
    fn test_find_spans_none_is_empty() {
        assert!(find_spans("plain text").is_empty());
        assert!(find_spans("").is_empty());
    }

    #[test]
    fn test_unterminated_marker_is_ignored() {
        assert!(find_spans("**open but never closed").is_empty());
    }

    #[test]
    fn test_empty_body_is_not_a_span() {
        assert!(find_spans("****").is_empty());
    }

    #[test]
    fn test_body_is_non_greedy() {
        let spans = find_spans("**a**b**c**");
        assert_eq!(spans, vec![Span::new(0, 5), Span::new(6, 11)]);
    }

    #[test]
    fn test_nested_markers_pair_leftmost() {
        // The inner opening marker closes the outer span.
        let spans = find_spans("**outer **inner** tail**");
        assert_eq!(spans, vec![Span::new(0, 10), Span::new(15, 24)]);
    }

    #[test]
    fn test_span_does_not_cross_lines() {
        assert!(find_spans("**a\nb**").is_empty());
        assert_eq!(find_spans("x\n**b**"), vec![Span::new(2, 7)]);
    }

    #[test]
    fn test_offsets_count_chars_not_bytes() {
        let spans = find_spans("héllo **wörld**");
        assert_eq!(spans, vec![Span::new(6, 15)]);
    }

    #[test]
    fn test_strip_spans_counts_and_removes_markers() {
        assert_eq!(strip_spans("**bold**"), ("bold".to_string(), 1));
        assert_eq!(
            strip_spans("a **b** c **d**\n**e**"),
            ("a b c d\ne".to_string(), 3)
        );
    }

    #[test]
    fn test_strip_spans_without_spans_is_identity() {
        assert_eq!(strip_spans("no ** bold"), ("no ** bold".to_string(), 0));
    }

    #[test]
    fn test_strip_spans_is_idempotent_for_simple_text() {
        let (once, _) = strip_spans("**x** and **y**");
        let (twice, count) = strip_spans(&once);
        assert_eq!(once, twice);
        assert_eq!(count, 0);
    }

    #[test]
    fn test_is_divider() {
        assert!(is_divider("---"));
        assert!(is_divider("   ---  "));
        assert!(is_divider("\t---"));
        assert!(!is_divider("----"));
        assert!(!is_divider("--"));
        assert!(!is_divider("a ---"));
        assert!(!is_divider(""));
    }

    #[test]
    fn test_find_dividers_returns_line_indices() {
        let lines = ["line1", "---", "line2", "   ---  ", "line3"];
        assert_eq!(find_dividers(lines), vec![1, 3]);
    }
}

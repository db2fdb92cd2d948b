//! Case-insensitive match highlighting for suggestion labels.
//!
//! The query is compared literally, one grapheme at a time, so characters that
//! carry meaning in a regular expression (`(`, `*`, `.`, `[` ...) are plain text.

use unicode_segmentation::UnicodeSegmentation;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Segment {
    pub text: String,
    pub matched: bool,
}

impl Segment {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            matched: false,
        }
    }

    pub fn matched(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            matched: true,
        }
    }
}

/// Split `label` into alternating unmatched / matched segments.
///
/// An empty query yields the whole label as a single unmatched segment.
pub fn highlight_matches(query: &str, label: &str) -> Vec<Segment> {
    if query.is_empty() {
        return vec![Segment::plain(label)];
    }
    let needle = fold_graphemes(query);
    let hay: Vec<&str> = label.graphemes(true).collect();
    let mut out = Vec::new();
    let mut start = 0;
    let mut i = 0;
    while i + needle.len() <= hay.len() {
        if matches_at(&hay, i, &needle) {
            if start < i {
                out.push(Segment::plain(hay[start..i].concat()));
            }
            out.push(Segment::matched(hay[i..i + needle.len()].concat()));
            i += needle.len();
            start = i;
        } else {
            i += 1;
        }
    }
    if start < hay.len() {
        out.push(Segment::plain(hay[start..].concat()));
    }
    out
}

/// Case-insensitive substring test used to filter results against the query.
///
/// Compares whole graphemes like [`highlight_matches`], so every label that
/// passes has at least one highlighted segment.
pub fn contains_ignore_case(label: &str, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    let needle = fold_graphemes(query);
    let hay: Vec<&str> = label.graphemes(true).collect();
    hay.len() >= needle.len()
        && (0..=hay.len() - needle.len()).any(|i| matches_at(&hay, i, &needle))
}

fn fold_graphemes(s: &str) -> Vec<String> {
    s.graphemes(true).map(|g| g.to_lowercase()).collect()
}

fn matches_at(hay: &[&str], i: usize, needle: &[String]) -> bool {
    hay[i..i + needle.len()]
        .iter()
        .zip(needle)
        .all(|(a, b)| a.to_lowercase() == *b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_query_is_single_plain_segment() {
        assert_eq!(
            highlight_matches("", "Shampoo"),
            vec![Segment::plain("Shampoo")]
        );
    }

    #[test]
    fn prefix_match_keeps_label_casing() {
        assert_eq!(
            highlight_matches("sh", "Shampoo"),
            vec![Segment::matched("Sh"), Segment::plain("ampoo")]
        );
    }

    #[test]
    fn marks_every_occurrence() {
        let segs = highlight_matches("ba", "aba ba");
        assert_eq!(
            segs,
            vec![
                Segment::plain("a"),
                Segment::matched("ba"),
                Segment::plain(" "),
                Segment::matched("ba"),
            ]
        );
    }

    #[test]
    fn regex_metacharacters_are_literal() {
        assert_eq!(
            highlight_matches("(", "Case (Blue)"),
            vec![
                Segment::plain("Case "),
                Segment::matched("("),
                Segment::plain("Blue)"),
            ]
        );
        assert_eq!(
            highlight_matches(".*", "Shampoo"),
            vec![Segment::plain("Shampoo")]
        );
        assert_eq!(
            highlight_matches("[a-z]+", "x[a-z]+y"),
            vec![
                Segment::plain("x"),
                Segment::matched("[a-z]+"),
                Segment::plain("y"),
            ]
        );
    }

    #[test]
    fn no_match_returns_whole_label() {
        assert_eq!(
            highlight_matches("zzz", "Laptop"),
            vec![Segment::plain("Laptop")]
        );
    }

    #[test]
    fn query_longer_than_label() {
        assert_eq!(
            highlight_matches("laptops", "Lap"),
            vec![Segment::plain("Lap")]
        );
        assert!(highlight_matches("a", "").is_empty());
    }

    #[test]
    fn segments_concatenate_back_to_label() {
        let label = "iPhone 9 / iPhone X";
        let joined: String = highlight_matches("PHONE", label)
            .into_iter()
            .map(|s| s.text)
            .collect();
        assert_eq!(joined, label);
    }

    #[test]
    fn filter_and_highlight_agree_on_combining_marks() {
        let label = "Cafe\u{301} Latte";
        assert!(!contains_ignore_case(label, "cafe"));
        assert_eq!(highlight_matches("cafe", label), vec![Segment::plain(label)]);

        assert!(contains_ignore_case(label, "LATTE"));
        assert_eq!(
            highlight_matches("LATTE", label),
            vec![Segment::plain("Cafe\u{301} "), Segment::matched("Latte")]
        );
        assert!(contains_ignore_case(label, "cafe\u{301}"));
    }

    #[test]
    fn contains_ignore_case_matches_mixed_case() {
        assert!(contains_ignore_case("Samsung Universe 9", "UNIVERSE"));
        assert!(!contains_ignore_case("Samsung", "apple"));
        assert!(!contains_ignore_case("Lap", "laptops"));
        assert!(contains_ignore_case("anything", ""));
    }
}

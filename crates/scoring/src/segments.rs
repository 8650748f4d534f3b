use serde::{Deserialize, Serialize};
use vigil_common::error::{VigilError, VigilResult};

use crate::risk::{classify, RiskLevel};

/// A flagged span of a source document.
///
/// `start_index` and `end_index` count characters (Unicode scalar values),
/// with `end_index` exclusive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HighlightedSegment {
    pub text: String,
    pub start_index: usize,
    pub end_index: usize,
    pub confidence: f64,
    pub reason: String,
}

impl HighlightedSegment {
    pub fn level(&self) -> RiskLevel {
        classify(self.confidence)
    }
}

/// One contiguous run of the source text, optionally tied to the highlight
/// that produced it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Segment {
    pub text: String,
    pub start_index: usize,
    pub end_index: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub highlight: Option<HighlightedSegment>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<RiskLevel>,
}

impl Segment {
    fn plain(text: &str, start_index: usize, end_index: usize) -> Self {
        Self {
            text: text.to_string(),
            start_index,
            end_index,
            highlight: None,
            level: None,
        }
    }

    fn highlighted(highlight: &HighlightedSegment) -> Self {
        Self {
            text: highlight.text.clone(),
            start_index: highlight.start_index,
            end_index: highlight.end_index,
            level: Some(highlight.level()),
            highlight: Some(highlight.clone()),
        }
    }

    pub fn is_highlighted(&self) -> bool {
        self.highlight.is_some()
    }
}

/// Char index -> byte offset table for `text`, with one trailing entry for
/// `text.len()`.
fn char_boundaries(text: &str) -> Vec<usize> {
    let mut boundaries: Vec<usize> = text.char_indices().map(|(i, _)| i).collect();
    boundaries.push(text.len());
    boundaries
}

fn check_highlight(
    source_text: &str,
    boundaries: &[usize],
    highlight: &HighlightedSegment,
) -> VigilResult<()> {
    let char_len = boundaries.len() - 1;
    let (start, end) = (highlight.start_index, highlight.end_index);

    if start >= end {
        return Err(VigilError::Range(format!(
            "highlight [{start}, {end}) is empty or inverted"
        )));
    }
    if end > char_len {
        return Err(VigilError::Range(format!(
            "highlight [{start}, {end}) exceeds text length {char_len}"
        )));
    }
    if !highlight.confidence.is_finite() || !(0.0..=1.0).contains(&highlight.confidence) {
        return Err(VigilError::Validation(format!(
            "highlight [{start}, {end}) confidence must be within [0, 1], got {}",
            highlight.confidence
        )));
    }

    let actual = &source_text[boundaries[start]..boundaries[end]];
    if actual != highlight.text {
        return Err(VigilError::Validation(format!(
            "highlight [{start}, {end}) declares {:?} but the source has {actual:?}",
            highlight.text
        )));
    }
    Ok(())
}

/// Split `source_text` into an ordered run of plain and highlighted
/// segments that covers the text exactly once.
///
/// Highlights are stable-sorted by start index. Every highlight must lie
/// inside the text (`Range`), match the text at its offsets and carry a
/// confidence in [0, 1] (`Validation`), and not overlap its predecessor
/// (`Overlap`). Adjacent highlights are fine.
pub fn build_segments(
    source_text: &str,
    highlights: &[HighlightedSegment],
) -> VigilResult<Vec<Segment>> {
    let boundaries = char_boundaries(source_text);
    let char_len = boundaries.len() - 1;

    let mut sorted: Vec<&HighlightedSegment> = highlights.iter().collect();
    sorted.sort_by_key(|h| h.start_index);

    let mut segments = Vec::with_capacity(sorted.len() * 2 + 1);
    let mut cursor = 0;
    let mut previous: Option<&HighlightedSegment> = None;

    for highlight in sorted {
        check_highlight(source_text, &boundaries, highlight)?;

        if let Some(prev) = previous {
            if highlight.start_index < prev.end_index {
                return Err(VigilError::Overlap(format!(
                    "[{}, {}) overlaps [{}, {})",
                    prev.start_index, prev.end_index, highlight.start_index, highlight.end_index
                )));
            }
        }

        if highlight.start_index > cursor {
            segments.push(Segment::plain(
                &source_text[boundaries[cursor]..boundaries[highlight.start_index]],
                cursor,
                highlight.start_index,
            ));
        }
        segments.push(Segment::highlighted(highlight));

        cursor = highlight.end_index;
        previous = Some(highlight);
    }

    if cursor < char_len {
        segments.push(Segment::plain(
            &source_text[boundaries[cursor]..],
            cursor,
            char_len,
        ));
    }

    Ok(segments)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn hl(text: &str, start: usize, end: usize, confidence: f64) -> HighlightedSegment {
        HighlightedSegment {
            text: text.to_string(),
            start_index: start,
            end_index: end,
            confidence,
            reason: "x".to_string(),
        }
    }

    fn joined(segments: &[Segment]) -> String {
        segments.iter().map(|s| s.text.as_str()).collect()
    }

    #[test]
    fn no_highlights_yields_single_plain_segment() {
        let segments = build_segments("hello world", &[]).unwrap();
        assert_eq!(segments.len(), 1);
        assert_eq!(segments[0].text, "hello world");
        assert!(!segments[0].is_highlighted());
        assert_eq!((segments[0].start_index, segments[0].end_index), (0, 11));
    }

    #[test]
    fn empty_text_without_highlights_yields_nothing() {
        assert!(build_segments("", &[]).unwrap().is_empty());
    }

    #[test]
    fn trailing_highlight_splits_into_plain_then_highlighted() {
        let segments = build_segments("hello world", &[hl("world", 6, 11, 0.9)]).unwrap();
        assert_eq!(segments.len(), 2);
        assert_eq!(segments[0].text, "hello ");
        assert!(segments[0].highlight.is_none());
        assert_eq!(segments[1].text, "world");
        assert_eq!(segments[1].highlight.as_ref().unwrap().reason, "x");
        assert_eq!(segments[1].level, Some(RiskLevel::Critical));
    }

    #[test]
    fn unsorted_highlights_are_walked_in_start_order() {
        let text = "alpha beta gamma delta";
        let highlights = [hl("gamma", 11, 16, 0.5), hl("alpha", 0, 5, 0.3)];
        let segments = build_segments(text, &highlights).unwrap();

        let texts: Vec<&str> = segments.iter().map(|s| s.text.as_str()).collect();
        assert_eq!(texts, vec!["alpha", " beta ", "gamma", " delta"]);
        assert_eq!(segments[0].level, Some(RiskLevel::Low));
        assert_eq!(segments[2].level, Some(RiskLevel::Medium));
        assert_eq!(joined(&segments), text);
    }

    #[test]
    fn adjacent_highlights_are_accepted() {
        let text = "abcdef";
        let segments = build_segments(text, &[hl("abc", 0, 3, 0.1), hl("def", 3, 6, 0.2)]).unwrap();
        assert_eq!(segments.len(), 2);
        assert!(segments.iter().all(Segment::is_highlighted));
        assert_eq!(joined(&segments), text);
    }

    #[test]
    fn concatenation_reproduces_source() {
        let text = "Please click the secure link below to verify your account today.";
        let highlights = [
            hl("click the secure link", 7, 28, 0.95),
            hl("verify your account", 38, 57, 0.9),
            hl("Please", 0, 6, 0.2),
        ];
        let segments = build_segments(text, &highlights).unwrap();
        assert_eq!(joined(&segments), text);

        let mut cursor = 0;
        for segment in &segments {
            assert_eq!(segment.start_index, cursor);
            assert!(segment.end_index > segment.start_index);
            cursor = segment.end_index;
        }
        assert_eq!(cursor, text.chars().count());
    }

    #[test]
    fn indices_count_characters_not_bytes() {
        let text = "café ünïcode déjà vu";
        let segments = build_segments(text, &[hl("ünïcode", 5, 12, 0.7)]).unwrap();
        let texts: Vec<&str> = segments.iter().map(|s| s.text.as_str()).collect();
        assert_eq!(texts, vec!["café ", "ünïcode", " déjà vu"]);
        assert_eq!(segments[2].end_index, 20);
    }

    #[test]
    fn overlapping_highlights_are_rejected() {
        let err = build_segments("hello world", &[hl("hello", 0, 5, 0.5), hl("lo wo", 3, 8, 0.5)])
            .unwrap_err();
        assert!(matches!(err, VigilError::Overlap(_)), "got {err:?}");
    }

    #[test]
    fn contained_highlight_is_an_overlap() {
        let err = build_segments("hello world", &[hl("ell", 1, 4, 0.5), hl("hello world", 0, 11, 0.5)])
            .unwrap_err();
        assert!(matches!(err, VigilError::Overlap(_)), "got {err:?}");
    }

    #[test]
    fn equal_starts_keep_input_order_and_overlap() {
        // Stable sort keeps "hello" first, so the second span is the one reported.
        let err = build_segments("hello world", &[hl("hello", 0, 5, 0.5), hl("he", 0, 2, 0.5)])
            .unwrap_err();
        match err {
            VigilError::Overlap(msg) => assert_eq!(msg, "[0, 5) overlaps [0, 2)"),
            other => panic!("expected overlap, got {other:?}"),
        }
    }

    #[test]
    fn out_of_bounds_highlight_is_a_range_error() {
        let err = build_segments("hello", &[hl("hello!", 0, 6, 0.5)]).unwrap_err();
        assert!(matches!(err, VigilError::Range(_)), "got {err:?}");
    }

    #[test]
    fn empty_or_inverted_highlight_is_a_range_error() {
        let err = build_segments("hello", &[hl("", 2, 2, 0.5)]).unwrap_err();
        assert!(matches!(err, VigilError::Range(_)));
        let err = build_segments("hello", &[hl("l", 3, 2, 0.5)]).unwrap_err();
        assert!(matches!(err, VigilError::Range(_)));
    }

    #[test]
    fn mismatched_text_is_a_validation_error() {
        let err = build_segments("hello world", &[hl("World", 6, 11, 0.5)]).unwrap_err();
        assert!(matches!(err, VigilError::Validation(_)), "got {err:?}");
    }

    #[test]
    fn invalid_confidence_is_a_validation_error() {
        for bad in [1.2, -0.01, f64::NAN] {
            let err = build_segments("hello world", &[hl("world", 6, 11, bad)]).unwrap_err();
            assert!(matches!(err, VigilError::Validation(_)), "confidence {bad}");
        }
    }

    #[test]
    fn segments_serialize_without_absent_fields() {
        let segments = build_segments("hello world", &[hl("world", 6, 11, 0.9)]).unwrap();
        let json = serde_json::to_value(&segments).unwrap();
        assert!(json[0].get("highlight").is_none());
        assert!(json[0].get("level").is_none());
        assert_eq!(json[1]["highlight"]["startIndex"], 6);
        assert_eq!(json[1]["level"], "critical");
    }

    /// Random text mixing one- to four-byte chars, plus a shuffled set of
    /// non-overlapping (possibly adjacent) highlights cut from it.
    fn text_with_highlights() -> impl Strategy<Value = (String, Vec<HighlightedSegment>)> {
        let alphabet = prop::sample::select(vec!['a', 'z', ' ', '\n', 'é', 'ü', '漢', '😀']);
        prop::collection::vec(alphabet, 0..64)
            .prop_flat_map(|chars| {
                let len = chars.len();
                (
                    Just(chars),
                    prop::collection::vec(0..=len, 0..12),
                    prop::collection::vec(any::<bool>(), 13),
                )
            })
            .prop_flat_map(|(chars, mut cuts, picks)| {
                cuts.push(0);
                cuts.push(chars.len());
                cuts.sort_unstable();
                cuts.dedup();
                let highlights: Vec<HighlightedSegment> = cuts
                    .windows(2)
                    .zip(picks)
                    .filter(|(_, pick)| *pick)
                    .map(|(w, _)| {
                        let text: String = chars[w[0]..w[1]].iter().collect();
                        hl(&text, w[0], w[1], 0.5)
                    })
                    .collect();
                let text: String = chars.into_iter().collect();
                (Just(text), Just(highlights).prop_shuffle())
            })
    }

    proptest! {
        #[test]
        fn segments_always_rebuild_the_source((text, highlights) in text_with_highlights()) {
            let segments = build_segments(&text, &highlights).unwrap();
            prop_assert_eq!(joined(&segments), text.clone());

            let mut cursor = 0;
            for segment in &segments {
                prop_assert_eq!(segment.start_index, cursor);
                prop_assert!(segment.end_index > segment.start_index);
                cursor = segment.end_index;
            }
            prop_assert_eq!(cursor, text.chars().count());

            let highlighted = segments.iter().filter(|s| s.is_highlighted()).count();
            prop_assert_eq!(highlighted, highlights.len());
        }
    }
}

use super::*;

fn correction(offset: i64, length: i64) -> GrammarCorrection {
    GrammarCorrection {
        original: "x".to_owned(),
        corrected: "y".to_owned(),
        correction_type: "spelling".to_owned(),
        message: String::new(),
        offset,
        length,
        suggestion: None,
    }
}

#[test]
fn no_corrections_yields_one_plain_segment() {
    let segments = highlight_segments("All good here.", &[]);
    assert_eq!(
        segments,
        vec![Segment {
            text: "All good here.".to_owned(),
            highlighted: false
        }]
    );
}

#[test]
fn empty_text_yields_no_segments() {
    assert!(highlight_segments("", &[correction(0, 3)]).is_empty());
}

#[test]
fn single_mid_text_span_splits_into_three_segments() {
    let segments = highlight_segments("This iss a test", &[correction(5, 3)]);
    let rendered: Vec<(&str, bool)> = segments.iter().map(|s| (s.text.as_str(), s.highlighted)).collect();
    assert_eq!(rendered, vec![("This ", false), ("iss", true), (" a test", false)]);
}

#[test]
fn spans_at_both_edges_are_handled() {
    let segments = highlight_segments("abc def ghi", &[correction(0, 3), correction(8, 3)]);
    let rendered: Vec<(&str, bool)> = segments.iter().map(|s| (s.text.as_str(), s.highlighted)).collect();
    assert_eq!(rendered, vec![("abc", true), (" def ", false), ("ghi", true)]);
}

#[test]
fn out_of_range_span_is_clamped_to_text_end() {
    let segments = highlight_segments("short", &[correction(3, 99)]);
    let rendered: Vec<(&str, bool)> = segments.iter().map(|s| (s.text.as_str(), s.highlighted)).collect();
    assert_eq!(rendered, vec![("sho", false), ("rt", true)]);
}

#[test]
fn spans_beyond_text_or_empty_are_dropped() {
    let segments = highlight_segments("short", &[correction(10, 2), correction(1, 0), correction(-3, 2)]);
    assert_eq!(segments.len(), 1);
    assert!(!segments[0].highlighted);
}

#[test]
fn overlapping_spans_keep_the_first_and_skip_the_rest() {
    let segments = highlight_segments("abcdefgh", &[correction(1, 4), correction(3, 3)]);
    let rendered: Vec<(&str, bool)> = segments.iter().map(|s| (s.text.as_str(), s.highlighted)).collect();
    assert_eq!(rendered, vec![("a", false), ("bcde", true), ("fgh", false)]);
}

#[test]
fn segments_reassemble_the_original_text() {
    let text = "The quick brown fox";
    let segments = highlight_segments(text, &[correction(4, 5), correction(16, 3)]);
    let reassembled: String = segments.iter().map(|s| s.text.as_str()).collect();
    assert_eq!(reassembled, text);
}

#[test]
fn default_state_is_idle() {
    let state = GrammarState::default();
    assert!(state.response.is_none());
    assert!(state.languages.is_empty());
    assert!(!state.checking);
}

//! Grammar-checker state and correction highlighting.
//!
//! DESIGN
//! ======
//! The backend reports corrections as `(offset, length)` spans over the
//! submitted text. `highlight_segments` turns those spans into an ordered
//! plain/highlighted segment list for rendering, tolerating spans that are
//! out of range or overlap (the span is clamped or skipped; the text itself
//! is never reordered).

#[cfg(test)]
#[path = "grammar_test.rs"]
mod grammar_test;

use crate::net::types::{GrammarCorrection, GrammarCorrectionResponse};

/// State for the grammar-checker page.
#[derive(Clone, Debug, Default)]
pub struct GrammarState {
    pub response: Option<GrammarCorrectionResponse>,
    pub languages: Vec<String>,
    pub checking: bool,
    pub error: Option<String>,
}

/// One rendered run of the submitted text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Segment {
    pub text: String,
    /// Whether this run is covered by a correction span.
    pub highlighted: bool,
}

/// Split `text` into plain and highlighted runs from the corrections' spans.
#[must_use]
pub fn highlight_segments(text: &str, corrections: &[GrammarCorrection]) -> Vec<Segment> {
    let chars: Vec<char> = text.chars().collect();

    let mut spans: Vec<(usize, usize)> = corrections
        .iter()
        .filter_map(|c| {
            let offset = usize::try_from(c.offset).ok()?;
            let length = usize::try_from(c.length).ok()?;
            if offset >= chars.len() || length == 0 {
                return None;
            }
            Some((offset, (offset + length).min(chars.len())))
        })
        .collect();
    spans.sort_unstable();

    let mut segments = Vec::new();
    let mut cursor = 0;
    for (start, end) in spans {
        // Skip spans swallowed by an earlier overlapping one.
        if start < cursor {
            continue;
        }
        if start > cursor {
            segments.push(Segment {
                text: chars[cursor..start].iter().collect(),
                highlighted: false,
            });
        }
        segments.push(Segment {
            text: chars[start..end].iter().collect(),
            highlighted: true,
        });
        cursor = end;
    }
    if cursor < chars.len() {
        segments.push(Segment {
            text: chars[cursor..].iter().collect(),
            highlighted: false,
        });
    }
    segments
}

use serde::{Deserialize, Serialize};

/// One fragment of a reconstructable diff view.
///
/// An ordered sequence of segments carries two documents at once: the
/// corrected text (concatenated `text` fields) and the original text
/// (`original_text` where changed, `text` where unchanged). The sequence is
/// produced by the generation provider and held read-only for the lifetime
/// of one analysis result; all verification lives in [`crate::reconcile`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Segment {
    pub kind: SegmentKind,
    /// The current/new text fragment. Empty only for a removal-only change.
    pub text: String,
    /// The fragment this one replaces. Present only on changed segments;
    /// empty string signals pure insertion.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
}

impl Segment {
    /// An unchanged fragment, identical in both views.
    pub fn unchanged(text: impl Into<String>) -> Self {
        Self {
            kind: SegmentKind::Unchanged,
            text: text.into(),
            original_text: None,
            reason: None,
            category: None,
        }
    }

    /// A changed fragment: `text` replaces `original_text`.
    pub fn changed(text: impl Into<String>, original_text: impl Into<String>) -> Self {
        Self {
            kind: SegmentKind::Changed,
            text: text.into(),
            original_text: Some(original_text.into()),
            reason: None,
            category: None,
        }
    }

    pub fn with_reason(mut self, reason: impl Into<String>) -> Self {
        self.reason = Some(reason.into());
        self
    }

    pub fn with_category(mut self, category: Category) -> Self {
        self.category = Some(category);
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SegmentKind {
    Unchanged,
    Changed,
}

/// Classification tag a provider may attach to a changed segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Grammar,
    Vocabulary,
    Style,
    Collocation,
    Punctuation,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WritingMode {
    /// Basic correction: fix grammar, spelling, and punctuation only.
    #[default]
    Fix,
}

/// The provider's answer to a writing-correction request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WritingResult {
    pub mode: WritingMode,
    pub general_feedback: String,
    pub segments: Vec<Segment>,
}

impl WritingResult {
    /// The corrected text with all highlighting stripped.
    ///
    /// This is the fallback surface when reconciliation fails downstream:
    /// callers display this rather than a partial diff.
    pub fn plain_text(&self) -> String {
        crate::reconcile::reconstruct_current(&self.segments)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn segment_wire_shape_round_trips() {
        let segment = Segment::changed("went", "go")
            .with_reason("past tense")
            .with_category(Category::Grammar);

        let json = serde_json::to_string(&segment).unwrap();
        assert!(json.contains("\"kind\":\"changed\""));
        assert!(json.contains("\"originalText\":\"go\""));
        assert!(json.contains("\"category\":\"grammar\""));

        let back: Segment = serde_json::from_str(&json).unwrap();
        assert_eq!(back, segment);
    }

    #[test]
    fn unchanged_segment_omits_optional_fields() {
        let json = serde_json::to_string(&Segment::unchanged("store.")).unwrap();
        assert_eq!(json, "{\"kind\":\"unchanged\",\"text\":\"store.\"}");
    }

    #[test]
    fn missing_optionals_deserialize_as_none() {
        let segment: Segment =
            serde_json::from_str("{\"kind\":\"changed\",\"text\":\"went\"}").unwrap();
        assert_eq!(segment.kind, SegmentKind::Changed);
        assert_eq!(segment.original_text, None);
        assert_eq!(segment.reason, None);
    }

    #[test]
    fn plain_text_joins_segment_texts() {
        let result = WritingResult {
            mode: WritingMode::Fix,
            general_feedback: String::new(),
            segments: vec![
                Segment::unchanged("I "),
                Segment::changed("went", "go"),
                Segment::unchanged(" home."),
            ],
        };
        assert_eq!(result.plain_text(), "I went home.");
    }
}

//! Decoding of untrusted provider responses.
//!
//! Deserialization alone is not acceptance: a value only becomes a typed
//! result after the reconciler has verified its diff against the text the
//! user actually submitted. Non-conforming output is rejected outright,
//! never coerced or partially rendered.

use crate::model::{AnalysisResult, DictionaryResult, WritingResult};
use crate::provider::errors::ProviderError;
use crate::reconcile;
use serde_json::Value;

/// Decode a sentence-analysis response.
///
/// When a correction is present its change list must reconstruct both the
/// original and the corrected sentence, and the effective sentence becomes
/// the corrected one; otherwise the submitted sentence stands.
pub fn decode_analysis(value: Value, submitted: &str) -> Result<AnalysisResult, ProviderError> {
    let mut result: AnalysisResult = serde_json::from_value(value)?;

    match &result.correction {
        Some(correction) => {
            reconcile::validate_changes(
                &correction.changes,
                Some(&correction.original),
                Some(&correction.corrected),
            )?;
            result.sentence = correction.corrected.clone();
        }
        None => {
            result.sentence = submitted.to_string();
        }
    }

    Ok(result)
}

/// Decode a dictionary response. No diff to reconcile here; shape checking
/// is all the validation a lookup needs.
pub fn decode_dictionary(value: Value) -> Result<DictionaryResult, ProviderError> {
    Ok(serde_json::from_value(value)?)
}

/// Decode a writing-correction response.
///
/// The segment sequence must reconstruct the submitted text exactly,
/// whitespace and newlines included. On failure the caller shows the raw
/// text without highlighting instead of a corrupted diff.
pub fn decode_writing(value: Value, submitted: &str) -> Result<WritingResult, ProviderError> {
    let result: WritingResult = serde_json::from_value(value)?;
    reconcile::validate(&result.segments, Some(submitted), None)?;
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::SegmentKind;
    use crate::reconcile::{ReconcileError, TextView};
    use serde_json::json;

    fn writing_value() -> Value {
        json!({
            "mode": "fix",
            "generalFeedback": "Good structure; watch verb tense.",
            "segments": [
                {"kind": "unchanged", "text": "I "},
                {"kind": "changed", "text": "went", "originalText": "go",
                 "reason": "Past tense", "category": "grammar"},
                {"kind": "changed", "text": " to the ", "originalText": "",
                 "reason": "Missing preposition", "category": "grammar"},
                {"kind": "unchanged", "text": "store."},
                {"kind": "unchanged", "text": "\n\n"},
                {"kind": "unchanged", "text": "It was fun."}
            ]
        })
    }

    #[test]
    fn decode_writing_accepts_a_reconciling_response() {
        let result = decode_writing(writing_value(), "I go store.\n\nIt was fun.").unwrap();
        assert_eq!(result.segments.len(), 6);
        assert_eq!(
            result.plain_text(),
            "I went to the store.\n\nIt was fun."
        );
    }

    #[test]
    fn decode_writing_rejects_a_dropped_paragraph() {
        // Same response, but the user submitted a text the diff cannot rebuild.
        let err = decode_writing(writing_value(), "I go store. It was fun.").unwrap_err();
        match err {
            ProviderError::Invalid(ReconcileError::ReconciliationMismatch { view, .. }) => {
                assert_eq!(view, TextView::Original);
            }
            other => panic!("expected reconciliation mismatch, got {other:?}"),
        }
    }

    #[test]
    fn decode_writing_rejects_unknown_segment_kind() {
        let value = json!({
            "mode": "fix",
            "generalFeedback": "",
            "segments": [{"kind": "rewritten", "text": "x"}]
        });
        assert!(matches!(
            decode_writing(value, "x"),
            Err(ProviderError::MalformedJson(_))
        ));
    }

    #[test]
    fn decode_analysis_substitutes_corrected_sentence() {
        let value = json!({
            "chunks": [],
            "detailedTokens": [],
            "translation": "...",
            "sentence": "ignored by decoding",
            "correction": {
                "original": "i go home",
                "corrected": "I went home",
                "errorType": "tense",
                "reason": "past tense needed",
                "changes": [
                    {"kind": "remove", "text": "i go"},
                    {"kind": "add", "text": "I went"},
                    {"kind": "keep", "text": " home"}
                ]
            }
        });
        let result = decode_analysis(value, "i go home").unwrap();
        assert_eq!(result.sentence, "I went home");
    }

    #[test]
    fn decode_analysis_keeps_submitted_sentence_without_correction() {
        let value = json!({
            "chunks": [],
            "detailedTokens": [],
            "translation": "...",
            "sentence": ""
        });
        let result = decode_analysis(value, "I went home.").unwrap();
        assert_eq!(result.sentence, "I went home.");
    }

    #[test]
    fn decode_analysis_rejects_inconsistent_changes() {
        let value = json!({
            "chunks": [],
            "detailedTokens": [],
            "translation": "...",
            "sentence": "",
            "correction": {
                "original": "i go home",
                "corrected": "I went home",
                "errorType": "tense",
                "reason": "past tense needed",
                "changes": [
                    {"kind": "keep", "text": "i go home"}
                ]
            }
        });
        assert!(matches!(
            decode_analysis(value, "i go home"),
            Err(ProviderError::Invalid(_))
        ));
    }

    #[test]
    fn decode_dictionary_needs_only_shape_conformance() {
        let value = json!({
            "word": "make up one's mind",
            "phonetic": "/meɪk ʌp wʌnz maɪnd/",
            "entries": [{
                "partOfSpeech": "phrasal verb",
                "frequency": "Top 2000",
                "definitions": [{
                    "meaning": "decide",
                    "explanation": "to reach a decision after thinking",
                    "example": "She made up her mind to study abroad.",
                    "exampleTranslation": "..."
                }]
            }]
        });
        let result = decode_dictionary(value).unwrap();
        assert_eq!(result.entries.len(), 1);
        assert!(result.collocations.is_none());
    }

    #[test]
    fn decoded_segments_keep_wire_order() {
        let result = decode_writing(writing_value(), "I go store.\n\nIt was fun.").unwrap();
        assert_eq!(result.segments[0].kind, SegmentKind::Unchanged);
        assert_eq!(result.segments[1].text, "went");
        assert_eq!(result.segments[1].original_text.as_deref(), Some("go"));
    }
}

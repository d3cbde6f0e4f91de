use crate::model::{ChangeKind, CorrectionChange, Segment, SegmentKind};
use crate::reconcile::errors::{ReconcileError, TextView};

/// Concatenate each segment's `text` in order: the corrected document.
pub fn reconstruct_current(segments: &[Segment]) -> String {
    segments.iter().map(|s| s.text.as_str()).collect()
}

/// Concatenate `original_text` for changed segments and `text` for
/// unchanged ones: the document as the user submitted it.
///
/// A changed segment with no `original_text` counts as a pure insertion
/// and contributes nothing to this view.
pub fn reconstruct_original(segments: &[Segment]) -> String {
    segments
        .iter()
        .map(|s| match s.kind {
            SegmentKind::Unchanged => s.text.as_str(),
            SegmentKind::Changed => s.original_text.as_deref().unwrap_or(""),
        })
        .collect()
}

/// Verify a segment sequence before anything renders it.
///
/// Structural checks always run: a changed segment must carry at least one
/// non-empty side, and an unchanged segment must not carry change-only
/// fields. When expected strings are supplied, both reconstructions are
/// compared character-exact, newlines included.
///
/// An empty sequence reconstructs to the empty string for both views and
/// is valid.
pub fn validate(
    segments: &[Segment],
    expected_original: Option<&str>,
    expected_current: Option<&str>,
) -> Result<(), ReconcileError> {
    for (index, segment) in segments.iter().enumerate() {
        match segment.kind {
            SegmentKind::Changed => {
                let original_empty = segment.original_text.as_deref().unwrap_or("").is_empty();
                if segment.text.is_empty() && original_empty {
                    return Err(ReconcileError::MalformedSegment {
                        index,
                        message: "changed segment with empty text and empty originalText"
                            .to_string(),
                    });
                }
            }
            SegmentKind::Unchanged => {
                if segment.original_text.is_some() {
                    return Err(ReconcileError::MalformedSegment {
                        index,
                        message: "unchanged segment carries originalText".to_string(),
                    });
                }
                if segment.reason.is_some() {
                    return Err(ReconcileError::MalformedSegment {
                        index,
                        message: "unchanged segment carries reason".to_string(),
                    });
                }
                if segment.category.is_some() {
                    return Err(ReconcileError::MalformedSegment {
                        index,
                        message: "unchanged segment carries category".to_string(),
                    });
                }
            }
        }
    }

    if let Some(expected) = expected_original {
        let reconstructed = reconstruct_original(segments);
        if reconstructed != expected {
            return Err(ReconcileError::ReconciliationMismatch {
                view: TextView::Original,
                expected: expected.to_string(),
                reconstructed,
            });
        }
    }

    if let Some(expected) = expected_current {
        let reconstructed = reconstruct_current(segments);
        if reconstructed != expected {
            return Err(ReconcileError::ReconciliationMismatch {
                view: TextView::Current,
                expected: expected.to_string(),
                reconstructed,
            });
        }
    }

    Ok(())
}

/// Concatenate `keep` + `remove` fragments: the original sentence.
pub fn original_sentence(changes: &[CorrectionChange]) -> String {
    changes
        .iter()
        .filter(|c| matches!(c.kind, ChangeKind::Keep | ChangeKind::Remove))
        .map(|c| c.text.as_str())
        .collect()
}

/// Concatenate `keep` + `add` fragments: the corrected sentence.
pub fn corrected_sentence(changes: &[CorrectionChange]) -> String {
    changes
        .iter()
        .filter(|c| matches!(c.kind, ChangeKind::Keep | ChangeKind::Add))
        .map(|c| c.text.as_str())
        .collect()
}

/// Verify a flat sentence-level diff the same way [`validate`] verifies
/// segments. An empty `text` carries no information and is rejected.
pub fn validate_changes(
    changes: &[CorrectionChange],
    expected_original: Option<&str>,
    expected_corrected: Option<&str>,
) -> Result<(), ReconcileError> {
    for (index, change) in changes.iter().enumerate() {
        if change.text.is_empty() {
            return Err(ReconcileError::MalformedSegment {
                index,
                message: format!("{:?} change with empty text", change.kind),
            });
        }
    }

    if let Some(expected) = expected_original {
        let reconstructed = original_sentence(changes);
        if reconstructed != expected {
            return Err(ReconcileError::ReconciliationMismatch {
                view: TextView::Original,
                expected: expected.to_string(),
                reconstructed,
            });
        }
    }

    if let Some(expected) = expected_corrected {
        let reconstructed = corrected_sentence(changes);
        if reconstructed != expected {
            return Err(ReconcileError::ReconciliationMismatch {
                view: TextView::Current,
                expected: expected.to_string(),
                reconstructed,
            });
        }
    }

    Ok(())
}

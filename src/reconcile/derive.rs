//! Local diff derivation: build a segment sequence from two texts.
//!
//! The provider normally produces segments; this is the offline counterpart,
//! used by the CLI and by tests that need a sequence guaranteed to pass
//! [`crate::reconcile::validate`] against both inputs.

use crate::model::{ChangeKind, CorrectionChange, Segment};
use similar::{ChangeTag, TextDiff};

/// Diff `original` against `current` at word granularity and emit a
/// segment sequence whose reconstructions equal the inputs exactly.
///
/// Runs of removed and inserted words are folded into a single changed
/// segment; equal runs become one unchanged segment. Derived segments
/// carry no reason or category, those only come from the provider.
pub fn derive_segments(original: &str, current: &str) -> Vec<Segment> {
    let diff = TextDiff::from_words(original, current);

    let mut segments = Vec::new();
    let mut unchanged = String::new();
    let mut removed = String::new();
    let mut added = String::new();

    let flush_change =
        |segments: &mut Vec<Segment>, removed: &mut String, added: &mut String| {
            if !removed.is_empty() || !added.is_empty() {
                segments.push(Segment::changed(added.as_str(), removed.as_str()));
                removed.clear();
                added.clear();
            }
        };
    let flush_unchanged = |segments: &mut Vec<Segment>, unchanged: &mut String| {
        if !unchanged.is_empty() {
            segments.push(Segment::unchanged(unchanged.as_str()));
            unchanged.clear();
        }
    };

    for change in diff.iter_all_changes() {
        match change.tag() {
            ChangeTag::Equal => {
                flush_change(&mut segments, &mut removed, &mut added);
                unchanged.push_str(change.value());
            }
            ChangeTag::Delete => {
                flush_unchanged(&mut segments, &mut unchanged);
                removed.push_str(change.value());
            }
            ChangeTag::Insert => {
                flush_unchanged(&mut segments, &mut unchanged);
                added.push_str(change.value());
            }
        }
    }
    flush_change(&mut segments, &mut removed, &mut added);
    flush_unchanged(&mut segments, &mut unchanged);

    segments
}

/// Diff two sentences into a flat add/remove/keep list with the same
/// round-trip guarantee as [`derive_segments`].
pub fn derive_changes(original: &str, corrected: &str) -> Vec<CorrectionChange> {
    let diff = TextDiff::from_words(original, corrected);

    let mut changes: Vec<CorrectionChange> = Vec::new();
    for change in diff.iter_all_changes() {
        let kind = match change.tag() {
            ChangeTag::Equal => ChangeKind::Keep,
            ChangeTag::Delete => ChangeKind::Remove,
            ChangeTag::Insert => ChangeKind::Add,
        };
        // Fold consecutive tokens of the same kind into one entry.
        match changes.last_mut() {
            Some(last) if last.kind == kind => last.text.push_str(change.value()),
            _ => changes.push(CorrectionChange::new(kind, change.value())),
        }
    }

    changes
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::SegmentKind;
    use crate::reconcile::{validate, validate_changes};

    #[test]
    fn derived_segments_reconcile_against_inputs() {
        let original = "I go store.\n\nIt was fun.";
        let current = "I went to the store.\n\nIt was fun.";
        let segments = derive_segments(original, current);
        validate(&segments, Some(original), Some(current)).unwrap();
        assert!(segments.iter().any(|s| s.kind == SegmentKind::Changed));
        assert!(segments.iter().any(|s| s.kind == SegmentKind::Unchanged));
    }

    #[test]
    fn identical_texts_derive_one_unchanged_segment() {
        let segments = derive_segments("same text", "same text");
        assert_eq!(segments, vec![Segment::unchanged("same text")]);
    }

    #[test]
    fn disjoint_texts_derive_a_full_replacement() {
        let segments = derive_segments("aaa", "bbb");
        validate(&segments, Some("aaa"), Some("bbb")).unwrap();
        assert!(segments.iter().all(|s| s.kind == SegmentKind::Changed));
    }

    #[test]
    fn empty_sides_derive_pure_insert_or_delete() {
        let inserted = derive_segments("", "brand new");
        validate(&inserted, Some(""), Some("brand new")).unwrap();

        let deleted = derive_segments("all gone", "");
        validate(&deleted, Some("all gone"), Some("")).unwrap();

        assert!(derive_segments("", "").is_empty());
    }

    #[test]
    fn derived_changes_reconcile_against_inputs() {
        let original = "i go home";
        let corrected = "I went home";
        let changes = derive_changes(original, corrected);
        validate_changes(&changes, Some(original), Some(corrected)).unwrap();
    }
}

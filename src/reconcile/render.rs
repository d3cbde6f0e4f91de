use crate::model::{Category, Segment, SegmentKind};
use std::collections::VecDeque;

/// One display-ready piece of a rendered diff.
///
/// Literal line breaks are emitted as their own units so a consuming view
/// can lay out paragraphs without re-parsing whitespace. No unit's text
/// ever contains a newline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderUnit<'a> {
    /// Text identical in both views.
    Plain(&'a str),
    /// Text present only in the corrected view; highlight.
    Insertion {
        text: &'a str,
        reason: Option<&'a str>,
        category: Option<Category>,
    },
    /// Text present only in the original view; strike through.
    Deletion {
        text: &'a str,
        reason: Option<&'a str>,
        category: Option<Category>,
    },
    LineBreak,
}

/// Expand a segment sequence into display units.
///
/// The iterator is lazy (one segment is expanded at a time), finite, and
/// restartable: it borrows the segments, so calling [`render`] again or
/// cloning mid-iteration restarts or forks the walk. A changed segment
/// with both sides non-empty yields its deletion units before its
/// insertion units.
pub fn render(segments: &[Segment]) -> RenderIter<'_> {
    RenderIter {
        segments,
        next_segment: 0,
        queue: VecDeque::new(),
    }
}

#[derive(Debug, Clone)]
pub struct RenderIter<'a> {
    segments: &'a [Segment],
    next_segment: usize,
    queue: VecDeque<RenderUnit<'a>>,
}

impl<'a> RenderIter<'a> {
    fn expand(&mut self, segment: &'a Segment) {
        match segment.kind {
            SegmentKind::Unchanged => {
                self.push_split(&segment.text, &|text| RenderUnit::Plain(text));
            }
            SegmentKind::Changed => {
                let reason = segment.reason.as_deref();
                let category = segment.category;
                if let Some(original) = segment.original_text.as_deref() {
                    self.push_split(original, &|text| RenderUnit::Deletion {
                        text,
                        reason,
                        category,
                    });
                }
                self.push_split(&segment.text, &|text| RenderUnit::Insertion {
                    text,
                    reason,
                    category,
                });
            }
        }
    }

    /// Queue units for `text`, emitting each `\n` as its own LineBreak.
    fn push_split(&mut self, text: &'a str, make: &dyn Fn(&'a str) -> RenderUnit<'a>) {
        let mut rest = text;
        while let Some(pos) = rest.find('\n') {
            if pos > 0 {
                self.queue.push_back(make(&rest[..pos]));
            }
            self.queue.push_back(RenderUnit::LineBreak);
            rest = &rest[pos + 1..];
        }
        if !rest.is_empty() {
            self.queue.push_back(make(rest));
        }
    }
}

impl<'a> Iterator for RenderIter<'a> {
    type Item = RenderUnit<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(unit) = self.queue.pop_front() {
                return Some(unit);
            }
            let segment = self.segments.get(self.next_segment)?;
            self.next_segment += 1;
            self.expand(segment);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_segments_render_as_plain_units() {
        let segments = vec![Segment::unchanged("hello "), Segment::unchanged("world")];
        let units: Vec<_> = render(&segments).collect();
        assert_eq!(
            units,
            vec![RenderUnit::Plain("hello "), RenderUnit::Plain("world")]
        );
    }

    #[test]
    fn replacement_yields_deletion_then_insertion() {
        let segments = vec![Segment::changed("went", "go").with_category(Category::Grammar)];
        let units: Vec<_> = render(&segments).collect();
        assert_eq!(
            units,
            vec![
                RenderUnit::Deletion {
                    text: "go",
                    reason: None,
                    category: Some(Category::Grammar),
                },
                RenderUnit::Insertion {
                    text: "went",
                    reason: None,
                    category: Some(Category::Grammar),
                },
            ]
        );
    }

    #[test]
    fn pure_insertion_yields_no_deletion_unit() {
        let segments = vec![Segment::changed(" to the ", "")];
        let units: Vec<_> = render(&segments).collect();
        assert_eq!(units.len(), 1);
        assert!(matches!(units[0], RenderUnit::Insertion { .. }));
    }

    #[test]
    fn pure_deletion_yields_no_insertion_unit() {
        let segments = vec![Segment::changed("", "very ")];
        let units: Vec<_> = render(&segments).collect();
        assert_eq!(units.len(), 1);
        assert!(matches!(units[0], RenderUnit::Deletion { text: "very ", .. }));
    }

    #[test]
    fn newlines_become_their_own_units() {
        let segments = vec![
            Segment::unchanged("first"),
            Segment::unchanged("\n\n"),
            Segment::unchanged("second"),
        ];
        let units: Vec<_> = render(&segments).collect();
        assert_eq!(
            units,
            vec![
                RenderUnit::Plain("first"),
                RenderUnit::LineBreak,
                RenderUnit::LineBreak,
                RenderUnit::Plain("second"),
            ]
        );
    }

    #[test]
    fn newline_inside_segment_text_is_split_out() {
        let segments = vec![Segment::unchanged("one\ntwo")];
        let units: Vec<_> = render(&segments).collect();
        assert_eq!(
            units,
            vec![
                RenderUnit::Plain("one"),
                RenderUnit::LineBreak,
                RenderUnit::Plain("two"),
            ]
        );
    }

    #[test]
    fn iterator_is_restartable_and_forkable() {
        let segments = vec![Segment::unchanged("a"), Segment::unchanged("b")];
        let mut iter = render(&segments);
        assert_eq!(iter.next(), Some(RenderUnit::Plain("a")));

        let mut fork = iter.clone();
        assert_eq!(iter.next(), Some(RenderUnit::Plain("b")));
        assert_eq!(fork.next(), Some(RenderUnit::Plain("b")));

        // Restart from scratch.
        let restarted: Vec<_> = render(&segments).collect();
        assert_eq!(restarted.len(), 2);
    }

    #[test]
    fn empty_input_renders_nothing() {
        assert_eq!(render(&[]).count(), 0);
    }

    #[test]
    fn empty_unchanged_segment_renders_nothing() {
        let segments = vec![Segment::unchanged("")];
        assert_eq!(render(&segments).count(), 0);
    }
}

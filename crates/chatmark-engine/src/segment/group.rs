use serde::Serialize;

use super::{span::Span, types::Segment};

/// A unit of layout: either a flowed paragraph or one code block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RenderGroup {
    /// A maximal run of plain and inline-code segments, laid out as one paragraph.
    Flow { segments: Vec<Segment> },
    /// A single fenced code block, laid out on its own.
    Block { segment: Segment },
}

impl RenderGroup {
    pub fn segments(&self) -> &[Segment] {
        match self {
            RenderGroup::Flow { segments } => segments,
            RenderGroup::Block { segment } => std::slice::from_ref(segment),
        }
    }

    pub fn is_block(&self) -> bool {
        matches!(self, RenderGroup::Block { .. })
    }

    /// Source range covered by the group's segments.
    pub fn span(&self) -> Span {
        let segments = self.segments();
        match (segments.first(), segments.last()) {
            (Some(first), Some(last)) => first.span.cover(last.span),
            _ => Span::default(),
        }
    }
}

/// Folds segments into render groups.
///
/// Every code block closes the current flow and stands alone. Empty flows are
/// never emitted, so back-to-back blocks become back-to-back `Block` groups.
pub fn group(segments: Vec<Segment>) -> Vec<RenderGroup> {
    let mut groups = Vec::new();
    let mut flow = Vec::new();

    for segment in segments {
        if segment.is_block() {
            if !flow.is_empty() {
                groups.push(RenderGroup::Flow {
                    segments: std::mem::take(&mut flow),
                });
            }
            groups.push(RenderGroup::Block { segment });
        } else {
            flow.push(segment);
        }
    }

    if !flow.is_empty() {
        groups.push(RenderGroup::Flow { segments: flow });
    }
    groups
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain(t: &str, start: usize, end: usize) -> Segment {
        Segment::plain(t, Span::new(start, end))
    }

    fn block(start: usize, end: usize) -> Segment {
        Segment::code_block(None, "x", Span::new(start, end))
    }

    #[test]
    fn empty_input_no_groups() {
        assert!(group(vec![]).is_empty());
    }

    #[test]
    fn block_splits_flow() {
        let groups = group(vec![plain("a", 0, 2), block(2, 9), plain("b", 9, 11)]);
        assert_eq!(groups.len(), 3);
        assert!(!groups[0].is_block());
        assert!(groups[1].is_block());
        assert!(!groups[2].is_block());
    }

    #[test]
    fn adjacent_blocks_stay_separate() {
        let groups = group(vec![block(0, 7), block(7, 14)]);
        assert_eq!(groups.len(), 2);
        assert!(groups.iter().all(RenderGroup::is_block));
    }

    #[test]
    fn flow_span_covers_members() {
        let groups = group(vec![
            plain("a", 0, 2),
            Segment::inline_code("b", Span::new(2, 5)),
            plain("c", 5, 8),
        ]);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].segments().len(), 3);
        assert_eq!(groups[0].span(), Span::new(0, 8));
    }
}

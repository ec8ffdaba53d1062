use crate::segment::{
    Segment, SegmentKind,
    kinds::{CodeBlock, InlineCode},
};

/// Panics if `segments` is not a valid segmentation of `text`.
pub fn check(text: &str, segments: &[Segment]) {
    let n = text.len();
    assert!(!segments.is_empty(), "segmentation of {n} bytes is empty");

    for s in segments {
        assert!(
            s.span.start <= s.span.end && s.span.end <= n,
            "segment span out of bounds: {:?} (text len: {})",
            s.span,
            n
        );
        let Some(source) = s.span.slice(text) else {
            panic!("segment span not on a char boundary: {:?}", s.span);
        };

        assert_eq!(
            s.text,
            s.text.trim(),
            "segment text not trimmed: {:?}",
            s.span
        );
        if s.kind != SegmentKind::CodeBlock {
            assert!(
                s.language.is_none(),
                "language on non-block segment: {:?}",
                s.span
            );
        }

        match s.kind {
            SegmentKind::Plain => {}
            SegmentKind::InlineCode => {
                assert!(
                    source.starts_with(InlineCode::TICK) && source.ends_with(InlineCode::TICK),
                    "inline code span not delimited by backticks: {:?}",
                    s.span
                );
                assert!(
                    !s.text.contains(InlineCode::TICK),
                    "inline code contains a backtick: {:?}",
                    s.span
                );
            }
            SegmentKind::CodeBlock => {
                assert!(
                    source.starts_with(CodeBlock::FENCE) && source.ends_with(CodeBlock::FENCE),
                    "code block span not fenced: {:?}",
                    s.span
                );
            }
        }
    }

    for w in segments.windows(2) {
        assert!(
            w[0].span.start <= w[1].span.start && !w[0].span.overlaps(w[1].span),
            "segments out of order or overlapping: {:?} then {:?}",
            w[0].span,
            w[1].span
        );
    }
}

//! # Message Segmentation
//!
//! Splits a raw chat message into plain text, inline code and fenced code
//! blocks, in source order, ready for independent rendering.
//!
//! ## Architecture
//!
//! Segmentation is a two-pass scan followed by a merge:
//! 1. Fenced blocks (three or more backticks) are matched over the whole message
//! 2. Inline code (single backticks) is matched only in the gaps between blocks
//! 3. Matches are sorted and interleaved with the plain-text gaps around them
//!
//! Fences are raw zones: a `` `pair` `` inside a block stays part of the block.
//! Anything that fails to match (an unterminated fence, a lone backtick) is left
//! as literal text in the surrounding plain segment.
//!
//! Both patterns run on the `regex` crate, which guarantees linear-time matching,
//! so messages full of stray backticks cannot blow up.
//!
//! ## Modules
//!
//! - **`types`**: `Segment` and `SegmentKind`
//! - **`span`**: `Span` byte ranges into the message
//! - **`kinds`**: delimiter constants and patterns (`InlineCode`, `CodeBlock`)
//! - **`scan`**: match collection
//! - **`group`**: `RenderGroup` folding for layout
//! - **`markup`**: writing segments back out as markup

pub mod group;
pub mod kinds;
pub mod markup;
mod scan;
pub mod span;
pub mod types;

pub use group::{RenderGroup, group};
pub use markup::to_markup;
pub use span::Span;
pub use types::{Segment, SegmentKind};

use kinds::{CodeBlock, InlineCode};
use scan::{MatchKind, RawMatch};

/// Segments a message into plain text, inline code and code blocks.
///
/// Never fails: malformed markup degrades to plain text. The result is never
/// empty; a message without backticks yields a single trimmed plain segment.
pub fn segment(text: &str) -> Vec<Segment> {
    if !text.contains(InlineCode::TICK) {
        return vec![Segment::plain(text.trim(), Span::new(0, text.len()))];
    }

    let matches = scan::find_matches(text);
    let mut out = Vec::with_capacity(matches.len() * 2 + 1);
    let mut last = 0;

    for m in &matches {
        push_plain(&mut out, text, Span::new(last, m.full.start));
        out.push(classify(text, m));
        last = m.full.end;
    }
    push_plain(&mut out, text, Span::new(last, text.len()));

    log::trace!(
        "segmented {} bytes into {} segments ({} matches)",
        text.len(),
        out.len(),
        matches.len()
    );
    out
}

/// Segments a message and folds the result into render groups.
pub fn segment_groups(text: &str) -> Vec<RenderGroup> {
    group(segment(text))
}

/// Emits the gap as a plain segment unless it is only whitespace.
fn push_plain(out: &mut Vec<Segment>, text: &str, gap: Span) {
    let Some(raw) = gap.slice(text) else {
        return;
    };
    let trimmed = raw.trim();
    if !trimmed.is_empty() {
        out.push(Segment::plain(trimmed, gap));
    }
}

fn classify(text: &str, m: &RawMatch) -> Segment {
    match m.kind {
        MatchKind::InlineCode => {
            let full = m.full.slice(text).unwrap_or_default();
            Segment::inline_code(InlineCode::inner(full).trim(), m.full)
        }
        MatchKind::CodeBlock => {
            let inner = m.inner.slice(text).unwrap_or_default();
            let (language, body) = CodeBlock::split_content(inner);
            Segment::code_block(language.map(str::to_string), body, m.full)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    /// (kind, text, language) triples, ignoring spans.
    fn shape(segments: &[Segment]) -> Vec<(SegmentKind, &str, Option<&str>)> {
        segments
            .iter()
            .map(|s| (s.kind, s.text.as_str(), s.language()))
            .collect()
    }

    #[rstest]
    #[case("")]
    #[case("   ")]
    #[case("hello")]
    #[case("  padded line  \n")]
    #[case("multi\nline\ntext")]
    fn no_backticks_single_trimmed_plain(#[case] input: &str) {
        let segments = segment(input);
        assert_eq!(
            shape(&segments),
            vec![(SegmentKind::Plain, input.trim(), None)]
        );
        assert_eq!(segments[0].span, Span::new(0, input.len()));
    }

    #[test]
    fn inline_code_alone() {
        let segments = segment("`code`");
        assert_eq!(shape(&segments), vec![(SegmentKind::InlineCode, "code", None)]);
        assert_eq!(segments[0].span, Span::new(0, 6));
    }

    #[test]
    fn code_block_with_language() {
        let segments = segment("```js\nconst x = 1;\n```");
        assert_eq!(
            shape(&segments),
            vec![(SegmentKind::CodeBlock, "const x = 1;", Some("js"))]
        );
    }

    #[test]
    fn mixed_message() {
        let segments = segment("Hello `world` and ```\nplain block\n```");
        assert_eq!(
            shape(&segments),
            vec![
                (SegmentKind::Plain, "Hello", None),
                (SegmentKind::InlineCode, "world", None),
                (SegmentKind::Plain, "and", None),
                (SegmentKind::CodeBlock, "plain block", None),
            ]
        );
    }

    #[test]
    fn inline_code_is_trimmed() {
        let segments = segment("run ` cargo test ` now");
        assert_eq!(segments[1].text, "cargo test");
    }

    #[test]
    fn plain_span_is_untrimmed_gap() {
        let text = "Hello `world`";
        let segments = segment(text);
        assert_eq!(segments[0].span, Span::new(0, 6));
        assert_eq!(segments[0].span.slice(text), Some("Hello "));
    }

    #[test]
    fn single_backticks_inside_block_not_split() {
        let segments = segment("```rust\nlet s = `x`;\n```");
        assert_eq!(
            shape(&segments),
            vec![(SegmentKind::CodeBlock, "let s = `x`;", Some("rust"))]
        );
    }

    #[rstest]
    #[case("it`s")]
    #[case("a ` b")]
    #[case("```js\nnever closed")]
    #[case("````")]
    fn unmatched_backticks_stay_plain(#[case] input: &str) {
        assert_eq!(
            shape(&segment(input)),
            vec![(SegmentKind::Plain, input.trim(), None)]
        );
    }

    #[test]
    fn empty_block() {
        assert_eq!(
            shape(&segment("``````")),
            vec![(SegmentKind::CodeBlock, "", None)]
        );
    }

    #[test]
    fn language_tag_is_verbatim() {
        assert_eq!(
            shape(&segment("```js \nx\n```")),
            vec![(SegmentKind::CodeBlock, "x", Some("js "))]
        );
        assert_eq!(
            shape(&segment("```python\r\nprint(1)\r\n```")),
            vec![(SegmentKind::CodeBlock, "print(1)", Some("python"))]
        );
    }

    #[test]
    fn backtick_language_survives_markup() {
        let first = segment("``` `\n\n````");
        assert_eq!(shape(&first), vec![(SegmentKind::CodeBlock, "", Some(" `"))]);

        let markup = to_markup(&first);
        assert_eq!(markup, "``` `\n\n```");
        assert_eq!(shape(&segment(&markup)), shape(&first));
    }

    #[test]
    fn tag_without_newline_is_language() {
        assert_eq!(
            shape(&segment("```python```")),
            vec![(SegmentKind::CodeBlock, "", Some("python"))]
        );
    }

    #[test]
    fn whitespace_only_gaps_are_dropped() {
        assert_eq!(
            shape(&segment("  `a`   `b`  ")),
            vec![
                (SegmentKind::InlineCode, "a", None),
                (SegmentKind::InlineCode, "b", None),
            ]
        );
    }

    #[test]
    fn groups_for_mixed_message() {
        let groups = segment_groups("Intro `x`\n```\none\n```\n```sh\ntwo\n```\nOutro");
        let kinds: Vec<_> = groups.iter().map(RenderGroup::is_block).collect();
        assert_eq!(kinds, vec![false, true, true, false]);
        assert_eq!(groups[0].segments().len(), 2);
    }

    #[test]
    fn stray_backtick_storm_terminates() {
        let text = "` ``` `` ".repeat(2_000);
        let segments = segment(&text);
        assert!(!segments.is_empty());
        assert!(segments.iter().all(|s| s.span.end <= text.len()));
    }
}

//! Two-pass match collection.
//!
//! Fenced blocks are found first over the whole message. Inline code is then
//! searched only in the gaps between blocks, so a single-backtick pair inside
//! a fence can never surface as inline code.

use super::{
    kinds::{CodeBlock, InlineCode},
    span::Span,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum MatchKind {
    InlineCode,
    CodeBlock,
}

/// A delimited match with byte spans into the message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct RawMatch {
    pub kind: MatchKind,
    /// Full span including delimiters.
    pub full: Span,
    /// Content between the delimiters.
    pub inner: Span,
}

/// Collects every block and inline match in `text`, sorted by start offset
/// and pairwise non-overlapping.
pub(crate) fn find_matches(text: &str) -> Vec<RawMatch> {
    let blocks = find_blocks(text);

    let mut out = Vec::with_capacity(blocks.len());
    let mut gap_start = 0;
    for block in &blocks {
        find_inline(text, Span::new(gap_start, block.full.start), &mut out);
        gap_start = block.full.end;
    }
    find_inline(text, Span::new(gap_start, text.len()), &mut out);

    out.extend(blocks);
    out.sort_by_key(|m| m.full.start);
    out
}

fn find_blocks(text: &str) -> Vec<RawMatch> {
    if !text.contains(CodeBlock::FENCE) {
        return vec![];
    }

    CodeBlock::regex()
        .captures_iter(text)
        .filter_map(|caps| {
            let full = caps.get(0)?;
            let inner = caps.get(1)?;
            Some(RawMatch {
                kind: MatchKind::CodeBlock,
                full: Span::new(full.start(), full.end()),
                inner: Span::new(inner.start(), inner.end()),
            })
        })
        .collect()
}

/// Searches `gap` for inline code, pushing matches with absolute spans.
///
/// `^` and `$` in the pattern anchor to the gap edges, which is where a
/// fence (or the message) begins and ends.
fn find_inline(text: &str, gap: Span, out: &mut Vec<RawMatch>) {
    let Some(s) = gap.slice(text) else {
        return;
    };
    if gap.is_empty() || !s.contains(InlineCode::TICK) {
        return;
    }

    let re = InlineCode::regex();
    let mut at = 0;
    while at < s.len() {
        let Some(caps) = re.captures_at(s, at) else {
            break;
        };
        let Some(m) = caps.get(1) else {
            break;
        };
        let full = Span::new(gap.start + m.start(), gap.start + m.end());
        out.push(RawMatch {
            kind: MatchKind::InlineCode,
            full,
            inner: Span::new(full.start + 1, full.end - 1),
        });
        // Resume right after the closing backtick so its trailing neighbour
        // can serve as the leading neighbour of the next span.
        at = m.end();
    }
}

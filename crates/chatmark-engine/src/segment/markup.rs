use std::fmt::{self, Write};

use super::{
    kinds::{CodeBlock, InlineCode},
    types::{Segment, SegmentKind},
};

impl fmt::Display for Segment {
    /// Writes the segment back as backtick markup.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            SegmentKind::Plain => f.write_str(&self.text),
            SegmentKind::InlineCode => {
                write!(f, "{tick}{}{tick}", self.text, tick = InlineCode::TICK)
            }
            SegmentKind::CodeBlock => {
                let fence = CodeBlock::FENCE;
                let language = self.language().unwrap_or("");
                write!(f, "{fence}{language}\n{}\n{fence}", self.text)
            }
        }
    }
}

/// Formats segments back into message markup.
///
/// Flowed segments are separated by a space; code blocks sit on their own
/// lines. Whitespace trimmed during segmentation is not restored, but
/// segmenting the result yields the same segments again.
pub fn to_markup(segments: &[Segment]) -> String {
    let mut out = String::new();
    let mut prev: Option<&Segment> = None;

    for segment in segments {
        if let Some(p) = prev {
            out.push(if p.is_block() || segment.is_block() {
                '\n'
            } else {
                ' '
            });
        }
        // Writing into a String cannot fail
        let _ = write!(out, "{segment}");
        prev = Some(segment);
    }
    out
}

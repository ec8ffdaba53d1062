use serde::Serialize;

use super::span::Span;

/// Rendering kind of a [`Segment`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SegmentKind {
    /// Prose between code spans.
    Plain,
    /// Single-backtick code, rendered inline with the surrounding prose.
    InlineCode,
    /// Fenced code, always rendered on its own.
    CodeBlock,
}

/// One classified, non-overlapping piece of a message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Segment {
    pub kind: SegmentKind,
    /// Trimmed content with delimiters (and for blocks, the language line) removed.
    pub text: String,
    /// Language tag of a code block. Always `None` for other kinds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    /// Source range the segment was derived from. Code spans include their
    /// delimiters; plain segments cover the raw gap before trimming.
    pub span: Span,
}

impl Segment {
    pub fn plain(text: impl Into<String>, span: Span) -> Self {
        Self {
            kind: SegmentKind::Plain,
            text: text.into(),
            language: None,
            span,
        }
    }

    pub fn inline_code(text: impl Into<String>, span: Span) -> Self {
        Self {
            kind: SegmentKind::InlineCode,
            text: text.into(),
            language: None,
            span,
        }
    }

    pub fn code_block(language: Option<String>, text: impl Into<String>, span: Span) -> Self {
        Self {
            kind: SegmentKind::CodeBlock,
            text: text.into(),
            language,
            span,
        }
    }

    pub fn is_block(&self) -> bool {
        self.kind == SegmentKind::CodeBlock
    }

    pub fn language(&self) -> Option<&str> {
        self.language.as_deref()
    }
}

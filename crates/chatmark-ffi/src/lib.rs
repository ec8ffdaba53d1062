//! UniFFI bindings for chatmark mobile apps
//!
//! Lets the Kotlin and Swift chat clients segment message text with the Rust
//! engine instead of keeping their own backtick parsing in sync.

use chatmark_engine::{RenderGroup, Segment, SegmentKind};

uniffi::setup_scaffolding!();

// ============ DTOs ============

/// A layout unit: a flowed paragraph or a single code block.
#[derive(Debug, uniffi::Record)]
pub struct RenderGroupDto {
    /// Group type: "flow" or "block"
    pub kind: String,
    /// Segments in source order (exactly one for a block)
    pub segments: Vec<SegmentDto>,
}

impl RenderGroupDto {
    fn from_engine(group: RenderGroup) -> Self {
        match group {
            RenderGroup::Flow { segments } => Self {
                kind: "flow".to_string(),
                segments: segments.into_iter().map(SegmentDto::from_engine).collect(),
            },
            RenderGroup::Block { segment } => Self {
                kind: "block".to_string(),
                segments: vec![SegmentDto::from_engine(segment)],
            },
        }
    }
}

/// One classified piece of a message.
#[derive(Debug, uniffi::Record)]
pub struct SegmentDto {
    /// Segment type: "plain", "inline_code" or "code_block"
    pub kind: String,
    /// Trimmed content without delimiters
    pub text: String,
    /// Language tag of a code block, if any
    pub language: Option<String>,
    /// Byte offset where the source of this segment starts
    pub start: u64,
    /// Byte offset where the source of this segment ends (exclusive)
    pub end: u64,
}

impl SegmentDto {
    fn from_engine(segment: Segment) -> Self {
        let kind = match segment.kind {
            SegmentKind::Plain => "plain",
            SegmentKind::InlineCode => "inline_code",
            SegmentKind::CodeBlock => "code_block",
        };
        Self {
            kind: kind.to_string(),
            text: segment.text,
            language: segment.language,
            start: segment.span.start as u64,
            end: segment.span.end as u64,
        }
    }
}

// ============ Standalone Functions ============

/// Segment a chat message into render groups.
#[uniffi::export]
pub fn segment_message(text: String) -> Vec<RenderGroupDto> {
    chatmark_engine::segment_groups(&text)
        .into_iter()
        .map(RenderGroupDto::from_engine)
        .collect()
}

/// Rebuild normalized backtick markup for a message.
#[uniffi::export]
pub fn message_markup(text: String) -> String {
    chatmark_engine::to_markup(&chatmark_engine::segment(&text))
}

/// The code blocks of a message, for "copy code" actions.
#[uniffi::export]
pub fn code_blocks(text: String) -> Vec<SegmentDto> {
    chatmark_engine::segment(&text)
        .into_iter()
        .filter(Segment::is_block)
        .map(SegmentDto::from_engine)
        .collect()
}

use serde::Serialize;

use crate::segment::{RenderGroup, Segment, SegmentKind};

#[derive(Serialize)]
pub struct Snap {
    pub groups: Vec<GroupSnap>,
}

#[derive(Serialize)]
pub struct GroupSnap {
    pub kind: String,
    pub segments: Vec<SegmentSnap>,
}

#[derive(Serialize)]
pub struct SegmentSnap {
    pub kind: String,
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

pub fn normalize(groups: &[RenderGroup]) -> Snap {
    let groups = groups
        .iter()
        .map(|g| GroupSnap {
            kind: if g.is_block() { "block" } else { "flow" }.to_string(),
            segments: g.segments().iter().map(segment_snap).collect(),
        })
        .collect();

    Snap { groups }
}

fn segment_snap(s: &Segment) -> SegmentSnap {
    let kind = match s.kind {
        SegmentKind::Plain => "plain",
        SegmentKind::InlineCode => "inline_code",
        SegmentKind::CodeBlock => "code_block",
    };
    SegmentSnap {
        kind: kind.to_string(),
        text: s.text.clone(),
        language: s.language.clone(),
    }
}

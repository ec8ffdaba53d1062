pub mod segment;
pub mod snapshot;

// Re-export key types for easier usage
pub use segment::{
    RenderGroup, Segment, SegmentKind, Span, group, segment, segment_groups, to_markup,
};

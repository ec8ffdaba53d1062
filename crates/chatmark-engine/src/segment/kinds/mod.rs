//! # Segment Kinds
//!
//! Kind-specific knowledge lives next to each kind: the delimiter constants,
//! the match pattern, and how the matched text is turned into content.
//!
//! - **`InlineCode`**: `TICK`, single-backtick spans
//! - **`CodeBlock`**: `FENCE`, fenced spans with an optional language line
//!
//! The scanner and the markup writer call these; neither hardcodes a backtick.

pub mod code_block;
pub mod inline_code;

pub use code_block::CodeBlock;
pub use inline_code::InlineCode;

//! # Snapshot Testing Support
//!
//! Utilities for testing the segmenter via snapshot assertions and invariant checks.
//!
//! ## Modules
//!
//! - **`normalize`**: Converts render groups to a stable, serializable `Snap`
//!   format for `insta` snapshot testing
//! - **`invariants`**: Runtime checks for segmenter correctness (spans in bounds,
//!   ordered and disjoint, delimiters where the kind says they are)

pub mod invariants;
pub mod normalize;

pub use invariants::check as invariants;
pub use normalize::{Snap, normalize};

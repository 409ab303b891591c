//! Frame, time and geometry primitives plus the crate error type.

/// Frames, ranges, rates and canvas geometry.
pub mod core;
/// Crate error type.
pub mod error;

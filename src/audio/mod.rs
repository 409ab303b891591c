//! Audio cues and their placement on the output timeline.
//!
//! Nothing here decodes or mixes audio; the manifest tells a host which file to play where.

/// Cues, segments and the per-range manifest.
pub mod cue;

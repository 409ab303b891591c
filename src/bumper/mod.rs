//! The intro bumper's frame-to-state logic.
//!
//! Everything here is a pure function of `(frame, fps)` plus static configuration: no state is
//! carried between frames, so a host may evaluate frames in any order or in parallel.

/// Cursor blink.
pub mod cursor;
/// Per-frame visual state.
pub mod state;
/// Phase breakpoints.
pub mod timeline;
/// Typing schedule with per-character jitter.
pub mod typing;

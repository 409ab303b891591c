//! Session-oriented frame rendering.
//!
//! A [`render_session::RenderSession`] turns a composition's frames into SVG markup, one at a
//! time or over a range, and streams them into a [`sink::FrameSink`].

pub(crate) mod fingerprint;
/// Single-frame and range rendering.
pub mod render_session;
/// Frame sinks.
pub mod sink;

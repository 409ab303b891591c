//! Intro bumper: a short branded clip described as a pure function of the frame.
//!
//! The logo fades in, holds, and slides left while a tagline is typed out with uneven key
//! timing and a blinking block cursor. Everything is derived from `(frame, fps)`:
//!
//! - [`compute_state`] gives the animated values for one frame
//! - [`IntroBumper`] turns them into a drawable [`Scene`] and an [`AudioCue`]
//! - [`RenderSession`] renders single frames or streams a range into a [`FrameSink`]
#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod animation;
pub mod audio;
pub mod bumper;
pub mod composition;
pub mod config;
pub mod foundation;
pub mod scene;
pub mod session;
pub mod theme;

pub use crate::animation::ease::Ease;
pub use crate::animation::interpolate::{Extrapolate, Interpolate};
pub use crate::audio::cue::{AudioCue, AudioManifest, AudioSegment, build_audio_manifest};
pub use crate::bumper::state::{BumperTimeline, VisualState, compute_state};
pub use crate::bumper::timeline::Breakpoints;
pub use crate::bumper::typing::TypingSchedule;
pub use crate::composition::intro::IntroBumper;
pub use crate::composition::registry::{Registry, root, root_at};
pub use crate::composition::{Composition, CompositionSpec};
pub use crate::config::{AudioConfig, BumperConfig};
pub use crate::foundation::core::{Affine, Canvas, Fps, FrameIndex, FrameRange, Point, Rect, Vec2};
pub use crate::foundation::error::{BumperError, BumperResult};
pub use crate::scene::model::Scene;
pub use crate::session::fingerprint::FrameFingerprint;
pub use crate::session::render_session::{
    RenderSession, RenderSessionOpts, RenderStats, RenderedFrame,
};
pub use crate::session::sink::{FrameSink, InMemorySink, SinkConfig, SvgDirSink};
pub use crate::theme::Theme;
pub use crate::theme::color::Rgba8;

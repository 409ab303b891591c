//! Named compositions and the registry that exposes them to a host.

/// The intro bumper composition.
pub mod intro;
/// Id-keyed composition registry.
pub mod registry;

use crate::audio::cue::AudioCue;
use crate::foundation::core::{Canvas, Fps, FrameIndex, FrameRange};
use crate::foundation::error::{BumperError, BumperResult};
use crate::scene::model::Scene;

/// Fixed output parameters of a composition.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct CompositionSpec {
    /// Registry key.
    pub id: String,
    /// Output size.
    pub canvas: Canvas,
    /// Timeline frame rate.
    pub fps: Fps,
    /// Total length in frames.
    pub duration: FrameIndex,
}

impl CompositionSpec {
    /// Check the id, canvas and duration.
    pub fn validate(&self) -> BumperResult<()> {
        if self.id.trim().is_empty() {
            return Err(BumperError::validation("composition id must not be empty"));
        }
        if self.canvas.width == 0 || self.canvas.height == 0 {
            return Err(BumperError::validation(format!(
                "composition '{}' canvas must be non-zero, got {}x{}",
                self.id, self.canvas.width, self.canvas.height
            )));
        }
        if self.duration.0 == 0 {
            return Err(BumperError::validation(format!(
                "composition '{}' duration must be > 0 frames",
                self.id
            )));
        }
        Ok(())
    }

    /// The whole timeline, `[0, duration)`.
    pub fn range(&self) -> FrameRange {
        FrameRange {
            start: FrameIndex(0),
            end: self.duration,
        }
    }
}

/// A clip a host can render frame by frame.
///
/// Implementations must be pure in `frame`: the same frame always yields the same state and
/// scene, whatever was evaluated before.
pub trait Composition: Send + Sync {
    /// Output parameters.
    fn spec(&self) -> &CompositionSpec;

    /// Debug view of the animated values at `frame`.
    fn state_json(&self, frame: FrameIndex) -> BumperResult<serde_json::Value>;

    /// Drawable content at `frame`.
    fn scene(&self, frame: FrameIndex) -> Scene;

    /// Sounds the host should schedule.
    fn audio_cues(&self) -> Vec<AudioCue>;
}

#[cfg(test)]
#[path = "../../tests/unit/composition/spec.rs"]
mod tests;

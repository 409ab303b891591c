use crate::audio::cue::AudioCue;
use crate::bumper::state::{BumperTimeline, VisualState};
use crate::composition::{Composition, CompositionSpec};
use crate::config::BumperConfig;
use crate::foundation::core::{Canvas, Fps, FrameIndex};
use crate::foundation::error::{BumperError, BumperResult};
use crate::scene::build::build_scene;
use crate::scene::model::Scene;

/// Registry key of the intro bumper.
pub const INTRO_BUMPER_ID: &str = "IntroBumper";
/// Output size of the intro bumper.
pub const INTRO_BUMPER_CANVAS: Canvas = Canvas {
    width: 1920,
    height: 1080,
};
/// Native frame rate.
pub const INTRO_BUMPER_FPS: Fps = Fps { num: 30, den: 1 };
/// Length at the native frame rate.
pub const INTRO_BUMPER_DURATION: FrameIndex = FrameIndex(150);

/// The intro bumper: logo fade and slide, typed tagline, blinking cursor, typing sound.
#[derive(Clone, Debug)]
pub struct IntroBumper {
    spec: CompositionSpec,
    config: BumperConfig,
}

impl IntroBumper {
    /// Bumper at its native 1920x1080, 30 fps, 150 frames.
    pub fn new(config: BumperConfig) -> BumperResult<Self> {
        config.validate()?;
        let spec = CompositionSpec {
            id: INTRO_BUMPER_ID.to_owned(),
            canvas: INTRO_BUMPER_CANVAS,
            fps: INTRO_BUMPER_FPS,
            duration: INTRO_BUMPER_DURATION,
        };
        spec.validate()?;
        Ok(Self { spec, config })
    }

    /// Retime to `fps`, keeping the clip's length in seconds.
    pub fn with_fps(mut self, fps: Fps) -> BumperResult<Self> {
        let secs = INTRO_BUMPER_FPS.frames_to_secs(INTRO_BUMPER_DURATION.as_f64());
        let frames = fps.secs_to_frames(secs).round();
        if !frames.is_finite() || frames < 1.0 {
            return Err(BumperError::validation(format!(
                "fps {fps} yields an empty composition"
            )));
        }
        self.spec.fps = fps;
        self.spec.duration = FrameIndex(frames as u64);
        Ok(self)
    }

    /// Active configuration.
    pub fn config(&self) -> &BumperConfig {
        &self.config
    }

    /// Animation curves at this composition's frame rate.
    pub fn timeline(&self) -> BumperTimeline<'_> {
        BumperTimeline::new(self.spec.fps, &self.config)
    }

    /// Animated values at `frame`.
    pub fn state(&self, frame: FrameIndex) -> VisualState {
        self.timeline().state_at(frame)
    }
}

impl Composition for IntroBumper {
    fn spec(&self) -> &CompositionSpec {
        &self.spec
    }

    fn state_json(&self, frame: FrameIndex) -> BumperResult<serde_json::Value> {
        serde_json::to_value(self.state(frame))
            .map_err(|e| BumperError::serde(format!("serialize visual state: {e}")))
    }

    fn scene(&self, frame: FrameIndex) -> Scene {
        build_scene(
            &self.state(frame),
            self.spec.canvas,
            &self.config.palette(),
            &self.config.font_family,
        )
    }

    fn audio_cues(&self) -> Vec<AudioCue> {
        vec![AudioCue::typing(self.spec.fps, &self.config.audio)]
    }
}

#[cfg(test)]
#[path = "../../tests/unit/composition/intro.rs"]
mod tests;

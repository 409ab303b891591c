use crate::foundation::core::Fps;

/// Logo fade-in completes at this time.
pub const LOGO_FADE_IN_END_SECS: f64 = 0.6;
/// Logo holds centred until this time.
pub const LOGO_HOLD_END_SECS: f64 = 1.5;
/// Logo reaches its final left position at this time.
pub const LOGO_SLIDE_END_SECS: f64 = 2.0;
/// Tagline typing begins at this time, slightly before the slide finishes.
pub const TYPING_START_SECS: f64 = 1.8;
/// Final horizontal offset of the logo, in pixels.
pub const LOGO_SLIDE_OFFSET_PX: f64 = -250.0;

/// Phase boundaries in timeline frames for a given frame rate.
///
/// Values are fractional at rates where the second offsets do not land on whole frames
/// (e.g. typing starts at frame 43.2 at 24 fps).
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Breakpoints {
    /// End of the logo fade-in.
    pub logo_fade_in_end: f64,
    /// End of the centred hold; the slide starts here.
    pub logo_hold_end: f64,
    /// End of the slide.
    pub logo_slide_end: f64,
    /// First frame of the typing layer and the typing sound.
    pub typing_start: f64,
}

impl Breakpoints {
    /// Derive the breakpoints for `fps`.
    pub fn for_fps(fps: Fps) -> Self {
        Self {
            logo_fade_in_end: fps.secs_to_frames(LOGO_FADE_IN_END_SECS),
            logo_hold_end: fps.secs_to_frames(LOGO_HOLD_END_SECS),
            logo_slide_end: fps.secs_to_frames(LOGO_SLIDE_END_SECS),
            typing_start: fps.secs_to_frames(TYPING_START_SECS),
        }
    }

    /// Frames elapsed since typing started, floored at zero.
    pub fn typing_elapsed(&self, frame: f64) -> f64 {
        (frame - self.typing_start).max(0.0)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/bumper/timeline.rs"]
mod tests;

use crate::animation::ease::Ease;
use crate::animation::interpolate::Interpolate;
use crate::bumper::cursor::CursorBlink;
use crate::bumper::timeline::{Breakpoints, LOGO_SLIDE_OFFSET_PX};
use crate::bumper::typing::{DEFAULT_CHARS_PER_SECOND, DEFAULT_TAGLINE, TypingSchedule};
use crate::config::BumperConfig;
use crate::foundation::core::{Fps, FrameIndex};

/// Everything the markup needs to draw one frame.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct VisualState {
    /// Logo opacity in `[0, 1]`.
    pub logo_opacity: f64,
    /// Horizontal logo offset from centre, in pixels (`0` down to `-250`).
    pub logo_offset_x: f64,
    /// Prefix of the tagline typed so far.
    pub revealed_text: String,
    /// Blink phase of the cursor.
    pub cursor_visible: bool,
    /// Whether the tagline layer (text and cursor) is mounted.
    pub show_typing_layer: bool,
}

/// The bumper's animation curves for one frame rate.
///
/// Holds no per-frame state: [`BumperTimeline::state_at`] can be called for any frame in any
/// order and always returns the same result for the same frame.
#[derive(Clone, Debug)]
pub struct BumperTimeline<'a> {
    fps: Fps,
    breakpoints: Breakpoints,
    logo_opacity: Interpolate,
    logo_offset_x: Interpolate,
    typing: TypingSchedule<'a>,
    cursor: CursorBlink,
}

impl BumperTimeline<'static> {
    /// Timeline with the stock tagline, typing speed and blink rate.
    pub fn with_defaults(fps: Fps) -> Self {
        Self::build(
            fps,
            TypingSchedule::new(DEFAULT_TAGLINE, fps, DEFAULT_CHARS_PER_SECOND),
            CursorBlink::default(),
        )
    }
}

impl<'a> BumperTimeline<'a> {
    /// Timeline driven by a (validated) configuration.
    pub fn new(fps: Fps, config: &'a BumperConfig) -> Self {
        Self::build(
            fps,
            TypingSchedule::new(&config.tagline, fps, config.chars_per_second),
            CursorBlink::new(config.cursor_half_period_frames),
        )
    }

    fn build(fps: Fps, typing: TypingSchedule<'a>, cursor: CursorBlink) -> Self {
        let breakpoints = Breakpoints::for_fps(fps);
        let logo_opacity =
            Interpolate::new([0.0, breakpoints.logo_fade_in_end], [0.0, 1.0]).clamp_right();
        let logo_offset_x = Interpolate::new(
            [breakpoints.logo_hold_end, breakpoints.logo_slide_end],
            [0.0, LOGO_SLIDE_OFFSET_PX],
        )
        .ease(Ease::in_out(Ease::EASE))
        .clamp();

        Self {
            fps,
            breakpoints,
            logo_opacity,
            logo_offset_x,
            typing,
            cursor,
        }
    }

    /// Frame rate the curves were built for.
    pub fn fps(&self) -> Fps {
        self.fps
    }

    /// Phase boundaries in frames.
    pub fn breakpoints(&self) -> Breakpoints {
        self.breakpoints
    }

    /// Per-character typing schedule.
    pub fn typing(&self) -> TypingSchedule<'a> {
        self.typing
    }

    /// Evaluate the visual state at `frame`.
    pub fn state_at(&self, frame: FrameIndex) -> VisualState {
        let f = frame.as_f64();
        let elapsed = self.breakpoints.typing_elapsed(f);

        VisualState {
            logo_opacity: self.logo_opacity.sample(f),
            logo_offset_x: self.logo_offset_x.sample(f),
            revealed_text: self.typing.revealed_text(elapsed).to_owned(),
            cursor_visible: self.cursor.is_visible(elapsed),
            show_typing_layer: f >= self.breakpoints.typing_start,
        }
    }
}

/// Visual state of the stock bumper at `frame` for `fps`.
pub fn compute_state(frame: FrameIndex, fps: Fps) -> VisualState {
    BumperTimeline::with_defaults(fps).state_at(frame)
}

#[cfg(test)]
#[path = "../../tests/unit/bumper/state.rs"]
mod tests;

/// Block cursor shown after the typed tagline.
pub const CURSOR_GLYPH: char = '█';

/// Square-wave blink keyed to frames elapsed since typing start.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CursorBlink {
    half_period_frames: u32,
}

impl CursorBlink {
    /// On for 15 frames, off for 15 frames.
    pub const DEFAULT_HALF_PERIOD_FRAMES: u32 = 15;

    /// Blink with the given on/off duration; zero is treated as one frame.
    pub fn new(half_period_frames: u32) -> Self {
        Self {
            half_period_frames: half_period_frames.max(1),
        }
    }

    /// Frames the cursor stays in one state.
    pub fn half_period_frames(self) -> u32 {
        self.half_period_frames
    }

    /// Whether the cursor is lit `elapsed` frames after typing start.
    ///
    /// Phases start "on" at `elapsed = 0`.
    pub fn is_visible(self, elapsed: f64) -> bool {
        if elapsed < 0.0 {
            return false;
        }
        (elapsed / f64::from(self.half_period_frames)).floor() % 2.0 == 0.0
    }
}

impl Default for CursorBlink {
    fn default() -> Self {
        Self::new(Self::DEFAULT_HALF_PERIOD_FRAMES)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/bumper/cursor.rs"]
mod tests;

use crate::foundation::core::Fps;

/// Tagline typed next to the logo.
pub const DEFAULT_TAGLINE: &str = "Happily Hacking";
/// Nominal typing speed before per-character variation.
pub const DEFAULT_CHARS_PER_SECOND: f64 = 12.0;

const LCG_MUL: u64 = 9301;
const LCG_INC: u64 = 49297;
const LCG_MOD: u64 = 233280;

/// Deterministic delay multiplier for the character at `index`, in `[0.2, 2.0)`.
///
/// Seeded only by the index, so every frame (and every renderer) sees the same jitter.
pub fn delay_multiplier(index: usize) -> f64 {
    let i = (index as u64) % LCG_MOD;
    let seed = (i * LCG_MUL + LCG_INC) % LCG_MOD;
    let random = seed as f64 / LCG_MOD as f64;
    0.2 + random * 1.8
}

/// One character of the typing schedule.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct TypingStep {
    /// Character index in the tagline.
    pub index: usize,
    /// The character itself.
    pub ch: char,
    /// Frames spent on this character.
    pub frames: f64,
    /// Frames since typing start at which this character appears.
    pub cumulative_frames: f64,
}

/// Per-character reveal schedule for a tagline at a given frame rate.
///
/// Cheap to build; it borrows the text and derives everything else on demand.
#[derive(Clone, Copy, Debug)]
pub struct TypingSchedule<'a> {
    text: &'a str,
    base_frames_per_char: f64,
}

impl<'a> TypingSchedule<'a> {
    /// Schedule `text` at `chars_per_second` for `fps`.
    pub fn new(text: &'a str, fps: Fps, chars_per_second: f64) -> Self {
        Self {
            text,
            base_frames_per_char: fps.as_f64() / chars_per_second,
        }
    }

    /// The tagline being typed.
    pub fn text(&self) -> &'a str {
        self.text
    }

    /// Frames per character before variation.
    pub fn base_frames_per_char(&self) -> f64 {
        self.base_frames_per_char
    }

    /// Frames spent on the character at `index`.
    pub fn char_frames(&self, index: usize) -> f64 {
        self.base_frames_per_char * delay_multiplier(index)
    }

    /// Walk the schedule in order, accumulating per-character durations.
    pub fn steps(self) -> impl Iterator<Item = TypingStep> + 'a {
        let base = self.base_frames_per_char;
        let mut acc = 0.0;
        self.text.chars().enumerate().map(move |(index, ch)| {
            let frames = base * delay_multiplier(index);
            acc += frames;
            TypingStep {
                index,
                ch,
                frames,
                cumulative_frames: acc,
            }
        })
    }

    /// Frames from typing start until the last character is shown.
    pub fn total_frames(&self) -> f64 {
        self.steps().last().map_or(0.0, |s| s.cumulative_frames)
    }

    /// Number of characters visible `elapsed` frames after typing start.
    pub fn chars_revealed(&self, elapsed: f64) -> usize {
        self.steps()
            .take_while(|s| elapsed >= s.cumulative_frames)
            .count()
    }

    /// The visible prefix of the tagline `elapsed` frames after typing start.
    pub fn revealed_text(&self, elapsed: f64) -> &'a str {
        let n = self.chars_revealed(elapsed);
        match self.text.char_indices().nth(n) {
            Some((byte_end, _)) => &self.text[..byte_end],
            None => self.text,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/bumper/typing.rs"]
mod tests;

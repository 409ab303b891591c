//! Runtime configuration for the bumper.
//!
//! Every field has a default matching the stock clip, so an empty JSON object is a valid config.

use crate::bumper::cursor::CursorBlink;
use crate::bumper::typing::{DEFAULT_CHARS_PER_SECOND, DEFAULT_TAGLINE};
use crate::foundation::error::{BumperError, BumperResult};
use crate::theme::{Palette, PaletteOverrides, Theme};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Default CSS font stack for all text.
pub const DEFAULT_FONT_FAMILY: &str = "\"JetBrains Mono\", monospace";
/// Typing sound played from typing start.
pub const DEFAULT_AUDIO_FILE: &str = "typing.m4a";
/// Typing sound gain.
pub const DEFAULT_AUDIO_VOLUME: f64 = 0.2;

/// Bumper configuration.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BumperConfig {
    /// Light or dark color scheme.
    pub theme: Theme,
    /// Colors replacing the theme's defaults.
    pub colors: PaletteOverrides,
    /// Text typed next to the logo.
    pub tagline: String,
    /// Nominal typing speed.
    pub chars_per_second: f64,
    /// Frames the cursor stays on (and then off).
    pub cursor_half_period_frames: u32,
    /// CSS font-family for the logo and tagline.
    pub font_family: String,
    /// Typing sound cue.
    pub audio: AudioConfig,
}

/// Typing sound settings.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AudioConfig {
    /// Asset file name, resolved by the host.
    pub file: String,
    /// Gain in `[0, 1]`.
    pub volume: f64,
}

impl Default for BumperConfig {
    fn default() -> Self {
        Self {
            theme: Theme::default(),
            colors: PaletteOverrides::default(),
            tagline: DEFAULT_TAGLINE.to_owned(),
            chars_per_second: DEFAULT_CHARS_PER_SECOND,
            cursor_half_period_frames: CursorBlink::DEFAULT_HALF_PERIOD_FRAMES,
            font_family: DEFAULT_FONT_FAMILY.to_owned(),
            audio: AudioConfig::default(),
        }
    }
}

impl Default for AudioConfig {
    fn default() -> Self {
        Self {
            file: DEFAULT_AUDIO_FILE.to_owned(),
            volume: DEFAULT_AUDIO_VOLUME,
        }
    }
}

impl BumperConfig {
    /// Parse and validate a config from a JSON reader.
    pub fn from_reader<R: std::io::Read>(r: R) -> BumperResult<Self> {
        let cfg: Self = serde_json::from_reader(r)
            .map_err(|e| BumperError::config(format!("parse config JSON: {e}")))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Parse and validate a config from a JSON string.
    pub fn from_json_str(s: &str) -> BumperResult<Self> {
        Self::from_reader(s.as_bytes())
    }

    /// Parse and validate a config from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> BumperResult<Self> {
        let path = path.as_ref();
        let f = File::open(path)
            .map_err(|e| BumperError::io(format!("open config JSON '{}': {e}", path.display())))?;
        Self::from_reader(BufReader::new(f))
    }

    /// Theme colors with overrides applied.
    pub fn palette(&self) -> Palette {
        self.colors.apply(self.theme.palette())
    }

    /// Check value ranges.
    pub fn validate(&self) -> BumperResult<()> {
        if self.tagline.is_empty() {
            return Err(BumperError::config("tagline must not be empty"));
        }
        check_printable("tagline", &self.tagline)?;
        check_printable("font_family", &self.font_family)?;
        if !self.chars_per_second.is_finite() || self.chars_per_second <= 0.0 {
            return Err(BumperError::config(format!(
                "chars_per_second must be finite and > 0, got {}",
                self.chars_per_second
            )));
        }
        if self.cursor_half_period_frames == 0 {
            return Err(BumperError::config(
                "cursor_half_period_frames must be >= 1",
            ));
        }
        if self.font_family.trim().is_empty() {
            return Err(BumperError::config("font_family must not be empty"));
        }
        if let Some(bg) = self.colors.background
            && bg.a != 255
        {
            return Err(BumperError::config(format!(
                "colors.background must be opaque, got {}",
                bg.to_hex()
            )));
        }
        self.audio.validate()
    }
}

impl AudioConfig {
    /// Check value ranges.
    pub fn validate(&self) -> BumperResult<()> {
        if self.file.trim().is_empty() {
            return Err(BumperError::config("audio.file must not be empty"));
        }
        if !(0.0..=1.0).contains(&self.volume) {
            return Err(BumperError::config(format!(
                "audio.volume must be in [0, 1], got {}",
                self.volume
            )));
        }
        Ok(())
    }
}

// Markup output cannot carry control characters other than tab.
fn check_printable(field: &str, s: &str) -> BumperResult<()> {
    match s.chars().find(|c| c.is_control() && *c != '\t') {
        Some(c) => Err(BumperError::config(format!(
            "{field} must not contain control character {c:?}"
        ))),
        None => Ok(()),
    }
}

#[cfg(test)]
#[path = "../tests/unit/config/config.rs"]
mod tests;

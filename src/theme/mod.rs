//! Light/dark palettes for the bumper, with optional per-color overrides.

/// 8-bit RGBA colors with hex (de)serialization.
pub mod color;

use color::Rgba8;

/// Brand accent behind the logo glyphs.
pub const ACCENT_ORANGE: Rgba8 = Rgba8::rgb(0xf1, 0x5e, 0x22);
/// Pure black.
pub const BLACK: Rgba8 = Rgba8::rgb(0x00, 0x00, 0x00);
/// Pure white.
pub const WHITE: Rgba8 = Rgba8::rgb(0xff, 0xff, 0xff);

/// Color scheme selector.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Theme {
    /// White background, black text.
    #[default]
    Light,
    /// Black background, white text.
    Dark,
}

/// Resolved colors for one theme.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub struct Palette {
    /// Canvas fill.
    pub background: Rgba8,
    /// Logo glyphs, tagline and cursor.
    pub text: Rgba8,
    /// Logo box fill.
    pub accent: Rgba8,
}

/// Per-color replacements applied on top of a theme's palette.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PaletteOverrides {
    /// Replaces the canvas fill.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background: Option<Rgba8>,
    /// Replaces the glyph, tagline and cursor color.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<Rgba8>,
    /// Replaces the logo box fill.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accent: Option<Rgba8>,
}

impl PaletteOverrides {
    /// `base` with every set color replaced.
    pub fn apply(self, base: Palette) -> Palette {
        Palette {
            background: self.background.unwrap_or(base.background),
            text: self.text.unwrap_or(base.text),
            accent: self.accent.unwrap_or(base.accent),
        }
    }
}

impl Theme {
    /// Colors for this theme.
    pub fn palette(self) -> Palette {
        match self {
            Self::Light => Palette {
                background: WHITE,
                text: BLACK,
                accent: ACCENT_ORANGE,
            },
            Self::Dark => Palette {
                background: BLACK,
                text: WHITE,
                accent: ACCENT_ORANGE,
            },
        }
    }
}

impl std::str::FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(format!("unknown theme \"{other}\" (expected light or dark)")),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/theme/palette.rs"]
mod tests;

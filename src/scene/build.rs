use crate::bumper::cursor::CURSOR_GLYPH;
use crate::bumper::state::VisualState;
use crate::foundation::core::{Affine, Canvas, Point, Rect, Vec2};
use crate::scene::model::{GroupNode, RectNode, Scene, SceneNode, TextAnchor, TextNode, TextStyle};
use crate::theme::Palette;

/// Monospace advance width as a fraction of the font size.
///
/// Used instead of font metrics; no font is loaded.
pub const MONO_ADVANCE_EM: f64 = 0.6;

const LOGO_GLYPHS: [&str; 2] = ["J", "K"];
const LOGO_FONT_PX: f64 = 90.0;
const LOGO_LINE_HEIGHT: f64 = 0.9;
const LOGO_LETTER_SPACING_PX: f64 = -2.0;
const LOGO_WEIGHT: u16 = 700;
const LOGO_PAD_X: f64 = 30.0;
const LOGO_PAD_Y: f64 = 20.0;

const TAGLINE_FONT_PX: f64 = 48.0;
const TAGLINE_WEIGHT: u16 = 500;
const TAGLINE_LETTER_SPACING_PX: f64 = 1.0;
/// Tagline starts this far left of the canvas centre.
const TAGLINE_LEFT_INSET_PX: f64 = 30.0;
const CURSOR_GAP_PX: f64 = 2.0;
const CURSOR_WEIGHT: u16 = 700;

/// Estimated advance of `text` in a monospace face.
pub fn mono_text_width(text: &str, size_px: f64, letter_spacing_px: f64) -> f64 {
    let n = text.chars().count() as f64;
    n * (size_px * MONO_ADVANCE_EM + letter_spacing_px)
}

/// Lay out the bumper for one frame.
pub fn build_scene(
    state: &VisualState,
    canvas: Canvas,
    palette: &Palette,
    font_family: &str,
) -> Scene {
    let mut nodes = vec![logo_group(state, canvas, palette, font_family)];
    if state.show_typing_layer {
        nodes.push(tagline_group(state, canvas, palette, font_family));
    }
    Scene {
        canvas,
        background: palette.background,
        nodes,
    }
}

fn logo_group(
    state: &VisualState,
    canvas: Canvas,
    palette: &Palette,
    font_family: &str,
) -> SceneNode {
    let center = canvas.center();
    let line_px = LOGO_FONT_PX * LOGO_LINE_HEIGHT;
    let content_w = LOGO_GLYPHS
        .iter()
        .map(|g| mono_text_width(g, LOGO_FONT_PX, LOGO_LETTER_SPACING_PX))
        .fold(0.0, f64::max);
    let content_h = line_px * LOGO_GLYPHS.len() as f64;
    let w = content_w + 2.0 * LOGO_PAD_X;
    let h = content_h + 2.0 * LOGO_PAD_Y;
    let box_rect = Rect::from_center_size(center, (w, h));

    let style = TextStyle {
        font_family: font_family.to_owned(),
        size_px: LOGO_FONT_PX,
        weight: LOGO_WEIGHT,
        letter_spacing_px: LOGO_LETTER_SPACING_PX,
        fill: palette.text,
    };

    let mut children = vec![SceneNode::Rect(RectNode {
        rect: box_rect,
        fill: palette.accent,
    })];
    let top = box_rect.y0 + LOGO_PAD_Y;
    for (i, glyph) in LOGO_GLYPHS.iter().enumerate() {
        children.push(SceneNode::Text(TextNode {
            origin: Point::new(center.x, top + line_px * (i as f64 + 0.5)),
            anchor: TextAnchor::Middle,
            text: (*glyph).to_owned(),
            style: style.clone(),
        }));
    }

    SceneNode::Group(GroupNode {
        id: "logo".to_owned(),
        transform: Affine::translate(Vec2::new(state.logo_offset_x, 0.0)),
        opacity: state.logo_opacity.clamp(0.0, 1.0),
        children,
    })
}

fn tagline_group(
    state: &VisualState,
    canvas: Canvas,
    palette: &Palette,
    font_family: &str,
) -> SceneNode {
    let center = canvas.center();
    let left = center.x - TAGLINE_LEFT_INSET_PX;

    let text_style = TextStyle {
        font_family: font_family.to_owned(),
        size_px: TAGLINE_FONT_PX,
        weight: TAGLINE_WEIGHT,
        letter_spacing_px: TAGLINE_LETTER_SPACING_PX,
        fill: palette.text,
    };
    let text_w = mono_text_width(
        &state.revealed_text,
        TAGLINE_FONT_PX,
        TAGLINE_LETTER_SPACING_PX,
    );

    let mut children = vec![SceneNode::Text(TextNode {
        origin: Point::new(left, center.y),
        anchor: TextAnchor::Start,
        text: state.revealed_text.clone(),
        style: text_style,
    })];
    if state.cursor_visible {
        children.push(SceneNode::Text(TextNode {
            origin: Point::new(left + text_w + CURSOR_GAP_PX, center.y),
            anchor: TextAnchor::Start,
            text: CURSOR_GLYPH.to_string(),
            style: TextStyle {
                font_family: font_family.to_owned(),
                size_px: TAGLINE_FONT_PX,
                weight: CURSOR_WEIGHT,
                letter_spacing_px: 0.0,
                fill: palette.text,
            },
        }));
    }

    SceneNode::Group(GroupNode {
        id: "tagline".to_owned(),
        transform: Affine::IDENTITY,
        opacity: 1.0,
        children,
    })
}

#[cfg(test)]
#[path = "../../tests/unit/scene/build.rs"]
mod tests;

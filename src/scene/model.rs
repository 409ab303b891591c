use crate::foundation::core::{Affine, Canvas, Point, Rect};
use crate::theme::color::Rgba8;

/// One frame's drawable content, in painter's order.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct Scene {
    /// Output size.
    pub canvas: Canvas,
    /// Canvas fill painted beneath all nodes.
    pub background: Rgba8,
    /// Top-level nodes.
    pub nodes: Vec<SceneNode>,
}

/// A drawable element.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SceneNode {
    /// Filled axis-aligned rectangle.
    Rect(RectNode),
    /// Single line of text.
    Text(TextNode),
    /// Transformed, faded container.
    Group(GroupNode),
}

/// Filled rectangle.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct RectNode {
    /// Bounds in parent space.
    pub rect: Rect,
    /// Fill color.
    pub fill: Rgba8,
}

/// Horizontal anchoring of a text run relative to its origin.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TextAnchor {
    /// Origin is the left edge.
    Start,
    /// Origin is the horizontal centre.
    Middle,
}

/// Font and paint for a text run.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct TextStyle {
    /// CSS font-family list.
    pub font_family: String,
    /// Font size in pixels.
    pub size_px: f64,
    /// CSS font weight.
    pub weight: u16,
    /// Extra advance after each glyph, in pixels.
    pub letter_spacing_px: f64,
    /// Fill color.
    pub fill: Rgba8,
}

/// A single line of text, vertically centred on `origin.y`.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct TextNode {
    /// Anchor point in parent space.
    pub origin: Point,
    /// Horizontal anchoring.
    pub anchor: TextAnchor,
    /// UTF-8 content.
    pub text: String,
    /// Font and paint.
    pub style: TextStyle,
}

/// Container applying a transform and opacity to its children.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct GroupNode {
    /// Stable identifier, emitted as the SVG `id`.
    pub id: String,
    /// Transform from child space to parent space.
    pub transform: Affine,
    /// Group opacity in `[0, 1]`.
    pub opacity: f64,
    /// Children in painter's order.
    pub children: Vec<SceneNode>,
}

impl Scene {
    /// Find a top-level group by id.
    pub fn group(&self, id: &str) -> Option<&GroupNode> {
        self.nodes.iter().find_map(|n| match n {
            SceneNode::Group(g) if g.id == id => Some(g),
            _ => None,
        })
    }

    /// All text runs in painter's order, descending into groups.
    pub fn texts(&self) -> Vec<&TextNode> {
        fn walk<'a>(nodes: &'a [SceneNode], out: &mut Vec<&'a TextNode>) {
            for n in nodes {
                match n {
                    SceneNode::Text(t) => out.push(t),
                    SceneNode::Group(g) => walk(&g.children, out),
                    SceneNode::Rect(_) => {}
                }
            }
        }
        let mut out = Vec::new();
        walk(&self.nodes, &mut out);
        out
    }

    /// Serialize as a standalone SVG document.
    pub fn to_svg(&self) -> String {
        crate::scene::svg::write_svg(self)
    }
}

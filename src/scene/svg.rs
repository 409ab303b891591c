use crate::foundation::core::Affine;
use crate::scene::model::{GroupNode, RectNode, Scene, SceneNode, TextAnchor, TextNode};
use crate::theme::color::Rgba8;
use std::fmt::Write as _;

pub(crate) fn write_svg(scene: &Scene) -> String {
    let w = scene.canvas.width;
    let h = scene.canvas.height;
    let mut out = String::with_capacity(1024);
    let _ = writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#
    );
    write_rect(
        &mut out,
        &RectNode {
            rect: scene.canvas.rect(),
            fill: scene.background,
        },
        1,
    );
    for node in &scene.nodes {
        write_node(&mut out, node, 1);
    }
    out.push_str("</svg>\n");
    out
}

fn write_node(out: &mut String, node: &SceneNode, depth: usize) {
    match node {
        SceneNode::Rect(r) => write_rect(out, r, depth),
        SceneNode::Text(t) => write_text(out, t, depth),
        SceneNode::Group(g) => write_group(out, g, depth),
    }
}

fn indent(out: &mut String, depth: usize) {
    for _ in 0..depth {
        out.push_str("  ");
    }
}

fn write_rect(out: &mut String, r: &RectNode, depth: usize) {
    indent(out, depth);
    let _ = writeln!(
        out,
        r#"<rect x="{}" y="{}" width="{}" height="{}"{}/>"#,
        num(r.rect.x0),
        num(r.rect.y0),
        num(r.rect.width()),
        num(r.rect.height()),
        paint(r.fill),
    );
}

fn write_text(out: &mut String, t: &TextNode, depth: usize) {
    let anchor = match t.anchor {
        TextAnchor::Start => "start",
        TextAnchor::Middle => "middle",
    };
    indent(out, depth);
    let _ = writeln!(
        out,
        r#"<text x="{}" y="{}" font-family="{}" font-size="{}" font-weight="{}" letter-spacing="{}" text-anchor="{anchor}" dominant-baseline="central" xml:space="preserve"{}>{}</text>"#,
        num(t.origin.x),
        num(t.origin.y),
        escape(&t.style.font_family),
        num(t.style.size_px),
        t.style.weight,
        num(t.style.letter_spacing_px),
        paint(t.style.fill),
        escape(&t.text),
    );
}

fn write_group(out: &mut String, g: &GroupNode, depth: usize) {
    indent(out, depth);
    let _ = write!(out, r#"<g id="{}""#, escape(&g.id));
    if g.transform != Affine::IDENTITY {
        let [a, b, c, d, e, f] = g.transform.as_coeffs();
        let _ = write!(
            out,
            r#" transform="matrix({} {} {} {} {} {})""#,
            num(a),
            num(b),
            num(c),
            num(d),
            num(e),
            num(f)
        );
    }
    if g.opacity < 1.0 {
        let _ = write!(out, r#" opacity="{}""#, num(g.opacity.max(0.0)));
    }
    out.push_str(">\n");
    for child in &g.children {
        write_node(out, child, depth + 1);
    }
    indent(out, depth);
    out.push_str("</g>\n");
}

fn paint(c: Rgba8) -> String {
    let rgb = Rgba8 { a: 255, ..c }.to_hex();
    if c.a == 255 {
        format!(r#" fill="{rgb}""#)
    } else {
        format!(
            r#" fill="{rgb}" fill-opacity="{}""#,
            num(f64::from(c.a) / 255.0)
        )
    }
}

/// Fixed three-decimal formatting with trailing zeros trimmed and `-0` folded to `0`.
pub(crate) fn num(v: f64) -> String {
    let mut s = format!("{v:.3}");
    if s.contains('.') {
        let trimmed = s.trim_end_matches('0').trim_end_matches('.').len();
        s.truncate(trimmed);
    }
    if s == "-0" {
        s = "0".to_owned();
    }
    s
}

pub(crate) fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            // XML 1.0 forbids C0 controls other than tab, LF and CR.
            c if c < '\u{20}' && !matches!(c, '\t' | '\n' | '\r') => {}
            _ => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/scene/svg.rs"]
mod tests;

use crate::scene::model::{Scene, SceneNode, TextAnchor};
use xxhash_rust::xxh3::Xxh3;

const XXH3_SEED: u64 = 0x6b1d_9e0f_37a2_c451;

/// Stable per-frame fingerprint used by static-frame elision.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize)]
pub struct FrameFingerprint {
    /// High 64 bits of the digest.
    pub hi: u64,
    /// Low 64 bits of the digest.
    pub lo: u64,
}

/// Fingerprint a scene.
///
/// The frame index is not part of the scene, so identical frames match across time.
pub(crate) fn fingerprint_scene(scene: &Scene) -> FrameFingerprint {
    let mut h = StableHasher::new();
    h.write_u32(scene.canvas.width);
    h.write_u32(scene.canvas.height);
    h.write_color(scene.background);
    write_nodes(&mut h, &scene.nodes);
    h.finish()
}

struct StableHasher {
    inner: Xxh3,
}

impl StableHasher {
    fn new() -> Self {
        Self {
            inner: Xxh3::with_seed(XXH3_SEED),
        }
    }

    fn write_bytes(&mut self, b: &[u8]) {
        self.inner.update(b);
    }

    fn write_u8(&mut self, v: u8) {
        self.write_bytes(&[v]);
    }

    fn write_u16(&mut self, v: u16) {
        self.write_bytes(&v.to_le_bytes());
    }

    fn write_u32(&mut self, v: u32) {
        self.write_bytes(&v.to_le_bytes());
    }

    fn write_u64(&mut self, v: u64) {
        self.write_bytes(&v.to_le_bytes());
    }

    fn write_f64(&mut self, v: f64) {
        // Fold -0.0 into 0.0 so they hash alike.
        let v = if v == 0.0 { 0.0 } else { v };
        self.write_u64(v.to_bits());
    }

    fn write_str(&mut self, s: &str) {
        self.write_u64(s.len() as u64);
        self.write_bytes(s.as_bytes());
    }

    fn write_color(&mut self, c: crate::theme::color::Rgba8) {
        self.write_bytes(&[c.r, c.g, c.b, c.a]);
    }

    fn finish(self) -> FrameFingerprint {
        let v = self.inner.digest128();
        FrameFingerprint {
            hi: (v >> 64) as u64,
            lo: v as u64,
        }
    }
}

fn write_nodes(h: &mut StableHasher, nodes: &[SceneNode]) {
    h.write_u32(nodes.len() as u32);
    for node in nodes {
        match node {
            SceneNode::Rect(r) => {
                h.write_u8(0);
                for v in [r.rect.x0, r.rect.y0, r.rect.x1, r.rect.y1] {
                    h.write_f64(v);
                }
                h.write_color(r.fill);
            }
            SceneNode::Text(t) => {
                h.write_u8(1);
                h.write_f64(t.origin.x);
                h.write_f64(t.origin.y);
                h.write_u8(match t.anchor {
                    TextAnchor::Start => 0,
                    TextAnchor::Middle => 1,
                });
                h.write_str(&t.text);
                h.write_str(&t.style.font_family);
                h.write_f64(t.style.size_px);
                h.write_u16(t.style.weight);
                h.write_f64(t.style.letter_spacing_px);
                h.write_color(t.style.fill);
            }
            SceneNode::Group(g) => {
                h.write_u8(2);
                h.write_str(&g.id);
                for c in g.transform.as_coeffs() {
                    h.write_f64(c);
                }
                h.write_f64(g.opacity);
                write_nodes(h, &g.children);
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/session/fingerprint.rs"]
mod tests;

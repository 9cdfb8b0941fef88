//! Scanline rasterization of glyph outlines.
//!
//! Outlines from `ttf-parser` are flattened into line segments in pixel
//! space (y grows downwards) and filled with the non-zero winding rule.
//! Coverage is exact horizontally and sampled `SUBSAMPLES` times per row
//! vertically.

use festa_fonts::FontData;
use ttf_parser::{GlyphId, OutlineBuilder};

const SUBSAMPLES: usize = 4;
const CURVE_STEPS: usize = 8;

#[derive(Debug, Clone, Copy)]
struct Segment {
    x0: f32,
    y0: f32,
    x1: f32,
    y1: f32,
}

struct Flattener {
    scale: f32,
    dx: f32,
    baseline: f32,
    start: (f32, f32),
    current: (f32, f32),
    segments: Vec<Segment>,
}

impl Flattener {
    fn map(&self, x: f32, y: f32) -> (f32, f32) {
        (self.dx + x * self.scale, self.baseline - y * self.scale)
    }

    fn push_to(&mut self, p: (f32, f32)) {
        if p != self.current {
            self.segments.push(Segment {
                x0: self.current.0,
                y0: self.current.1,
                x1: p.0,
                y1: p.1,
            });
        }
        self.current = p;
    }
}

impl OutlineBuilder for Flattener {
    fn move_to(&mut self, x: f32, y: f32) {
        let p = self.map(x, y);
        self.start = p;
        self.current = p;
    }

    fn line_to(&mut self, x: f32, y: f32) {
        let p = self.map(x, y);
        self.push_to(p);
    }

    fn quad_to(&mut self, x1: f32, y1: f32, x: f32, y: f32) {
        let p0 = self.current;
        let c = self.map(x1, y1);
        let p = self.map(x, y);
        for step in 1..=CURVE_STEPS {
            let t = step as f32 / CURVE_STEPS as f32;
            let mt = 1.0 - t;
            self.push_to((
                mt * mt * p0.0 + 2.0 * mt * t * c.0 + t * t * p.0,
                mt * mt * p0.1 + 2.0 * mt * t * c.1 + t * t * p.1,
            ));
        }
    }

    fn curve_to(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, x: f32, y: f32) {
        let p0 = self.current;
        let c1 = self.map(x1, y1);
        let c2 = self.map(x2, y2);
        let p = self.map(x, y);
        for step in 1..=CURVE_STEPS {
            let t = step as f32 / CURVE_STEPS as f32;
            let mt = 1.0 - t;
            let (a, b, c, d) = (mt * mt * mt, 3.0 * mt * mt * t, 3.0 * mt * t * t, t * t * t);
            self.push_to((
                a * p0.0 + b * c1.0 + c * c2.0 + d * p.0,
                a * p0.1 + b * c1.1 + c * c2.1 + d * p.1,
            ));
        }
    }

    fn close(&mut self) {
        let start = self.start;
        self.push_to(start);
    }
}

/// A `width` x `height` alpha coverage mask in `0.0..=1.0`.
pub(crate) struct Coverage {
    pub width: u32,
    pub height: u32,
    values: Vec<f32>,
}

impl Coverage {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            values: vec![0.0; width as usize * height as usize],
        }
    }

    pub fn get(&self, x: u32, y: u32) -> f32 {
        self.values[(y * self.width + x) as usize].min(1.0)
    }

    fn add_span(&mut self, row: usize, xa: f32, xb: f32, weight: f32) {
        let first = xa.floor().max(0.0) as usize;
        let last = (xb.ceil() as usize).min(self.width as usize);
        for px in first..last {
            let overlap = xb.min(px as f32 + 1.0) - xa.max(px as f32);
            if overlap > 0.0 {
                self.values[row * self.width as usize + px] += overlap * weight;
            }
        }
    }

    fn fill(&mut self, segments: &[Segment]) {
        let mut crossings: Vec<(f32, i32)> = Vec::new();
        for row in 0..self.height as usize {
            for sub in 0..SUBSAMPLES {
                let sy = row as f32 + (sub as f32 + 0.5) / SUBSAMPLES as f32;
                crossings.clear();
                for s in segments {
                    let (top, bottom) = if s.y0 < s.y1 { (s.y0, s.y1) } else { (s.y1, s.y0) };
                    if s.y0 == s.y1 || sy < top || sy >= bottom {
                        continue;
                    }
                    let x = s.x0 + (sy - s.y0) * (s.x1 - s.x0) / (s.y1 - s.y0);
                    crossings.push((x, if s.y1 > s.y0 { 1 } else { -1 }));
                }
                crossings.sort_by(|a, b| a.0.total_cmp(&b.0));

                let mut winding = 0;
                for pair in crossings.windows(2) {
                    winding += pair[0].1;
                    if winding != 0 {
                        self.add_span(row, pair[0].0, pair[1].0, 1.0 / SUBSAMPLES as f32);
                    }
                }
            }
        }
    }
}

/// Rasterizes `text` at `px` pixels with the baseline starting at `(x, baseline)`.
pub(crate) fn rasterize(font: &FontData, text: &str, px: f32, x: f32, baseline: f32, mask: &mut Coverage) {
    let Some(face) = font.face() else {
        return;
    };
    let scale = px / face.units_per_em() as f32;
    let mut flattener = Flattener {
        scale,
        dx: x,
        baseline,
        start: (0.0, 0.0),
        current: (0.0, 0.0),
        segments: Vec::new(),
    };

    for c in text.chars() {
        let glyph = face.glyph_index(c).unwrap_or(GlyphId(0));
        face.outline_glyph(glyph, &mut flattener);
        flattener.dx += face.glyph_hor_advance(glyph).unwrap_or(0) as f32 * scale;
    }

    mask.fill(&flattener.segments);
}

use crate::FontError;
use std::fmt;
use std::sync::Arc;
use ttf_parser::{Face, GlyphId};

/// Raw font bytes that are known to parse as a font face.
#[derive(Clone)]
pub struct FontData {
    bytes: Arc<Vec<u8>>,
    index: u32,
    origin: String,
}

impl fmt::Debug for FontData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FontData")
            .field("origin", &self.origin)
            .field("index", &self.index)
            .field("data_len", &self.bytes.len())
            .finish()
    }
}

/// Ascent and descent in points (or pixels) for a given size. Both positive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VerticalMetrics {
    pub ascent: f32,
    pub descent: f32,
}

impl VerticalMetrics {
    pub fn height(&self) -> f32 {
        self.ascent + self.descent
    }
}

impl FontData {
    /// Validates `bytes` as face `index` of a font file or collection.
    pub fn from_bytes(bytes: Vec<u8>, index: u32, origin: impl Into<String>) -> Result<Self, FontError> {
        let origin = origin.into();
        Face::parse(&bytes, index).map_err(|e| FontError::Parse(origin.clone(), e))?;
        Ok(Self {
            bytes: Arc::new(bytes),
            index,
            origin,
        })
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn index(&self) -> u32 {
        self.index
    }

    /// Where the data came from: a file path or a system family name.
    pub fn origin(&self) -> &str {
        &self.origin
    }

    /// Creates a lightweight Face view over the font data.
    pub fn face(&self) -> Option<Face<'_>> {
        Face::parse(&self.bytes, self.index).ok()
    }

    /// Horizontal advance of `text` at `size`, summing per-glyph advances.
    /// Characters without a glyph advance like `.notdef`.
    pub fn text_width(&self, text: &str, size: f32) -> f32 {
        let Some(face) = self.face() else {
            return 0.0;
        };
        let scale = size / face.units_per_em() as f32;
        text.chars()
            .map(|c| {
                let glyph = face.glyph_index(c).unwrap_or(GlyphId(0));
                face.glyph_hor_advance(glyph).unwrap_or(0) as f32 * scale
            })
            .sum()
    }

    pub fn vertical_metrics(&self, size: f32) -> VerticalMetrics {
        let Some(face) = self.face() else {
            return VerticalMetrics {
                ascent: size * 0.8,
                descent: size * 0.2,
            };
        };
        let scale = size / face.units_per_em() as f32;
        VerticalMetrics {
            ascent: face.ascender() as f32 * scale,
            descent: -(face.descender() as f32) * scale,
        }
    }
}

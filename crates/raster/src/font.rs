use crate::bitmap;
use crate::outline::{self, Coverage};
use festa_fonts::{FontChain, FontData};
use festa_types::Color;
use image::{Rgba, RgbaImage};

/// Natural bounding box of a piece of text, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextMetrics {
    pub width: u32,
    pub height: u32,
}

/// A font that can draw text into an RGBA surface.
#[derive(Debug, Clone)]
pub enum RasterFont {
    /// TrueType/OpenType outlines at a pixel size.
    Outline { data: FontData, px: f32 },
    /// The built-in 5x7 bitmap font scaled to roughly `px` pixels tall.
    Builtin { px: f32 },
}

impl RasterFont {
    /// Resolves `chain`, falling back to the built-in font when it is exhausted.
    pub fn from_chain(chain: &FontChain, px: f32) -> Self {
        match chain.resolve().into_font() {
            Some(data) => {
                log::info!("Using font {} at {}px", data.origin(), px);
                RasterFont::Outline { data, px }
            }
            None => RasterFont::Builtin { px },
        }
    }

    pub fn is_builtin(&self) -> bool {
        matches!(self, RasterFont::Builtin { .. })
    }

    pub fn measure(&self, text: &str) -> TextMetrics {
        match self {
            RasterFont::Outline { data, px } => {
                let metrics = data.vertical_metrics(*px);
                TextMetrics {
                    width: data.text_width(text, *px).ceil() as u32,
                    height: metrics.height().ceil() as u32,
                }
            }
            RasterFont::Builtin { px } => {
                let (width, height) = bitmap::measure(text, *px);
                TextMetrics { width, height }
            }
        }
    }

    /// Draws `text` with the top-left of its bounding box at `origin`.
    /// Pixels outside the surface are clipped.
    pub fn draw(&self, surface: &mut RgbaImage, origin: (i32, i32), text: &str, color: Color) {
        match self {
            RasterFont::Outline { data, px } => {
                let (width, height) = surface.dimensions();
                let mut mask = Coverage::new(width, height);
                let baseline = origin.1 as f32 + data.vertical_metrics(*px).ascent;
                outline::rasterize(data, text, *px, origin.0 as f32, baseline, &mut mask);
                for y in 0..height {
                    for x in 0..width {
                        let alpha = (mask.get(x, y) * 255.0).round() as u8;
                        if alpha > 0 {
                            blend_max(surface, x, y, color, alpha);
                        }
                    }
                }
            }
            RasterFont::Builtin { px } => {
                let (width, height) = surface.dimensions();
                bitmap::for_each_pixel(text, *px, origin, |x, y| {
                    if x >= 0 && y >= 0 && (x as u32) < width && (y as u32) < height {
                        blend_max(surface, x as u32, y as u32, color, 255);
                    }
                });
            }
        }
    }
}

fn blend_max(surface: &mut RgbaImage, x: u32, y: u32, color: Color, alpha: u8) {
    let pixel = surface.get_pixel_mut(x, y);
    let alpha = alpha.max(pixel.0[3]);
    *pixel = Rgba(color.with_alpha(alpha));
}

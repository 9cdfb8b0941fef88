use crate::Frame;
use crate::pulse::Overlay;
use festa_particles::{DrawRect, Particle};
use festa_types::Color;
use image::Rgba;

/// Rasterizes particle fields and text overlays into frames.
#[derive(Debug, Clone, Copy)]
pub struct FrameCompositor {
    pub width: u32,
    pub height: u32,
    pub background: Color,
}

impl FrameCompositor {
    pub fn new(width: u32, height: u32, background: Color) -> Self {
        Self {
            width,
            height,
            background,
        }
    }

    pub fn blank_frame(&self) -> Frame {
        Frame::from_pixel(self.width, self.height, Rgba(self.background.with_alpha(255)))
    }

    /// Paints particles in collection order, so later entries end up on top.
    pub fn paint_particles(&self, frame: &mut Frame, particles: &[Particle]) {
        for particle in particles {
            fill_rect(frame, particle.draw_rect(), particle.color);
        }
    }

    /// A complete frame: background, confetti, then the optional overlay.
    pub fn compose(&self, particles: &[Particle], overlay: Option<&Overlay>) -> Frame {
        let mut frame = self.blank_frame();
        self.paint_particles(&mut frame, particles);
        if let Some(overlay) = overlay {
            overlay.composite_onto(&mut frame);
        }
        frame
    }
}

/// Fills the pixels covered by `rect`, corners inclusive, clipped to the frame.
/// Fractional corners are truncated toward zero.
fn fill_rect(frame: &mut Frame, rect: DrawRect, color: Color) {
    let (width, height) = frame.dimensions();
    if width == 0 || height == 0 {
        return;
    }
    let left = rect.left.trunc().max(0.0);
    let top = rect.top.trunc().max(0.0);
    let right = rect.right.trunc().min(width as f64 - 1.0);
    let bottom = rect.bottom.trunc().min(height as f64 - 1.0);
    if left > right || top > bottom {
        return;
    }

    let pixel = Rgba(color.with_alpha(255));
    for y in top as u32..=bottom as u32 {
        for x in left as u32..=right as u32 {
            frame.put_pixel(x, y, pixel);
        }
    }
}

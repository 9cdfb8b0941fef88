//! Pulsing text overlay.
//!
//! The text is drawn into an isolated transparent surface 1.5 times its
//! natural size, resized by the pulse scale for the frame and composited
//! centered on the frame using its own alpha.

use crate::font::{RasterFont, TextMetrics};
use festa_types::Color;
use image::imageops::{self, FilterType};
use image::{Rgba, RgbaImage};
use std::f64::consts::PI;

/// Oscillation of the overlay scale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PulseConfig {
    pub amplitude: f64,
    /// Cycles per second.
    pub rate: f64,
}

impl Default for PulseConfig {
    fn default() -> Self {
        Self {
            amplitude: 0.1,
            rate: 2.0,
        }
    }
}

/// Scale factor for `frame_index` at `fps`: `1 + amplitude * sin(t * 2pi * rate)`.
pub fn pulse_scale(frame_index: u32, fps: u32, pulse: PulseConfig) -> f64 {
    let t = frame_index as f64 / fps as f64;
    1.0 + pulse.amplitude * (t * 2.0 * PI * pulse.rate).sin()
}

/// A scaled text surface ready to be pasted at `position`.
#[derive(Debug, Clone)]
pub struct Overlay {
    pub image: RgbaImage,
    /// Top-left corner on the frame; may be negative.
    pub position: (i64, i64),
}

impl Overlay {
    pub fn composite_onto(&self, frame: &mut RgbaImage) {
        imageops::overlay(frame, &self.image, self.position.0, self.position.1);
    }
}

#[derive(Debug, Clone)]
pub struct TextPulse {
    text: String,
    font: RasterFont,
    color: Color,
    pulse: PulseConfig,
    metrics: TextMetrics,
}

impl TextPulse {
    /// Measures the text once; every frame reuses the measurement.
    pub fn new(text: impl Into<String>, font: RasterFont, color: Color, pulse: PulseConfig) -> Self {
        let text = text.into();
        let metrics = font.measure(&text);
        log::debug!("Text '{}' measures {}x{}", text, metrics.width, metrics.height);
        Self {
            text,
            font,
            color,
            pulse,
            metrics,
        }
    }

    pub fn metrics(&self) -> TextMetrics {
        self.metrics
    }

    /// Size of the isolated surface the text is drawn into.
    pub fn surface_size(&self) -> (u32, u32) {
        (
            (self.metrics.width as f64 * 1.5) as u32,
            (self.metrics.height as f64 * 1.5) as u32,
        )
    }

    /// Draws the unscaled text centered in a fresh transparent surface.
    pub fn render_surface(&self) -> RgbaImage {
        let (sw, sh) = self.surface_size();
        // Transparent pixels carry the text color so resampling does not
        // darken the glyph edges.
        let mut surface = RgbaImage::from_pixel(sw, sh, Rgba(self.color.with_alpha(0)));
        let origin = (
            (sw as i32 - self.metrics.width as i32) / 2,
            (sh as i32 - self.metrics.height as i32) / 2,
        );
        self.font.draw(&mut surface, origin, &self.text, self.color);
        surface
    }

    /// The overlay for one frame, or `None` when the scaled surface would be
    /// empty and the frame should be left without text.
    pub fn render_overlay(&self, frame_index: u32, fps: u32, canvas: (u32, u32)) -> Option<Overlay> {
        let scale = pulse_scale(frame_index, fps, self.pulse);
        let (sw, sh) = self.surface_size();
        let scaled_w = (sw as f64 * scale) as i64;
        let scaled_h = (sh as f64 * scale) as i64;
        if scaled_w <= 0 || scaled_h <= 0 {
            log::debug!("Frame {}: overlay scale {:.3} is degenerate, skipping", frame_index, scale);
            return None;
        }

        let surface = self.render_surface();
        let image = imageops::resize(&surface, scaled_w as u32, scaled_h as u32, FilterType::CatmullRom);
        let (cx, cy) = (canvas.0 as i64 / 2, canvas.1 as i64 / 2);
        Some(Overlay {
            image,
            position: (cx - scaled_w / 2, cy - scaled_h / 2),
        })
    }
}

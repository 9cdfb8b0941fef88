//! The confetti celebration GIF.

use crate::FestaError;
use festa_fonts::FontChain;
use festa_particles::{FieldConfig, Simulation};
use festa_raster::{AnimationEncoder, EncodeOptions, Frame, FrameCompositor, PulseConfig, RasterFont, TextPulse};
use festa_types::Color;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::path::Path;

pub const OUTPUT_FILE: &str = "celebration.gif";

#[derive(Debug, Clone, PartialEq)]
pub struct CelebrationConfig {
    pub width: u32,
    pub height: u32,
    pub fps: u32,
    pub duration_secs: f64,
    pub background: Color,
    pub text: String,
    pub text_color: Color,
    /// Font size of the title text in pixels.
    pub font_px: f32,
    pub pulse: PulseConfig,
    pub encode: EncodeOptions,
    /// Fixes the confetti layout; `None` draws from the OS.
    pub seed: Option<u64>,
}

impl Default for CelebrationConfig {
    fn default() -> Self {
        Self {
            width: 480,
            height: 480,
            fps: 20,
            duration_secs: 4.0,
            background: Color::ALICE_BLUE,
            text: "축하합니다".to_string(),
            text_color: Color::ORANGE_RED,
            font_px: 60.0,
            pulse: PulseConfig::default(),
            encode: EncodeOptions::default(),
            seed: None,
        }
    }
}

impl CelebrationConfig {
    pub fn frame_count(&self) -> u32 {
        (self.fps as f64 * self.duration_secs) as u32
    }

    fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        }
    }
}

/// Simulates the confetti and draws every frame: particles are advanced
/// first, painted, then the pulsing text goes on top.
pub fn render_frames(config: &CelebrationConfig, font: RasterFont) -> Vec<Frame> {
    let field_config = FieldConfig::for_canvas(config.width, config.height);
    let compositor = FrameCompositor::new(config.width, config.height, config.background);
    let pulse = TextPulse::new(config.text.clone(), font, config.text_color, config.pulse);
    let canvas = (config.width, config.height);

    Simulation::new(&field_config, config.rng())
        .take(config.frame_count() as usize)
        .enumerate()
        .map(|(index, field)| {
            let overlay = pulse.render_overlay(index as u32, config.fps, canvas);
            compositor.compose(field.particles(), overlay.as_ref())
        })
        .collect()
}

/// Renders the animation with the Korean font chain and writes it to `path`.
/// Returns the number of frames written.
pub fn create_celebration(config: &CelebrationConfig, path: &Path) -> Result<usize, FestaError> {
    let font = RasterFont::from_chain(&FontChain::korean(), config.font_px);
    create_celebration_with_font(config, font, path)
}

pub fn create_celebration_with_font(
    config: &CelebrationConfig,
    font: RasterFont,
    path: &Path,
) -> Result<usize, FestaError> {
    let frames = render_frames(config, font);
    let count = frames.len();
    let options = EncodeOptions {
        fps: config.fps,
        ..config.encode
    };
    AnimationEncoder::new(options).save(frames, path)?;
    log::info!("Wrote {} frames to {}", count, path.display());
    Ok(count)
}

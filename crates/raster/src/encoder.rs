use crate::{EncodeError, Frame};
use color_quant::NeuQuant;
use image::codecs::gif::{GifEncoder, Repeat};
use image::{Delay, Rgba};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Palette size used when optimizing for small emoji-sized output.
const EMOJI_PALETTE: usize = 48;
/// At most this many frames are sampled to train the shared palette.
const PALETTE_SAMPLE_FRAMES: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EncodeOptions {
    pub fps: u32,
    /// Target number of palette entries.
    pub num_colors: usize,
    /// Trade color fidelity for size, as for chat emoji.
    pub optimize_for_emoji: bool,
}

impl Default for EncodeOptions {
    fn default() -> Self {
        Self {
            fps: 20,
            num_colors: 128,
            optimize_for_emoji: false,
        }
    }
}

impl EncodeOptions {
    pub fn palette_size(&self) -> usize {
        let wanted = if self.optimize_for_emoji {
            self.num_colors.min(EMOJI_PALETTE)
        } else {
            self.num_colors
        };
        wanted.clamp(2, 256)
    }

    fn frame_delay(&self) -> Delay {
        Delay::from_numer_denom_ms(1000, self.fps.max(1))
    }
}

/// Writes frames as an infinitely looping GIF sharing one reduced palette.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnimationEncoder {
    options: EncodeOptions,
}

impl AnimationEncoder {
    pub fn new(options: EncodeOptions) -> Self {
        Self { options }
    }

    pub fn save(&self, frames: Vec<Frame>, path: impl AsRef<Path>) -> Result<(), EncodeError> {
        let file = File::create(path.as_ref())?;
        let mut writer = BufWriter::new(file);
        self.encode(frames, &mut writer)?;
        writer.flush()?;
        log::info!("Wrote animation to {}", path.as_ref().display());
        Ok(())
    }

    pub fn encode<W: Write>(&self, mut frames: Vec<Frame>, writer: W) -> Result<(), EncodeError> {
        let expected = frames.first().ok_or(EncodeError::NoFrames)?.dimensions();
        if let Some((index, frame)) = frames
            .iter()
            .enumerate()
            .find(|(_, frame)| frame.dimensions() != expected)
        {
            return Err(EncodeError::FrameSizeMismatch {
                index,
                expected,
                actual: frame.dimensions(),
            });
        }

        let palette = self.train_palette(&frames);
        for frame in &mut frames {
            remap(frame, &palette);
        }
        log::debug!(
            "Encoding {} frames of {}x{} with a {}-color palette",
            frames.len(),
            expected.0,
            expected.1,
            self.options.palette_size()
        );

        let delay = self.options.frame_delay();
        let mut encoder = GifEncoder::new_with_speed(writer, 10);
        encoder.set_repeat(Repeat::Infinite)?;
        encoder.encode_frames(
            frames
                .into_iter()
                .map(|frame| image::Frame::from_parts(frame, 0, 0, delay)),
        )?;
        Ok(())
    }

    fn train_palette(&self, frames: &[Frame]) -> NeuQuant {
        let stride = frames.len().div_ceil(PALETTE_SAMPLE_FRAMES).max(1);
        let sample: Vec<u8> = frames
            .iter()
            .step_by(stride)
            .flat_map(|frame| frame.as_raw().iter().copied())
            .collect();
        NeuQuant::new(10, self.options.palette_size(), &sample)
    }
}

fn remap(frame: &mut Frame, palette: &NeuQuant) {
    let colors = palette.color_map_rgba();
    for pixel in frame.pixels_mut() {
        let index = palette.index_of(&pixel.0);
        if let Some(entry) = colors.get(index * 4..index * 4 + 4) {
            *pixel = Rgba([entry[0], entry[1], entry[2], 255]);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn striped(width: u32, height: u32, shift: u32) -> Frame {
        Frame::from_fn(width, height, |x, y| {
            let v = ((x + y + shift) * 37 % 256) as u8;
            Rgba([v, 255 - v, v / 2, 255])
        })
    }

    #[test]
    fn emoji_mode_caps_the_palette() {
        let options = EncodeOptions {
            optimize_for_emoji: true,
            ..EncodeOptions::default()
        };
        assert_eq!(options.palette_size(), 48);
        assert_eq!(EncodeOptions::default().palette_size(), 128);
    }

    #[test]
    fn remapped_frames_use_at_most_palette_colors() {
        let encoder = AnimationEncoder::new(EncodeOptions {
            num_colors: 16,
            ..EncodeOptions::default()
        });
        let mut frames = vec![striped(32, 32, 0), striped(32, 32, 5)];
        let palette = encoder.train_palette(&frames);
        for frame in &mut frames {
            remap(frame, &palette);
        }
        let distinct: HashSet<[u8; 4]> = frames.iter().flat_map(|f| f.pixels().map(|p| p.0)).collect();
        assert!(distinct.len() <= 16);
    }

    #[test]
    fn empty_animation_is_rejected() {
        let result = AnimationEncoder::default().encode(Vec::new(), Vec::<u8>::new());
        assert!(matches!(result, Err(EncodeError::NoFrames)));
    }

    #[test]
    fn mismatched_frames_are_rejected() {
        let frames = vec![striped(8, 8, 0), striped(8, 8, 1), striped(4, 8, 2)];
        let result = AnimationEncoder::default().encode(frames, Vec::<u8>::new());
        assert!(matches!(result, Err(EncodeError::FrameSizeMismatch { index: 2, .. })));
    }

    #[test]
    fn writes_a_gif_stream() {
        let mut out = Vec::new();
        let frames = (0..3).map(|i| striped(16, 16, i)).collect();
        AnimationEncoder::default().encode(frames, &mut out).unwrap();
        assert!(out.starts_with(b"GIF89a"));
    }
}

use thiserror::Error;

mod bitmap;
pub mod compositor;
pub mod encoder;
pub mod font;
mod outline;
pub mod pulse;

pub use self::compositor::FrameCompositor;
pub use self::encoder::{AnimationEncoder, EncodeOptions};
pub use self::font::{RasterFont, TextMetrics};
pub use self::pulse::{Overlay, PulseConfig, TextPulse, pulse_scale};

/// RGBA frame buffer shared by every stage.
pub type Frame = image::RgbaImage;

#[derive(Error, Debug)]
pub enum EncodeError {
    #[error("an animation needs at least one frame")]
    NoFrames,
    #[error("frame {index} is {actual:?} but the animation is {expected:?}")]
    FrameSizeMismatch {
        index: usize,
        expected: (u32, u32),
        actual: (u32, u32),
    },
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("image encoding error: {0}")]
    Image(#[from] image::ImageError),
}

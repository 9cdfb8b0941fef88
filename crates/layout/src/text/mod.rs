pub mod wrapper;

use crate::style::Face;

/// Supplies advance widths for the faces a renderer can set text in.
pub trait TextMeasure {
    /// Width in points of `text` set in `face` at `size` points.
    fn text_width(&self, text: &str, face: Face, size: f32) -> f32;
}

impl<T: TextMeasure + ?Sized> TextMeasure for &T {
    fn text_width(&self, text: &str, face: Face, size: f32) -> f32 {
        (**self).text_width(text, face, size)
    }
}

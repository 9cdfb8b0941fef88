//! Writes pages produced by `festa-layout` into a PDF document.
//!
//! Text is set either in an embedded TrueType font found through a
//! [`festa_fonts::FontChain`] or in the PDF standard fonts, see [`FontSet`].

use thiserror::Error;

mod drawing;
pub mod fonts;
pub mod pdf;

pub use fonts::FontSet;
pub use pdf::PdfRenderer;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Failed to embed font '{0}'.")]
    FontEmbedding(String),
}

//! Generators for the festa artifacts.
//!
//! * [`celebration`] renders the confetti GIF.
//! * [`markdown`] converts a lightweight markup file into a PDF.
//! * [`guide`] renders the fixed skills guide PDF.
//!
//! The building blocks live in the `crates/` workspace members and are
//! re-exported here.

pub mod celebration;
pub mod document;
pub mod error;
pub mod guide;
pub mod markdown;

pub use error::FestaError;

pub use festa_fonts as fonts;
pub use festa_layout as layout;
pub use festa_markup as markup;
pub use festa_particles as particles;
pub use festa_raster as raster;
pub use festa_render_pdf as render;
pub use festa_types as types;

use festa_layout::LayoutError;
use festa_raster::EncodeError;
use festa_render_pdf::RenderError;
use thiserror::Error;

/// Any failure while producing one of the artifacts.
#[derive(Error, Debug)]
pub enum FestaError {
    #[error("Layout failed: {0}")]
    Layout(#[from] LayoutError),

    #[error("Rendering failed: {0}")]
    Render(#[from] RenderError),

    #[error("Animation encoding failed: {0}")]
    Encode(#[from] EncodeError),

    #[error("I/O error on '{path}': {source}")]
    File {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl FestaError {
    pub(crate) fn file(path: &std::path::Path, source: std::io::Error) -> Self {
        FestaError::File {
            path: path.display().to_string(),
            source,
        }
    }
}

//! Shared path from flowables to PDF bytes.

use crate::FestaError;
use festa_fonts::FontChain;
use festa_layout::{Flowable, LayoutEngine, PageLayout};
use festa_render_pdf::{FontSet, PdfRenderer};
use std::fs;
use std::path::Path;

/// Resolves the Korean font chain, warning when the standard fonts are used.
pub fn korean_fonts() -> FontSet {
    let (fonts, warning) = FontSet::resolve(&FontChain::korean());
    if let Some(warning) = warning {
        log::warn!("{}", warning);
    }
    fonts
}

/// Lays out `flowables` on A4 pages and renders them.
pub fn render_pdf(flowables: &[Flowable], fonts: FontSet, title: &str) -> Result<Vec<u8>, FestaError> {
    let page = PageLayout::a4();
    let pages = LayoutEngine::new(page, &fonts).paginate(flowables)?;
    log::debug!("'{}' laid out on {} pages", title, pages.len());
    let bytes = PdfRenderer::new(fonts).with_title(title).render(&page, &pages)?;
    Ok(bytes)
}

pub(crate) fn write_output(path: &Path, bytes: &[u8]) -> Result<(), FestaError> {
    fs::write(path, bytes).map_err(|e| FestaError::file(path, e))?;
    log::info!("Wrote {} ({} bytes)", path.display(), bytes.len());
    Ok(())
}

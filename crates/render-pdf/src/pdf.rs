use crate::RenderError;
use crate::drawing;
use crate::fonts::FontSet;
use festa_layout::{Face, Page, PageLayout};
use printpdf::font::ParsedFont;
use printpdf::ops::Op;
use printpdf::{BuiltinFont, FontId, Mm, PdfDocument, PdfPage, PdfSaveOptions, Pt};

/// Font to select for a run of text.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum PdfFont {
    Embedded(FontId),
    Builtin(BuiltinFont),
}

/// Graphics state tracked while emitting one page, to avoid redundant ops.
#[derive(Default)]
pub(crate) struct PageRenderState {
    pub is_text_section_open: bool,
    pub current_font: Option<PdfFont>,
    pub current_font_size: Option<f32>,
    pub current_fill_color: Option<printpdf::color::Color>,
}

pub(crate) struct PageRenderer<'a> {
    pub fonts: &'a FontLookup,
    pub page_height_pt: f32,
    pub ops: Vec<Op>,
    pub state: PageRenderState,
}

impl<'a> PageRenderer<'a> {
    fn new(fonts: &'a FontLookup, page_height_pt: f32) -> Self {
        Self {
            fonts,
            page_height_pt,
            ops: Vec::new(),
            state: PageRenderState::default(),
        }
    }

    pub fn close_text_section_if_open(&mut self) {
        if self.state.is_text_section_open {
            self.ops.push(Op::EndTextSection);
            self.state.is_text_section_open = false;
        }
    }

    fn into_ops(mut self) -> Vec<Op> {
        self.close_text_section_if_open();
        self.ops
    }
}

/// Maps layout faces onto fonts registered with the document.
pub(crate) struct FontLookup {
    set: FontSet,
    embedded: Option<FontId>,
}

impl FontLookup {
    pub fn font_for(&self, face: Face) -> PdfFont {
        match (self.set.builtin_for(face), &self.embedded) {
            (Some(builtin), _) => PdfFont::Builtin(builtin),
            (None, Some(id)) => PdfFont::Embedded(id.clone()),
            // Embedding failed after resolution; fall back like an exhausted chain.
            (None, None) => PdfFont::Builtin(match face {
                Face::Bold => BuiltinFont::HelveticaBold,
                Face::Regular | Face::Monospace => BuiltinFont::Helvetica,
            }),
        }
    }
}

/// Renders laid-out pages into a PDF byte buffer.
pub struct PdfRenderer {
    fonts: FontSet,
    title: String,
}

impl PdfRenderer {
    pub fn new(fonts: FontSet) -> Self {
        Self {
            fonts,
            title: "Document".to_string(),
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Emits one PDF page per layout page, painting elements in order.
    pub fn render(&self, layout: &PageLayout, pages: &[Page]) -> Result<Vec<u8>, RenderError> {
        let mut doc = PdfDocument::new(&self.title);

        let embedded = match self.fonts.body() {
            Some(font) => {
                let mut warnings = Vec::new();
                let parsed = ParsedFont::from_bytes(font.bytes(), font.index() as usize, &mut warnings)
                    .ok_or_else(|| RenderError::FontEmbedding(font.origin().to_string()))?;
                Some(doc.add_font(&parsed))
            }
            None => None,
        };
        let lookup = FontLookup {
            set: self.fonts.clone(),
            embedded,
        };

        let width_mm: Mm = Pt(layout.size.width).into();
        let height_mm: Mm = Pt(layout.size.height).into();

        for page in pages {
            let mut renderer = PageRenderer::new(&lookup, layout.size.height);
            for element in &page.elements {
                drawing::draw_element(&mut renderer, element)?;
            }
            doc.pages.push(PdfPage::new(width_mm, height_mm, renderer.into_ops()));
        }

        let mut warnings = Vec::new();
        let bytes = doc.save(&PdfSaveOptions::default(), &mut warnings);
        log::debug!(
            "Rendered {} pages into {} bytes ({} warnings)",
            pages.len(),
            bytes.len(),
            warnings.len()
        );
        Ok(bytes)
    }
}

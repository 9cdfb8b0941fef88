use crate::style::{Face, ParagraphStyle, TableStyle};

/// A run of text set in one face.
#[derive(Debug, Clone, PartialEq)]
pub struct TextRun {
    pub text: String,
    pub face: Face,
}

impl TextRun {
    pub fn new(text: impl Into<String>, face: Face) -> Self {
        Self {
            text: text.into(),
            face,
        }
    }
}

/// A table with fixed column widths. Cell text may contain `\n`.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    pub rows: Vec<Vec<String>>,
    pub col_widths: Vec<f32>,
    pub style: TableStyle,
}

/// Content handed to the layout engine, flowed onto pages in order.
#[derive(Debug, Clone, PartialEq)]
pub enum Flowable {
    /// Wrapped text.
    Paragraph { runs: Vec<TextRun>, style: ParagraphStyle },
    /// Lines set exactly as given, never wrapped.
    Preformatted { lines: Vec<String>, style: ParagraphStyle },
    /// Vertical gap in points.
    Spacer(f32),
    Table(Table),
}

impl Flowable {
    /// A paragraph of a single run in the style's own face.
    pub fn paragraph(text: impl Into<String>, style: &ParagraphStyle) -> Self {
        Flowable::Paragraph {
            runs: vec![TextRun::new(text, style.face)],
            style: style.clone(),
        }
    }
}

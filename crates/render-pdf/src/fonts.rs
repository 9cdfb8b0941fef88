use festa_fonts::{FontChain, FontData, FontWarning, Resolution};
use festa_layout::{Face, TextMeasure};
use printpdf::BuiltinFont;
use printpdf::font::ParsedFont;

/// Average advance of the standard fonts, as a fraction of the font size.
const HELVETICA_ADVANCE: f32 = 0.55;
const HELVETICA_BOLD_ADVANCE: f32 = 0.6;
const COURIER_ADVANCE: f32 = 0.6;

/// The fonts a document is set in.
///
/// Body text uses the embedded font when one was found; bold shares that
/// face. Without one, body text falls back to Helvetica and Helvetica-Bold.
/// Monospace is always Courier.
#[derive(Debug, Clone, Default)]
pub struct FontSet {
    body: Option<FontData>,
}

impl FontSet {
    /// Walks `chain` and keeps the first usable font. The returned warning
    /// is set when every source failed and the standard fonts are used.
    pub fn resolve(chain: &FontChain) -> (Self, Option<FontWarning>) {
        match chain.resolve() {
            Resolution::Found(font) if embeddable(&font) => {
                log::debug!("Embedding body font from {}", font.origin());
                (Self { body: Some(font) }, None)
            }
            Resolution::Found(font) => {
                log::warn!(
                    "Font {} cannot be embedded in a PDF; using the built-in fonts",
                    font.origin()
                );
                (Self::builtin(), None)
            }
            Resolution::Exhausted(warning) => (Self::builtin(), Some(warning)),
        }
    }

    /// Standard PDF fonts only.
    pub fn builtin() -> Self {
        Self { body: None }
    }

    pub fn body(&self) -> Option<&FontData> {
        self.body.as_ref()
    }

    pub fn is_embedded(&self) -> bool {
        self.body.is_some()
    }

    /// The standard font used for `face`, or `None` when it is set in the
    /// embedded font.
    pub fn builtin_for(&self, face: Face) -> Option<BuiltinFont> {
        match (face, &self.body) {
            (Face::Monospace, _) => Some(BuiltinFont::Courier),
            (_, Some(_)) => None,
            (Face::Regular, None) => Some(BuiltinFont::Helvetica),
            (Face::Bold, None) => Some(BuiltinFont::HelveticaBold),
        }
    }
}

fn embeddable(font: &FontData) -> bool {
    let mut warnings = Vec::new();
    ParsedFont::from_bytes(font.bytes(), font.index() as usize, &mut warnings).is_some()
}

impl TextMeasure for FontSet {
    fn text_width(&self, text: &str, face: Face, size: f32) -> f32 {
        let advance = match (face, &self.body) {
            (Face::Monospace, _) => COURIER_ADVANCE,
            (_, Some(font)) => return font.text_width(text, size),
            (Face::Regular, None) => HELVETICA_ADVANCE,
            (Face::Bold, None) => HELVETICA_BOLD_ADVANCE,
        };
        text.chars().count() as f32 * advance * size
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use festa_fonts::FontSource;

    #[test]
    fn exhausted_chain_uses_standard_fonts() {
        let chain = FontChain::new(vec![FontSource::file("/nonexistent/festa-font.ttf")]);
        let (fonts, warning) = FontSet::resolve(&chain);
        assert!(!fonts.is_embedded());
        assert!(warning.is_some());
        assert_eq!(fonts.builtin_for(Face::Regular), Some(BuiltinFont::Helvetica));
        assert_eq!(fonts.builtin_for(Face::Bold), Some(BuiltinFont::HelveticaBold));
    }

    #[test]
    fn monospace_is_always_courier() {
        assert_eq!(FontSet::builtin().builtin_for(Face::Monospace), Some(BuiltinFont::Courier));
    }

    #[test]
    fn courier_measures_fixed_width() {
        let fonts = FontSet::builtin();
        assert!((fonts.text_width("abcd", Face::Monospace, 10.0) - 24.0).abs() < 1e-4);
        assert!(fonts.text_width("abcd", Face::Bold, 10.0) > fonts.text_width("abcd", Face::Regular, 10.0));
    }
}

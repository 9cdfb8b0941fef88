use crate::{Face, Flowable, LayoutEngine, LayoutError, Page, PageLayout, TextMeasure};
use crate::{LayoutElement, Margins, PositionedElement, Size, TextElement};

/// Every character is half the font size wide; monospace is 0.6.
pub struct FixedMeasure;

impl TextMeasure for FixedMeasure {
    fn text_width(&self, text: &str, face: Face, size: f32) -> f32 {
        let per_char = match face {
            Face::Monospace => 0.6,
            Face::Regular | Face::Bold => 0.5,
        };
        text.chars().count() as f32 * per_char * size
    }
}

/// A small page: 200x300 with 10pt margins, leaving a 180x280 content box.
pub fn small_page() -> PageLayout {
    PageLayout {
        size: Size::new(200.0, 300.0),
        margins: Margins::all(10.0),
    }
}

pub fn paginate_test_flowables(
    page: PageLayout,
    flowables: &[Flowable],
) -> Result<Vec<Page>, LayoutError> {
    LayoutEngine::new(page, &FixedMeasure).paginate(flowables)
}

pub fn text_elements(page: &Page) -> Vec<(&PositionedElement, &TextElement)> {
    page.elements
        .iter()
        .filter_map(|el| match &el.element {
            LayoutElement::Text(text) => Some((el, text)),
            LayoutElement::Rectangle(_) => None,
        })
        .collect()
}

pub fn find_first_text_box_with_content<'a>(
    pages: &'a [Page],
    content: &str,
) -> Option<(usize, &'a PositionedElement)> {
    pages.iter().enumerate().find_map(|(i, page)| {
        page.elements.iter().find_map(|el| match &el.element {
            LayoutElement::Text(text) if text.content.contains(content) => Some((i, el)),
            _ => None,
        })
    })
}

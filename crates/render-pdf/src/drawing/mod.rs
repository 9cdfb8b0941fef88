use crate::RenderError;
use crate::pdf::PageRenderer;
use festa_layout::{LayoutElement, PositionedElement};
use festa_types::Color;

pub(crate) mod rect;
pub(crate) mod text;

/// Draws one element, converting from top-left layout coordinates.
pub(crate) fn draw_element(page: &mut PageRenderer, element: &PositionedElement) -> Result<(), RenderError> {
    match &element.element {
        LayoutElement::Text(text_el) => text::draw_text(page, text_el, element),
        LayoutElement::Rectangle(rect_el) => rect::draw_rect(page, rect_el, element),
    }
}

pub(crate) fn to_pdf_color(c: &Color) -> printpdf::color::Color {
    let (r, g, b) = c.to_unit();
    printpdf::color::Color::Rgb(printpdf::Rgb::new(r, g, b, None))
}

use crate::page::{LayoutElement, PositionedElement, RectElement, Stroke};
use festa_types::{Color, Rect};

/// Builds the background/border rectangle for a region.
///
/// Returns `None` when there is nothing to paint: no fill, no stroke, or a
/// region without area.
pub fn create_background(
    bounds: Rect,
    fill: Option<Color>,
    stroke: Option<Stroke>,
) -> Option<PositionedElement> {
    if fill.is_none() && stroke.is_none() {
        return None;
    }
    if bounds.width <= 0.0 || bounds.height <= 0.0 {
        return None;
    }
    Some(PositionedElement {
        element: LayoutElement::Rectangle(RectElement { fill, stroke }),
        ..PositionedElement::from_rect(bounds)
    })
}

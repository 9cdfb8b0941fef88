use super::to_pdf_color;
use crate::RenderError;
use crate::pdf::PageRenderer;
use festa_layout::{PositionedElement, RectElement};
use printpdf::Pt;
use printpdf::graphics::{LinePoint, PaintMode, Point, Polygon, PolygonRing, WindingOrder};
use printpdf::ops::Op;

fn corners(x: f32, y: f32, width: f32, height: f32) -> Vec<LinePoint> {
    [(x, y), (x + width, y), (x + width, y + height), (x, y + height)]
        .into_iter()
        .map(|(px, py)| LinePoint {
            p: Point { x: Pt(px), y: Pt(py) },
            bezier: false,
        })
        .collect()
}

/// Fills and/or strokes a rectangle.
pub(crate) fn draw_rect(
    page: &mut PageRenderer,
    rect: &RectElement,
    positioned: &PositionedElement,
) -> Result<(), RenderError> {
    // Rectangles cannot be drawn within a text section.
    page.close_text_section_if_open();

    let y = page.page_height_pt - (positioned.y + positioned.height);
    let mode = match (&rect.fill, &rect.stroke) {
        (Some(_), Some(_)) => PaintMode::FillStroke,
        (Some(_), None) => PaintMode::Fill,
        (None, Some(_)) => PaintMode::Stroke,
        (None, None) => return Ok(()),
    };

    if let Some(fill) = &rect.fill {
        let col = to_pdf_color(fill);
        page.ops.push(Op::SetFillColor { col: col.clone() });
        // Text sections set their own fill color again.
        page.state.current_fill_color = Some(col);
    }
    if let Some(stroke) = &rect.stroke {
        page.ops.push(Op::SetOutlineThickness { pt: Pt(stroke.width) });
        page.ops.push(Op::SetOutlineColor {
            col: to_pdf_color(&stroke.color),
        });
    }

    let polygon = Polygon {
        rings: vec![PolygonRing {
            points: corners(positioned.x, y, positioned.width, positioned.height),
        }],
        mode,
        winding_order: WindingOrder::EvenOdd,
    };
    page.ops.push(Op::DrawPolygon { polygon });
    Ok(())
}

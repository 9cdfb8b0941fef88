use super::to_pdf_color;
use crate::RenderError;
use crate::pdf::{PageRenderer, PdfFont};
use festa_layout::{PositionedElement, TextElement};
use printpdf::ops::Op;
use printpdf::{Pt, TextItem, TextMatrix};

/// Renders a `TextElement` at its baseline, managing the text section state.
pub(crate) fn draw_text(
    page: &mut PageRenderer,
    text: &TextElement,
    positioned: &PositionedElement,
) -> Result<(), RenderError> {
    if text.content.is_empty() {
        return Ok(());
    }

    let font = page.fonts.font_for(text.face);
    let fill_color = to_pdf_color(&text.color);

    if !page.state.is_text_section_open {
        page.ops.push(Op::StartTextSection);
        page.state.is_text_section_open = true;
    }

    if page.state.current_fill_color.as_ref() != Some(&fill_color) {
        page.ops.push(Op::SetFillColor { col: fill_color.clone() });
        page.state.current_fill_color = Some(fill_color);
    }

    if page.state.current_font.as_ref() != Some(&font) || page.state.current_font_size != Some(text.font_size) {
        let size = Pt(text.font_size);
        page.ops.push(match &font {
            PdfFont::Embedded(id) => Op::SetFontSize { size, font: id.clone() },
            PdfFont::Builtin(builtin) => Op::SetFontSizeBuiltinFont { size, font: *builtin },
        });
        page.state.current_font = Some(font.clone());
        page.state.current_font_size = Some(text.font_size);
    }

    let pdf_y = page.page_height_pt - text.baseline;
    page.ops.push(Op::SetTextMatrix {
        matrix: TextMatrix::Translate(Pt(positioned.x), Pt(pdf_y)),
    });
    let items = vec![TextItem::Text(text.content.clone())];
    page.ops.push(match font {
        PdfFont::Embedded(id) => Op::WriteText { items, font: id },
        PdfFont::Builtin(builtin) => Op::WriteTextBuiltinFont { items, font: builtin },
    });

    Ok(())
}

use crate::LayoutError;
use crate::algorithms::pagination::check_child_fit;
use crate::flowable::{Flowable, Table, TextRun};
use crate::page::{LayoutElement, Page, PageLayout, PositionedElement, TextElement};
use crate::painting::box_painter::create_background;
use crate::style::{Face, ParagraphStyle, TextAlign, VerticalAlign};
use crate::text::TextMeasure;
use crate::text::wrapper::{LineLayout, break_lines};
use festa_types::{Color, Rect};
use log::debug;

const EPSILON: f32 = 0.01;

/// Line height used for table cells, relative to the font size.
const TABLE_LEADING: f32 = 1.2;

/// Baseline offset from the top of a line box.
fn baseline_offset(leading: f32, font_size: f32) -> f32 {
    (leading + font_size) / 2.0 - 0.2 * font_size
}

/// Flows [`Flowable`]s top to bottom into the content area of fixed-size
/// pages, starting a new page whenever the next piece does not fit.
pub struct LayoutEngine<'a> {
    page: PageLayout,
    measure: &'a dyn TextMeasure,
}

impl<'a> LayoutEngine<'a> {
    pub fn new(page: PageLayout, measure: &'a dyn TextMeasure) -> Self {
        Self { page, measure }
    }

    /// Lays out `flowables` in order. Always returns at least one page.
    pub fn paginate(&self, flowables: &[Flowable]) -> Result<Vec<Page>, LayoutError> {
        let mut cursor = PageCursor::new(self.page.content_area());
        for flowable in flowables {
            match flowable {
                Flowable::Paragraph { runs, style } => self.layout_paragraph(&mut cursor, runs, style)?,
                Flowable::Preformatted { lines, style } => {
                    let lines: Vec<LineLayout> = lines
                        .iter()
                        .map(|line| LineLayout::single(line, style.face, style.font_size, self.measure))
                        .collect();
                    self.place_lines(&mut cursor, &lines, style)?;
                }
                Flowable::Spacer(height) => cursor.add_spacer(*height),
                Flowable::Table(table) => self.layout_table(&mut cursor, table)?,
            }
        }
        let pages = cursor.finish();
        debug!("Laid out {} flowables onto {} pages", flowables.len(), pages.len());
        Ok(pages)
    }

    fn text_box(&self, style: &ParagraphStyle, area: Rect) -> (f32, f32, f32) {
        let padding = if style.background.is_some() {
            style.border_padding
        } else {
            0.0
        };
        let x = area.x + style.left_indent;
        let width = (area.width - style.left_indent).max(0.0);
        (x, width, padding)
    }

    fn layout_paragraph(
        &self,
        cursor: &mut PageCursor,
        runs: &[TextRun],
        style: &ParagraphStyle,
    ) -> Result<(), LayoutError> {
        let (_, width, padding) = self.text_box(style, cursor.area);
        let lines = break_lines(runs, (width - 2.0 * padding).max(0.0), style.font_size, self.measure);
        self.place_lines(cursor, &lines, style)
    }

    /// Places already broken lines, splitting between lines at page ends.
    /// Each on-page fragment of a styled block gets its own background.
    fn place_lines(
        &self,
        cursor: &mut PageCursor,
        lines: &[LineLayout],
        style: &ParagraphStyle,
    ) -> Result<(), LayoutError> {
        cursor.add_space(style.space_before);
        let (x, width, padding) = self.text_box(style, cursor.area);
        let text_width = (width - 2.0 * padding).max(0.0);

        let mut fragment: Option<Fragment> = None;
        for line in lines {
            let lead_in = if fragment.is_none() { padding } else { 0.0 };
            let needed = lead_in + style.leading + padding;
            if needed > cursor.area.height + EPSILON {
                return Err(LayoutError::ElementTooLarge(needed, cursor.area.height));
            }
            if !cursor.fits(needed) && !cursor.at_top {
                if let Some(open) = fragment.take() {
                    cursor.close_fragment(open, padding, x, width, style.background);
                }
                cursor.new_page();
            }
            if fragment.is_none() {
                fragment = Some(Fragment {
                    insert_at: cursor.current.elements.len(),
                    top: cursor.top(),
                });
                cursor.y += padding;
            }

            let offset = match style.align {
                TextAlign::Left => 0.0,
                TextAlign::Center => ((text_width - line.width) / 2.0).max(0.0),
            };
            let line_top = cursor.top();
            let baseline = line_top + baseline_offset(style.leading, style.font_size);
            for item in &line.items {
                cursor.push(PositionedElement {
                    x: x + padding + offset + item.x,
                    y: line_top,
                    width: item.width,
                    height: style.leading,
                    element: LayoutElement::Text(TextElement {
                        content: item.text.clone(),
                        face: item.face,
                        font_size: style.font_size,
                        color: style.color,
                        baseline,
                    }),
                });
            }
            cursor.y += style.leading;
            cursor.at_top = false;
        }
        if let Some(open) = fragment.take() {
            cursor.close_fragment(open, padding, x, width, style.background);
        }

        cursor.add_space(style.space_after);
        Ok(())
    }

    fn layout_table(&self, cursor: &mut PageCursor, table: &Table) -> Result<(), LayoutError> {
        let style = &table.style;
        let columns = table.col_widths.len();
        for (row, cells) in table.rows.iter().enumerate() {
            if cells.len() != columns {
                return Err(LayoutError::TableShape {
                    row,
                    expected: columns,
                    actual: cells.len(),
                });
            }
        }

        let total_width: f32 = table.col_widths.iter().sum();
        let left = cursor.area.x + ((cursor.area.width - total_width) / 2.0).max(0.0);
        let padding = style.cell_padding;

        for (row, cells) in table.rows.iter().enumerate() {
            let header = row == 0;
            let font_size = if header {
                style.header_font_size.unwrap_or(style.font_size)
            } else {
                style.font_size
            };
            let face = if header && style.bold_header {
                Face::Bold
            } else {
                Face::Regular
            };
            let bottom_padding = if header {
                style.header_bottom_padding.unwrap_or(padding)
            } else {
                padding
            };
            let leading = font_size * TABLE_LEADING;

            let wrapped: Vec<Vec<LineLayout>> = cells
                .iter()
                .zip(&table.col_widths)
                .map(|(text, width)| {
                    let runs = [TextRun::new(text.as_str(), face)];
                    break_lines(&runs, (width - 2.0 * padding).max(0.0), font_size, self.measure)
                })
                .collect();
            let tallest = wrapped.iter().map(Vec::len).max().unwrap_or(0) as f32 * leading;
            let row_height = padding + tallest + bottom_padding;

            if row_height > cursor.area.height + EPSILON {
                return Err(LayoutError::ElementTooLarge(row_height, cursor.area.height));
            }
            if !cursor.fits(row_height) && !cursor.at_top {
                cursor.new_page();
            }

            let row_top = cursor.top();
            let mut cell_x = left;
            for (col, (lines, width)) in wrapped.iter().zip(&table.col_widths).enumerate() {
                let (fill, color, align) = cell_appearance(table, row, col);
                if let Some(rect) =
                    create_background(Rect::new(cell_x, row_top, *width, row_height), fill, style.grid)
                {
                    cursor.push(rect);
                }

                let content_height = lines.len() as f32 * leading;
                let v_offset = match style.valign {
                    VerticalAlign::Top => 0.0,
                    VerticalAlign::Middle => {
                        ((row_height - padding - bottom_padding - content_height) / 2.0).max(0.0)
                    }
                };
                let inner_width = (width - 2.0 * padding).max(0.0);
                for (i, line) in lines.iter().enumerate() {
                    let line_top = row_top + padding + v_offset + i as f32 * leading;
                    let offset = match align {
                        TextAlign::Left => 0.0,
                        TextAlign::Center => ((inner_width - line.width) / 2.0).max(0.0),
                    };
                    for item in &line.items {
                        cursor.push(PositionedElement {
                            x: cell_x + padding + offset + item.x,
                            y: line_top,
                            width: item.width,
                            height: leading,
                            element: LayoutElement::Text(TextElement {
                                content: item.text.clone(),
                                face: item.face,
                                font_size,
                                color,
                                baseline: line_top + baseline_offset(leading, font_size),
                            }),
                        });
                    }
                }
                cell_x += width;
            }
            cursor.y += row_height;
            cursor.at_top = false;
        }
        Ok(())
    }
}

/// Fill, text color and alignment of one cell. Header styling wins over
/// first-column styling, which wins over the body.
fn cell_appearance(table: &Table, row: usize, col: usize) -> (Option<Color>, Color, TextAlign) {
    let style = &table.style;
    let header = row == 0;
    let first_column = col == 0;

    let fill = match (header, first_column) {
        (true, _) if style.header_background.is_some() => style.header_background,
        (_, true) if style.first_column_background.is_some() => style.first_column_background,
        _ => style.body_background,
    };
    let color = match (header, first_column) {
        (true, _) if style.header_text_color.is_some() => style.header_text_color,
        (_, true) => style.first_column_text_color,
        _ => None,
    }
    .unwrap_or(style.text_color);
    let align = if first_column {
        style.first_column_align.unwrap_or(style.align)
    } else {
        style.align
    };
    (fill, color, align)
}

struct Fragment {
    insert_at: usize,
    top: f32,
}

/// Vertical position within the current page's content area.
struct PageCursor {
    area: Rect,
    pages: Vec<Page>,
    current: Page,
    /// Offset from the top of the content area.
    y: f32,
    /// Nothing has been placed on the current page yet.
    at_top: bool,
}

impl PageCursor {
    fn new(area: Rect) -> Self {
        Self {
            area,
            pages: Vec::new(),
            current: Page::new(1),
            y: 0.0,
            at_top: true,
        }
    }

    fn top(&self) -> f32 {
        self.area.y + self.y
    }

    fn fits(&self, height: f32) -> bool {
        !check_child_fit(self.y, height, self.area).should_break
    }

    fn new_page(&mut self) {
        let next = Page::new(self.current.number + 1);
        let done = std::mem::replace(&mut self.current, next);
        debug!("Finished page {} with {} elements", done.number, done.elements.len());
        self.pages.push(done);
        self.y = 0.0;
        self.at_top = true;
    }

    fn push(&mut self, element: PositionedElement) {
        self.current.elements.push(element);
    }

    /// Vertical space between blocks. Dropped at the top of a page.
    fn add_space(&mut self, amount: f32) {
        if !self.at_top {
            self.y += amount;
        }
    }

    /// A spacer that does not fit ends the page and is discarded.
    fn add_spacer(&mut self, height: f32) {
        if self.at_top {
            return;
        }
        if self.fits(height) {
            self.y += height;
        } else {
            self.new_page();
        }
    }

    fn close_fragment(&mut self, fragment: Fragment, padding: f32, x: f32, width: f32, fill: Option<Color>) {
        self.y += padding;
        let bounds = Rect::new(x, fragment.top, width, self.top() - fragment.top);
        if let Some(rect) = create_background(bounds, fill, None) {
            self.current.elements.insert(fragment.insert_at, rect);
        }
    }

    fn finish(mut self) -> Vec<Page> {
        // A page break as the very last action leaves an empty page behind.
        if !self.current.elements.is_empty() || self.pages.is_empty() {
            self.pages.push(self.current);
        }
        self.pages
    }
}

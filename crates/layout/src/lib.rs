use thiserror::Error;

#[derive(Error, Debug)]
pub enum LayoutError {
    #[error("Node has a height of {0:.2} which exceeds the total page content height of {1:.2}.")]
    ElementTooLarge(f32, f32),
    #[error("Table row {row} has {actual} cells but the table has {expected} columns.")]
    TableShape {
        row: usize,
        expected: usize,
        actual: usize,
    },
}

pub mod algorithms;
pub(crate) mod engine;
pub mod flowable;
pub mod page;
pub mod painting;
pub mod style;
pub mod text;

pub use self::engine::LayoutEngine;
pub use self::flowable::{Flowable, Table, TextRun};
pub use self::page::{LayoutElement, Margins, Page, PageLayout, PositionedElement, RectElement, Stroke, TextElement};
pub use self::style::{Face, ParagraphStyle, Stylesheet, TableStyle, TextAlign, VerticalAlign};
pub use self::text::TextMeasure;

pub use festa_types::{Color, Rect, Size};

#[cfg(test)]
mod engine_test;
#[cfg(test)]
mod style_test;
#[cfg(test)]
mod test_utils;

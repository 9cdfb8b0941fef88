//! Paragraph and table styles, and the two built-in stylesheets.

use festa_types::Color;

use crate::page::Stroke;

/// Which font a run of text is set in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Face {
    #[default]
    Regular,
    Bold,
    Monospace,
}

impl Face {
    /// The face to use for emphasized text in a paragraph set in `self`.
    pub fn emphasized(self) -> Face {
        match self {
            Face::Regular | Face::Bold => Face::Bold,
            Face::Monospace => Face::Monospace,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextAlign {
    #[default]
    Left,
    Center,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VerticalAlign {
    #[default]
    Top,
    Middle,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ParagraphStyle {
    pub face: Face,
    pub font_size: f32,
    /// Distance between consecutive baselines.
    pub leading: f32,
    pub space_before: f32,
    pub space_after: f32,
    pub color: Color,
    pub background: Option<Color>,
    /// Extra room around the text inside the background.
    pub border_padding: f32,
    pub left_indent: f32,
    pub align: TextAlign,
}

impl Default for ParagraphStyle {
    fn default() -> Self {
        Self {
            face: Face::Regular,
            font_size: 10.0,
            leading: 12.0,
            space_before: 0.0,
            space_after: 0.0,
            color: Color::BLACK,
            background: None,
            border_padding: 0.0,
            left_indent: 0.0,
            align: TextAlign::Left,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TableStyle {
    pub font_size: f32,
    pub text_color: Color,
    pub align: TextAlign,
    pub valign: VerticalAlign,
    pub cell_padding: f32,
    /// Set the first row in the bold face.
    pub bold_header: bool,
    pub header_background: Option<Color>,
    pub header_text_color: Option<Color>,
    pub header_font_size: Option<f32>,
    pub header_bottom_padding: Option<f32>,
    pub body_background: Option<Color>,
    pub first_column_background: Option<Color>,
    pub first_column_text_color: Option<Color>,
    pub first_column_align: Option<TextAlign>,
    pub grid: Option<Stroke>,
}

impl Default for TableStyle {
    fn default() -> Self {
        Self {
            font_size: 10.0,
            text_color: Color::BLACK,
            align: TextAlign::Left,
            valign: VerticalAlign::Top,
            cell_padding: 6.0,
            bold_header: false,
            header_background: None,
            header_text_color: None,
            header_font_size: None,
            header_bottom_padding: None,
            body_background: None,
            first_column_background: None,
            first_column_text_color: None,
            first_column_align: None,
            grid: None,
        }
    }
}

/// Named paragraph styles used to map document blocks onto flowables.
#[derive(Debug, Clone, PartialEq)]
pub struct Stylesheet {
    pub title: ParagraphStyle,
    pub heading: ParagraphStyle,
    pub normal: ParagraphStyle,
    pub code: ParagraphStyle,
}

impl Stylesheet {
    /// Styles for documents converted from markup.
    pub fn markdown() -> Self {
        Self {
            title: ParagraphStyle {
                font_size: 24.0,
                leading: 28.0,
                space_after: 20.0,
                color: Color::NAVY,
                ..ParagraphStyle::default()
            },
            heading: ParagraphStyle {
                font_size: 16.0,
                leading: 20.0,
                space_before: 12.0,
                space_after: 8.0,
                color: Color::DARK_BLUE,
                ..ParagraphStyle::default()
            },
            normal: ParagraphStyle {
                font_size: 11.0,
                leading: 16.0,
                space_after: 6.0,
                ..ParagraphStyle::default()
            },
            code: ParagraphStyle {
                face: Face::Monospace,
                font_size: 10.0,
                leading: 12.0,
                space_after: 10.0,
                background: Some(Color::WHITE_SMOKE),
                border_padding: 5.0,
                left_indent: 20.0,
                ..ParagraphStyle::default()
            },
        }
    }

    /// Styles for the fixed-outline guide.
    pub fn guide() -> Self {
        Self {
            title: ParagraphStyle {
                font_size: 24.0,
                leading: 30.0,
                space_after: 20.0,
                align: TextAlign::Center,
                color: Color::NAVY,
                ..ParagraphStyle::default()
            },
            heading: ParagraphStyle {
                font_size: 18.0,
                leading: 22.0,
                space_after: 12.0,
                color: Color::DARK_BLUE,
                ..ParagraphStyle::default()
            },
            normal: ParagraphStyle {
                font_size: 12.0,
                leading: 18.0,
                space_after: 6.0,
                ..ParagraphStyle::default()
            },
            code: ParagraphStyle {
                face: Face::Monospace,
                font_size: 10.0,
                leading: 14.0,
                space_after: 10.0,
                background: Some(Color::LIGHT_GREY),
                border_padding: 5.0,
                ..ParagraphStyle::default()
            },
        }
    }
}

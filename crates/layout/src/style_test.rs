#![cfg(test)]

use crate::{Color, Face, PageLayout, Stylesheet, TextAlign};

#[test]
fn test_markdown_stylesheet() {
    let styles = Stylesheet::markdown();
    assert_eq!((styles.title.font_size, styles.title.leading), (24.0, 28.0));
    assert_eq!(styles.title.color, Color::NAVY);
    assert_eq!(styles.heading.space_before, 12.0);
    assert_eq!(styles.heading.color, Color::DARK_BLUE);
    assert_eq!((styles.normal.font_size, styles.normal.leading), (11.0, 16.0));

    let code = &styles.code;
    assert_eq!(code.face, Face::Monospace);
    assert_eq!(code.background, Some(Color::WHITE_SMOKE));
    assert_eq!((code.border_padding, code.left_indent), (5.0, 20.0));
}

#[test]
fn test_guide_stylesheet() {
    let styles = Stylesheet::guide();
    assert_eq!(styles.title.align, TextAlign::Center);
    assert_eq!((styles.heading.font_size, styles.heading.leading), (18.0, 22.0));
    assert_eq!((styles.normal.font_size, styles.normal.leading), (12.0, 18.0));
    assert_eq!(styles.code.background, Some(Color::LIGHT_GREY));
    assert_eq!(styles.code.left_indent, 0.0);
}

#[test]
fn test_emphasis_keeps_monospace() {
    assert_eq!(Face::Regular.emphasized(), Face::Bold);
    assert_eq!(Face::Monospace.emphasized(), Face::Monospace);
}

#[test]
fn test_a4_content_area() {
    let area = PageLayout::a4().content_area();
    assert_eq!((area.x, area.y), (72.0, 72.0));
    assert!((area.width - 451.28).abs() < 1e-3);
    assert!((area.height - 697.89).abs() < 1e-3);
}

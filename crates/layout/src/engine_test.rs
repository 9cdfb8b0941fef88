#![cfg(test)]

use crate::test_utils::{find_first_text_box_with_content, paginate_test_flowables, small_page, text_elements};
use crate::{
    Color, Face, Flowable, LayoutElement, LayoutError, ParagraphStyle, Stroke, Table, TableStyle, TextAlign, TextRun,
    VerticalAlign,
};

fn body() -> ParagraphStyle {
    ParagraphStyle {
        font_size: 10.0,
        leading: 20.0,
        space_after: 0.0,
        ..ParagraphStyle::default()
    }
}

fn boxed() -> ParagraphStyle {
    ParagraphStyle {
        face: Face::Monospace,
        background: Some(Color::WHITE_SMOKE),
        border_padding: 5.0,
        left_indent: 20.0,
        ..body()
    }
}

#[test]
fn test_empty_document_has_one_page() {
    let pages = paginate_test_flowables(small_page(), &[]).unwrap();
    assert_eq!(pages.len(), 1);
    assert_eq!(pages[0].number, 1);
    assert!(pages[0].elements.is_empty());
}

#[test]
fn test_lines_start_at_top_margin() {
    let pages = paginate_test_flowables(small_page(), &[Flowable::paragraph("hello", &body())]).unwrap();
    let texts = text_elements(&pages[0]);
    assert_eq!(texts.len(), 1);
    let (el, text) = texts[0];
    assert_eq!((el.x, el.y), (10.0, 10.0));
    // baseline = top + (leading + size) / 2 - 0.2 * size
    assert!((text.baseline - 23.0).abs() < 1e-4);
}

#[test]
fn test_space_before_dropped_at_page_top() {
    let heading = ParagraphStyle {
        space_before: 12.0,
        ..body()
    };
    let flowables = [
        Flowable::paragraph("first", &heading),
        Flowable::paragraph("second", &heading),
    ];
    let pages = paginate_test_flowables(small_page(), &flowables).unwrap();
    let (_, first) = find_first_text_box_with_content(&pages, "first").unwrap();
    let (_, second) = find_first_text_box_with_content(&pages, "second").unwrap();
    assert_eq!(first.y, 10.0);
    assert_eq!(second.y, 10.0 + 20.0 + 12.0);
}

#[test]
fn test_paragraph_splits_between_lines_across_pages() {
    // 280pt of content height holds 14 lines of 20pt.
    let text = (0..20).map(|i| format!("w{i:02}")).collect::<Vec<_>>().join("\n");
    let pages = paginate_test_flowables(small_page(), &[Flowable::paragraph(text, &body())]).unwrap();
    assert_eq!(pages.len(), 2);
    assert_eq!(text_elements(&pages[0]).len(), 14);
    assert_eq!(text_elements(&pages[1]).len(), 6);
    let (page, el) = find_first_text_box_with_content(&pages, "w14").unwrap();
    assert_eq!(page, 1);
    assert_eq!(el.y, 10.0);
    assert_eq!(pages[1].number, 2);
}

#[test]
fn test_elements_stay_inside_content_area() {
    let text = "lorem ipsum dolor sit amet ".repeat(60);
    let pages = paginate_test_flowables(small_page(), &[Flowable::paragraph(text, &body())]).unwrap();
    assert!(pages.len() > 1);
    for page in &pages {
        for el in &page.elements {
            assert!(el.y >= 10.0 - 1e-3);
            assert!(el.y + el.height <= 290.0 + 1e-3, "element overflows: {el:?}");
            assert!(el.x + el.width <= 190.0 + 1e-3);
        }
    }
}

#[test]
fn test_centered_text() {
    let style = ParagraphStyle {
        align: TextAlign::Center,
        ..body()
    };
    let pages = paginate_test_flowables(small_page(), &[Flowable::paragraph("abcd", &style)]).unwrap();
    let (el, _) = text_elements(&pages[0])[0];
    // 180pt wide box, 20pt of text.
    assert!((el.x - (10.0 + 80.0)).abs() < 1e-4);
}

#[test]
fn test_preformatted_background_wraps_lines() {
    let code = Flowable::Preformatted {
        lines: vec!["let x = 1;".into(), "".into(), "x + 1".into()],
        style: boxed(),
    };
    let pages = paginate_test_flowables(small_page(), &[code]).unwrap();
    let page = &pages[0];
    let LayoutElement::Rectangle(rect) = &page.elements[0].element else {
        panic!("background should paint first");
    };
    assert_eq!(rect.fill, Some(Color::WHITE_SMOKE));
    let bg = &page.elements[0];
    assert_eq!((bg.x, bg.y), (30.0, 10.0));
    assert_eq!(bg.height, 5.0 + 3.0 * 20.0 + 5.0);

    let texts = text_elements(page);
    assert_eq!(texts.len(), 2);
    assert_eq!(texts[0].0.x, 35.0);
    assert_eq!(texts[0].0.y, 15.0);
    assert_eq!(texts[1].0.y, 15.0 + 40.0);
}

#[test]
fn test_preformatted_lines_are_not_wrapped() {
    let long = "x".repeat(200);
    let code = Flowable::Preformatted {
        lines: vec![long.clone()],
        style: boxed(),
    };
    let pages = paginate_test_flowables(small_page(), &[code]).unwrap();
    assert_eq!(pages[0].texts().collect::<Vec<_>>(), vec![long.as_str()]);
}

#[test]
fn test_background_repeats_per_page_fragment() {
    let code = Flowable::Preformatted {
        lines: (0..20).map(|i| format!("line {i}")).collect(),
        style: boxed(),
    };
    let pages = paginate_test_flowables(small_page(), &[code]).unwrap();
    assert_eq!(pages.len(), 2);
    for page in &pages {
        assert!(matches!(page.elements[0].element, LayoutElement::Rectangle(_)));
        let rects = page
            .elements
            .iter()
            .filter(|el| matches!(el.element, LayoutElement::Rectangle(_)))
            .count();
        assert_eq!(rects, 1);
    }
}

#[test]
fn test_spacer_skipped_at_page_top() {
    let flowables = [Flowable::Spacer(50.0), Flowable::paragraph("after", &body())];
    let pages = paginate_test_flowables(small_page(), &flowables).unwrap();
    let (_, el) = find_first_text_box_with_content(&pages, "after").unwrap();
    assert_eq!(el.y, 10.0);
}

#[test]
fn test_spacer_moves_cursor() {
    let flowables = [
        Flowable::paragraph("before", &body()),
        Flowable::Spacer(10.0),
        Flowable::paragraph("after", &body()),
    ];
    let pages = paginate_test_flowables(small_page(), &flowables).unwrap();
    let (_, el) = find_first_text_box_with_content(&pages, "after").unwrap();
    assert_eq!(el.y, 10.0 + 20.0 + 10.0);
}

#[test]
fn test_no_trailing_empty_page() {
    let text = (0..14).map(|i| format!("l{i}")).collect::<Vec<_>>().join("\n");
    let flowables = [Flowable::paragraph(text, &body()), Flowable::Spacer(30.0)];
    let pages = paginate_test_flowables(small_page(), &flowables).unwrap();
    assert_eq!(pages.len(), 1);
}

#[test]
fn test_line_taller_than_page_is_an_error() {
    let huge = ParagraphStyle {
        leading: 400.0,
        ..body()
    };
    let err = paginate_test_flowables(small_page(), &[Flowable::paragraph("x", &huge)]).unwrap_err();
    assert!(matches!(err, LayoutError::ElementTooLarge(h, _) if h == 400.0));
}

fn table(rows: Vec<Vec<&str>>, col_widths: Vec<f32>, style: TableStyle) -> Flowable {
    Flowable::Table(Table {
        rows: rows
            .into_iter()
            .map(|row| row.into_iter().map(String::from).collect())
            .collect(),
        col_widths,
        style,
    })
}

#[test]
fn test_table_shape_is_checked() {
    let err = paginate_test_flowables(
        small_page(),
        &[table(vec![vec!["a", "b"], vec!["c"]], vec![50.0, 50.0], TableStyle::default())],
    )
    .unwrap_err();
    assert!(matches!(
        err,
        LayoutError::TableShape {
            row: 1,
            expected: 2,
            actual: 1
        }
    ));
}

#[test]
fn test_table_cells_are_styled() {
    let style = TableStyle {
        font_size: 10.0,
        cell_padding: 4.0,
        bold_header: true,
        header_background: Some(Color::NAVY),
        header_text_color: Some(Color::WHITE),
        first_column_background: Some(Color::LIGHT_GREY),
        body_background: Some(Color::WHITE),
        valign: VerticalAlign::Middle,
        grid: Some(Stroke {
            width: 1.0,
            color: Color::BLACK,
        }),
        ..TableStyle::default()
    };
    let flowables = [table(
        vec![vec!["Key", "Value"], vec!["k", "two\nlines"]],
        vec![60.0, 100.0],
        style,
    )];
    let pages = paginate_test_flowables(small_page(), &flowables).unwrap();
    let page = &pages[0];

    let fills: Vec<Option<Color>> = page
        .elements
        .iter()
        .filter_map(|el| match &el.element {
            LayoutElement::Rectangle(rect) => {
                assert!(rect.stroke.is_some());
                Some(rect.fill)
            }
            LayoutElement::Text(_) => None,
        })
        .collect();
    assert_eq!(
        fills,
        vec![Some(Color::NAVY), Some(Color::NAVY), Some(Color::LIGHT_GREY), Some(Color::WHITE)]
    );

    // Centered horizontally: (180 - 160) / 2 = 10pt inset.
    let first_rect = &page.elements[0];
    assert_eq!(first_rect.x, 20.0);

    let texts = text_elements(page);
    let (_, key) = texts[0];
    assert_eq!(key.face, Face::Bold);
    assert_eq!(key.color, Color::WHITE);

    // Second row holds two 12pt lines; the one-line cell sits in the middle.
    let (k_box, _) = texts.iter().find(|(_, t)| t.content == "k").copied().unwrap();
    let (two_box, _) = texts.iter().find(|(_, t)| t.content == "two").copied().unwrap();
    assert!((k_box.y - (two_box.y + 6.0)).abs() < 1e-3);
}

#[test]
fn test_table_rows_never_split() {
    let rows: Vec<Vec<&str>> = (0..30).map(|_| vec!["cell"]).collect();
    let pages = paginate_test_flowables(small_page(), &[table(rows, vec![100.0], TableStyle::default())]).unwrap();
    assert!(pages.len() > 1);
    for page in &pages {
        for el in &page.elements {
            assert!(el.y + el.height <= 290.0 + 1e-3);
        }
    }
}

#[test]
fn test_bold_runs_keep_their_face() {
    let flowables = [Flowable::Paragraph {
        runs: vec![
            TextRun::new("plain ", Face::Regular),
            TextRun::new("strong", Face::Bold),
        ],
        style: body(),
    }];
    let pages = paginate_test_flowables(small_page(), &flowables).unwrap();
    let faces: Vec<Face> = text_elements(&pages[0]).iter().map(|(_, t)| t.face).collect();
    assert_eq!(faces, vec![Face::Regular, Face::Bold]);
}

#[test]
fn test_first_column_styling_covers_unstyled_header() {
    let style = TableStyle {
        first_column_background: Some(Color::LIGHT_GREY),
        ..TableStyle::default()
    };
    let flowables = [table(vec![vec!["a", "b"], vec!["c", "d"]], vec![40.0, 40.0], style)];
    let pages = paginate_test_flowables(small_page(), &flowables).unwrap();
    let filled = pages[0]
        .elements
        .iter()
        .filter(|el| matches!(&el.element, LayoutElement::Rectangle(r) if r.fill == Some(Color::LIGHT_GREY)))
        .count();
    assert_eq!(filled, 2);
}

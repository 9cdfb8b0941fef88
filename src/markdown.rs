//! Markup file to PDF conversion.

use crate::FestaError;
use crate::document::{korean_fonts, render_pdf, write_output};
use festa_layout::{Face, Flowable, Stylesheet, TextRun};
use festa_markup::{Block, Inline};
use festa_render_pdf::FontSet;
use std::fs;
use std::path::Path;

pub const INPUT_FILE: &str = "GIT_CONNECT_GUIDE.md";
pub const OUTPUT_FILE: &str = "GIT_CONNECT_GUIDE.pdf";

/// Gap inserted after every title.
const TITLE_GAP: f32 = 10.0;

/// Maps parsed blocks onto flowables styled with `styles`.
pub fn blocks_to_flowables(blocks: &[Block], styles: &Stylesheet) -> Vec<Flowable> {
    let mut flowables = Vec::with_capacity(blocks.len() + 1);
    for block in blocks {
        match block {
            Block::Title(text) => {
                flowables.push(Flowable::paragraph(text.as_str(), &styles.title));
                flowables.push(Flowable::Spacer(TITLE_GAP));
            }
            Block::Heading(text) => flowables.push(Flowable::paragraph(text.as_str(), &styles.heading)),
            Block::BoldParagraph(text) => flowables.push(Flowable::Paragraph {
                runs: vec![TextRun::new(text.as_str(), styles.normal.face.emphasized())],
                style: styles.normal.clone(),
            }),
            Block::Paragraph(spans) => flowables.push(Flowable::Paragraph {
                runs: spans.iter().map(|span| inline_run(span, styles.normal.face)).collect(),
                style: styles.normal.clone(),
            }),
            Block::CodeBlock(lines) => flowables.push(Flowable::Preformatted {
                lines: lines.clone(),
                style: styles.code.clone(),
            }),
        }
    }
    flowables
}

fn inline_run(span: &Inline, face: Face) -> TextRun {
    match span {
        Inline::Plain(text) => TextRun::new(text.as_str(), face),
        Inline::Bold(text) => TextRun::new(text.as_str(), face.emphasized()),
    }
}

/// Parses `source` and renders it to PDF bytes.
pub fn markdown_to_pdf(source: &str, fonts: FontSet) -> Result<Vec<u8>, FestaError> {
    let blocks = festa_markup::parse(source);
    log::debug!("Parsed {} blocks", blocks.len());
    let flowables = blocks_to_flowables(&blocks, &Stylesheet::markdown());
    render_pdf(&flowables, fonts, "Markdown Document")
}

/// Reads `input` (UTF-8) and writes the PDF to `output`, overwriting it.
pub fn convert_file(input: &Path, output: &Path) -> Result<(), FestaError> {
    let source = fs::read_to_string(input).map_err(|e| FestaError::file(input, e))?;
    let bytes = markdown_to_pdf(&source, korean_fonts())?;
    write_output(output, &bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_is_followed_by_a_spacer() {
        let styles = Stylesheet::markdown();
        let flowables = blocks_to_flowables(&[Block::Title("T".into())], &styles);
        assert_eq!(flowables.len(), 2);
        assert_eq!(flowables[1], Flowable::Spacer(10.0));
    }

    #[test]
    fn inline_bold_becomes_bold_runs() {
        let styles = Stylesheet::markdown();
        let block = Block::Paragraph(vec![
            Inline::Plain("text ".into()),
            Inline::Bold("bold".into()),
            Inline::Plain(" here".into()),
        ]);
        let flowables = blocks_to_flowables(&[block], &styles);
        let Flowable::Paragraph { runs, style } = &flowables[0] else {
            panic!("expected a paragraph");
        };
        assert_eq!(style, &styles.normal);
        let faces: Vec<Face> = runs.iter().map(|r| r.face).collect();
        assert_eq!(faces, vec![Face::Regular, Face::Bold, Face::Regular]);
    }

    #[test]
    fn code_blocks_keep_their_lines() {
        let styles = Stylesheet::markdown();
        let lines = vec!["a".to_string(), String::new(), "  b".to_string()];
        let flowables = blocks_to_flowables(&[Block::CodeBlock(lines.clone())], &styles);
        assert_eq!(
            flowables,
            vec![Flowable::Preformatted {
                lines,
                style: styles.code.clone()
            }]
        );
    }
}

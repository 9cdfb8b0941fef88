//! The fixed Antigravity skills guide.

use crate::FestaError;
use crate::document::{korean_fonts, render_pdf, write_output};
use festa_layout::{Color, Flowable, Stroke, Stylesheet, Table, TableStyle, TextAlign, VerticalAlign};
use festa_render_pdf::FontSet;
use std::path::Path;

pub const OUTPUT_FILE: &str = "Antigravity_Skills_Guide_Direct.pdf";

pub const FOOTER: &str = "Generated by Antigravity Agent";

const SKILLS: [&str; 4] = [
    "PPTX: 파워포인트 슬라이드 생성 및 수정",
    "DOCX: Word 문서 생성 및 서식 적용",
    "XLSX: Excel 데이터 시트 관리 및 분석",
    "PDF: PDF 문서 생성 및 텍스트 추출",
];

const DOCX_FEATURES: [&str; 3] = [
    "제목, 본문, 글머리 기호 등 스타일 지정",
    "표(Table) 생성 및 병합",
    "이미지 삽입 및 페이지 번호 매기기",
];

const PPTX_SCRIPT: &str = r#"let pres = new PptxGenJS();
let slide = pres.addSlide();
slide.addText("Hello World", { x:1, y:1, fontSize:24 });
pres.writeFile({ fileName: "Output.pptx" });"#;

fn rows(cells: &[&[&str]]) -> Vec<Vec<String>> {
    cells
        .iter()
        .map(|row| row.iter().map(|cell| cell.to_string()).collect())
        .collect()
}

fn components_table() -> Table {
    Table {
        rows: rows(&[
            &["지침 (Instructions)", "스크립트 (Scripts)", "리소스 (Resources)"],
            &["SKILL.md 파일에 정의된\n행동 규칙", "Python/JS로 작성된\n실행 코드", "템플릿 및 예제 파일"],
        ]),
        col_widths: vec![150.0, 150.0, 150.0],
        style: TableStyle {
            align: TextAlign::Center,
            cell_padding: 4.0,
            header_background: Some(Color::ALICE_BLUE),
            header_text_color: Some(Color::NAVY),
            header_font_size: Some(12.0),
            header_bottom_padding: Some(12.0),
            body_background: Some(Color::WHITE_SMOKE),
            grid: Some(Stroke {
                width: 1.0,
                color: Color::BLACK,
            }),
            ..TableStyle::default()
        },
    }
}

fn tips_table() -> Table {
    Table {
        rows: rows(&[
            &["명확한 지시", "스킬 사용 시 구체적인 파일명과 원하는 출력 형태를 명시하세요."],
            &["검증 단계", "생성된 파일은 항상 열어서 시각적 오류가 없는지 확인해야 합니다."],
            &["백업 필수", "덮어쓰기 옵션 사용 전 원본 파일을 백업하세요."],
        ]),
        col_widths: vec![120.0, 330.0],
        style: TableStyle {
            cell_padding: 4.0,
            first_column_background: Some(Color::LIGHT_GREY),
            first_column_text_color: Some(Color::BLACK),
            first_column_align: Some(TextAlign::Center),
            valign: VerticalAlign::Middle,
            grid: Some(Stroke {
                width: 0.5,
                color: Color::GREY,
            }),
            ..TableStyle::default()
        },
    }
}

/// The guide's content in reading order.
pub fn guide_flowables() -> Vec<Flowable> {
    let styles = Stylesheet::guide();
    let normal = |text: &str| Flowable::paragraph(text, &styles.normal);
    let heading = |text: &str| Flowable::paragraph(text, &styles.heading);
    let code = |text: &str| Flowable::paragraph(text, &styles.code);
    let bullet = |text: &str| normal(&format!("• {text}"));

    let mut story = vec![
        Flowable::paragraph("Antigravity Skills 사용법 가이드", &styles.title),
        Flowable::Spacer(12.0),
        normal("AI 에이전트의 능력을 확장하는 실전 활용 매뉴얼"),
        Flowable::Spacer(24.0),
        heading("1. Antigravity Skills란?"),
        normal("AI 에이전트가 특정 작업을 전문적으로 수행하도록 돕는 '도구 모음'입니다."),
        Flowable::Spacer(12.0),
        Flowable::Table(components_table()),
        Flowable::Spacer(24.0),
        heading("2. 주요 사용 가능 스킬"),
    ];
    story.extend(SKILLS.into_iter().map(bullet));
    story.extend([
        Flowable::Spacer(24.0),
        heading("3. PPTX 스킬 활용법"),
        normal("Python의 markitdown과 Node.js의 PptxGenJS를 활용합니다."),
        Flowable::Spacer(6.0),
        normal("1) 텍스트 추출 명령어:"),
        code("python -m markitdown presentation.pptx"),
        normal("2) 새 프리젠테이션 생성 (JS Script):"),
        code(PPTX_SCRIPT),
        Flowable::Spacer(24.0),
        heading("4. DOCX 스킬 활용법"),
        normal("docx-js 라이브러리를 사용하여 전문적인 Word 문서를 생성합니다."),
        Flowable::Spacer(6.0),
    ]);
    story.extend(DOCX_FEATURES.into_iter().map(bullet));
    story.extend([
        Flowable::Spacer(24.0),
        heading("5. 효과적인 사용을 위한 팁"),
        Flowable::Table(tips_table()),
        Flowable::Spacer(24.0),
        normal(FOOTER),
    ]);
    story
}

pub fn guide_pdf(fonts: FontSet) -> Result<Vec<u8>, FestaError> {
    render_pdf(&guide_flowables(), fonts, "Antigravity Skills Guide")
}

/// Renders the guide with the Korean font chain and writes it to `path`.
pub fn create_guide(path: &Path) -> Result<(), FestaError> {
    let bytes = guide_pdf(korean_fonts())?;
    write_output(path, &bytes)
}

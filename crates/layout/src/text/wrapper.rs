use super::TextMeasure;
use crate::flowable::TextRun;
use crate::style::Face;

#[derive(Debug, Clone, PartialEq)]
pub struct LineLayout {
    pub items: Vec<LineItem>,
    pub width: f32,
}

/// A same-face stretch of a line, positioned relative to the line start.
#[derive(Debug, Clone, PartialEq)]
pub struct LineItem {
    pub text: String,
    pub face: Face,
    pub x: f32,
    pub width: f32,
}

impl LineLayout {
    pub fn empty() -> Self {
        Self {
            items: Vec::new(),
            width: 0.0,
        }
    }

    /// A line set exactly as given.
    pub fn single(text: &str, face: Face, size: f32, measure: &dyn TextMeasure) -> Self {
        if text.is_empty() {
            return Self::empty();
        }
        let width = measure.text_width(text, face, size);
        Self {
            items: vec![LineItem {
                text: text.to_string(),
                face,
                x: 0.0,
                width,
            }],
            width,
        }
    }

    pub fn text(&self) -> String {
        self.items.iter().map(|i| i.text.as_str()).collect()
    }
}

#[derive(Debug)]
enum Token {
    /// An unbreakable word, possibly spanning several faces.
    Word(Vec<(String, Face)>),
    Space(Face),
    Break,
}

fn tokenize(runs: &[TextRun]) -> Vec<Token> {
    let mut tokens: Vec<Token> = Vec::new();
    for run in runs {
        for ch in run.text.chars() {
            if ch == '\n' {
                tokens.push(Token::Break);
            } else if ch.is_whitespace() {
                if !matches!(tokens.last(), Some(Token::Space(_))) {
                    tokens.push(Token::Space(run.face));
                }
            } else if let Some(Token::Word(pieces)) = tokens.last_mut() {
                match pieces.last_mut() {
                    Some((text, face)) if *face == run.face => text.push(ch),
                    _ => pieces.push((ch.to_string(), run.face)),
                }
            } else {
                tokens.push(Token::Word(vec![(ch.to_string(), run.face)]));
            }
        }
    }
    tokens
}

struct LineBuilder<'a> {
    measure: &'a dyn TextMeasure,
    size: f32,
    pieces: Vec<(String, Face)>,
    width: f32,
}

impl<'a> LineBuilder<'a> {
    fn new(measure: &'a dyn TextMeasure, size: f32) -> Self {
        Self {
            measure,
            size,
            pieces: Vec::new(),
            width: 0.0,
        }
    }

    fn is_empty(&self) -> bool {
        self.pieces.is_empty()
    }

    fn width_of(&self, text: &str, face: Face) -> f32 {
        self.measure.text_width(text, face, self.size)
    }

    fn push(&mut self, text: &str, face: Face) {
        self.width += self.width_of(text, face);
        match self.pieces.last_mut() {
            Some((last, last_face)) if *last_face == face => last.push_str(text),
            _ => self.pieces.push((text.to_string(), face)),
        }
    }

    fn take(&mut self) -> LineLayout {
        let mut x = 0.0;
        let mut items = Vec::with_capacity(self.pieces.len());
        for (text, face) in self.pieces.drain(..) {
            let width = self.measure.text_width(&text, face, self.size);
            items.push(LineItem { text, face, x, width });
            x += width;
        }
        self.width = 0.0;
        LineLayout { items, width: x }
    }
}

/// Greedily fills lines no wider than `max_width`.
///
/// Runs of whitespace collapse to a single space and spaces never start a
/// line. `\n` forces a break. A word wider than a whole line is split
/// between characters.
pub fn break_lines(
    runs: &[TextRun],
    max_width: f32,
    size: f32,
    measure: &dyn TextMeasure,
) -> Vec<LineLayout> {
    let mut lines = Vec::new();
    let mut line = LineBuilder::new(measure, size);
    let mut pending_space: Option<Face> = None;

    for token in tokenize(runs) {
        match token {
            Token::Break => {
                lines.push(line.take());
                pending_space = None;
            }
            Token::Space(face) => {
                if !line.is_empty() {
                    pending_space = Some(face);
                }
            }
            Token::Word(pieces) => {
                let word_width: f32 = pieces
                    .iter()
                    .map(|(text, face)| line.width_of(text, *face))
                    .sum();
                let space_width = pending_space.map_or(0.0, |face| line.width_of(" ", face));

                if !line.is_empty() && line.width + space_width + word_width > max_width {
                    lines.push(line.take());
                    pending_space = None;
                }
                if let Some(face) = pending_space.take() {
                    line.push(" ", face);
                }

                if line.is_empty() && word_width > max_width {
                    for (text, face) in &pieces {
                        for ch in text.chars() {
                            let mut buf = [0u8; 4];
                            let ch: &str = ch.encode_utf8(&mut buf);
                            let ch_width = line.width_of(ch, *face);
                            if !line.is_empty() && line.width + ch_width > max_width {
                                lines.push(line.take());
                            }
                            line.push(ch, *face);
                        }
                    }
                } else {
                    for (text, face) in &pieces {
                        line.push(text, *face);
                    }
                }
            }
        }
    }

    if !line.is_empty() {
        lines.push(line.take());
    }
    lines
}

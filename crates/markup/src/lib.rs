//! Parser for the markdown subset used by the guides.
//!
//! Supported: `# ` titles, `## ` headings, whole-line `**bold**` paragraphs,
//! plain paragraphs with inline `**bold**` spans, and fenced code blocks.
//! Each input line is classified on its own by [`classify_line`]; the only
//! state carried between lines is whether a code fence is open.

mod classify;
mod inline;
mod parser;

pub use self::classify::{LineKind, classify_line};
pub use self::inline::{Inline, inline_markup, parse_inline};
pub use self::parser::{BlockAccumulator, parse};

/// A block-level element of a parsed document, in input order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    Title(String),
    Heading(String),
    BoldParagraph(String),
    Paragraph(Vec<Inline>),
    /// Raw lines between a pair of fences, right-trimmed, blank lines kept.
    CodeBlock(Vec<String>),
}

impl Block {
    /// Convenience for building a paragraph from one plain string.
    pub fn plain(text: impl Into<String>) -> Self {
        Block::Paragraph(vec![Inline::Plain(text.into())])
    }
}

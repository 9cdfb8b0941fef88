use crate::{Block, LineKind, classify_line, parse_inline};

/// Collects blocks line by line, buffering code lines until the closing fence.
#[derive(Debug, Default)]
pub struct BlockAccumulator {
    in_code_block: bool,
    code_buffer: Vec<String>,
    blocks: Vec<Block>,
}

impl BlockAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn in_code_block(&self) -> bool {
        self.in_code_block
    }

    pub fn push_line(&mut self, raw: &str) {
        let line = raw.trim_end();
        let kind = classify_line(line);

        if kind == LineKind::Fence {
            if self.in_code_block {
                self.flush_code();
            }
            self.in_code_block = !self.in_code_block;
            return;
        }

        if self.in_code_block {
            self.code_buffer.push(line.to_string());
            return;
        }

        let block = match kind {
            LineKind::Fence | LineKind::Blank => return,
            LineKind::Title(text) => Block::Title(text.to_string()),
            LineKind::Heading(text) => Block::Heading(text.to_string()),
            LineKind::BoldParagraph(text) => Block::BoldParagraph(text.to_string()),
            LineKind::Text(text) => Block::Paragraph(parse_inline(text)),
        };
        self.blocks.push(block);
    }

    fn flush_code(&mut self) {
        let lines = std::mem::take(&mut self.code_buffer);
        self.blocks.push(Block::CodeBlock(lines));
    }

    /// Ends the input. Code left in an unterminated fence becomes a final block.
    pub fn finish(mut self) -> Vec<Block> {
        if !self.code_buffer.is_empty() {
            log::debug!("Closing unterminated code fence with {} lines", self.code_buffer.len());
            self.flush_code();
        }
        self.blocks
    }
}

/// Parses a whole document into blocks in input order.
pub fn parse(input: &str) -> Vec<Block> {
    let mut accumulator = BlockAccumulator::new();
    for line in input.lines() {
        accumulator.push_line(line);
    }
    accumulator.finish()
}

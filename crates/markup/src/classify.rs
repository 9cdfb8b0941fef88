/// Marker that opens and closes a code block.
pub const FENCE: &str = "```";

/// What a single line of input is, ignoring code-block state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind<'a> {
    Fence,
    Blank,
    Title(&'a str),
    Heading(&'a str),
    BoldParagraph(&'a str),
    Text(&'a str),
}

/// Classifies one line. Trailing whitespace is ignored; leading whitespace
/// is kept, so an indented fence or heading marker is plain text.
pub fn classify_line(line: &str) -> LineKind<'_> {
    let line = line.trim_end();
    if line.starts_with(FENCE) {
        LineKind::Fence
    } else if line.is_empty() {
        LineKind::Blank
    } else if let Some(rest) = line.strip_prefix("# ") {
        LineKind::Title(rest)
    } else if let Some(rest) = line.strip_prefix("## ") {
        LineKind::Heading(rest)
    } else if let Some(inner) = whole_line_bold(line) {
        LineKind::BoldParagraph(inner)
    } else {
        LineKind::Text(line)
    }
}

/// The text between a leading and trailing `**` that do not overlap.
fn whole_line_bold(line: &str) -> Option<&str> {
    if line.len() < 4 {
        return None;
    }
    line.strip_prefix("**")?.strip_suffix("**")
}

use nom::bytes::complete::{tag, take_until};
use nom::sequence::delimited;
use nom::{IResult, Parser};
use std::fmt::Write;

const BOLD: &str = "**";

/// A run of paragraph text, either plain or bold.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Inline {
    Plain(String),
    Bold(String),
}

fn plain_run(input: &str) -> IResult<&str, &str> {
    take_until(BOLD).parse(input)
}

fn bold_span(input: &str) -> IResult<&str, &str> {
    delimited(tag(BOLD), take_until(BOLD), tag(BOLD)).parse(input)
}

fn push_plain(spans: &mut Vec<Inline>, text: &str) {
    if text.is_empty() {
        return;
    }
    if let Some(Inline::Plain(last)) = spans.last_mut() {
        last.push_str(text);
    } else {
        spans.push(Inline::Plain(text.to_string()));
    }
}

/// Splits `text` into plain and bold runs.
///
/// Each `**` pairs with the nearest following `**`, so nested markers close
/// early. A final unmatched `**` stays in the text literally, and an empty
/// pair (`****`) produces nothing.
pub fn parse_inline(text: &str) -> Vec<Inline> {
    let mut spans = Vec::new();
    let mut rest = text;
    while !rest.is_empty() {
        let Ok((after_plain, plain)) = plain_run(rest) else {
            push_plain(&mut spans, rest);
            break;
        };
        push_plain(&mut spans, plain);
        match bold_span(after_plain) {
            Ok((remaining, inner)) => {
                if !inner.is_empty() {
                    spans.push(Inline::Bold(inner.to_string()));
                }
                rest = remaining;
            }
            Err(_) => {
                push_plain(&mut spans, after_plain);
                break;
            }
        }
    }
    spans
}

/// Renders runs back to text with bold runs wrapped in `<b>...</b>`.
pub fn inline_markup(spans: &[Inline]) -> String {
    let mut out = String::new();
    for span in spans {
        match span {
            Inline::Plain(text) => out.push_str(text),
            Inline::Bold(text) => {
                let _ = write!(out, "<b>{}</b>", text);
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn markup(text: &str) -> String {
        inline_markup(&parse_inline(text))
    }

    #[test]
    fn resolves_every_bold_span() {
        assert_eq!(markup("text **bold** here"), "text <b>bold</b> here");
        assert_eq!(markup("**a** and **b**"), "<b>a</b> and <b>b</b>");
    }

    #[test]
    fn text_without_markers_is_one_plain_run() {
        assert_eq!(parse_inline("just words"), vec![Inline::Plain("just words".into())]);
        assert!(parse_inline("").is_empty());
    }

    #[test]
    fn unmatched_marker_stays_literal() {
        assert_eq!(
            parse_inline("a **b** c **d"),
            vec![
                Inline::Plain("a ".into()),
                Inline::Bold("b".into()),
                Inline::Plain(" c **d".into()),
            ]
        );
    }

    #[test]
    fn nested_markers_pair_with_nearest() {
        assert_eq!(markup("**a **b** c**"), "<b>a </b>b<b> c</b>");
    }

    #[test]
    fn empty_pairs_are_dropped() {
        assert_eq!(parse_inline("x****y"), vec![Inline::Plain("xy".into())]);
    }

    #[test]
    fn triple_stars_match_non_greedily() {
        assert_eq!(markup("***a***"), "<b>*a</b>*");
    }
}

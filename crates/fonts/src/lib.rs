//! Font loading for the festa artifacts.
//!
//! Fonts are resolved through an ordered [`FontChain`] of candidate sources.
//! The first source that yields parseable font data wins; when every source
//! fails the chain reports [`Resolution::Exhausted`] with a [`FontWarning`]
//! and the caller substitutes its own built-in font. Resolution itself never
//! fails.

use std::path::PathBuf;
use thiserror::Error;

mod chain;
mod data;

pub use self::chain::{FontChain, FontSource, FontWarning, Resolution, SourceFailure};
pub use self::data::{FontData, VerticalMetrics};

/// Korean-capable font files tried first, in order.
pub const KOREAN_FONT_CANDIDATES: [&str; 3] = [
    "/System/Library/Fonts/Supplemental/AppleGothic.ttf",
    "/System/Library/Fonts/AppleSDGothicNeo.ttc",
    "/usr/share/fonts/truetype/nanum/NanumGothic.ttf",
];

/// Families looked up through the system font database after the fixed paths.
pub const KOREAN_FONT_FAMILIES: [&str; 3] = ["NanumGothic", "Noto Sans CJK KR", "Noto Sans KR"];

#[derive(Error, Debug)]
pub enum FontError {
    #[error("failed to read font file '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("font data from '{0}' could not be parsed: {1}")]
    Parse(String, ttf_parser::FaceParsingError),
    #[error("no installed font matches families {0:?}")]
    NotInstalled(Vec<String>),
    #[error("system font discovery is not available in this build")]
    SystemFontsDisabled,
}

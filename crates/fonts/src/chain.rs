use crate::{FontData, FontError, KOREAN_FONT_CANDIDATES, KOREAN_FONT_FAMILIES};
use std::fmt;
use std::path::PathBuf;

/// A single place a font can be loaded from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FontSource {
    /// A font file on disk. Collections (`.ttc`) use their first face.
    File(PathBuf),
    /// The first installed face matching any of the family names.
    System(Vec<String>),
}

impl FontSource {
    pub fn file(path: impl Into<PathBuf>) -> Self {
        FontSource::File(path.into())
    }

    fn load(&self) -> Result<FontData, FontError> {
        match self {
            FontSource::File(path) => {
                let bytes = std::fs::read(path).map_err(|source| FontError::Io {
                    path: path.clone(),
                    source,
                })?;
                FontData::from_bytes(bytes, 0, path.display().to_string())
            }
            FontSource::System(families) => load_system(families),
        }
    }
}

impl fmt::Display for FontSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FontSource::File(path) => write!(f, "{}", path.display()),
            FontSource::System(families) => write!(f, "system families {}", families.join(", ")),
        }
    }
}

#[cfg(feature = "system-fonts")]
fn load_system(families: &[String]) -> Result<FontData, FontError> {
    let mut db = fontdb::Database::new();
    db.load_system_fonts();
    log::debug!("fontdb loaded {} system faces", db.len());

    let wanted: Vec<fontdb::Family<'_>> = families.iter().map(|f| fontdb::Family::Name(f.as_str())).collect();
    let query = fontdb::Query {
        families: &wanted,
        ..fontdb::Query::default()
    };
    let id = db
        .query(&query)
        .ok_or_else(|| FontError::NotInstalled(families.to_vec()))?;
    db.with_face_data(id, |data, index| {
        FontData::from_bytes(data.to_vec(), index, families.join(", "))
    })
    .ok_or_else(|| FontError::NotInstalled(families.to_vec()))?
}

#[cfg(not(feature = "system-fonts"))]
fn load_system(_families: &[String]) -> Result<FontData, FontError> {
    Err(FontError::SystemFontsDisabled)
}

/// Why one source in a chain was rejected.
#[derive(Debug)]
pub struct SourceFailure {
    pub source: FontSource,
    pub error: FontError,
}

/// Emitted when every source in a chain failed. Not an error: the caller
/// carries on with its built-in font, which may lack glyphs for the text.
#[derive(Debug)]
pub struct FontWarning {
    pub failures: Vec<SourceFailure>,
}

impl fmt::Display for FontWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "no usable font among {} candidates, using the built-in font; text may not render correctly",
            self.failures.len()
        )?;
        for failure in &self.failures {
            write!(f, "\n  {}: {}", failure.source, failure.error)?;
        }
        Ok(())
    }
}

#[derive(Debug)]
pub enum Resolution {
    Found(FontData),
    Exhausted(FontWarning),
}

impl Resolution {
    /// The loaded font, or `None` when the built-in fallback applies.
    pub fn font(&self) -> Option<&FontData> {
        match self {
            Resolution::Found(font) => Some(font),
            Resolution::Exhausted(_) => None,
        }
    }

    pub fn into_font(self) -> Option<FontData> {
        match self {
            Resolution::Found(font) => Some(font),
            Resolution::Exhausted(warning) => {
                log::warn!("{}", warning);
                None
            }
        }
    }
}

/// An ordered list of font sources; the first one that loads wins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FontChain {
    sources: Vec<FontSource>,
}

impl FontChain {
    pub fn new(sources: Vec<FontSource>) -> Self {
        Self { sources }
    }

    /// The Korean-capable chain: fixed file candidates, then installed families.
    pub fn korean() -> Self {
        let mut sources: Vec<FontSource> = KOREAN_FONT_CANDIDATES
            .iter()
            .map(|path| FontSource::file(*path))
            .collect();
        sources.push(FontSource::System(
            KOREAN_FONT_FAMILIES.iter().map(|f| f.to_string()).collect(),
        ));
        Self { sources }
    }

    pub fn sources(&self) -> &[FontSource] {
        &self.sources
    }

    pub fn resolve(&self) -> Resolution {
        let mut failures = Vec::new();
        for source in &self.sources {
            match source.load() {
                Ok(font) => {
                    log::debug!("Resolved font from {}", source);
                    return Resolution::Found(font);
                }
                Err(error) => {
                    log::debug!("Font source {} rejected: {}", source, error);
                    failures.push(SourceFailure {
                        source: source.clone(),
                        error,
                    });
                }
            }
        }
        Resolution::Exhausted(FontWarning { failures })
    }
}

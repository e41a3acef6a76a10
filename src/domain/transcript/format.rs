//! Transcript file format

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use crate::domain::error::InvalidFormatError;

/// How the bytes of a transcript file are interpreted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TranscriptFormat {
    /// UTF-8 plain text, used verbatim
    #[default]
    Text,
    /// SubRip subtitle document, dialogue is extracted
    Srt,
}

impl TranscriptFormat {
    /// Detect the format from a file extension.
    /// `.srt` (any case) is a subtitle document, everything else is plain text.
    pub fn detect(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("srt") => Self::Srt,
            _ => Self::Text,
        }
    }

    /// Get the string identifier for this format
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Srt => "srt",
        }
    }
}

impl FromStr for TranscriptFormat {
    type Err = InvalidFormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "text" | "txt" => Ok(Self::Text),
            "srt" => Ok(Self::Srt),
            _ => Err(InvalidFormatError { input: s.to_string() }),
        }
    }
}

impl fmt::Display for TranscriptFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

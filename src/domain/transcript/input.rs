//! Transcript input shapes

use crate::domain::error::{DecodingError, TranscriptError};

use super::format::TranscriptFormat;
use super::subtitle::extract_dialogue;
use super::text::Transcript;

/// Raw transcript input as supplied by the caller
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TranscriptInput {
    /// Transcript text entered directly
    Text(String),
    /// Bytes of a plain-text file, decoded as UTF-8
    PlainFile(Vec<u8>),
    /// Bytes of a subtitle document, dialogue is extracted
    Subtitle(Vec<u8>),
}

impl TranscriptInput {
    /// Wrap file bytes according to their format
    pub fn from_file(bytes: Vec<u8>, format: TranscriptFormat) -> Self {
        match format {
            TranscriptFormat::Text => Self::PlainFile(bytes),
            TranscriptFormat::Srt => Self::Subtitle(bytes),
        }
    }

    /// Whether this input goes through subtitle extraction
    pub fn is_subtitle(&self) -> bool {
        matches!(self, Self::Subtitle(_))
    }

    /// Decode and validate the input into a transcript
    pub fn into_transcript(self) -> Result<Transcript, TranscriptError> {
        let text = match self {
            Self::Text(text) => text,
            Self::PlainFile(bytes) => String::from_utf8(bytes)
                .map_err(|e| DecodingError::from(e.utf8_error()))?,
            Self::Subtitle(bytes) => extract_dialogue(&bytes)?,
        };

        Ok(Transcript::new(text)?)
    }
}

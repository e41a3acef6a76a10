//! Transcript value object

use std::fmt;

use crate::domain::error::EmptyTranscriptError;

/// Value object representing the plain-text transcript of a video.
/// Guaranteed to contain at least one non-whitespace character.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transcript {
    text: String,
}

impl Transcript {
    /// Create a transcript, rejecting empty or whitespace-only text.
    ///
    /// The text is stored as given; surrounding whitespace is not trimmed.
    pub fn new(text: impl Into<String>) -> Result<Self, EmptyTranscriptError> {
        let text = text.into();
        if text.trim().is_empty() {
            return Err(EmptyTranscriptError);
        }
        Ok(Self { text })
    }

    /// Get the transcript text
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Consume and return the text
    pub fn into_string(self) -> String {
        self.text
    }

    /// Number of characters in the transcript
    pub fn char_count(&self) -> usize {
        self.text.chars().count()
    }

    /// Number of lines in the transcript
    pub fn line_count(&self) -> usize {
        self.text.lines().count()
    }
}

impl fmt::Display for Transcript {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

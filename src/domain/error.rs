//! Domain error types

use std::str::Utf8Error;

use thiserror::Error;

/// Error when raw input bytes are not valid UTF-8 text
#[derive(Debug, Clone, Error)]
#[error("Input is not valid UTF-8 text: {source}")]
pub struct DecodingError {
    #[from]
    pub source: Utf8Error,
}

/// Error when a transcript is empty or whitespace-only
#[derive(Debug, Clone, Error)]
#[error("Transcript is empty. Please provide a transcript before generating.")]
pub struct EmptyTranscriptError;

/// Error when an invalid model identifier is provided
#[derive(Debug, Clone, Error)]
#[error("Invalid model: \"{input}\". Model id must not be blank")]
pub struct InvalidModelError {
    pub input: String,
}

/// Error when an unknown transcript format is requested
#[derive(Debug, Clone, Error)]
#[error("Invalid format: \"{input}\". Valid formats are: auto, text, srt")]
pub struct InvalidFormatError {
    pub input: String,
}

/// Errors turning caller input into a transcript
#[derive(Debug, Clone, Error)]
pub enum TranscriptError {
    #[error(transparent)]
    Decoding(#[from] DecodingError),

    #[error(transparent)]
    Empty(#[from] EmptyTranscriptError),
}

/// Error when configuration fails
#[derive(Debug, Clone, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(String),

    #[error("Failed to parse config file: {0}")]
    ParseError(String),

    #[error("Failed to write config file: {0}")]
    WriteError(String),

    #[error("Invalid config value for '{key}': {message}")]
    ValidationError { key: String, message: String },

    #[error("Config file already exists at: {0}")]
    AlreadyExists(String),
}

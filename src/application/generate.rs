//! Generate headlines use case

use thiserror::Error;

use crate::domain::error::{DecodingError, EmptyTranscriptError, TranscriptError};
use crate::domain::generation::{ModelId, Prompt};
use crate::domain::transcript::{Transcript, TranscriptInput};

use super::ports::{Clipboard, GenerationError, TextGenerator};

/// Errors from the generate use case
#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("Failed to read transcript: {0}")]
    Decoding(#[from] DecodingError),

    #[error(transparent)]
    EmptyTranscript(#[from] EmptyTranscriptError),

    #[error("Generation failed: {0}")]
    Generation(#[from] GenerationError),
}

impl From<TranscriptError> for GenerateError {
    fn from(err: TranscriptError) -> Self {
        match err {
            TranscriptError::Decoding(e) => Self::Decoding(e),
            TranscriptError::Empty(e) => Self::EmptyTranscript(e),
        }
    }
}

/// Input parameters for the generate use case
#[derive(Debug, Clone)]
pub struct GenerateInput {
    /// Raw transcript input
    pub transcript: TranscriptInput,
    /// Model to generate with
    pub model: ModelId,
    /// Whether to copy result to clipboard
    pub enable_clipboard: bool,
}

/// Output from the generate use case
#[derive(Debug, Clone)]
pub struct GenerateOutput {
    /// The generated headlines and titles, verbatim
    pub text: String,
    /// Whether clipboard copy succeeded (if enabled)
    pub clipboard_copied: bool,
    /// Model the text was generated with
    pub model: ModelId,
}

/// Callbacks for progress and status updates
#[derive(Default)]
#[allow(clippy::type_complexity)]
pub struct GenerateCallbacks {
    /// Called once the transcript is ready, with whether it came from subtitles
    pub on_transcript_ready: Option<Box<dyn Fn(&Transcript, bool) + Send + Sync>>,
    /// Called when the generation request starts
    pub on_generating_start: Option<Box<dyn Fn(&ModelId) + Send + Sync>>,
    /// Called when the generation request ends, successfully or not
    pub on_generating_end: Option<Box<dyn Fn(bool) + Send + Sync>>,
}

/// Turn raw input into a prompt.
///
/// Fails before any prompt exists when the input cannot be decoded or
/// yields an empty transcript.
pub fn prepare_prompt(input: TranscriptInput) -> Result<(Transcript, Prompt), GenerateError> {
    let transcript = input.into_transcript()?;
    log::debug!(
        "Transcript ready: {} chars, {} lines",
        transcript.char_count(),
        transcript.line_count()
    );
    let prompt = Prompt::build(&transcript);
    Ok((transcript, prompt))
}

/// One-shot headline generation use case
pub struct GenerateHeadlinesUseCase<G, C>
where
    G: TextGenerator,
    C: Clipboard,
{
    generator: G,
    clipboard: C,
}

impl<G, C> GenerateHeadlinesUseCase<G, C>
where
    G: TextGenerator,
    C: Clipboard,
{
    /// Create a new use case instance
    pub fn new(generator: G, clipboard: C) -> Self {
        Self {
            generator,
            clipboard,
        }
    }

    /// Execute the generation workflow
    pub async fn execute(
        &self,
        input: GenerateInput,
        callbacks: GenerateCallbacks,
    ) -> Result<GenerateOutput, GenerateError> {
        let from_subtitle = input.transcript.is_subtitle();
        let (transcript, prompt) = prepare_prompt(input.transcript)?;

        if let Some(ref cb) = callbacks.on_transcript_ready {
            cb(&transcript, from_subtitle);
        }

        if let Some(ref cb) = callbacks.on_generating_start {
            cb(&input.model);
        }

        let result = self.generator.generate(&prompt, &input.model).await;

        if let Some(ref cb) = callbacks.on_generating_end {
            cb(result.is_ok());
        }

        let text = result?;

        // Clipboard output is best-effort
        let clipboard_copied = if input.enable_clipboard {
            match self.clipboard.copy(&text).await {
                Ok(()) => true,
                Err(e) => {
                    log::warn!("Clipboard copy failed: {}", e);
                    false
                }
            }
        } else {
            false
        };

        Ok(GenerateOutput {
            text,
            clipboard_copied,
            model: input.model,
        })
    }
}

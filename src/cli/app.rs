//! Main app runner for one-shot generation

use std::env;
use std::io::IsTerminal;
use std::path::Path;
use std::process::ExitCode;

use tokio::io::AsyncReadExt;

use crate::application::ports::ConfigStore;
use crate::application::{
    prepare_prompt, GenerateCallbacks, GenerateHeadlinesUseCase, GenerateInput,
};
use crate::domain::config::AppConfig;
use crate::domain::error::InvalidModelError;
use crate::domain::generation::ModelId;
use crate::domain::transcript::{Transcript, TranscriptFormat, TranscriptInput};
use crate::infrastructure::{create_clipboard, OpenAiGenerator};

use super::args::GenerateOptions;
use super::presenter::Presenter;

/// Exit codes
pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_ERROR: u8 = 1;
pub const EXIT_USAGE_ERROR: u8 = 2;

/// Environment variable holding the API key
pub const API_KEY_ENV: &str = "OPENAI_API_KEY";

/// Environment variable overriding the API base URL
pub const BASE_URL_ENV: &str = "OPENAI_BASE_URL";

/// Run the one-shot generation
pub async fn run_generate(options: GenerateOptions, config: AppConfig) -> ExitCode {
    let presenter = Presenter::new();

    let model = match resolve_model(&config) {
        Ok(model) => model,
        Err(e) => {
            presenter.error(&e.to_string());
            return ExitCode::from(EXIT_USAGE_ERROR);
        }
    };

    let transcript = match read_transcript_input(&options).await {
        Ok(input) => input,
        Err(e) => {
            presenter.error(&e);
            return ExitCode::from(EXIT_USAGE_ERROR);
        }
    };

    if options.dry_run {
        return match prepare_prompt(transcript) {
            Ok((_, prompt)) => {
                presenter.output(prompt.content());
                ExitCode::from(EXIT_SUCCESS)
            }
            Err(e) => {
                presenter.error(&e.to_string());
                ExitCode::from(EXIT_ERROR)
            }
        };
    }

    let api_key = match require_api_key(&config) {
        Ok(key) => key,
        Err(e) => {
            presenter.error(&e);
            return ExitCode::from(EXIT_ERROR);
        }
    };

    // Create adapters
    let generator = OpenAiGenerator::with_base_url(api_key, config.base_url_or_default());
    let use_case = GenerateHeadlinesUseCase::new(generator, create_clipboard());

    let input = GenerateInput {
        transcript,
        model,
        enable_clipboard: config.clipboard_or_default(),
    };

    let ready = presenter.clone();
    let start = presenter.clone();
    let end = presenter.clone();
    let callbacks = GenerateCallbacks {
        on_transcript_ready: Some(Box::new(move |transcript: &Transcript, from_subtitle: bool| {
            if from_subtitle {
                ready.success(&format!(
                    "Subtitle dialogue extracted ({} lines)",
                    transcript.line_count()
                ));
            }
        })),
        on_generating_start: Some(Box::new(move |model: &ModelId| {
            start.start_spinner(&format!("Crafting hooks with {}...", model));
        })),
        on_generating_end: Some(Box::new(move |ok: bool| {
            if ok {
                end.spinner_success("Here are your generated results:");
            } else {
                end.spinner_fail("Generation failed");
            }
        })),
    };

    match use_case.execute(input, callbacks).await {
        Ok(output) => {
            presenter.output(&output.text);

            if output.clipboard_copied {
                presenter.info("Copied to clipboard");
            }

            ExitCode::from(EXIT_SUCCESS)
        }
        Err(e) => {
            presenter.stop_spinner();
            presenter.error(&e.to_string());
            ExitCode::from(EXIT_ERROR)
        }
    }
}

/// Pick the model: configured value, or the default when unset
pub fn resolve_model(config: &AppConfig) -> Result<ModelId, InvalidModelError> {
    match config.model.as_deref() {
        Some(model) => model.parse(),
        None => Ok(ModelId::default()),
    }
}

/// Get the API key from the merged config
pub fn require_api_key(config: &AppConfig) -> Result<String, String> {
    config
        .api_key
        .clone()
        .filter(|key| !key.trim().is_empty())
        .ok_or_else(|| {
            format!(
                "Missing API key. Set {} environment variable or run 'shorts-titler config set api_key <key>'",
                API_KEY_ENV
            )
        })
}

/// Collect the raw transcript from the text argument, a file, or stdin
pub async fn read_transcript_input(options: &GenerateOptions) -> Result<TranscriptInput, String> {
    if let Some(path) = options.file.as_deref() {
        return read_transcript_file(path, options.format).await;
    }

    match options.text.as_deref() {
        Some("-") => read_stdin().await,
        Some(text) => Ok(TranscriptInput::Text(text.to_string())),
        None if !std::io::stdin().is_terminal() => read_stdin().await,
        // Nothing supplied; the empty transcript is rejected downstream
        None => Ok(TranscriptInput::Text(String::new())),
    }
}

async fn read_transcript_file(
    path: &Path,
    format: Option<TranscriptFormat>,
) -> Result<TranscriptInput, String> {
    let bytes = tokio::fs::read(path)
        .await
        .map_err(|e| format!("Failed to read {}: {}", path.display(), e))?;
    let format = format.unwrap_or_else(|| TranscriptFormat::detect(path));
    log::debug!(
        "Read {} bytes from {} as {}",
        bytes.len(),
        path.display(),
        format
    );
    Ok(TranscriptInput::from_file(bytes, format))
}

async fn read_stdin() -> Result<TranscriptInput, String> {
    let mut bytes = Vec::new();
    tokio::io::stdin()
        .read_to_end(&mut bytes)
        .await
        .map_err(|e| format!("Failed to read stdin: {}", e))?;
    log::debug!("Read {} bytes from stdin", bytes.len());
    Ok(TranscriptInput::PlainFile(bytes))
}

/// Load and merge configuration from file, env, and CLI
pub async fn load_merged_config<S: ConfigStore>(store: &S, cli_config: AppConfig) -> AppConfig {
    let file_config = store.load_or_empty().await;

    let env_config = AppConfig {
        api_key: env::var(API_KEY_ENV).ok().filter(|s| !s.is_empty()),
        base_url: env::var(BASE_URL_ENV).ok().filter(|s| !s.is_empty()),
        ..Default::default()
    };

    // Merge: defaults < file < env < cli
    AppConfig::defaults()
        .merge(file_config)
        .merge(env_config)
        .merge(cli_config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn resolve_model_uses_default_when_unset() {
        let model = resolve_model(&AppConfig::empty()).unwrap();
        assert_eq!(model.as_str(), "gpt-4o-mini");
    }

    #[test]
    fn resolve_model_rejects_blank() {
        let config = AppConfig {
            model: Some(" ".to_string()),
            ..Default::default()
        };
        assert!(resolve_model(&config).is_err());
    }

    #[test]
    fn require_api_key_reports_missing_key() {
        let err = require_api_key(&AppConfig::empty()).unwrap_err();
        assert!(err.contains(API_KEY_ENV));
        assert!(err.contains("config set api_key"));

        let blank = AppConfig {
            api_key: Some("  ".to_string()),
            ..Default::default()
        };
        assert!(require_api_key(&blank).is_err());
    }

    #[test]
    fn require_api_key_returns_key() {
        let config = AppConfig {
            api_key: Some("sk-test".to_string()),
            ..Default::default()
        };
        assert_eq!(require_api_key(&config).unwrap(), "sk-test");
    }

    #[tokio::test]
    async fn text_argument_is_used() {
        let options = GenerateOptions {
            text: Some("Hello".to_string()),
            ..Default::default()
        };
        assert_eq!(
            read_transcript_input(&options).await.unwrap(),
            TranscriptInput::Text("Hello".to_string())
        );
    }

    #[tokio::test]
    async fn srt_file_is_detected_by_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("clip.srt");
        std::fs::write(&path, "1\n00:00:01,000 --> 00:00:02,000\nHi\n").unwrap();

        let options = GenerateOptions {
            file: Some(path),
            ..Default::default()
        };
        let input = read_transcript_input(&options).await.unwrap();
        assert!(input.is_subtitle());
    }

    #[tokio::test]
    async fn forced_format_overrides_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("clip.srt");
        std::fs::write(&path, "raw").unwrap();

        let options = GenerateOptions {
            file: Some(path),
            format: Some(TranscriptFormat::Text),
            ..Default::default()
        };
        let input = read_transcript_input(&options).await.unwrap();
        assert_eq!(input, TranscriptInput::PlainFile(b"raw".to_vec()));
    }

    #[tokio::test]
    async fn missing_file_is_an_error() {
        let options = GenerateOptions {
            file: Some(PathBuf::from("/nonexistent/clip.txt")),
            ..Default::default()
        };
        let err = read_transcript_input(&options).await.unwrap_err();
        assert!(err.contains("Failed to read"));
    }
}

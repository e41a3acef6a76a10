//! CLI argument definitions using Clap

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::domain::transcript::TranscriptFormat;

/// ShortsTitler - AI-generated headlines and titles for short videos
#[derive(Parser, Debug)]
#[command(name = "shorts-titler")]
#[command(version)]
#[command(about = "Generate viral headlines and titles from a video transcript using OpenAI")]
#[command(long_about = None)]
pub struct Cli {
    /// Transcript text ("-" reads stdin; stdin is also read when piped)
    #[arg(value_name = "TEXT", conflicts_with = "file")]
    pub text: Option<String>,

    /// Transcript file (.txt or .srt)
    #[arg(short = 'f', long, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// How to read the transcript file
    #[arg(long, value_name = "FORMAT", default_value = "auto")]
    pub format: FormatArg,

    /// Model to generate with (e.g., gpt-4o-mini)
    #[arg(short = 'm', long, value_name = "MODEL")]
    pub model: Option<String>,

    /// Copy the generated result to clipboard
    #[arg(short = 'c', long)]
    pub clipboard: bool,

    /// Print the assembled prompt instead of calling the API
    #[arg(long)]
    pub dry_run: bool,

    /// Show debug logs on stderr
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,

    /// Subcommand
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
    /// List the GPT models available to your API key
    Models,
}

/// Config action subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Create config file with defaults
    Init,
    /// Set a config value
    Set {
        /// Config key
        key: String,
        /// Config value
        value: String,
    },
    /// Get a config value
    Get {
        /// Config key
        key: String,
    },
    /// List all config values
    List,
    /// Show config file path
    Path,
}

/// Transcript file format argument for clap ValueEnum
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    /// Detect from the file extension
    Auto,
    /// Plain UTF-8 text
    Text,
    /// SubRip subtitles
    Srt,
}

impl FormatArg {
    /// The forced format, or None to detect from the extension
    pub fn forced(self) -> Option<TranscriptFormat> {
        match self {
            FormatArg::Auto => None,
            FormatArg::Text => Some(TranscriptFormat::Text),
            FormatArg::Srt => Some(TranscriptFormat::Srt),
        }
    }
}

/// Parsed generate options (one-shot mode)
#[derive(Debug, Clone, Default)]
pub struct GenerateOptions {
    pub text: Option<String>,
    pub file: Option<PathBuf>,
    pub format: Option<TranscriptFormat>,
    pub dry_run: bool,
}

/// Valid config keys
pub const VALID_CONFIG_KEYS: &[&str] = &["api_key", "model", "base_url", "clipboard"];

/// Check if a config key is valid
pub fn is_valid_config_key(key: &str) -> bool {
    VALID_CONFIG_KEYS.contains(&key)
}

//! Domain layer - Core business logic
//!
//! Contains value objects, the subtitle extractor, the prompt builder
//! and domain errors. This layer performs no I/O.

pub mod config;
pub mod error;
pub mod generation;
pub mod transcript;

// Re-export common types
pub use config::AppConfig;
pub use error::*;
pub use generation::{ModelCatalog, ModelId, Prompt};
pub use transcript::{extract_dialogue, Transcript, TranscriptFormat, TranscriptInput};

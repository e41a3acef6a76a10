//! Text-generation adapters

mod openai;

pub use openai::OpenAiGenerator;

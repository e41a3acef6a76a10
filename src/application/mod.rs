//! Application layer - Use cases and port interfaces
//!
//! Contains the core business operations and trait definitions
//! for external system interactions.

pub mod generate;
pub mod models;
pub mod ports;

// Re-export use cases
pub use generate::{
    prepare_prompt, GenerateCallbacks, GenerateError, GenerateHeadlinesUseCase, GenerateInput,
    GenerateOutput,
};
pub use models::ListModelsUseCase;

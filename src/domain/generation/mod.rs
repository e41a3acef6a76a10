//! Generation domain module

mod model;
mod prompt;

pub use model::{ModelCatalog, ModelId, DEFAULT_MODEL};
pub use prompt::{Prompt, SYSTEM_MESSAGE};

//! Infrastructure layer - Adapter implementations
//!
//! Contains concrete implementations of the port interfaces,
//! integrating with the OpenAI API, the filesystem and the clipboard.

pub mod clipboard;
pub mod config;
pub mod generation;

// Re-export adapters
pub use clipboard::{create_clipboard, ArboardClipboard};
pub use config::XdgConfigStore;
pub use generation::OpenAiGenerator;

//! Transcript domain module

mod format;
mod input;
mod subtitle;
mod text;

pub use format::TranscriptFormat;
pub use input::TranscriptInput;
pub use subtitle::extract_dialogue;
pub use text::Transcript;

//! Clipboard adapters

mod arboard;

pub use self::arboard::ArboardClipboard;

use crate::application::ports::Clipboard;

/// Create the default clipboard adapter for the current platform
pub fn create_clipboard() -> Box<dyn Clipboard> {
    Box::new(ArboardClipboard::new())
}

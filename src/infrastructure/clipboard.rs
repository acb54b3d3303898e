//! OS clipboard access.

use crate::domain::copy::ClipboardError;

/// Writes plain text to a clipboard
pub trait ClipboardWriter: Send + Sync {
    fn write_text(&self, text: &str) -> Result<(), ClipboardError>;
}

/// System clipboard backed by `arboard`, opened fresh for every write
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClipboard;

impl ClipboardWriter for SystemClipboard {
    fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        let mut clipboard = arboard::Clipboard::new().map_err(into_clipboard_error)?;
        clipboard
            .set_text(text.to_owned())
            .map_err(into_clipboard_error)
    }
}

fn into_clipboard_error(error: arboard::Error) -> ClipboardError {
    match error {
        arboard::Error::ClipboardNotSupported | arboard::Error::ClipboardOccupied => {
            ClipboardError::Unavailable(error.to_string())
        }
        other => ClipboardError::Denied(other.to_string()),
    }
}

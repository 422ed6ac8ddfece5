//! System clipboard backend (arboard).

use arboard::Clipboard;

use super::{ClipboardError, ClipboardResult};

/// Copy text to the OS clipboard. Fails with `SystemUnavailable` in headless
/// environments with no display server.
pub fn copy(text: &str) -> ClipboardResult {
    let mut clipboard = Clipboard::new().map_err(|_| ClipboardError::SystemUnavailable)?;

    clipboard
        .set_text(text)
        .map_err(|_| ClipboardError::WriteError)
}

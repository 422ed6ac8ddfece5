//! Clipboard access for copying generated suggestions.
//!
//! Backends:
//! - `System`: the OS clipboard via arboard
//! - `Osc52`: an OSC 52 escape sequence, for terminals over SSH
//! - `Auto`: system first, OSC 52 if the system clipboard is unavailable

mod osc52;
mod system;

use tweetsmith_core::ClipboardBackend;

pub use osc52::encode_osc52;

/// Result type for clipboard operations
pub type ClipboardResult = Result<(), ClipboardError>;

/// Errors that can occur during clipboard operations
#[derive(Debug, PartialEq, Eq)]
pub enum ClipboardError {
    /// System clipboard is not available
    SystemUnavailable,
    /// Error writing to clipboard
    WriteError,
}

/// Copy text to clipboard using the specified backend
pub fn copy_to_clipboard(text: &str, backend: ClipboardBackend) -> ClipboardResult {
    match backend {
        ClipboardBackend::System => system::copy(text),
        ClipboardBackend::Osc52 => osc52::copy(text),
        ClipboardBackend::Auto => system::copy(text).or_else(|_| osc52::copy(text)),
    }
}

/// Destination for copied text.
pub trait ClipboardWriter {
    fn write_text(&mut self, text: &str) -> ClipboardResult;
}

/// Host clipboard using the configured backend.
#[derive(Debug, Clone, Copy)]
pub struct SystemClipboard {
    backend: ClipboardBackend,
}

impl SystemClipboard {
    pub fn new(backend: ClipboardBackend) -> Self {
        Self { backend }
    }
}

impl ClipboardWriter for SystemClipboard {
    fn write_text(&mut self, text: &str) -> ClipboardResult {
        copy_to_clipboard(text, self.backend)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_copy_to_clipboard_osc52_backend() {
        // OSC 52 should always succeed (writes to stdout)
        assert!(copy_to_clipboard("test", ClipboardBackend::Osc52).is_ok());
    }

    #[test]
    fn test_copy_to_clipboard_auto_backend() {
        // Auto mode falls back to OSC 52
        assert!(copy_to_clipboard("test", ClipboardBackend::Auto).is_ok());
    }

    #[test]
    fn test_system_clipboard_writer_osc52() {
        let mut writer = SystemClipboard::new(ClipboardBackend::Osc52);
        assert!(writer.write_text("Great tweet! 🎉").is_ok());
    }
}

use base64::{engine::general_purpose::STANDARD, Engine as _};
use std::io::{self, Write};

use super::{ClipboardError, ClipboardResult};

pub fn copy(text: &str) -> ClipboardResult {
    let sequence = encode_osc52(text);

    let mut stdout = io::stdout();
    stdout
        .write_all(sequence.as_bytes())
        .map_err(|_| ClipboardError::WriteError)?;
    stdout.flush().map_err(|_| ClipboardError::WriteError)
}

/// `ESC ] 52 ; c ; <base64> BEL`
pub fn encode_osc52(text: &str) -> String {
    let encoded = STANDARD.encode(text);
    format!("\x1b]52;c;{}\x07", encoded)
}

//! Copy text to the system clipboard through the terminal (OSC 52).

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

/// Escape sequence asking the terminal to put `text` on the clipboard.
pub fn osc52_sequence(text: &str) -> String {
    format!("\x1b]52;c;{}\x07", STANDARD.encode(text))
}

//! UI helper functions for terminal output formatting.

use std::io::Write;

const BLUE: &str = "\x1b[34m";
const RESET: &str = "\x1b[0m";

pub fn write_error(err: &mut dyn Write, msg: &str) -> std::io::Result<()> {
    writeln!(err, "Error: {}", msg)
}

/// Wrap `text` in blue ANSI escapes when colour is enabled.
pub fn highlight(text: &str, color: bool) -> String {
    if color {
        format!("{}{}{}", BLUE, text, RESET)
    } else {
        text.to_string()
    }
}

//! Terminal clipboard via OSC 52
//!
//! The escape sequence asks the terminal emulator to set the system
//! clipboard, which also works over SSH. Inside tmux the sequence is wrapped
//! in a DCS passthrough so it reaches the outer terminal.

use std::io::Write;

use crossterm::clipboard::CopyToClipboard;
use crossterm::{execute, Command};

use pyarch_core::prelude::*;

/// Wrap a sequence for tmux passthrough (inner ESC bytes doubled)
pub fn tmux_passthrough(sequence: &str) -> String {
    format!("\x1bPtmux;{}\x1b\\", sequence.replace('\x1b', "\x1b\x1b"))
}

fn inside_tmux() -> bool {
    std::env::var_os("TMUX").is_some_and(|v| !v.is_empty())
}

/// Write `text` to the clipboard through the controlling terminal
pub fn copy_to_clipboard(text: &str) -> Result<()> {
    let command = CopyToClipboard::to_clipboard_from(text);
    let mut stdout = std::io::stdout().lock();

    if inside_tmux() {
        let mut sequence = String::new();
        command
            .write_ansi(&mut sequence)
            .map_err(|_| Error::terminal("Failed to encode clipboard sequence"))?;
        stdout.write_all(tmux_passthrough(&sequence).as_bytes())?;
        stdout.flush()?;
    } else {
        execute!(stdout, command)?;
    }

    debug!("Copied {} bytes to clipboard", text.len());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sequence(text: &str) -> String {
        let mut out = String::new();
        CopyToClipboard::to_clipboard_from(text)
            .write_ansi(&mut out)
            .unwrap();
        out
    }

    #[test]
    fn test_clipboard_sequence_is_base64_osc52() {
        assert!(sequence("hello").starts_with("\x1b]52;c;aGVsbG8="));
    }

    #[test]
    fn test_clipboard_sequence_encodes_utf8_bytes() {
        // "é" is two bytes
        assert!(sequence("é").starts_with("\x1b]52;c;w6k="));
    }

    #[test]
    fn test_tmux_passthrough_doubles_escapes() {
        let wrapped = tmux_passthrough("\x1b]52;c;aGk=\x07");
        assert_eq!(wrapped, "\x1bPtmux;\x1b\x1b]52;c;aGk=\x07\x1b\\");
    }

    #[test]
    fn test_tmux_passthrough_keeps_no_bare_escape_inside() {
        let wrapped = tmux_passthrough(&sequence("hi"));
        let inner = &wrapped["\x1bPtmux;".len()..wrapped.len() - 2];
        assert!(inner.starts_with("\x1b\x1b]52;c;aGk="));
        assert!(!inner.replace("\x1b\x1b", "").contains('\x1b'));
    }
}

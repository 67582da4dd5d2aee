//! Terminal clipboard via OSC 52.

use std::io::Write;
use std::sync::Mutex;

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use console::Term;
use deals_core::clipboard::Clipboard;
use deals_core::DealError;

/// Build the OSC 52 sequence that sets the system clipboard to `text`.
pub fn osc52_sequence(text: &str) -> String {
    format!("\x1b]52;c;{}\x07", STANDARD.encode(text))
}

/// Clipboard that asks the terminal emulator to set the clipboard.
///
/// Works over SSH and inside tmux when passthrough is enabled. There is no
/// acknowledgement from the terminal, so a successful write only means the
/// sequence was sent.
pub struct Osc52Clipboard<W: Write + Send> {
    out: Mutex<W>,
    is_term: bool,
}

impl Osc52Clipboard<std::io::Stdout> {
    /// Write to stdout; fails when stdout is not a terminal.
    pub fn stdout() -> Self {
        Self {
            out: Mutex::new(std::io::stdout()),
            is_term: Term::stdout().is_term(),
        }
    }
}

#[cfg(test)]
impl<W: Write + Send> Osc52Clipboard<W> {
    /// Write to an arbitrary sink, treated as a terminal.
    pub fn new(out: W) -> Self {
        Self {
            out: Mutex::new(out),
            is_term: true,
        }
    }

    pub fn into_inner(self) -> Option<W> {
        self.out.into_inner().ok()
    }
}

impl<W: Write + Send> Clipboard for Osc52Clipboard<W> {
    fn write_text(&self, text: &str) -> Result<(), DealError> {
        if !self.is_term {
            return Err(DealError::Clipboard("stdout is not a terminal".to_string()));
        }
        let mut out = self
            .out
            .lock()
            .map_err(|e| DealError::Clipboard(e.to_string()))?;
        out.write_all(osc52_sequence(text).as_bytes())
            .and_then(|_| out.flush())
            .map_err(|e| DealError::Clipboard(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_osc52_sequence() {
        assert_eq!(osc52_sequence("SAVE30TECH"), "\x1b]52;c;U0FWRTMwVEVDSA==\x07");
    }

    #[test]
    fn test_writes_sequence_to_sink() {
        let clipboard = Osc52Clipboard::new(Vec::new());
        clipboard.write_text("WELCOME20").unwrap();
        let written = clipboard.into_inner().unwrap();
        assert_eq!(String::from_utf8(written).unwrap(), osc52_sequence("WELCOME20"));
    }
}

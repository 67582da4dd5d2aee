//! Clipboard collaborator.

use std::sync::Mutex;

use crate::error::DealError;

/// Something that can put text on the system clipboard.
///
/// Writes are fire-and-forget from the user's point of view; the result is
/// only used to surface a notification.
pub trait Clipboard {
    /// Write `text` to the clipboard.
    fn write_text(&self, text: &str) -> Result<(), DealError>;
}

impl<T: Clipboard + ?Sized> Clipboard for &T {
    fn write_text(&self, text: &str) -> Result<(), DealError> {
        (**self).write_text(text)
    }
}

/// In-memory clipboard that records every write.
#[derive(Debug, Default)]
pub struct RecordingClipboard {
    writes: Mutex<Vec<String>>,
    fail_with: Option<String>,
}

impl RecordingClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// A clipboard whose writes always fail with `reason`.
    pub fn failing(reason: impl Into<String>) -> Self {
        Self {
            writes: Mutex::new(Vec::new()),
            fail_with: Some(reason.into()),
        }
    }

    /// Every successful write, oldest first.
    pub fn writes(&self) -> Vec<String> {
        self.writes
            .lock()
            .map(|w| w.clone())
            .unwrap_or_default()
    }

    /// The most recent successful write.
    pub fn last(&self) -> Option<String> {
        self.writes().pop()
    }
}

impl Clipboard for RecordingClipboard {
    fn write_text(&self, text: &str) -> Result<(), DealError> {
        if let Some(reason) = &self.fail_with {
            return Err(DealError::Clipboard(reason.clone()));
        }
        let mut writes = self
            .writes
            .lock()
            .map_err(|e| DealError::Clipboard(e.to_string()))?;
        writes.push(text.to_string());
        Ok(())
    }
}

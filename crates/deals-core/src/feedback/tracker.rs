//! "Just copied" tracker.

use std::collections::BTreeMap;
use std::time::Duration;

use crate::clipboard::Clipboard;
use crate::error::DealError;
use crate::feedback::Clock;

/// How long a copied code stays flagged.
pub const FEEDBACK_DURATION: Duration = Duration::from_millis(2000);

/// Set of recently copied codes, each expiring on its own deadline.
///
/// Each code owns exactly one deadline. Flagging a code again replaces
/// that deadline, so an older expiry can never unflag a code that was
/// copied again in the meantime, and codes never affect each other.
#[derive(Debug, Clone)]
pub struct CopyFeedback<C: Clock> {
    clock: C,
    duration: Duration,
    deadlines: BTreeMap<String, Duration>,
}

impl<C: Clock> CopyFeedback<C> {
    /// Create a tracker with the standard two second expiry.
    pub fn new(clock: C) -> Self {
        Self {
            clock,
            duration: FEEDBACK_DURATION,
            deadlines: BTreeMap::new(),
        }
    }

    /// Override the expiry duration.
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Mark `code` as copied, restarting its expiry if already flagged.
    pub fn flag(&mut self, code: impl Into<String>) {
        let deadline = self.clock.now() + self.duration;
        self.deadlines.insert(code.into(), deadline);
    }

    /// Copy `code` to the clipboard and flag it.
    ///
    /// The code is flagged whether or not the clipboard write succeeds;
    /// the write result is returned so the caller can notify the user.
    pub fn copy(&mut self, code: &str, clipboard: &dyn Clipboard) -> Result<(), DealError> {
        let written = clipboard.write_text(code);
        self.flag(code);
        written
    }

    /// Whether `code` is currently flagged.
    pub fn is_flagged(&self, code: &str) -> bool {
        self.remaining(code).is_some()
    }

    /// Time left before `code` expires, if it is flagged.
    pub fn remaining(&self, code: &str) -> Option<Duration> {
        let now = self.clock.now();
        self.deadlines
            .get(code)
            .filter(|deadline| **deadline > now)
            .map(|deadline| *deadline - now)
    }

    /// Unflag `code` immediately. Returns whether it was tracked.
    pub fn clear(&mut self, code: &str) -> bool {
        self.deadlines.remove(code).is_some()
    }

    /// Drop every expired entry, returning the codes removed.
    pub fn sweep(&mut self) -> Vec<String> {
        let now = self.clock.now();
        let expired: Vec<String> = self
            .deadlines
            .iter()
            .filter(|(_, deadline)| **deadline <= now)
            .map(|(code, _)| code.clone())
            .collect();
        for code in &expired {
            self.deadlines.remove(code);
        }
        expired
    }

    /// Currently flagged codes, sorted.
    pub fn flagged_codes(&self) -> Vec<&str> {
        let now = self.clock.now();
        self.deadlines
            .iter()
            .filter(|(_, deadline)| **deadline > now)
            .map(|(code, _)| code.as_str())
            .collect()
    }

    /// Time until the next flagged code expires.
    pub fn next_expiry(&self) -> Option<Duration> {
        let now = self.clock.now();
        self.deadlines
            .values()
            .filter(|deadline| **deadline > now)
            .map(|deadline| *deadline - now)
            .min()
    }

    /// Whether nothing is flagged.
    pub fn is_empty(&self) -> bool {
        self.next_expiry().is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clipboard::RecordingClipboard;
    use crate::feedback::ManualClock;

    fn tracker() -> (ManualClock, CopyFeedback<ManualClock>) {
        let clock = ManualClock::new();
        (clock.clone(), CopyFeedback::new(clock))
    }

    #[test]
    fn test_flag_expires_at_deadline() {
        let (clock, mut feedback) = tracker();
        feedback.flag("SAVE30TECH");
        assert!(feedback.is_flagged("SAVE30TECH"));

        clock.advance_ms(1999);
        assert!(feedback.is_flagged("SAVE30TECH"));

        clock.advance_ms(1);
        assert!(!feedback.is_flagged("SAVE30TECH"));
    }

    #[test]
    fn test_remaining_and_next_expiry() {
        let (clock, mut feedback) = tracker();
        feedback.flag("A");
        clock.advance_ms(500);
        feedback.flag("B");

        assert_eq!(feedback.remaining("A"), Some(Duration::from_millis(1500)));
        assert_eq!(feedback.remaining("B"), Some(Duration::from_millis(2000)));
        assert_eq!(feedback.next_expiry(), Some(Duration::from_millis(1500)));
        assert_eq!(feedback.remaining("C"), None);
    }

    #[test]
    fn test_sweep_removes_only_expired() {
        let (clock, mut feedback) = tracker();
        feedback.flag("A");
        clock.advance_ms(1000);
        feedback.flag("B");
        clock.advance_ms(1000);

        assert_eq!(feedback.sweep(), vec!["A".to_string()]);
        assert_eq!(feedback.flagged_codes(), vec!["B"]);
        assert!(feedback.sweep().is_empty());
    }

    #[test]
    fn test_clear() {
        let (_clock, mut feedback) = tracker();
        feedback.flag("A");
        assert!(feedback.clear("A"));
        assert!(!feedback.clear("A"));
        assert!(feedback.is_empty());
    }

    #[test]
    fn test_copy_writes_clipboard_and_flags() {
        let (_clock, mut feedback) = tracker();
        let clipboard = RecordingClipboard::new();

        feedback.copy("WELCOME20", &clipboard).unwrap();
        assert_eq!(clipboard.last().as_deref(), Some("WELCOME20"));
        assert!(feedback.is_flagged("WELCOME20"));
    }

    #[test]
    fn test_copy_flags_even_when_clipboard_fails() {
        let (_clock, mut feedback) = tracker();
        let clipboard = RecordingClipboard::failing("permission denied");

        let result = feedback.copy("WELCOME20", &clipboard);
        assert_eq!(
            result,
            Err(DealError::Clipboard("permission denied".to_string()))
        );
        assert!(feedback.is_flagged("WELCOME20"));
    }

    #[test]
    fn test_custom_duration() {
        let clock = ManualClock::new();
        let mut feedback = CopyFeedback::new(clock.clone()).with_duration(Duration::from_millis(100));
        feedback.flag("A");
        clock.advance_ms(100);
        assert!(!feedback.is_flagged("A"));
    }
}

//! Session identifiers.

use std::fmt;
use std::sync::atomic::{AtomicU32, Ordering};
#[cfg(not(target_arch = "wasm32"))]
use std::time::{SystemTime, UNIX_EPOCH};

use deals_core::feedback::Clock;

/// Unique session identifier for correlating log lines.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SessionId(pub String);

impl SessionId {
    /// Generate a session ID seeded from the wall clock and process id.
    ///
    /// On `wasm32` neither is available, so the seed is zero; callers
    /// there should use [`SessionId::with_seed`].
    pub fn generate(clock: &dyn Clock) -> Self {
        Self::with_seed(process_seed(), clock)
    }

    /// Generate a session ID from `seed`, the clock reading and a process
    /// counter. `seed` should differ between processes or page loads.
    pub fn with_seed(seed: u64, clock: &dyn Clock) -> Self {
        static COUNTER: AtomicU32 = AtomicU32::new(0);
        let n = COUNTER.fetch_add(1, Ordering::Relaxed);
        Self(format!("{:x}-{:x}-{:04x}", seed, clock.now().as_nanos(), n))
    }

    /// Create from an existing ID string.
    pub fn from_string(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn process_seed() -> u64 {
    let wall = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0);
    wall ^ (u64::from(std::process::id()) << 40)
}

#[cfg(target_arch = "wasm32")]
fn process_seed() -> u64 {
    0
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use deals_core::feedback::ManualClock;

    #[test]
    fn test_generated_ids_differ() {
        let clock = ManualClock::new();
        let a = SessionId::generate(&clock);
        let b = SessionId::generate(&clock);
        assert_ne!(a, b);
    }

    #[test]
    fn test_fresh_clock_still_gets_a_process_seed() {
        let id = SessionId::generate(&ManualClock::new());
        assert!(!id.0.starts_with("0-"), "unseeded id: {}", id);
    }

    #[test]
    fn test_seed_distinguishes_sessions_at_the_same_instant() {
        let a = SessionId::with_seed(0xabc, &ManualClock::new());
        let b = SessionId::with_seed(0xdef, &ManualClock::new());
        assert!(a.0.starts_with("abc-0-"));
        assert!(b.0.starts_with("def-0-"));
    }
}

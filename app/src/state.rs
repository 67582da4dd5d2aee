//! Page state shared through context.

use std::collections::HashMap;

use deals_core::catalog::Catalog;
use deals_core::clipboard::Clipboard;
use deals_core::feedback::CopyFeedback;
use deals_core::search::{CategorySelection, DealQuery, DealResults};
use deals_observability::{SessionId, StructuredLogger};
use leptos::prelude::*;

use crate::platform::{page_seed, PageClock, PageSink};

/// Catalog, query and copy feedback for one page view.
///
/// Each flagged code owns at most one pending expiry timeout. Copying a
/// code again clears its pending timeout before scheduling the next, so an
/// earlier timer can never unflag a fresh copy.
#[derive(Clone, Copy)]
pub struct AppState {
    pub catalog: StoredValue<Catalog>,
    pub query: RwSignal<DealQuery>,
    pub feedback: RwSignal<CopyFeedback<PageClock>>,
    timers: StoredValue<HashMap<String, TimeoutHandle>>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            catalog: StoredValue::new(Catalog::featured()),
            query: RwSignal::new(DealQuery::new()),
            feedback: RwSignal::new(CopyFeedback::new(PageClock::new())),
            timers: StoredValue::new(HashMap::new()),
        }
    }

    pub fn set_search(&self, term: String) {
        self.query.update(|q| q.set_term(term));
    }

    pub fn set_category(&self, category: CategorySelection) {
        self.query.update(|q| q.set_category(category));
    }

    /// Run `f` over the deals matching the current query. Tracks the query.
    pub fn with_results<R>(&self, f: impl FnOnce(&DealResults<'_>) -> R) -> R {
        self.query
            .with(|query| self.catalog.with_value(|catalog| f(&query.apply(catalog))))
    }

    /// Whether `code` shows the copied check mark. Tracks the feedback.
    pub fn is_copied(&self, code: &str) -> bool {
        self.feedback.with(|f| f.is_flagged(code))
    }

    /// Copy `code` and flag it, restarting its expiry.
    pub fn copy(&self, code: &str, clipboard: &dyn Clipboard, logger: &StructuredLogger) {
        let mut outcome = Ok(());
        self.feedback.update(|f| outcome = f.copy(code, clipboard));

        match outcome {
            Ok(()) => logger
                .info_builder("code copied")
                .field("code", code)
                .emit(),
            Err(e) => logger
                .warn_builder("clipboard write failed")
                .field("code", code)
                .field("error", e.to_string())
                .emit(),
        }

        self.schedule_expiry(code, logger);
    }

    fn schedule_expiry(&self, code: &str, logger: &StructuredLogger) {
        self.timers.update_value(|timers| {
            if let Some(previous) = timers.remove(code) {
                previous.clear();
            }
        });

        let delay = self
            .feedback
            .with_untracked(|f| f.remaining(code).unwrap_or_else(|| f.duration()));
        let feedback = self.feedback;
        let timers = self.timers;
        let key = code.to_string();

        match set_timeout_with_handle(
            move || {
                timers.try_update_value(|t| t.remove(&key));
                feedback.try_update(|f| f.clear(&key));
            },
            delay,
        ) {
            Ok(handle) => self.timers.update_value(|t| {
                t.insert(code.to_string(), handle);
            }),
            Err(e) => logger
                .warn_builder("could not schedule copy feedback expiry")
                .field("code", code)
                .field("reason", format!("{:?}", e))
                .emit(),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

/// Logger for the page, writing to the browser console when hydrated.
pub fn page_logger() -> StructuredLogger {
    let clock = PageClock::new();
    StructuredLogger::new(SessionId::with_seed(page_seed(), &clock), clock)
        .with_view("deals")
        .with_sink(PageSink)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_results_follow_query() {
        let state = AppState::new();
        assert_eq!(state.with_results(|r| r.len()), 4);

        state.set_search("amazon".to_string());
        assert_eq!(
            state.with_results(|r| r.iter().map(|d| d.brand.clone()).collect::<Vec<_>>()),
            vec!["Amazon".to_string()]
        );

        state.set_search(String::new());
        state.set_category(CategorySelection::named("Travel"));
        assert_eq!(state.with_results(|r| r.summary()), "0 deals found");
        assert_eq!(state.with_results(|r| r.heading()), "Travel Deals");
    }

    #[test]
    fn test_page_logger_sessions_are_seeded() {
        let logger = page_logger();
        assert!(!logger.session_id().0.starts_with("0-"));
        assert_ne!(logger.session_id(), page_logger().session_id());
    }

    #[test]
    fn test_nothing_copied_initially() {
        let state = AppState::new();
        assert!(!state.is_copied("SAVE30TECH"));
    }
}

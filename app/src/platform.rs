//! Clock, clipboard and log sink for the environment the page runs in.
//!
//! In the browser these wrap `performance.now()`, `navigator.clipboard` and
//! the devtools console. During server rendering nothing is ever copied, so
//! the server side gets the standard clock, stderr, and a clipboard that
//! always refuses.

use deals_core::clipboard::Clipboard;
use deals_core::DealError;
use deals_observability::StructuredLogger;

#[cfg(feature = "browser")]
pub use browser::{page_seed, ConsoleSink as PageSink, PerformanceClock as PageClock};

#[cfg(not(feature = "browser"))]
pub use deals_core::feedback::SystemClock as PageClock;
#[cfg(not(feature = "browser"))]
pub use deals_observability::StderrSink as PageSink;

/// Per-render seed for session ids: wall-clock nanoseconds.
#[cfg(not(feature = "browser"))]
pub fn page_seed() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0)
}

/// Writes copied codes to the system clipboard.
///
/// The browser API is asynchronous; the write is started and its rejection,
/// if any, is logged rather than returned.
#[derive(Clone)]
pub struct PageClipboard {
    logger: StructuredLogger,
}

impl PageClipboard {
    pub fn new(logger: StructuredLogger) -> Self {
        Self { logger }
    }
}

#[cfg(feature = "browser")]
impl Clipboard for PageClipboard {
    fn write_text(&self, text: &str) -> Result<(), DealError> {
        let window = web_sys::window()
            .ok_or_else(|| DealError::Clipboard("no window".to_string()))?;
        let promise = window.navigator().clipboard().write_text(text);

        let logger = self.logger.clone();
        let code = text.to_string();
        wasm_bindgen_futures::spawn_local(async move {
            if let Err(e) = wasm_bindgen_futures::JsFuture::from(promise).await {
                logger
                    .warn_builder("clipboard write rejected")
                    .field("code", code)
                    .field("reason", format!("{:?}", e))
                    .emit();
            }
        });
        Ok(())
    }
}

#[cfg(not(feature = "browser"))]
impl Clipboard for PageClipboard {
    fn write_text(&self, text: &str) -> Result<(), DealError> {
        self.logger
            .debug_builder("clipboard unavailable outside the browser")
            .field("code", text)
            .emit();
        Err(DealError::Clipboard(
            "clipboard is only available in the browser".to_string(),
        ))
    }
}

#[cfg(feature = "browser")]
mod browser {
    use std::time::Duration;

    use deals_core::feedback::Clock;
    use deals_observability::{LogLevel, LogSink};
    use wasm_bindgen::JsValue;

    /// Reads `performance.now()`; `Instant` is unavailable on wasm32.
    #[derive(Debug, Clone, Copy, Default)]
    pub struct PerformanceClock;

    impl PerformanceClock {
        pub fn new() -> Self {
            Self
        }
    }

    impl Clock for PerformanceClock {
        fn now(&self) -> Duration {
            let ms = web_sys::window()
                .and_then(|w| w.performance())
                .map(|p| p.now())
                .unwrap_or(0.0);
            Duration::from_secs_f64(ms.max(0.0) / 1000.0)
        }
    }

    /// Per-page-load seed for session ids: `performance.timeOrigin` in
    /// microseconds since the epoch.
    pub fn page_seed() -> u64 {
        web_sys::window()
            .and_then(|w| w.performance())
            .map(|p| (p.time_origin() * 1000.0) as u64)
            .unwrap_or(0)
    }

    /// Sends log lines to the devtools console at the matching level.
    #[derive(Debug, Clone, Copy, Default)]
    pub struct ConsoleSink;

    impl LogSink for ConsoleSink {
        fn write(&self, level: LogLevel, line: &str) {
            let line = JsValue::from_str(line);
            match level {
                LogLevel::Trace | LogLevel::Debug => web_sys::console::debug_1(&line),
                LogLevel::Info => web_sys::console::info_1(&line),
                LogLevel::Warn => web_sys::console::warn_1(&line),
                LogLevel::Error => web_sys::console::error_1(&line),
            }
        }
    }
}

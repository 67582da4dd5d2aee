//! Observability for CouponHub front ends.
//!
//! This crate provides:
//! - `SessionId` - Identifier correlating the log lines of one page or CLI session
//! - `StructuredLogger` - Structured logging with session context
//! - `LogSink` - Where rendered log lines go (stderr, memory, browser console)

mod error;
mod logging;
mod session;
mod sink;

pub use error::ObservabilityError;
pub use logging::*;
pub use session::SessionId;
pub use sink::{LogSink, MemorySink, StderrSink};

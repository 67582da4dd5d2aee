//! Log output targets.

use std::sync::{Arc, Mutex};

use crate::logging::LogLevel;

/// Destination for rendered log lines.
pub trait LogSink: Send + Sync {
    fn write(&self, level: LogLevel, line: &str);
}

/// Writes every line to stderr.
#[derive(Debug, Clone, Copy, Default)]
pub struct StderrSink;

impl LogSink for StderrSink {
    fn write(&self, _level: LogLevel, line: &str) {
        eprintln!("{}", line);
    }
}

/// Keeps lines in memory. Clones share the buffer.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    lines: Arc<Mutex<Vec<(LogLevel, String)>>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rendered lines, oldest first.
    pub fn lines(&self) -> Vec<String> {
        self.lines
            .lock()
            .map(|l| l.iter().map(|(_, line)| line.clone()).collect())
            .unwrap_or_default()
    }

    /// Lines written at `level`.
    pub fn lines_at(&self, level: LogLevel) -> Vec<String> {
        self.lines
            .lock()
            .map(|l| {
                l.iter()
                    .filter(|(lvl, _)| *lvl == level)
                    .map(|(_, line)| line.clone())
                    .collect()
            })
            .unwrap_or_default()
    }
}

impl LogSink for MemorySink {
    fn write(&self, level: LogLevel, line: &str) {
        if let Ok(mut lines) = self.lines.lock() {
            lines.push((level, line.to_string()));
        }
    }
}

//! Logging sinks for configuration traces.
//!
//! Extensions emit advisory traces through the engine; the engine forwards
//! them to whichever [`BuildLogger`] it was constructed with. Traces never
//! affect control flow.

use std::sync::{Arc, Mutex};

use colored::Colorize;

/// Sink for informational and warning messages emitted during configuration.
pub trait BuildLogger {
    fn info(&self, message: &str);
    fn warn(&self, message: &str);
}

/// Logger that prints to the terminal.
#[derive(Debug, Default)]
pub struct ConsoleLogger;

impl BuildLogger for ConsoleLogger {
    fn info(&self, message: &str) {
        println!("{} {}", "info:".dimmed(), message);
    }

    fn warn(&self, message: &str) {
        println!("{} {}", "warning:".yellow().bold(), message.yellow());
    }
}

/// Logger that captures messages in memory.
///
/// Clones share the same buffer, so a test can keep one handle and hand
/// another to the engine, then assert on what was emitted.
#[derive(Debug, Clone, Default)]
pub struct MemoryLogger {
    messages: Arc<Mutex<Vec<String>>>,
}

impl MemoryLogger {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The messages captured so far, in emission order.
    #[must_use]
    pub fn messages(&self) -> Vec<String> {
        self.messages.lock().map(|m| m.clone()).unwrap_or_default()
    }
}

impl BuildLogger for MemoryLogger {
    fn info(&self, message: &str) {
        if let Ok(mut messages) = self.messages.lock() {
            messages.push(message.to_string());
        }
    }

    fn warn(&self, message: &str) {
        if let Ok(mut messages) = self.messages.lock() {
            messages.push(format!("warning: {}", message));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_logger_shares_buffer_across_clones() {
        let logger = MemoryLogger::new();
        let handle = logger.clone();

        handle.info("first");
        handle.warn("second");

        assert_eq!(
            logger.messages(),
            vec!["first".to_string(), "warning: second".to_string()]
        );
    }
}

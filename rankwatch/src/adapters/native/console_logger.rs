use crate::ports::LoggerPort;

const TARGET: &str = "rankwatch";

/// Native logger forwarding to the `log` facade.
///
/// Output depends on the backend installed by the host application
/// (`env_logger` in tests); without one, messages are discarded.
#[derive(Debug, Clone, Copy)]
pub struct ConsoleLogger;

impl ConsoleLogger {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ConsoleLogger {
    fn default() -> Self {
        Self::new()
    }
}

impl LoggerPort for ConsoleLogger {
    fn log(&self, message: &str) {
        log::info!(target: TARGET, "{message}");
    }

    fn error(&self, message: &str) {
        log::error!(target: TARGET, "{message}");
    }

    fn warn(&self, message: &str) {
        log::warn!(target: TARGET, "{message}");
    }

    fn debug(&self, message: &str) {
        log::debug!(target: TARGET, "{message}");
    }
}

/// Logger port - provides logging capabilities across platforms.
///
/// Abstracts logging from platform-specific implementations:
/// - WASM: Console API (console.log, console.error, etc.)
/// - Native: the `log` facade, rendered by whichever backend the host installs
pub trait LoggerPort: Send + Sync {
    /// Log an informational message.
    fn log(&self, message: &str);

    /// Log an error message.
    fn error(&self, message: &str);

    /// Log a warning message.
    fn warn(&self, message: &str);

    /// Log a diagnostic message.
    fn debug(&self, message: &str);
}

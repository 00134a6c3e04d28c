use crate::ports::LoggerPort;
use wasm_bindgen::JsValue;
use web_sys::console;

const PREFIX: &str = "[rankwatch]";

fn tagged(message: &str) -> JsValue {
    JsValue::from_str(&format!("{PREFIX} {message}"))
}

/// Browser logger writing to the devtools console, one console level per
/// port method.
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
        console::info_1(&tagged(message));
    }

    fn error(&self, message: &str) {
        console::error_1(&tagged(message));
    }

    fn warn(&self, message: &str) {
        console::warn_1(&tagged(message));
    }

    fn debug(&self, message: &str) {
        console::debug_1(&tagged(message));
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_tagged_message() {
        assert_eq!(
            tagged("fetch failed").as_string().as_deref(),
            Some("[rankwatch] fetch failed")
        );
    }

    #[wasm_bindgen_test]
    fn test_logger_all_methods() {
        let logger = ConsoleLogger::new();
        logger.log("leaderboard fetched");
        logger.warn("leaderboard fetch failed");
        logger.error("permission request failed");
        logger.debug("tick skipped");
    }
}

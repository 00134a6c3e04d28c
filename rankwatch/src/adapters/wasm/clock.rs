use crate::global::get_global_scope;
use crate::ports::clock::ClockPort;
use wasm_bindgen::JsCast;
use web_sys::{Performance, WorkerGlobalScope};

#[derive(Clone, Copy)]
pub struct Clock;

impl Clock {
    pub fn new() -> Self {
        Self
    }

    fn get_performance(&self) -> Option<Performance> {
        let scope = get_global_scope().ok()?;
        if let Ok(worker) = scope.clone().dyn_into::<WorkerGlobalScope>() {
            worker.performance()
        } else if let Ok(window) = scope.dyn_into::<web_sys::Window>() {
            window.performance()
        } else {
            None
        }
    }
}

impl Default for Clock {
    fn default() -> Self {
        Self::new()
    }
}

impl ClockPort for Clock {
    fn now(&self) -> f64 {
        self.get_performance().map_or(0.0, |perf| perf.now())
    }

    fn is_available(&self) -> bool {
        self.get_performance().is_some()
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_clock_creation() {
        let clock = Clock::new();
        assert!(clock.is_available(), "Clock should be available");
    }

    #[wasm_bindgen_test]
    fn test_clock_now_returns_positive() {
        let clock = Clock::new();
        let timestamp = clock.now();
        assert!(
            timestamp > 0.0,
            "Timestamp should be positive: {}",
            timestamp
        );
    }

    #[wasm_bindgen_test]
    fn test_elapsed_is_never_negative() {
        let clock = Clock::new();
        let start = clock.now();
        assert!(clock.elapsed_since(start) >= 0.0);
    }
}

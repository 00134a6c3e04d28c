use crate::ports::clock::ClockPort;
use std::time::{SystemTime, UNIX_EPOCH};

/// Wall clock in milliseconds since the Unix epoch.
#[derive(Clone, Copy)]
pub struct Clock;

impl Clock {
    pub fn new() -> Self {
        Self
    }
}

impl Default for Clock {
    fn default() -> Self {
        Self::new()
    }
}

impl ClockPort for Clock {
    fn now(&self) -> f64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| elapsed.as_millis() as f64)
            .unwrap_or(0.0)
    }

    fn is_available(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clock_is_wall_time() {
        let clock = Clock::new();
        assert!(clock.is_available());
        // 2020-01-01T00:00:00Z
        assert!(clock.now() > 1_577_836_800_000.0);
    }

    #[test]
    fn test_elapsed_since_measures_fetch_duration() {
        let clock = Clock::new();
        let started = clock.now();
        std::thread::sleep(std::time::Duration::from_millis(10));
        assert!(clock.elapsed_since(started) >= 10.0);
    }

    #[test]
    fn test_elapsed_since_future_start_is_zero() {
        let clock = Clock::new();
        assert_eq!(clock.elapsed_since(clock.now() + 60_000.0), 0.0);
    }
}

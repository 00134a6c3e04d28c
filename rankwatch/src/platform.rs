/// Platform - Dependency injection container for the stateless ports.
///
/// Hybrid approach:
/// - Stateless ports (logger, clock): `&'static` references (zero-cost)
/// - Stateful ports (notifier, snapshot source, session): handed to the
///   component that owns them as `Arc<dyn Trait>` / `Rc<dyn Trait>`

use crate::ports::{ClockPort, LoggerPort};

#[derive(Clone, Copy)]
pub struct Platform {
    logger: &'static dyn LoggerPort,
    clock: &'static dyn ClockPort,
}

impl Platform {
    /// Creates a new Platform with default adapters for the current target.
    pub fn new() -> Self {
        Self {
            logger: crate::adapters::logger(),
            clock: crate::adapters::clock(),
        }
    }

    #[inline]
    pub fn logger(&self) -> &'static dyn LoggerPort {
        self.logger
    }

    #[inline]
    pub fn clock(&self) -> &'static dyn ClockPort {
        self.clock
    }
}

impl Default for Platform {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_platform_creation() {
        let platform = Platform::new();
        platform.logger().log("test");
    }

    #[test]
    fn test_platform_clone() {
        let platform = Platform::new();
        let cloned = platform;
        cloned.logger().log("test clone");
    }

    #[test]
    fn test_platform_logger_access() {
        let platform = Platform::default();
        let logger = platform.logger();
        logger.log("test 1");
        logger.warn("test 2");
        logger.error("test 3");
        logger.debug("test 4");
    }

    #[test]
    fn test_platform_clock_access() {
        let platform = Platform::new();
        assert!(platform.clock().is_available());
        assert!(platform.clock().now() > 0.0);
    }
}

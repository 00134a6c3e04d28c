/// Port for accessing time and performance measurement
pub trait ClockPort: Send + Sync {
    /// Returns the current timestamp in milliseconds
    fn now(&self) -> f64;

    /// Checks if performance timing is available
    fn is_available(&self) -> bool;

    /// Milliseconds elapsed since `start`, a value previously returned by [`ClockPort::now`].
    fn elapsed_since(&self, start: f64) -> f64 {
        (self.now() - start).max(0.0)
    }
}

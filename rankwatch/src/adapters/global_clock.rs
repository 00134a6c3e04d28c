use crate::ports::clock::ClockPort;
use once_cell::sync::Lazy;

#[cfg(target_arch = "wasm32")]
use crate::adapters::wasm::Clock;
#[cfg(not(target_arch = "wasm32"))]
use crate::adapters::native::Clock;

pub static CLOCK: Lazy<Clock> = Lazy::new(Clock::new);

/// Returns a reference to the global clock instance
pub fn clock() -> &'static dyn ClockPort {
    &*CLOCK
}

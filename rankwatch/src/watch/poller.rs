use crate::adapters::runtime;
use crate::domain::leaderboard::LeaderboardError;
use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

/// Fixed-interval timer driving a single callback.
///
/// Every `start` opens a new generation; a loop only invokes its callback
/// while its generation is still current, so once `stop` returns no
/// further invocation can happen. Loops run as local tasks on the current
/// thread.
#[derive(Debug, Default)]
pub struct Poller {
    generation: Rc<Cell<u64>>,
    running: Cell<bool>,
}

impl Poller {
    pub fn new() -> Self {
        Self::default()
    }

    /// Invokes `on_tick` every `interval`, the first time one interval from
    /// now. A running loop is replaced.
    pub fn start<F>(&self, interval: Duration, on_tick: F) -> Result<(), LeaderboardError>
    where
        F: FnMut() + 'static,
    {
        if interval.is_zero() {
            return Err(LeaderboardError::invalid_config(
                "poll interval must be greater than zero",
            ));
        }

        self.stop();
        let generation = self.generation.get();
        let current = Rc::clone(&self.generation);
        self.running.set(true);

        runtime::spawn_local(async move {
            let mut on_tick = on_tick;
            loop {
                runtime::sleep(interval).await;
                if current.get() != generation {
                    break;
                }
                on_tick();
            }
        });

        Ok(())
    }

    pub fn stop(&self) {
        self.generation.set(self.generation.get().wrapping_add(1));
        self.running.set(false);
    }

    pub fn is_running(&self) -> bool {
        self.running.get()
    }
}

impl Drop for Poller {
    fn drop(&mut self) {
        self.stop();
    }
}

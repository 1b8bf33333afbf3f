use std::time::Duration;

/// Fixed-step scheduler: turns wall-clock frame time into a whole number of
/// update ticks.
#[derive(Debug, Clone)]
pub struct TickClock {
    step: Duration,
    max_ticks: u32,
    accumulated: Duration,
}

impl TickClock {
    pub fn new(ticks_per_second: u32, max_ticks: u32) -> Self {
        let step = Duration::from_secs(1) / ticks_per_second.max(1);
        Self {
            step,
            max_ticks: max_ticks.max(1),
            accumulated: Duration::ZERO,
        }
    }

    pub fn step(&self) -> Duration {
        self.step
    }

    /// Feed elapsed time and get back how many ticks are due. Time beyond
    /// `max_ticks` steps is dropped so a long stall does not cause a burst
    /// of updates.
    pub fn advance(&mut self, elapsed: Duration) -> u32 {
        self.accumulated += elapsed;

        let mut ticks = 0;
        while self.accumulated >= self.step && ticks < self.max_ticks {
            self.accumulated -= self.step;
            ticks += 1;
        }
        if ticks == self.max_ticks && self.accumulated >= self.step {
            self.accumulated = Duration::ZERO;
        }
        ticks
    }
}

use crate::config::Speed;

/// Decides which polling ticks run a simulation step.
///
/// Every call to [`TickScheduler::tick`] is one input poll. A step runs when
/// the tick counter is a multiple of `speed`, starting with tick 0.
#[derive(Debug, Clone, Copy)]
pub struct TickScheduler {
    ticks: u64,
    speed: Speed,
}

impl TickScheduler {
    #[must_use]
    pub fn new(speed: Speed) -> Self {
        Self { ticks: 0, speed }
    }

    /// Advances the counter and returns whether this tick is a step boundary.
    pub fn tick(&mut self) -> bool {
        let is_step = self.ticks % self.speed.get() == 0;
        self.ticks = self.ticks.wrapping_add(1);
        is_step
    }

    /// Ticks elapsed so far.
    #[must_use]
    pub fn ticks(&self) -> u64 {
        self.ticks
    }
}

use serde::{Deserialize, Serialize};

/// Whether tokens are held in place or moving.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// Grace period: tokens are shown at their spawn positions but nothing moves.
    Warmup,
    /// Motion, collision and convergence run every tick.
    Running,
}

/// Tracks the monotonic tick counter and the grace period.
///
/// The counter is advanced before any system runs, so tick `n` is a warmup
/// tick while `n <= grace_ticks`.
#[derive(Debug, Clone)]
pub struct SimClock {
    tick: u64,
    grace_ticks: u64,
}

impl SimClock {
    /// Create a new clock at tick 0 with the given grace period.
    pub fn new(grace_ticks: u64) -> Self {
        Self {
            tick: 0,
            grace_ticks,
        }
    }

    /// Advance the clock by one tick. Returns the new tick number.
    pub fn advance(&mut self) -> u64 {
        self.tick += 1;
        self.tick
    }

    /// Return the current tick number.
    pub fn tick(&self) -> u64 {
        self.tick
    }

    /// Return the configured grace period in ticks.
    pub fn grace_ticks(&self) -> u64 {
        self.grace_ticks
    }

    /// Phase of the current tick.
    ///
    /// Before the first tick the clock reports [`Phase::Warmup`] unless the
    /// grace period is zero and at least one tick has elapsed.
    pub fn phase(&self) -> Phase {
        if self.tick == 0 || self.tick <= self.grace_ticks {
            Phase::Warmup
        } else {
            Phase::Running
        }
    }

    /// `true` on the first running tick only.
    pub fn just_started(&self) -> bool {
        self.tick == self.grace_ticks + 1
    }

    /// Return to tick 0.
    pub fn reset(&mut self) {
        self.tick = 0;
    }
}

//! Fixed timestep accumulator
//!
//! Real elapsed time is banked and paid out in whole ticks. Time is kept as
//! integer nanoseconds so chunking the same total never changes the tick count.

use std::time::{Duration, Instant};

/// Releases fixed-size ticks from measured wall-clock time
#[derive(Debug, Clone)]
pub struct SimulationClock {
    tick: Duration,
    accumulator: Duration,
    last: Option<Instant>,
    ticks: u64,
}

impl SimulationClock {
    pub fn new(tick: Duration) -> Self {
        assert!(!tick.is_zero(), "tick duration must be positive");
        Self {
            tick,
            accumulator: Duration::ZERO,
            last: None,
            ticks: 0,
        }
    }

    /// Time since the previous call; zero on the first call
    pub fn measure(&mut self, now: Instant) -> Duration {
        let elapsed = self
            .last
            .map(|last| now.saturating_duration_since(last))
            .unwrap_or(Duration::ZERO);
        self.last = Some(now);
        elapsed
    }

    /// Bank `elapsed` and return how many ticks to run now
    pub fn advance(&mut self, elapsed: Duration) -> u32 {
        self.accumulator += elapsed;
        let mut due = 0;
        while self.accumulator >= self.tick {
            self.accumulator -= self.tick;
            due += 1;
        }
        self.ticks += u64::from(due);
        due
    }

    /// Time banked but not yet paid out, always under one tick
    #[inline]
    pub fn pending(&self) -> Duration {
        self.accumulator
    }

    /// Fraction of a tick owed, in `[0, 1)`
    pub fn alpha(&self) -> f32 {
        self.accumulator.as_secs_f32() / self.tick.as_secs_f32()
    }

    /// Total ticks released so far
    #[inline]
    pub fn total_ticks(&self) -> u64 {
        self.ticks
    }
}

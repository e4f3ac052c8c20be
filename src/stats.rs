//! Frame and tick rate counter
//!
//! Counts frames rendered and ticks simulated, rolling the counts over once
//! per second of wall-clock time.

use std::time::Duration;

/// Rates for the last completed second
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Rates {
    pub frames: u32,
    pub ticks: u32,
}

#[derive(Debug, Clone, Default)]
pub struct FrameStats {
    window: Duration,
    frames: u32,
    ticks: u32,
    last: Rates,
}

impl FrameStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one frame that ran `ticks` ticks over `elapsed` time.
    ///
    /// Returns the finished rates when a second has rolled over.
    pub fn record(&mut self, elapsed: Duration, ticks: u32) -> Option<Rates> {
        self.frames += 1;
        self.ticks += ticks;
        self.window += elapsed;

        if self.window < Duration::from_secs(1) {
            return None;
        }

        self.window -= Duration::from_secs(1);
        self.last = Rates {
            frames: self.frames,
            ticks: self.ticks,
        };
        self.frames = 0;
        self.ticks = 0;
        log::debug!("Frames: {}, Ticks: {}", self.last.frames, self.last.ticks);
        Some(self.last)
    }

    /// Rates for the last completed second
    pub fn rates(&self) -> Rates {
        self.last
    }
}

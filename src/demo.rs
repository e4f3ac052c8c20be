//! Frame driver
//!
//! One frame: measure elapsed time, poll input into the pending intent
//! buffer, run however many fixed ticks are owed, render the latest state.

use std::time::{Duration, Instant};

use crate::consts::SIM_DT;
use crate::platform::{InputBackend, Polled};
use crate::render::{RenderBackend, render_scene};
use crate::settings::Settings;
use crate::sim::{Scene, SimulationClock, TickInput, tick};
use crate::stats::FrameStats;

/// Demo instance holding all state
#[derive(Debug)]
pub struct Demo {
    scene: Scene,
    clock: SimulationClock,
    /// Intents waiting for the next tick
    pending: TickInput,
    stats: FrameStats,
    show_stats: bool,
}

impl Demo {
    pub fn new(settings: &Settings) -> Self {
        Self {
            scene: Scene::new(settings),
            clock: SimulationClock::new(SIM_DT),
            pending: TickInput::default(),
            stats: FrameStats::new(),
            show_stats: settings.show_stats,
        }
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn clock(&self) -> &SimulationClock {
        &self.clock
    }

    /// Collect this frame's input without touching the scene
    pub fn handle_input<I: InputBackend>(&mut self, input: &mut I) -> Polled {
        input.poll(&mut self.pending)
    }

    /// Run the ticks owed for `elapsed`; returns how many ran
    pub fn update(&mut self, elapsed: Duration) -> u32 {
        let due = self.clock.advance(elapsed);
        for _ in 0..due {
            // The first tick of the frame gets the buffered intents
            let input = self.pending.take();
            tick(&mut self.scene, &input);
        }
        self.stats.record(elapsed, due);
        due
    }

    pub fn render<R: RenderBackend>(&self, renderer: &mut R) {
        let rates = self.show_stats.then(|| self.stats.rates());
        render_scene(&self.scene.snapshot(), renderer, rates);
    }

    /// One full iteration of the outer loop.
    ///
    /// A quit still finishes the iteration; the caller stops afterwards.
    pub fn frame<I: InputBackend, R: RenderBackend>(
        &mut self,
        now: Instant,
        input: &mut I,
        renderer: &mut R,
    ) -> Polled {
        let elapsed = self.clock.measure(now);
        let polled = self.handle_input(input);
        self.update(elapsed);
        self.render(renderer);
        polled
    }
}

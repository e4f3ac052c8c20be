//! Gridcast - grid raycasting demo
//!
//! Core modules:
//! - `sim`: Deterministic simulation (grid, DDA raycaster, entities, fixed timestep)
//! - `demo`: Frame driver tying input, ticks and rendering together
//! - `render`: Render backend seam and the per-frame render pass
//! - `platform`: macroquad input and drawing backends
//! - `settings`: Startup configuration
//! - `stats`: Frame/tick rate counter

pub mod demo;
pub mod platform;
pub mod render;
pub mod settings;
pub mod sim;
pub mod stats;

pub use demo::Demo;
pub use settings::{Settings, SettingsError};
pub use stats::FrameStats;

use glam::{IVec2, Vec2};

/// Demo configuration constants
pub mod consts {
    use std::time::Duration;

    /// Fixed simulation timestep (60 Hz), whole nanoseconds so sums stay exact
    pub const SIM_DT: Duration = Duration::from_nanos(1_000_000_000 / 60);

    /// Window defaults
    pub const SCREEN_WIDTH: u32 = 960;
    pub const SCREEN_HEIGHT: u32 = 640;
    pub const GAME_TITLE: &str = "DDA tech demo";

    /// Grid cell edge in pixels
    pub const CELL_SIZE: u32 = 32;

    /// Player and cursor box edge in pixels
    pub const BOX_SIZE: i32 = 10;
    /// Player speed in pixels per tick
    pub const PLAYER_SPEED: i32 = 5;

    /// Raycast distance ceiling as a multiple of the larger world dimension
    pub const MAX_DISTANCE_FACTOR: f32 = 10.0;
}

/// Centre of an axis-aligned box given its integer top-left corner and edge
#[inline]
pub fn box_center(top_left: IVec2, size: i32) -> Vec2 {
    // Integer halving matches how the boxes are drawn
    (top_left + IVec2::splat(size / 2)).as_vec2()
}

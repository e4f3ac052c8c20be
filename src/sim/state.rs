//! Scene state
//!
//! The scene exclusively owns the grid, both entities and the ray state.
//! Rendering only ever sees a borrowed [`Snapshot`].

use glam::{IVec2, Vec2};

use super::entity::{MobilePoint, TargetPoint};
use super::grid::Grid;
use super::raycast::RayHit;
use crate::settings::Settings;

/// Whether a paint gesture sets or clears walls
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaintMode {
    Set,
    Clear,
}

impl PaintMode {
    /// Mode that flips the cell where the gesture started
    pub fn flipping(was_wall: bool) -> Self {
        if was_wall { PaintMode::Clear } else { PaintMode::Set }
    }

    #[inline]
    pub fn wall(self) -> bool {
        self == PaintMode::Set
    }
}

/// Transient per-gesture flags
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ActivationFlags {
    /// Ray held down
    pub ray_active: bool,
    /// Paint gesture in progress
    pub paint: Option<PaintMode>,
}

/// Ray endpoints and the cached hit from the latest tick
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RayState {
    pub origin: Vec2,
    pub target: Vec2,
    pub hit: Option<RayHit>,
}

/// Everything the simulation owns
#[derive(Debug, Clone)]
pub struct Scene {
    pub grid: Grid,
    pub player: MobilePoint,
    pub target: TargetPoint,
    pub ray: RayState,
    pub flags: ActivationFlags,
    /// Pixels per tick applied on key press
    pub player_speed: i32,
    /// Last known pointer position
    pub pointer: IVec2,
    /// Ticks simulated so far
    pub time_ticks: u64,
}

/// Read-only view handed to the render pass
#[derive(Debug, Clone, Copy)]
pub struct Snapshot<'a> {
    pub grid: &'a Grid,
    pub player: &'a MobilePoint,
    pub target: &'a TargetPoint,
    /// Ray segment, present while the ray is active
    pub ray: Option<(Vec2, Vec2)>,
    pub hit_point: Option<Vec2>,
}

impl Scene {
    /// Player one third across, target two thirds across, both mid-height
    pub fn new(settings: &Settings) -> Self {
        let grid = Grid::for_window(settings.screen_width, settings.screen_height, settings.cell_size);
        let width = settings.screen_width as i32;
        let mid_y = settings.screen_height as i32 / 2;

        let player = MobilePoint::centered_at(IVec2::new(width / 3, mid_y), settings.box_size);
        let target = TargetPoint::centered_at(IVec2::new(width * 2 / 3, mid_y), settings.box_size);

        log::info!(
            "Scene: {}x{} cells of {}px",
            grid.cells_width(),
            grid.cells_height(),
            grid.cell_size()
        );

        Self {
            grid,
            ray: RayState {
                origin: player.center(),
                target: target.center(),
                hit: None,
            },
            player,
            target,
            flags: ActivationFlags::default(),
            player_speed: settings.player_speed,
            pointer: IVec2::ZERO,
            time_ticks: 0,
        }
    }

    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            grid: &self.grid,
            player: &self.player,
            target: &self.target,
            ray: self
                .flags
                .ray_active
                .then(|| (self.player.center(), self.target.center())),
            hit_point: self.ray.hit.map(|h| h.point),
        }
    }
}

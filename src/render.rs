//! Render pass
//!
//! Draws a scene [`Snapshot`] through a [`RenderBackend`]. The pass only reads
//! the snapshot; presenting the frame is left to the caller.

use glam::Vec2;

use crate::sim::Snapshot;
use crate::stats::Rates;

/// RGBA color, components in `0.0..=1.0`
pub type Rgba = [f32; 4];

/// Draw colors
pub mod palette {
    use super::Rgba;

    const fn rgb(r: u8, g: u8, b: u8) -> Rgba {
        [r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0, 1.0]
    }

    pub const BACKGROUND: Rgba = rgb(0x00, 0x00, 0x00);
    pub const GRID_LINE: Rgba = rgb(0x14, 0x14, 0x14);
    pub const WALL: Rgba = rgb(0x00, 0x00, 0xff);
    pub const WALL_HIT: Rgba = rgb(0x40, 0x80, 0xff);
    pub const HIT_MARKER: Rgba = rgb(0xff, 0xff, 0xff);
    pub const PLAYER: Rgba = rgb(0xff, 0x00, 0x00);
    pub const TARGET: Rgba = rgb(0x00, 0xff, 0x00);
    pub const RAY: Rgba = rgb(0x00, 0xff, 0xff);
    pub const TEXT: Rgba = rgb(0xc0, 0xc0, 0xc0);
}

/// Edge of the box drawn around the ray hit point
pub const HIT_MARKER_SIZE: f32 = 10.0;

/// Primitive drawing calls a windowing backend provides
pub trait RenderBackend {
    fn clear(&mut self, color: Rgba);
    fn fill_rect(&mut self, min: Vec2, size: Vec2, color: Rgba);
    fn stroke_rect(&mut self, min: Vec2, size: Vec2, color: Rgba);
    fn line(&mut self, from: Vec2, to: Vec2, color: Rgba);
    fn text(&mut self, text: &str, at: Vec2, color: Rgba);
}

/// Draw one frame of the scene, with an optional rate overlay
pub fn render_scene<B: RenderBackend>(scene: &Snapshot<'_>, backend: &mut B, rates: Option<Rates>) {
    backend.clear(palette::BACKGROUND);

    render_grid_lines(scene, backend);
    render_walls(scene, backend);

    if let Some(point) = scene.hit_point {
        let half = Vec2::splat(HIT_MARKER_SIZE / 2.0);
        backend.stroke_rect(point - half, Vec2::splat(HIT_MARKER_SIZE), palette::HIT_MARKER);
    }

    let player = scene.player;
    backend.fill_rect(player.pos.as_vec2(), Vec2::splat(player.size as f32), palette::PLAYER);
    let target = scene.target;
    backend.fill_rect(target.pos.as_vec2(), Vec2::splat(target.size as f32), palette::TARGET);

    if let Some((from, to)) = scene.ray {
        backend.line(from, to, palette::RAY);
    }

    if let Some(rates) = rates {
        let text = format!("Frames: {}  Ticks: {}", rates.frames, rates.ticks);
        backend.text(&text, Vec2::new(8.0, 20.0), palette::TEXT);
    }
}

fn render_grid_lines<B: RenderBackend>(scene: &Snapshot<'_>, backend: &mut B) {
    let grid = scene.grid;
    let cell = grid.cell_size() as f32;

    for y in 1..grid.cells_height() {
        let y = y as f32 * cell;
        backend.line(Vec2::new(0.0, y), Vec2::new(grid.width_px(), y), palette::GRID_LINE);
    }
    for x in 1..grid.cells_width() {
        let x = x as f32 * cell;
        backend.line(Vec2::new(x, 0.0), Vec2::new(x, grid.height_px()), palette::GRID_LINE);
    }
}

fn render_walls<B: RenderBackend>(scene: &Snapshot<'_>, backend: &mut B) {
    let grid = scene.grid;
    for index in grid.walls() {
        let Ok(rect) = grid.cell_rect(index) else {
            continue;
        };
        let color = if grid.is_highlighted(index) {
            palette::WALL_HIT
        } else {
            palette::WALL
        };
        backend.fill_rect(rect.min, Vec2::splat(rect.size), color);
    }
}
